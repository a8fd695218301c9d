// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by session operations

use super::draft::Phase;
use crate::model::UnknownColor;
use std::fmt;

/// Session operations that can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    BeginDraft,
    UpdateComment,
    UpdateColor,
    Commit,
    Cancel,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::BeginDraft => "begin draft",
            Operation::UpdateComment => "update comment",
            Operation::UpdateColor => "update color",
            Operation::Commit => "commit",
            Operation::Cancel => "cancel",
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// The operation is not permitted in the current phase. This is a
    /// caller bug, not a user-facing condition.
    #[error("cannot {operation} while {phase}")]
    InvalidTransition { operation: Operation, phase: Phase },

    /// The requested color is not part of the palette; the draft is untouched
    #[error("invalid color choice: {0}")]
    InvalidColorChoice(#[from] UnknownColor),

    /// The session runs the single-color variant
    #[error("color selection is disabled for this session")]
    ColorSelectionDisabled,
}
