// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! The pin-in-progress held between a map press and a commit.

use crate::model::{Coordinate, Pin, PinColor};
use std::fmt;

/// A candidate pin: fixed coordinate, editable comment and color
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    coordinate: Coordinate,
    comment: String,
    color: PinColor,
}

impl Draft {
    /// Fresh draft with an empty comment and the default color
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            comment: String::new(),
            color: PinColor::default(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn color(&self) -> PinColor {
        self.color
    }

    pub(crate) fn set_comment(&mut self, comment: String) {
        self.comment = comment;
    }

    pub(crate) fn set_color(&mut self, color: PinColor) {
        self.color = color;
    }

    /// Finalize into a committed pin with a fresh identity
    pub fn into_pin(self) -> Pin {
        Pin::new(self.coordinate, self.comment, self.color)
    }
}

/// Draft lifecycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DraftState {
    /// No draft; editor overlay hidden
    #[default]
    Idle,
    /// A draft is open; editor overlay visible
    Drafting(Draft),
}

impl DraftState {
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            DraftState::Idle => None,
            DraftState::Drafting(draft) => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            DraftState::Idle => None,
            DraftState::Drafting(draft) => Some(draft),
        }
    }

    /// Take the open draft, leaving `Idle` behind
    pub fn take(&mut self) -> Option<Draft> {
        match std::mem::take(self) {
            DraftState::Idle => None,
            DraftState::Drafting(draft) => Some(draft),
        }
    }

    pub fn is_drafting(&self) -> bool {
        matches!(self, DraftState::Drafting(_))
    }
}

/// Session phase as reported in transition errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No draft, presses allowed
    Idle,
    /// No draft, presses disabled by view mode
    Viewing,
    /// A draft is open
    Drafting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Idle => "idle",
            Phase::Viewing => "in view mode",
            Phase::Drafting => "drafting",
        })
    }
}
