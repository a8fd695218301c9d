// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Delete confirmation as an explicit two-outcome continuation.
//!
//! `PinSession::request_delete` builds a `DeleteRequest` and hands it to a
//! `ConfirmDialog`. The dialog keeps the request for as long as it likes and
//! later feeds it back to `PinSession::resolve_delete` together with the
//! user's `ConfirmOutcome`. Dismissing the dialog without choosing is the
//! same as `ConfirmOutcome::Cancel`. Nothing is locked in between; a request
//! whose pin disappeared in the meantime resolves to a no-op.

use crate::model::PinId;
use crate::settings;

/// Result of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The destructive action was chosen
    Affirm,
    /// Cancel was chosen, or the dialog was dismissed
    Cancel,
}

/// Text the dialog shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub title: &'static str,
    pub body: &'static str,
    /// Comment of the pin being deleted, for context
    pub subject: String,
    pub affirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl DeletePrompt {
    pub fn for_comment(comment: &str) -> Self {
        Self {
            title: settings::delete_dialog::TITLE,
            body: settings::delete_dialog::BODY,
            subject: comment.to_string(),
            affirm_label: settings::delete_dialog::AFFIRM,
            cancel_label: settings::delete_dialog::CANCEL,
        }
    }
}

/// A pending deletion waiting on the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub pin: PinId,
    pub prompt: DeletePrompt,
}

/// Anything that can ask the user to confirm a deletion
pub trait ConfirmDialog {
    /// Show the prompt. The request is resolved later through
    /// `PinSession::resolve_delete`.
    fn present(&mut self, request: DeleteRequest);
}

/// Dialog that holds at most one request until it is answered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingConfirm {
    request: Option<DeleteRequest>,
}

impl PendingConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> Option<&DeleteRequest> {
        self.request.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.request.is_some()
    }

    /// Close the dialog and hand back the request for resolution
    pub fn take(&mut self) -> Option<DeleteRequest> {
        self.request.take()
    }
}

impl ConfirmDialog for PendingConfirm {
    fn present(&mut self, request: DeleteRequest) {
        if let Some(previous) = self.request.replace(request) {
            tracing::debug!("Replacing unanswered delete prompt for {}", previous.pin);
        }
    }
}
