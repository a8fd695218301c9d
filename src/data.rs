// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` owns the pin session, the delete confirmation dialog, the
//! open callout and window metadata. Every UI rebuild reads from `AppState`;
//! mutations happen in event callbacks and propagate through the Xilem view
//! tree. Sub-modules split the methods by flow: drafting and deletion.

mod deletion;
mod editor;

use crate::editing::{PendingConfirm, PinSession, SessionError, SessionOptions};
use crate::model::PinId;
use xilem::WindowId;

/// Main application state
pub struct AppState {
    /// Mode, pins and the draft state machine
    pub session: PinSession,

    /// Delete confirmation waiting on the user, if any
    pub confirm: PendingConfirm,

    /// Pin whose callout is open
    pub selected_pin: Option<PinId>,

    /// Last rejected operation, shown until the next successful one
    pub error_message: Option<String>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create a new application state with an empty pin collection
    pub fn new(options: SessionOptions) -> Self {
        Self {
            session: PinSession::new(options),
            confirm: PendingConfirm::new(),
            selected_pin: None,
            error_message: None,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// True while a modal overlay (draft editor or confirm dialog) covers
    /// the map
    pub fn modal_open(&self) -> bool {
        self.session.is_drafting() || self.confirm.is_open()
    }

    /// Record the outcome of a session operation.
    ///
    /// Rejections are caller bugs rather than user errors, so they are
    /// logged and surfaced instead of unwinding.
    fn report<T>(&mut self, result: Result<T, SessionError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.error_message = None;
                Some(value)
            }
            Err(err) => {
                tracing::warn!("Rejected session operation: {}", err);
                self.error_message = Some(err.to_string());
                None
            }
        }
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}
