// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Map interaction model: modes, drafts, deletion and hit testing

pub mod confirm;
pub mod draft;
pub mod error;
pub mod hit_test;
pub mod mode;
pub mod session;
pub mod viewport;

pub use confirm::{ConfirmOutcome, DeletePrompt, PendingConfirm};
pub use draft::Draft;
pub use error::SessionError;
pub use mode::Mode;
pub use session::{PinSession, PressOutcome, SessionOptions};
pub use viewport::Viewport;
