// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the Pinmap map annotator

pub mod callout;
pub mod color_swatch_panel;
pub mod confirm_dialog;
pub mod draft_editor;
pub mod map_canvas;
pub mod mode_toggle;

// Re-export commonly used widget views and types
pub use callout::callout;
pub use confirm_dialog::confirm_dialog;
pub use draft_editor::draft_editor;
pub use map_canvas::{DraftMarker, MapAction, map_view};
pub use mode_toggle::mode_toggle;
