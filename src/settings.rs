// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`.

// ============================================================================
// INITIAL VIEWPORT
// ============================================================================
/// Latitude the map is centered on at launch
const INITIAL_LATITUDE: f64 = 34.7361;

/// Longitude the map is centered on at launch
const INITIAL_LONGITUDE: f64 = 135.3419;

/// Visible latitude span at launch (degrees)
const INITIAL_LATITUDE_DELTA: f64 = 0.01;

/// Visible longitude span at launch (degrees)
const INITIAL_LONGITUDE_DELTA: f64 = 0.01;

// ============================================================================
// ZOOM SETTINGS
// ============================================================================
/// Smallest visible latitude span (most zoomed in)
const MIN_SPAN: f64 = 0.0005;

/// Largest visible latitude span (most zoomed out)
const MAX_SPAN: f64 = 2.0;

/// Span multiplier per scroll line
const ZOOM_STEP: f64 = 1.1;

// ============================================================================
// MARKER INTERACTION
// ============================================================================
/// Radius around a marker head that counts as a tap on it (screen pixels)
const PIN_HIT_RADIUS: f64 = 14.0;

/// Graticule spacing as a fraction of the visible latitude span
const GRATICULE_DIVISIONS: f64 = 8.0;

// ============================================================================
// DIALOG TEXT
// ============================================================================
const DELETE_TITLE: &str = "Delete pin?";
const DELETE_BODY: &str = "Are you sure you want to delete this pin?";
const DELETE_AFFIRM: &str = "Delete";
const DELETE_CANCEL: &str = "Cancel";

const EDITOR_PROMPT: &str = "Enter a comment";
const EDITOR_PLACEHOLDER: &str = "e.g. saw someone suspicious around here";
const EDITOR_COLOR_PROMPT: &str = "Choose a pin color:";
const EDITOR_SUBMIT: &str = "Post";

const CALLOUT_DELETE: &str = "🗑 Delete";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Viewport shown when the application starts
pub mod viewport {
    pub const LATITUDE: f64 = super::INITIAL_LATITUDE;
    pub const LONGITUDE: f64 = super::INITIAL_LONGITUDE;
    pub const LATITUDE_DELTA: f64 = super::INITIAL_LATITUDE_DELTA;
    pub const LONGITUDE_DELTA: f64 = super::INITIAL_LONGITUDE_DELTA;
}

/// Scroll-to-zoom limits
pub mod zoom {
    /// Smallest visible latitude span
    pub const MIN_SPAN: f64 = super::MIN_SPAN;

    /// Largest visible latitude span
    pub const MAX_SPAN: f64 = super::MAX_SPAN;

    /// Span multiplier applied per scroll line
    pub const STEP: f64 = super::ZOOM_STEP;
}

/// Map canvas interaction settings
pub mod map {
    pub const PIN_HIT_RADIUS: f64 = super::PIN_HIT_RADIUS;
    pub const GRATICULE_DIVISIONS: f64 = super::GRATICULE_DIVISIONS;
}

/// Strings shown by the delete confirmation dialog
pub mod delete_dialog {
    pub const TITLE: &str = super::DELETE_TITLE;
    pub const BODY: &str = super::DELETE_BODY;
    pub const AFFIRM: &str = super::DELETE_AFFIRM;
    pub const CANCEL: &str = super::DELETE_CANCEL;
}

/// Strings shown by the draft editor overlay and marker callouts
pub mod editor {
    pub const PROMPT: &str = super::EDITOR_PROMPT;
    pub const PLACEHOLDER: &str = super::EDITOR_PLACEHOLDER;
    pub const COLOR_PROMPT: &str = super::EDITOR_COLOR_PROMPT;
    pub const SUBMIT: &str = super::EDITOR_SUBMIT;
    pub const CALLOUT_DELETE: &str = super::CALLOUT_DELETE;
}
