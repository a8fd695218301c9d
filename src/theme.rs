// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use crate::editing::Mode;
use crate::model::PinColor;
use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_D: Color = Color::from_rgb8(0x40, 0x40, 0x40);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);
const BASE_N: Color = Color::from_rgb8(0xe0, 0xe0, 0xe0);

// ============================================================================
// MAP CANVAS
// ============================================================================
const MAP_BACKGROUND: Color = Color::from_rgb8(0x1c, 0x26, 0x2b);
const MAP_GRATICULE: Color = Color::from_rgb8(0x2e, 0x3c, 0x43);
const MAP_CENTER_CROSS: Color = BASE_G;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_N;
const SECONDARY_UI_TEXT: Color = BASE_I;
const DESTRUCTIVE_TEXT: Color = Color::from_rgb8(0xff, 0x6b, 0x6b);

// ============================================================================
// UI PANELS (Mode toggle, Callout, Draft editor, Confirm dialog)
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;
const PANEL_BUTTON: Color = BASE_D;
const MODAL_SCRIM: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0xaa);

// ============================================================================
// MODE TOGGLE
// ============================================================================
const MODE_ADD: Color = Color::from_rgb8(0x4c, 0xaf, 0x50);
const MODE_VIEW: Color = Color::from_rgb8(0x21, 0x96, 0xf3);

// ============================================================================
// PIN PALETTE
// ============================================================================
const PIN_RED: Color = Color::from_rgb8(0xe5, 0x39, 0x35);
const PIN_BLUE: Color = Color::from_rgb8(0x1e, 0x88, 0xe5);
const PIN_GREEN: Color = Color::from_rgb8(0x43, 0xa0, 0x47);
const PIN_ORANGE: Color = Color::from_rgb8(0xfb, 0x8c, 0x00);
const PIN_PURPLE: Color = Color::from_rgb8(0x8e, 0x24, 0xaa);
const PIN_OUTLINE: Color = BASE_A;
const PIN_DRAFT_RING: Color = BASE_L;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the map canvas
pub mod map {
    use super::Color;
    pub const BACKGROUND: Color = super::MAP_BACKGROUND;
    pub const GRATICULE: Color = super::MAP_GRATICULE;
    pub const CENTER_CROSS: Color = super::MAP_CENTER_CROSS;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
    pub const DESTRUCTIVE: Color = super::DESTRUCTIVE_TEXT;
}

/// Colors for floating panels and modal overlays
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
    pub const BUTTON: Color = super::PANEL_BUTTON;
    pub const SCRIM: Color = super::MODAL_SCRIM;
}

/// Mode toggle button tint
pub mod mode {
    use super::{Color, Mode};

    pub fn color(mode: Mode) -> Color {
        match mode {
            Mode::Add => super::MODE_ADD,
            Mode::View => super::MODE_VIEW,
        }
    }
}

/// Marker colors
pub mod pin {
    use super::{Color, PinColor};

    pub const OUTLINE: Color = super::PIN_OUTLINE;
    pub const DRAFT_RING: Color = super::PIN_DRAFT_RING;

    pub fn color(color: PinColor) -> Color {
        match color {
            PinColor::Red => super::PIN_RED,
            PinColor::Blue => super::PIN_BLUE,
            PinColor::Green => super::PIN_GREEN,
            PinColor::Orange => super::PIN_ORANGE,
            PinColor::Purple => super::PIN_PURPLE,
        }
    }
}

/// Sizes
pub mod size {
    /// Corner radius for floating panels
    pub const PANEL_RADIUS: f64 = 8.0;
    /// Border width for floating panels
    pub const PANEL_BORDER_WIDTH: f64 = 1.5;
    /// Radius of a marker head
    pub const PIN_HEAD_RADIUS: f64 = 9.0;
    /// Stroke width for marker outlines and stems
    pub const PIN_STROKE_WIDTH: f64 = 1.5;
    /// Fixed margin between floating panels and the window edge
    pub const MARGIN: f64 = 16.0;
}
