// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Mode toggle button floating over the map

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{button, label, sized_box};

use crate::data::AppState;
use crate::editing::Mode;
use crate::theme;

/// Width of the toggle button
const TOGGLE_WIDTH: f64 = 160.0;

/// Button that flips between adding and viewing pins.
///
/// The label and tint follow the current mode.
pub fn mode_toggle(mode: Mode) -> impl WidgetView<AppState> + use<> {
    sized_box(
        button(
            label(mode.label())
                .text_size(15.0)
                .color(theme::text::PRIMARY),
            |state: &mut AppState| {
                state.toggle_mode();
            },
        )
        .background_color(theme::mode::color(mode))
        .border_color(theme::mode::color(mode)),
    )
    .width(TOGGLE_WIDTH.px())
    .corner_radius(theme::size::PANEL_RADIUS)
    .padding(2.0)
}
