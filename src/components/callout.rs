// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Callout bubble for a tapped marker
//!
//! Shows the pin's comment, the time it was posted and a delete action.

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_col, flex_row, label, sized_box};

use crate::data::AppState;
use crate::model::Pin;
use crate::settings;
use crate::theme;

/// Width of the callout panel
const CALLOUT_WIDTH: f64 = 280.0;

/// Text shown in place of an empty comment
const EMPTY_COMMENT: &str = "(no comment)";

/// Callout for `pin`
pub fn callout(pin: &Pin) -> impl WidgetView<AppState> + use<> {
    let id = pin.id();
    let comment = if pin.comment().is_empty() {
        EMPTY_COMMENT.to_string()
    } else {
        pin.comment().to_string()
    };
    let posted = format!(
        "{} · {}",
        pin.color(),
        pin.created_at().format("%Y-%m-%d %H:%M")
    );

    let actions = flex_row((
        button(
            label(settings::editor::CALLOUT_DELETE)
                .text_size(13.0)
                .color(theme::text::DESTRUCTIVE),
            move |state: &mut AppState| {
                state.request_delete(id);
            },
        )
        .background_color(theme::panel::BUTTON)
        .border_color(theme::panel::OUTLINE),
        button(
            label("Close").text_size(13.0).color(theme::text::PRIMARY),
            |state: &mut AppState| {
                state.close_callout();
            },
        )
        .background_color(theme::panel::BUTTON)
        .border_color(theme::panel::OUTLINE),
    ))
    .gap(8.px());

    sized_box(
        flex_col((
            label(comment).text_size(15.0).color(theme::text::PRIMARY),
            label(posted).text_size(12.0).color(theme::text::SECONDARY),
            actions,
        ))
        .gap(8.px())
        .cross_axis_alignment(CrossAxisAlignment::Start),
    )
    .width(CALLOUT_WIDTH.px())
    .padding(12.0)
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS)
}
