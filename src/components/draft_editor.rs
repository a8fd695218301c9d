// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Draft editor overlay
//!
//! Modal panel shown while a draft is open. The comment field and color
//! swatcher edit the draft; "Post" commits it. Tapping the scrim around the
//! panel cancels the draft.

use masonry::properties::types::{AsUnit, UnitPoint};
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::style::Style;
use xilem::view::{
    ChildAlignment, CrossAxisAlignment, ZStackExt, button, flex_col, label, sized_box,
    transformed, zstack,
};

use super::color_swatch_panel::{SWATCH_PANEL_WIDTH, color_swatch_panel};
use crate::data::AppState;
use crate::editing::{Draft, Mode};
use crate::settings;
use crate::theme;

/// Width of the editor panel
const EDITOR_WIDTH: f64 = 360.0;

/// Full-window overlay for `draft`.
///
/// The swatcher is only shown when the session allows color selection.
pub fn draft_editor(draft: &Draft, color_selection: bool) -> impl WidgetView<AppState> + use<> {
    let swatches = if color_selection {
        Either::A(
            sized_box(color_swatch_panel(
                draft.color(),
                |state: &mut AppState, color| {
                    state.select_color(color);
                },
            ))
            .width(SWATCH_PANEL_WIDTH.px()),
        )
    } else {
        Either::B(label(""))
    };

    let panel = sized_box(
        flex_col((
            label(settings::editor::PROMPT)
                .text_size(16.0)
                .color(theme::text::PRIMARY),
            label(draft.coordinate().to_string())
                .text_size(12.0)
                .color(theme::text::SECONDARY),
            sized_box(
                xilem::view::text_input(
                    draft.comment().to_string(),
                    |state: &mut AppState, new_value: String| {
                        state.update_comment(new_value);
                    },
                )
                .text_alignment(parley::Alignment::Start)
                .placeholder(settings::editor::PLACEHOLDER),
            )
            .expand_width(),
            swatches,
            button(
                label(settings::editor::SUBMIT)
                    .text_size(15.0)
                    .color(theme::text::PRIMARY),
                |state: &mut AppState| {
                    state.submit_draft();
                },
            )
            .background_color(theme::mode::color(Mode::Add))
            .border_color(theme::panel::OUTLINE),
        ))
        .gap(12.px())
        .cross_axis_alignment(CrossAxisAlignment::Start),
    )
    .width(EDITOR_WIDTH.px())
    .padding(16.0)
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS);

    zstack((
        scrim(|state: &mut AppState| state.cancel_draft()),
        transformed(panel).alignment(ChildAlignment::SelfAligned(UnitPoint::CENTER)),
    ))
}

/// Dimmed full-window backdrop; tapping it runs `on_tap`
pub(crate) fn scrim<F>(on_tap: F) -> impl WidgetView<AppState>
where
    F: Fn(&mut AppState) + Send + Sync + 'static,
{
    sized_box(
        button(label(""), on_tap)
            .background_color(theme::panel::SCRIM)
            .border_color(theme::panel::SCRIM),
    )
    .expand_width()
    .expand_height()
}
