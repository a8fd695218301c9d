// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Delete confirmation dialog
//!
//! Renders the pending `DeleteRequest` and resolves it with the button the
//! user picks. Tapping outside the dialog counts as cancel.

use masonry::properties::types::{AsUnit, UnitPoint};
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{
    ChildAlignment, CrossAxisAlignment, MainAxisAlignment, ZStackExt, button, flex_col,
    flex_row, label, sized_box, transformed, zstack,
};

use super::draft_editor::scrim;
use crate::data::AppState;
use crate::editing::{ConfirmOutcome, DeletePrompt};
use crate::theme;

/// Width of the dialog panel
const DIALOG_WIDTH: f64 = 320.0;

/// Full-window modal for `prompt`
pub fn confirm_dialog(prompt: &DeletePrompt) -> impl WidgetView<AppState> + use<> {
    let actions = flex_row((
        button(
            label(prompt.cancel_label)
                .text_size(14.0)
                .color(theme::text::PRIMARY),
            |state: &mut AppState| {
                state.answer_delete(ConfirmOutcome::Cancel);
            },
        )
        .background_color(theme::panel::BUTTON)
        .border_color(theme::panel::OUTLINE),
        button(
            label(prompt.affirm_label)
                .text_size(14.0)
                .color(theme::text::DESTRUCTIVE),
            |state: &mut AppState| {
                state.answer_delete(ConfirmOutcome::Affirm);
            },
        )
        .background_color(theme::panel::BUTTON)
        .border_color(theme::text::DESTRUCTIVE),
    ))
    .gap(8.px())
    .main_axis_alignment(MainAxisAlignment::End);

    let panel = sized_box(
        flex_col((
            label(prompt.title).text_size(17.0).color(theme::text::PRIMARY),
            label(prompt.body).text_size(14.0).color(theme::text::PRIMARY),
            label(prompt.subject.clone())
                .text_size(13.0)
                .color(theme::text::SECONDARY),
            actions,
        ))
        .gap(10.px())
        .cross_axis_alignment(CrossAxisAlignment::Start),
    )
    .width(DIALOG_WIDTH.px())
    .padding(16.0)
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS);

    zstack((
        scrim(|state: &mut AppState| state.answer_delete(ConfirmOutcome::Cancel)),
        transformed(panel).alignment(ChildAlignment::SelfAligned(UnitPoint::CENTER)),
    ))
}
