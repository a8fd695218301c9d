// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Map view - the map canvas with floating panels and modal overlays

use masonry::properties::types::UnitPoint;
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::style::Style;
use xilem::view::{ChildAlignment, ZStackExt, label, transformed, zstack};

use crate::components::{
    DraftMarker, MapAction, callout, confirm_dialog, draft_editor, map_view, mode_toggle,
};
use crate::data::AppState;
use crate::theme;

/// The whole window: map canvas underneath, panels floating on top.
///
/// Later children of the stack sit above earlier ones, so the modal
/// overlays come last.
pub fn map_tab(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    const MARGIN: f64 = theme::size::MARGIN;

    let session = &state.session;
    let mode = session.mode();

    let draft_marker = session.draft().map(|draft| DraftMarker {
        coordinate: draft.coordinate(),
        color: draft.color(),
    });

    // Bottom-center: callout for the tapped marker
    let callout_content = match state.selected_pin.and_then(|id| session.pins().get(id)) {
        Some(pin) => Either::A(callout(pin)),
        None => Either::B(label("")),
    };
    let callout_panel = transformed(callout_content)
        .translate((0.0, -MARGIN))
        .alignment(ChildAlignment::SelfAligned(UnitPoint::BOTTOM));

    // Top-left: last rejected operation
    let error_content = match &state.error_message {
        Some(message) => Either::A(
            label(message.clone())
                .text_size(13.0)
                .color(theme::text::DESTRUCTIVE),
        ),
        None => Either::B(label("")),
    };
    let error_banner = transformed(error_content)
        .translate((MARGIN, MARGIN))
        .alignment(ChildAlignment::SelfAligned(UnitPoint::TOP_LEFT));

    let editor_overlay = match session.draft() {
        Some(draft) => Either::A(draft_editor(draft, session.color_selection())),
        None => Either::B(label("")),
    };

    let confirm_overlay = match state.confirm.request() {
        Some(request) => Either::A(confirm_dialog(&request.prompt)),
        None => Either::B(label("")),
    };

    zstack((
        // Background: the map canvas (full window)
        map_view(
            session.markers(),
            draft_marker,
            state.selected_pin,
            |state: &mut AppState, action| match action {
                MapAction::Pressed(coordinate) => state.handle_map_press(coordinate),
                MapAction::PinTapped(id) => state.select_pin(id),
            },
        ),
        // Top-center: mode toggle
        transformed(mode_toggle(mode))
            .translate((0.0, MARGIN))
            .alignment(ChildAlignment::SelfAligned(UnitPoint::TOP)),
        callout_panel,
        error_banner,
        editor_overlay,
        confirm_overlay,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    #[test]
    fn builds_with_every_panel_open() {
        let mut state = AppState::default();
        state.handle_map_press(Coordinate::new(34.7361, 135.3419));
        let id = state.submit_draft().unwrap();
        state.select_pin(id);
        state.error_message = Some("cannot commit while idle".to_string());
        let _ = map_tab(&mut state);

        state.request_delete(id);
        state.handle_map_press(Coordinate::new(34.7362, 135.3420));
        assert!(state.confirm.is_open());
        let _ = map_tab(&mut state);
    }

    #[test]
    fn builds_with_nothing_open() {
        let mut state = AppState::default();
        let _ = map_tab(&mut state);
    }
}
