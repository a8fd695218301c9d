// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Map presses, mode switching and the draft editor for AppState

use super::AppState;
use crate::editing::{Mode, PressOutcome};
use crate::model::{Coordinate, PinColor, PinId};

impl AppState {
    /// Flip between add and view mode
    pub fn toggle_mode(&mut self) -> Mode {
        self.session.toggle_mode()
    }

    /// Handle a press on empty map space
    pub fn handle_map_press(&mut self, coordinate: Coordinate) {
        if self.modal_open() {
            // Overlays sit above the map; a press that still arrives is stale
            return;
        }
        // A press elsewhere on the map closes any open callout
        self.selected_pin = None;
        if self.session.press(coordinate) == PressOutcome::DraftOpened {
            self.error_message = None;
        }
    }

    /// Text field binding
    pub fn update_comment(&mut self, text: String) {
        let result = self.session.update_comment(text);
        self.report(result);
    }

    /// Swatch binding
    pub fn select_color(&mut self, color: PinColor) {
        let result = self.session.update_color(color.name());
        self.report(result);
    }

    /// Submit button binding
    pub fn submit_draft(&mut self) -> Option<PinId> {
        let result = self.session.commit();
        self.report(result)
    }

    /// Tap outside the editor
    pub fn cancel_draft(&mut self) {
        let result = self.session.cancel();
        self.report(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::SessionOptions;

    const HERE: Coordinate = Coordinate::new(34.7361, 135.3419);

    #[test]
    fn press_submit_flow() {
        let mut state = AppState::default();
        state.handle_map_press(HERE);
        assert!(state.modal_open());

        state.update_comment("unattended bag".to_string());
        state.select_color(PinColor::Orange);
        let id = state.submit_draft().unwrap();

        assert!(!state.modal_open());
        let pin = state.session.pins().get(id).unwrap();
        assert_eq!(pin.comment(), "unattended bag");
        assert_eq!(pin.color(), PinColor::Orange);
    }

    #[test]
    fn press_with_callout_open_closes_it_and_opens_draft() {
        let mut state = AppState::default();
        state.handle_map_press(HERE);
        let id = state.submit_draft().unwrap();
        state.select_pin(id);

        state.handle_map_press(HERE);
        assert_eq!(state.selected_pin, None);
        assert!(state.session.is_drafting());
    }

    #[test]
    fn swatch_in_single_color_session_is_reported() {
        let mut state = AppState::new(SessionOptions {
            color_selection: false,
            ..SessionOptions::default()
        });
        state.handle_map_press(HERE);
        state.select_color(PinColor::Blue);

        assert!(state.error_message.is_some());
        assert_eq!(state.session.draft().unwrap().color(), PinColor::Red);
    }

    #[test]
    fn rejected_operations_are_reported() {
        let mut state = AppState::default();
        assert!(state.submit_draft().is_none());
        assert!(state.error_message.is_some());

        state.handle_map_press(HERE);
        state.cancel_draft();
        assert!(state.error_message.is_none());
    }

    #[test]
    fn view_mode_press_does_nothing() {
        let mut state = AppState::new(SessionOptions {
            initial_mode: Mode::View,
            ..SessionOptions::default()
        });
        state.handle_map_press(HERE);
        assert!(!state.modal_open());
        assert!(state.session.pins().is_empty());
    }
}
