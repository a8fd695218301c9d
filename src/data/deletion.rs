// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Callouts and delete confirmation for AppState

use super::AppState;
use crate::editing::ConfirmOutcome;
use crate::model::PinId;

impl AppState {
    /// Open the callout for a tapped marker
    pub fn select_pin(&mut self, id: PinId) {
        if self.modal_open() {
            return;
        }
        if self.session.pins().contains(id) {
            self.selected_pin = Some(id);
        }
    }

    pub fn close_callout(&mut self) {
        self.selected_pin = None;
    }

    /// Callout delete action: ask for confirmation
    pub fn request_delete(&mut self, id: PinId) {
        self.selected_pin = None;
        self.session.request_delete(id, &mut self.confirm);
    }

    /// Dialog button or dismissal
    pub fn answer_delete(&mut self, outcome: ConfirmOutcome) {
        let Some(request) = self.confirm.take() else {
            return;
        };
        self.session.resolve_delete(request, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    fn state_with_pins(n: usize) -> (AppState, Vec<PinId>) {
        let mut state = AppState::default();
        let ids = (0..n)
            .map(|i| {
                state.handle_map_press(Coordinate::new(i as f64, i as f64));
                state.submit_draft().unwrap()
            })
            .collect();
        (state, ids)
    }

    #[test]
    fn callout_delete_then_affirm() {
        let (mut state, ids) = state_with_pins(2);
        state.select_pin(ids[0]);
        state.request_delete(ids[0]);

        assert_eq!(state.selected_pin, None);
        assert!(state.confirm.is_open());
        assert_eq!(state.session.pins().len(), 2);

        state.answer_delete(ConfirmOutcome::Affirm);
        assert!(!state.confirm.is_open());
        assert_eq!(state.session.pins().len(), 1);
        assert!(!state.session.pins().contains(ids[0]));
    }

    #[test]
    fn dismiss_keeps_pin() {
        let (mut state, ids) = state_with_pins(1);
        state.request_delete(ids[0]);
        state.answer_delete(ConfirmOutcome::Cancel);

        assert!(!state.confirm.is_open());
        assert!(state.session.pins().contains(ids[0]));
    }

    #[test]
    fn answer_without_dialog_is_noop() {
        let (mut state, _) = state_with_pins(1);
        state.answer_delete(ConfirmOutcome::Affirm);
        assert_eq!(state.session.pins().len(), 1);
    }

    #[test]
    fn selecting_missing_pin_opens_nothing() {
        let (mut state, ids) = state_with_pins(1);
        state.session.confirm_delete(ids[0]);
        state.select_pin(ids[0]);
        assert_eq!(state.selected_pin, None);
    }
}
