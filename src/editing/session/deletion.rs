// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Confirmation-gated pin removal for PinSession

use super::PinSession;
use crate::editing::confirm::{ConfirmDialog, ConfirmOutcome, DeletePrompt, DeleteRequest};
use crate::model::{Pin, PinId};

impl PinSession {
    /// Ask `dialog` to confirm removing `id`. Does not change the session.
    ///
    /// Returns false when the pin no longer exists; in that case the dialog
    /// is not shown.
    pub fn request_delete(&self, id: PinId, dialog: &mut impl ConfirmDialog) -> bool {
        let Some(pin) = self.pins.get(id) else {
            tracing::debug!("Delete requested for missing {}", id);
            return false;
        };
        tracing::debug!("Asking to confirm deletion of {}", id);
        dialog.present(DeleteRequest {
            pin: id,
            prompt: DeletePrompt::for_comment(pin.comment()),
        });
        true
    }

    /// Continue a deletion once the dialog has been answered
    pub fn resolve_delete(
        &mut self,
        request: DeleteRequest,
        outcome: ConfirmOutcome,
    ) -> Option<Pin> {
        match outcome {
            ConfirmOutcome::Affirm => self.confirm_delete(request.pin),
            ConfirmOutcome::Cancel => {
                tracing::debug!("Deletion of {} cancelled", request.pin);
                None
            }
        }
    }

    /// Remove `id` from the collection. Removing an absent id is a no-op,
    /// so a prompt answered twice cannot take out a second pin.
    pub fn confirm_delete(&mut self, id: PinId) -> Option<Pin> {
        let removed = self.pins.remove(id);
        match &removed {
            Some(_) if self.pins.is_empty() => tracing::info!("Deleted {}, no pins left", id),
            Some(_) => tracing::info!("Deleted {} ({} pins left)", id, self.pins.len()),
            None => tracing::debug!("{} already gone, nothing to delete", id),
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use crate::editing::confirm::{ConfirmOutcome, PendingConfirm};
    use crate::editing::session::{PinSession, SessionOptions};
    use crate::model::{Coordinate, PinColor, PinId};

    fn session_with(coords: &[(f64, f64)]) -> (PinSession, Vec<PinId>) {
        let mut s = PinSession::new(SessionOptions::default());
        let ids = coords
            .iter()
            .map(|&(lat, lon)| {
                s.press(Coordinate::new(lat, lon));
                s.commit().unwrap()
            })
            .collect();
        (s, ids)
    }

    #[test]
    fn request_does_not_mutate() {
        let (s, ids) = session_with(&[(1.0, 1.0)]);
        let before = s.pins().clone();
        let mut dialog = PendingConfirm::new();

        assert!(s.request_delete(ids[0], &mut dialog));
        assert_eq!(s.pins(), &before);
        assert_eq!(dialog.request().map(|r| r.pin), Some(ids[0]));
    }

    #[test]
    fn affirm_removes_exactly_that_pin() {
        let (mut s, ids) = session_with(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let mut dialog = PendingConfirm::new();

        s.request_delete(ids[1], &mut dialog);
        let request = dialog.take().unwrap();
        let removed = s.resolve_delete(request, ConfirmOutcome::Affirm);

        assert_eq!(removed.map(|p| p.id()), Some(ids[1]));
        assert_eq!(s.pins().len(), 2);
        let left: Vec<_> = s.pins().iter().map(|p| p.id()).collect();
        assert_eq!(left, vec![ids[0], ids[2]]);
    }

    #[test]
    fn cancel_keeps_pin() {
        let (mut s, ids) = session_with(&[(1.0, 1.0)]);
        let mut dialog = PendingConfirm::new();

        s.request_delete(ids[0], &mut dialog);
        let request = dialog.take().unwrap();
        assert!(s.resolve_delete(request, ConfirmOutcome::Cancel).is_none());
        assert_eq!(s.pins().len(), 1);
    }

    #[test]
    fn request_for_missing_pin_shows_nothing() {
        let (mut s, ids) = session_with(&[(1.0, 1.0)]);
        s.confirm_delete(ids[0]);
        let mut dialog = PendingConfirm::new();

        assert!(!s.request_delete(ids[0], &mut dialog));
        assert!(!dialog.is_open());
    }

    #[test]
    fn confirming_twice_is_idempotent() {
        let (mut s, ids) = session_with(&[(1.0, 1.0), (2.0, 2.0)]);
        let mut dialog = PendingConfirm::new();
        s.request_delete(ids[0], &mut dialog);
        let request = dialog.take().unwrap();

        assert!(s.resolve_delete(request.clone(), ConfirmOutcome::Affirm).is_some());
        assert!(s.resolve_delete(request, ConfirmOutcome::Affirm).is_none());
        assert_eq!(s.pins().len(), 1);
    }

    #[test]
    fn confirm_delete_of_unknown_id_is_noop() {
        let (mut s, _) = session_with(&[(1.0, 1.0)]);
        let before = s.pins().clone();
        assert!(s.confirm_delete(PinId::next()).is_none());
        assert_eq!(s.pins(), &before);
    }

    #[test]
    fn prompt_carries_comment() {
        let mut s = PinSession::new(SessionOptions::default());
        s.press(Coordinate::new(1.0, 1.0));
        s.update_comment("bench").unwrap();
        let id = s.commit().unwrap();

        let mut dialog = PendingConfirm::new();
        s.request_delete(id, &mut dialog);
        let prompt = &dialog.request().unwrap().prompt;
        assert_eq!(prompt.subject, "bench");
        assert_eq!(prompt.title, "Delete pin?");
        assert_eq!(prompt.affirm_label, "Delete");
    }

    #[test]
    fn unattended_bag_scenario() {
        let mut s = PinSession::new(SessionOptions::default());
        s.press(Coordinate::new(34.7361, 135.3419));
        s.update_comment("unattended bag").unwrap();
        s.update_color("orange").unwrap();
        let id = s.commit().unwrap();

        let markers = s.markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, id);
        assert_eq!(markers[0].coordinate, Coordinate::new(34.7361, 135.3419));
        assert_eq!(markers[0].color, PinColor::Orange);
        assert_eq!(markers[0].callout, "unattended bag");

        let mut dialog = PendingConfirm::new();
        s.request_delete(id, &mut dialog);
        let request = dialog.take().unwrap();
        s.resolve_delete(request, ConfirmOutcome::Affirm);
        assert!(s.pins().is_empty());
    }
}
