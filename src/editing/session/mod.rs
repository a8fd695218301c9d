// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Pin session - mode, pin collection and draft state machine
//!
//! `PinSession` owns everything a map press can change. Each user-facing
//! operation is one method that either performs its transition or returns
//! a `SessionError` without touching state, so the whole lifecycle can be
//! driven and checked without a UI.
//!
//! ```text
//!            press (AddMode)           update_comment / update_color
//!   Idle ─────────────────────▶ Drafting ◀──────────────┘
//!    ▲                            │
//!    └──── commit (append pin) ───┤
//!    └──── cancel (discard) ──────┘
//! ```

mod deletion;

use super::draft::{Draft, DraftState, Phase};
use super::error::{Operation, SessionError};
use super::mode::{Mode, ModeController};
use crate::model::{Coordinate, MarkerSpec, PinColor, PinId, PinStore};

/// Variant and launch configuration for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Mode the session starts in
    pub initial_mode: Mode,
    /// When false, every pin gets the default color and `update_color`
    /// is rejected
    pub color_selection: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            initial_mode: Mode::Add,
            color_selection: true,
        }
    }
}

/// What a map press turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// View mode: the press is inert
    Ignored,
    /// A new draft was opened at the pressed coordinate
    DraftOpened,
    /// A draft is already open; the press was swallowed
    DraftAlreadyOpen,
}

#[derive(Debug, Clone)]
pub struct PinSession {
    mode: ModeController,
    pins: PinStore,
    draft: DraftState,
    color_selection: bool,
}

impl PinSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            mode: ModeController::new(options.initial_mode),
            pins: PinStore::new(),
            draft: DraftState::Idle,
            color_selection: options.color_selection,
        }
    }

    // ===== Queries =====

    pub fn mode(&self) -> Mode {
        self.mode.current()
    }

    pub fn pins(&self) -> &PinStore {
        &self.pins
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.draft()
    }

    pub fn is_drafting(&self) -> bool {
        self.draft.is_drafting()
    }

    pub fn color_selection(&self) -> bool {
        self.color_selection
    }

    /// Marker set for the map surface, rebuilt from the pin collection
    pub fn markers(&self) -> Vec<MarkerSpec> {
        self.pins.markers()
    }

    pub fn phase(&self) -> Phase {
        if self.draft.is_drafting() {
            Phase::Drafting
        } else if ModeController::should_handle_press(self.mode()) {
            Phase::Idle
        } else {
            Phase::Viewing
        }
    }

    fn reject(&self, operation: Operation) -> SessionError {
        SessionError::InvalidTransition {
            operation,
            phase: self.phase(),
        }
    }

    // ===== Mode =====

    /// Flip between add and view mode. Leaves any open draft alone.
    pub fn toggle_mode(&mut self) -> Mode {
        let mode = self.mode.toggle();
        tracing::debug!("Mode switched to {:?}", mode);
        mode
    }

    // ===== Draft lifecycle =====

    /// Map-surface entry point for a press at `coordinate`
    pub fn press(&mut self, coordinate: Coordinate) -> PressOutcome {
        if !ModeController::should_handle_press(self.mode()) {
            tracing::debug!("Press at {} ignored in view mode", coordinate);
            return PressOutcome::Ignored;
        }
        match self.begin_draft(coordinate) {
            Ok(()) => PressOutcome::DraftOpened,
            Err(_) => {
                tracing::debug!("Press at {} swallowed, draft already open", coordinate);
                PressOutcome::DraftAlreadyOpen
            }
        }
    }

    /// Open a draft at `coordinate` with an empty comment and the default
    /// color. Only valid while idle in add mode.
    pub fn begin_draft(&mut self, coordinate: Coordinate) -> Result<(), SessionError> {
        if self.phase() != Phase::Idle {
            return Err(self.reject(Operation::BeginDraft));
        }
        tracing::debug!("Draft opened at {}", coordinate);
        self.draft = DraftState::Drafting(Draft::new(coordinate));
        Ok(())
    }

    /// Replace the draft comment. Any text is accepted, including "".
    pub fn update_comment(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        let Some(draft) = self.draft.draft_mut() else {
            return Err(self.reject(Operation::UpdateComment));
        };
        draft.set_comment(text.into());
        Ok(())
    }

    /// Set the draft color from a palette name such as `"orange"`
    pub fn update_color(&mut self, choice: &str) -> Result<(), SessionError> {
        if !self.draft.is_drafting() {
            return Err(self.reject(Operation::UpdateColor));
        }
        let color = choice.parse::<PinColor>()?;
        self.select_color(color)
    }

    /// Set the draft color from a palette entry
    pub fn select_color(&mut self, color: PinColor) -> Result<(), SessionError> {
        if !self.color_selection {
            return Err(SessionError::ColorSelectionDisabled);
        }
        let Some(draft) = self.draft.draft_mut() else {
            return Err(self.reject(Operation::UpdateColor));
        };
        draft.set_color(color);
        tracing::debug!("Draft color set to {}", color);
        Ok(())
    }

    /// Turn the open draft into a pin at the end of the collection
    pub fn commit(&mut self) -> Result<PinId, SessionError> {
        let Some(draft) = self.draft.take() else {
            return Err(self.reject(Operation::Commit));
        };
        let pin = draft.into_pin();
        let id = pin.id();
        tracing::info!(
            "Committed {} at {} ({}, {} chars)",
            id,
            pin.coordinate(),
            pin.color(),
            pin.comment().chars().count()
        );
        self.pins.push(pin);
        Ok(id)
    }

    /// Discard the open draft without touching the collection
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        match self.draft.take() {
            Some(draft) => {
                tracing::debug!("Draft at {} discarded", draft.coordinate());
                Ok(())
            }
            None => Err(self.reject(Operation::Cancel)),
        }
    }
}

impl Default for PinSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KOBE: Coordinate = Coordinate::new(34.7361, 135.3419);

    fn session() -> PinSession {
        PinSession::new(SessionOptions::default())
    }

    #[test]
    fn press_in_add_mode_opens_draft_with_defaults() {
        let mut s = session();
        assert_eq!(s.press(KOBE), PressOutcome::DraftOpened);

        let draft = s.draft().unwrap();
        assert_eq!(draft.coordinate(), KOBE);
        assert_eq!(draft.comment(), "");
        assert_eq!(draft.color(), PinColor::Red);
        assert_eq!(s.phase(), Phase::Drafting);
    }

    #[test]
    fn press_in_view_mode_is_inert() {
        let mut s = session();
        s.toggle_mode();
        assert_eq!(s.press(KOBE), PressOutcome::Ignored);
        assert!(!s.is_drafting());
        assert!(s.pins().is_empty());
        assert_eq!(
            s.begin_draft(KOBE),
            Err(SessionError::InvalidTransition {
                operation: Operation::BeginDraft,
                phase: Phase::Viewing,
            })
        );
    }

    #[test]
    fn second_press_keeps_the_first_draft() {
        let mut s = session();
        s.press(KOBE);
        s.update_comment("first").unwrap();

        assert_eq!(
            s.press(Coordinate::new(0.0, 0.0)),
            PressOutcome::DraftAlreadyOpen
        );
        let draft = s.draft().unwrap();
        assert_eq!(draft.coordinate(), KOBE);
        assert_eq!(draft.comment(), "first");
    }

    #[test]
    fn commit_uses_last_values_set() {
        let mut s = session();
        s.press(KOBE);
        s.update_color("blue").unwrap();
        s.update_comment("one").unwrap();
        s.update_color("green").unwrap();
        s.update_comment("two").unwrap();
        s.update_color("orange").unwrap();

        let id = s.commit().unwrap();
        let pin = s.pins().get(id).unwrap();
        assert_eq!(pin.comment(), "two");
        assert_eq!(pin.color(), PinColor::Orange);
        assert_eq!(pin.coordinate(), KOBE);
        assert!(!s.is_drafting());
    }

    #[test]
    fn empty_comment_commits() {
        let mut s = session();
        s.press(KOBE);
        let id = s.commit().unwrap();
        assert_eq!(s.pins().get(id).unwrap().comment(), "");
    }

    #[test]
    fn invalid_color_leaves_draft_untouched() {
        let mut s = session();
        s.press(KOBE);
        s.update_color("purple").unwrap();

        let err = s.update_color("magenta").unwrap_err();
        assert!(matches!(err, SessionError::InvalidColorChoice(_)));
        assert_eq!(s.draft().unwrap().color(), PinColor::Purple);
    }

    #[test]
    fn cancel_leaves_collection_unchanged() {
        let mut s = session();
        s.press(KOBE);
        s.commit().unwrap();
        let before = s.pins().clone();

        s.press(Coordinate::new(1.0, 1.0));
        s.update_comment("never mind").unwrap();
        s.update_color("green").unwrap();
        s.cancel().unwrap();

        assert_eq!(s.pins(), &before);
        assert!(!s.is_drafting());
    }

    #[test]
    fn cancel_after_commit_is_invalid() {
        let mut s = session();
        s.press(KOBE);
        s.commit().unwrap();
        assert_eq!(
            s.cancel(),
            Err(SessionError::InvalidTransition {
                operation: Operation::Cancel,
                phase: Phase::Idle,
            })
        );
        assert_eq!(s.pins().len(), 1);
    }

    #[test]
    fn edits_without_draft_are_rejected() {
        let mut s = session();
        assert!(matches!(
            s.update_comment("x"),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            s.update_color("red"),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            s.commit(),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(s.pins().is_empty());
    }

    #[test]
    fn rapid_commits_get_distinct_ids() {
        let mut s = session();
        s.press(KOBE);
        let a = s.commit().unwrap();
        s.press(Coordinate::new(34.7362, 135.3420));
        let b = s.commit().unwrap();

        assert_ne!(a, b);
        assert_eq!(s.pins().len(), 2);
    }

    #[test]
    fn single_color_variant_rejects_color_changes() {
        let mut s = PinSession::new(SessionOptions {
            color_selection: false,
            ..SessionOptions::default()
        });
        s.press(KOBE);
        assert_eq!(
            s.update_color("blue"),
            Err(SessionError::ColorSelectionDisabled)
        );
        let id = s.commit().unwrap();
        assert_eq!(s.pins().get(id).unwrap().color(), PinColor::Red);
    }

    #[test]
    fn draft_after_commit_starts_from_defaults() {
        let mut s = session();
        s.press(KOBE);
        s.update_comment("x").unwrap();
        s.update_color("purple").unwrap();
        s.commit().unwrap();

        assert_eq!(s.press(KOBE), PressOutcome::DraftOpened);
        let draft = s.draft().unwrap();
        assert_eq!(draft.comment(), "");
        assert_eq!(draft.color(), PinColor::Red);
    }

    #[test]
    fn select_color_without_draft_is_invalid() {
        let mut s = session();
        assert_eq!(
            s.select_color(PinColor::Blue),
            Err(SessionError::InvalidTransition {
                operation: Operation::UpdateColor,
                phase: Phase::Idle,
            })
        );
    }

    #[test]
    fn select_color_checks_variant_before_draft() {
        let mut s = PinSession::new(SessionOptions {
            color_selection: false,
            ..SessionOptions::default()
        });
        assert_eq!(
            s.select_color(PinColor::Blue),
            Err(SessionError::ColorSelectionDisabled)
        );

        s.press(KOBE);
        assert_eq!(
            s.select_color(PinColor::Green),
            Err(SessionError::ColorSelectionDisabled)
        );
        assert_eq!(s.draft().unwrap().color(), PinColor::Red);
    }

    #[test]
    fn toggling_mode_keeps_open_draft() {
        let mut s = session();
        s.press(KOBE);
        assert_eq!(s.toggle_mode(), Mode::View);
        assert!(s.is_drafting());
        assert!(s.commit().is_ok());
    }
}
