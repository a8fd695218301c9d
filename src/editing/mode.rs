// Copyright 2025 the Pinmap Authors
// SPDX-License-Identifier: Apache-2.0

//! Add/view mode gating map presses.

/// What a press on the map means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Presses open a draft pin
    #[default]
    Add,
    /// Presses are inert; pins can only be reviewed and removed
    View,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Add => Mode::View,
            Mode::View => Mode::Add,
        }
    }

    /// Label for the mode toggle button
    pub fn label(self) -> &'static str {
        match self {
            Mode::Add => "📍 Add pins",
            Mode::View => "👁 View pins",
        }
    }
}

/// Two-state flip-flop owned by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn current(&self) -> Mode {
        self.mode
    }

    /// Flip the mode and return the new value
    pub fn toggle(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Whether a map press in `mode` may open a draft
    pub fn should_handle_press(mode: Mode) -> bool {
        mode == Mode::Add
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_add_mode() {
        assert_eq!(ModeController::default().current(), Mode::Add);
    }

    #[test]
    fn toggle_twice_is_identity() {
        for start in [Mode::Add, Mode::View] {
            let mut controller = ModeController::new(start);
            assert_eq!(controller.toggle(), start.toggled());
            assert_eq!(controller.toggle(), start);
        }
    }

    #[test]
    fn only_add_mode_handles_presses() {
        assert!(ModeController::should_handle_press(Mode::Add));
        assert!(!ModeController::should_handle_press(Mode::View));
    }
}
