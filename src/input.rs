//! Keyboard mapping, focus-origin tracking and transient control feedback.

use crate::playback::PlaybackState;
use crate::surface::ControlId;

/// What a recognised key press should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlay,
    Next,
    Previous,
    /// Click whatever control currently has focus.
    ActivateFocused,
}

impl KeyAction {
    /// The control that flashes for this key, when it is fixed.
    pub fn control(self) -> Option<ControlId> {
        match self {
            KeyAction::TogglePlay => Some(ControlId::PlayPause),
            KeyAction::Next => Some(ControlId::Next),
            KeyAction::Previous => Some(ControlId::Previous),
            KeyAction::ActivateFocused => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Keep ArrowLeft/ArrowRight live while repeat mode is on.
    pub arrows_in_repeat: bool,
}

impl KeyBindings {
    /// Map a `KeyboardEvent.code` to an action.
    ///
    /// `focus_activatable` says whether the focused element is a button or link;
    /// Enter does nothing otherwise.
    pub fn resolve(
        &self,
        code: &str,
        state: &PlaybackState,
        focus_activatable: bool,
    ) -> Option<KeyAction> {
        let arrows_live = self.arrows_in_repeat || !state.is_repeat();
        match code {
            "Space" => Some(KeyAction::TogglePlay),
            "ArrowRight" if arrows_live => Some(KeyAction::Next),
            "ArrowLeft" if arrows_live => Some(KeyAction::Previous),
            "Enter" | "NumpadEnter" if focus_activatable => Some(KeyAction::ActivateFocused),
            _ => None,
        }
    }
}

/// Enter only activates buttons and links.
pub fn is_activatable_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("button") || tag_name.eq_ignore_ascii_case("a")
}

/// Tracks whether focus is being driven from the keyboard, so focus rings only
/// show for keyboard users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusTracker {
    keyboard: bool,
}

impl FocusTracker {
    pub fn is_keyboard(&self) -> bool {
        self.keyboard
    }

    /// A control gained focus. Focus without the pointer over it came from Tab.
    pub fn on_focus(&mut self, hovered: bool) {
        if !self.keyboard && !hovered {
            self.keyboard = true;
        }
    }

    /// Mouse press or touch: back to pointer mode.
    pub fn on_pointer_down(&mut self) {
        self.keyboard = false;
    }
}

/// Transient visual state of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlFeedback {
    pub flashing: bool,
    pub pressed: bool,
}

impl ControlFeedback {
    pub fn is_idle(&self) -> bool {
        !self.flashing && !self.pressed
    }
}

/// Feedback state for every control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedbackBoard {
    controls: [ControlFeedback; ControlId::ALL.len()],
}

impl FeedbackBoard {
    pub fn get(&self, control: ControlId) -> ControlFeedback {
        self.controls[control.index()]
    }

    /// Click feedback.
    pub fn flash(&mut self, control: ControlId) {
        self.controls[control.index()].flashing = true;
    }

    /// Keyboard feedback: flash plus a press-down offset.
    pub fn press(&mut self, control: ControlId) {
        let feedback = &mut self.controls[control.index()];
        feedback.flashing = true;
        feedback.pressed = true;
    }

    pub fn clear(&mut self, control: ControlId) {
        self.controls[control.index()] = ControlFeedback::default();
    }

    /// CSS classes for `control`'s current feedback.
    pub fn classes(&self, control: ControlId) -> &'static str {
        let feedback = self.get(control);
        match (feedback.flashing, feedback.pressed) {
            (true, true) => "flash pressed",
            (true, false) => "flash",
            (false, true) => "pressed",
            (false, false) => "",
        }
    }
}

/// Touch release strips lingering state from everything but the mode toggles.
pub fn clears_on_touch_end(control: ControlId) -> bool {
    !control.is_mode_toggle()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRICT: KeyBindings = KeyBindings {
        arrows_in_repeat: false,
    };
    const LOOSE: KeyBindings = KeyBindings {
        arrows_in_repeat: true,
    };

    #[test]
    fn space_and_arrows() {
        let state = PlaybackState::default();
        assert_eq!(STRICT.resolve("Space", &state, false), Some(KeyAction::TogglePlay));
        assert_eq!(STRICT.resolve("ArrowRight", &state, false), Some(KeyAction::Next));
        assert_eq!(STRICT.resolve("ArrowLeft", &state, false), Some(KeyAction::Previous));
        assert_eq!(STRICT.resolve("KeyA", &state, true), None);
    }

    #[test]
    fn arrows_follow_repeat_policy() {
        let mut state = PlaybackState::default();
        state.toggle_repeat();

        assert_eq!(STRICT.resolve("ArrowRight", &state, false), None);
        assert_eq!(STRICT.resolve("ArrowLeft", &state, false), None);
        assert_eq!(STRICT.resolve("Space", &state, false), Some(KeyAction::TogglePlay));

        assert_eq!(LOOSE.resolve("ArrowRight", &state, false), Some(KeyAction::Next));
    }

    #[test]
    fn enter_needs_an_activatable_focus() {
        let state = PlaybackState::default();
        assert_eq!(STRICT.resolve("Enter", &state, false), None);
        assert_eq!(
            STRICT.resolve("Enter", &state, true),
            Some(KeyAction::ActivateFocused)
        );
        assert!(is_activatable_tag("BUTTON"));
        assert!(is_activatable_tag("a"));
        assert!(!is_activatable_tag("DIV"));
    }

    #[test]
    fn key_actions_name_their_control() {
        assert_eq!(KeyAction::TogglePlay.control(), Some(ControlId::PlayPause));
        assert_eq!(KeyAction::ActivateFocused.control(), None);
    }

    #[test]
    fn focus_tracker_only_flags_unhovered_focus() {
        let mut focus = FocusTracker::default();
        focus.on_focus(true);
        assert!(!focus.is_keyboard());

        focus.on_focus(false);
        assert!(focus.is_keyboard());

        focus.on_focus(true);
        assert!(focus.is_keyboard());

        focus.on_pointer_down();
        assert!(!focus.is_keyboard());
    }

    #[test]
    fn feedback_board_tracks_each_control() {
        let mut board = FeedbackBoard::default();
        board.flash(ControlId::Next);
        board.press(ControlId::PlayPause);

        assert_eq!(board.classes(ControlId::Next), "flash");
        assert_eq!(board.classes(ControlId::PlayPause), "flash pressed");
        assert!(board.get(ControlId::Previous).is_idle());

        board.clear(ControlId::PlayPause);
        assert!(board.get(ControlId::PlayPause).is_idle());
        assert!(!board.get(ControlId::Next).is_idle());
    }

    #[test]
    fn touch_end_spares_mode_toggles() {
        assert!(clears_on_touch_end(ControlId::Next));
        assert!(clears_on_touch_end(ControlId::Download));
        assert!(!clears_on_touch_end(ControlId::Repeat));
        assert!(!clears_on_touch_end(ControlId::Random));
    }
}
