//! Playback state: current index, play mode and the transition guard.

/// Repeat and random are mutually exclusive, so they share one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    #[default]
    Sequential,
    /// Loop the current track natively.
    Repeat,
    /// Pick the next track at random, avoiding an immediate repeat.
    Random,
}

/// Outcome of a mode toggle, so the UI can update both toggle buttons and the
/// media element's loop flag in one go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub previous: PlayMode,
    pub current: PlayMode,
}

impl ModeChange {
    pub fn random_activated(&self) -> bool {
        self.current == PlayMode::Random && self.previous != PlayMode::Random
    }

    pub fn looping(&self) -> bool {
        self.current == PlayMode::Repeat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    current_index: usize,
    mode: PlayMode,
    transitioning: bool,
}

impl PlaybackState {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn is_repeat(&self) -> bool {
        self.mode == PlayMode::Repeat
    }

    pub fn is_random(&self) -> bool {
        self.mode == PlayMode::Random
    }

    /// True while an automatic track change is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub(crate) fn begin_transition(&mut self) {
        self.transitioning = true;
    }

    pub(crate) fn end_transition(&mut self) {
        self.transitioning = false;
    }

    /// Flip repeat; turning it on clears random.
    pub fn toggle_repeat(&mut self) -> ModeChange {
        self.switch_mode(PlayMode::Repeat)
    }

    /// Flip random; turning it on clears repeat.
    pub fn toggle_random(&mut self) -> ModeChange {
        self.switch_mode(PlayMode::Random)
    }

    fn switch_mode(&mut self, target: PlayMode) -> ModeChange {
        let previous = self.mode;
        self.mode = if previous == target {
            PlayMode::Sequential
        } else {
            target
        };
        ModeChange {
            previous,
            current: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_track_with_no_mode() {
        let state = PlaybackState::default();
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_repeat());
        assert!(!state.is_random());
        assert!(!state.is_transitioning());
    }

    #[test]
    fn repeat_toggles_on_and_off() {
        let mut state = PlaybackState::default();
        let change = state.toggle_repeat();
        assert!(state.is_repeat());
        assert!(change.looping());

        let change = state.toggle_repeat();
        assert!(!state.is_repeat());
        assert!(!change.looping());
        assert_eq!(change.previous, PlayMode::Repeat);
    }

    #[test]
    fn random_while_repeat_clears_repeat() {
        let mut state = PlaybackState::default();
        state.toggle_repeat();

        let change = state.toggle_random();
        assert!(!state.is_repeat());
        assert!(state.is_random());
        assert!(change.random_activated());
        assert!(!change.looping());
    }

    #[test]
    fn repeat_while_random_clears_random() {
        let mut state = PlaybackState::default();
        state.toggle_random();

        let change = state.toggle_repeat();
        assert!(state.is_repeat());
        assert!(!state.is_random());
        assert_eq!(change.previous, PlayMode::Random);
    }

    #[test]
    fn turning_random_off_is_not_an_activation() {
        let mut state = PlaybackState::default();
        state.toggle_random();
        let change = state.toggle_random();
        assert!(!change.random_activated());
        assert_eq!(state.mode(), PlayMode::Sequential);
    }

    #[test]
    fn transition_guard() {
        let mut state = PlaybackState::default();
        state.begin_transition();
        assert!(state.is_transitioning());
        state.end_transition();
        assert!(!state.is_transitioning());
    }
}
