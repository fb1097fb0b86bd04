//! Track navigation: index arithmetic, random selection and mode toggles.
//!
//! The navigator owns the playlist and the playback state and is the only
//! thing allowed to change either. It drives a [`MediaElement`] synchronously
//! and hands timed follow-ups (start playback, release the guard) back to the
//! caller as a [`Transition`].

use crate::media::MediaElement;
use crate::playback::{ModeChange, PlaybackState};
use crate::playlist::Playlist;
use dioxus::logger::tracing::debug;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// What caused a track change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Button, key or mode toggle.
    Manual,
    /// The previous track ended.
    Automatic,
}

/// A track change that has been loaded but not yet started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub index: usize,
    pub trigger: Trigger,
}

impl Transition {
    /// Automatic changes hold the transition guard until the caller releases it.
    pub fn holds_guard(&self) -> bool {
        self.trigger == Trigger::Automatic
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigator {
    playlist: Playlist,
    state: PlaybackState,
}

impl Navigator {
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            state: PlaybackState::default(),
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// URL at the current index, if the playlist has loaded.
    pub fn current_track(&self) -> Option<&str> {
        self.playlist.get(self.state.current_index())
    }

    /// Replace the playlist and cue its first track.
    ///
    /// Mode flags survive; the index resets to 0. Returns whether a track was
    /// loaded.
    pub fn install<M: MediaElement>(&mut self, media: &M, playlist: Playlist) -> bool {
        self.playlist = playlist;
        self.state.set_current_index(0);
        if self.playlist.is_empty() {
            debug!("playlist is empty, nothing to cue");
            return false;
        }
        self.load_track(media, 0)
    }

    /// Point the media element at `playlist[index]`. Out of range is a no-op.
    pub fn load_track<M: MediaElement>(&self, media: &M, index: usize) -> bool {
        let Some(url) = self.playlist.get(index) else {
            return false;
        };
        debug!(index, url, "loading track");
        media.set_source(url);
        media.load();
        true
    }

    pub fn next_index(&self) -> Option<usize> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }
        Some((self.state.current_index() + 1) % len)
    }

    pub fn prev_index(&self) -> Option<usize> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }
        Some((self.state.current_index() + len - 1) % len)
    }

    /// Uniform pick that never repeats the current index when there is a choice.
    ///
    /// Draws from the `len - 1` other slots and shifts past the current one,
    /// which gives the same distribution as resampling without the loop.
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let len = self.playlist.len();
        match len {
            0 => None,
            1 => Some(0),
            _ => {
                let current = self.state.current_index();
                let pick = rng.gen_range(0..len - 1);
                Some(if pick >= current { pick + 1 } else { pick })
            }
        }
    }

    /// Move to another track and load it.
    ///
    /// Random mode ignores `direction`. An automatic advance raises the
    /// transition guard before anything changes; the caller must call
    /// [`Navigator::finish_transition`] once the media element has settled.
    pub fn advance<M, R>(
        &mut self,
        media: &M,
        rng: &mut R,
        direction: Direction,
        trigger: Trigger,
    ) -> Option<Transition>
    where
        M: MediaElement,
        R: Rng + ?Sized,
    {
        if self.playlist.is_empty() {
            return None;
        }
        if trigger == Trigger::Automatic {
            self.state.begin_transition();
        }

        let picked = if self.state.is_random() {
            self.random_index(rng)
        } else {
            match direction {
                Direction::Forward => self.next_index(),
                Direction::Backward => self.prev_index(),
            }
        };
        let index = picked?;

        self.state.set_current_index(index);
        self.load_track(media, index);
        Some(Transition { index, trigger })
    }

    pub fn finish_transition(&mut self) {
        self.state.end_transition();
    }

    pub fn toggle_repeat<M: MediaElement>(&mut self, media: &M) -> ModeChange {
        let change = self.state.toggle_repeat();
        media.set_looping(change.looping());
        change
    }

    /// Toggle random mode; switching it on jumps straight to a random track.
    pub fn toggle_random<M, R>(&mut self, media: &M, rng: &mut R) -> (ModeChange, Option<Transition>)
    where
        M: MediaElement,
        R: Rng + ?Sized,
    {
        let change = self.state.toggle_random();
        media.set_looping(change.looping());
        let transition = if change.random_activated() {
            self.advance(media, rng, Direction::Forward, Trigger::Manual)
        } else {
            None
        };
        (change, transition)
    }
}
