//! Control surface rules: what each control shows and how media events map
//! onto the play/pause label.

use crate::media::MediaElement;
use crate::playback::PlaybackState;
use serde::Deserialize;
use std::fmt;

/// Text on the play/pause control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayLabel {
    #[default]
    Play,
    Pause,
}

impl PlayLabel {
    pub fn text(self) -> &'static str {
        match self {
            PlayLabel::Play => "[play]",
            PlayLabel::Pause => "[pause]",
        }
    }
}

impl fmt::Display for PlayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// How the track number display renders the 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackNumberStyle {
    /// `3`
    #[default]
    Plain,
    /// `[3]`
    Bracketed,
}

impl TrackNumberStyle {
    pub fn format(self, index: usize) -> String {
        let number = index + 1;
        match self {
            TrackNumberStyle::Plain => number.to_string(),
            TrackNumberStyle::Bracketed => format!("[{number}]"),
        }
    }
}

/// Every interactive control the player renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Previous,
    PlayPause,
    Next,
    Repeat,
    Random,
    Download,
}

impl ControlId {
    pub const ALL: [ControlId; 6] = [
        ControlId::Previous,
        ControlId::PlayPause,
        ControlId::Next,
        ControlId::Repeat,
        ControlId::Random,
        ControlId::Download,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            ControlId::Previous => "prev-btn",
            ControlId::PlayPause => "play-btn",
            ControlId::Next => "next-btn",
            ControlId::Repeat => "repeat-btn",
            ControlId::Random => "random-btn",
            ControlId::Download => "download-btn",
        }
    }

    /// Which control, if any, carries the element id `id`.
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.dom_id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlId::Previous => "[prev]",
            ControlId::PlayPause => "[play]",
            ControlId::Next => "[next]",
            ControlId::Repeat => "[repeat]",
            ControlId::Random => "[random]",
            ControlId::Download => "[download]",
        }
    }

    /// Repeat and random keep their active look after a touch.
    pub fn is_mode_toggle(self) -> bool {
        matches!(self, ControlId::Repeat | ControlId::Random)
    }

    /// Position in [`ControlId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Flip the media element between playing and paused; returns the new label.
pub fn toggle_play_pause<M: MediaElement>(media: &M) -> PlayLabel {
    if media.is_paused() {
        media.play();
        PlayLabel::Pause
    } else {
        media.pause();
        PlayLabel::Play
    }
}

/// Restart the click-feedback sound from the top.
pub fn play_click<M: MediaElement>(click: &M) {
    click.rewind();
    click.play();
}

/// Label to show for a native `pause` event, if any.
///
/// Ignored while the guard is up and when the pause is the track running out.
pub fn label_on_pause(state: &PlaybackState, ended: bool) -> Option<PlayLabel> {
    (!ended && !state.is_transitioning()).then_some(PlayLabel::Play)
}

/// Label to show for a native `play` event, if any.
pub fn label_on_play(state: &PlaybackState) -> Option<PlayLabel> {
    (!state.is_transitioning()).then_some(PlayLabel::Pause)
}

/// Repeat mode loops natively; everything else moves on when a track ends.
pub fn advances_on_end(state: &PlaybackState) -> bool {
    !state.is_repeat()
}
