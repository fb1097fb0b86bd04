//! Player configuration, read from an optional `player.json` next to the page.

use crate::download::DEFAULT_FILENAME;
use crate::error::Result;
use crate::input::KeyBindings;
use crate::surface::TrackNumberStyle;
use serde::Deserialize;

/// Where the page looks for its config.
pub const CONFIG_URL: &str = "player.json";

/// Delays, in milliseconds, used to sequence visual feedback and media settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Wait after a source change before calling `play()`.
    pub settle_ms: u32,
    /// How long the transition guard stays up after playback is requested.
    pub transition_guard_ms: u32,
    /// Wait after `ended` before auto-advancing.
    pub ended_delay_ms: u32,
    /// Flash/press duration, and the delay before a keyboard action runs.
    pub feedback_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_ms: 100,
            transition_guard_ms: 500,
            ended_delay_ms: 100,
            feedback_ms: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub playlist_url: String,
    /// Short UI click played on every manual action. `None` disables it.
    pub click_sound_url: Option<String>,
    pub fallback_filename: String,
    pub track_number_style: TrackNumberStyle,
    /// Let ArrowLeft/ArrowRight navigate while repeat mode is on.
    pub arrow_keys_in_repeat: bool,
    /// Move keyboard focus onto the control a shortcut key activates.
    pub focus_follows_keys: bool,
    pub timing: Timing,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playlist_url: "playlist.txt".to_string(),
            click_sound_url: Some("click.wav".to_string()),
            fallback_filename: DEFAULT_FILENAME.to_string(),
            track_number_style: TrackNumberStyle::default(),
            arrow_keys_in_repeat: false,
            focus_follows_keys: true,
            timing: Timing::default(),
        }
    }
}

impl PlayerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn key_bindings(&self) -> KeyBindings {
        KeyBindings {
            arrows_in_repeat: self.arrow_keys_in_repeat,
        }
    }
}
