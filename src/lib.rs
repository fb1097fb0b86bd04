//! RustyDeck - playlist player core
//!
//! Platform-agnostic pieces of a browser audio playlist player:
//! - Playlist parsing (one URL per line)
//! - Playback state with mutually exclusive repeat/random modes
//! - Track navigation (wrap-around, non-repeating random, transition guard)
//! - Control-surface rules (play/pause label, track number, media events)
//! - Download naming
//! - Keyboard mapping, focus-origin tracking and button feedback
//! - Slot plans for delayed steps and the keyboard action queue
//! - Config with defaults
//!
//! The media engine sits behind [`MediaElement`]. The `web` module (wasm only)
//! implements it for `HtmlAudioElement` and adds fetch and DOM helpers.
//!
//! # Example
//!
//! ```rust
//! use rustydeck::{Navigator, Playlist};
//!
//! let navigator = Navigator::new(Playlist::parse("a.mp3\nb.mp3\n"));
//! assert_eq!(navigator.next_index(), Some(1));
//! assert_eq!(navigator.prev_index(), Some(1));
//! ```

pub mod config;
pub mod download;
mod error;
pub mod input;
pub mod media;
pub mod navigator;
pub mod playback;
pub mod playlist;
pub mod surface;
pub mod timeline;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{PlayerConfig, Timing};
pub use download::{download_filename, DownloadRequest};
pub use error::{PlayerError, Result};
pub use input::{FeedbackBoard, FocusTracker, KeyAction, KeyBindings};
pub use media::MediaElement;
pub use navigator::{Direction, Navigator, Transition, Trigger};
pub use playback::{ModeChange, PlayMode, PlaybackState};
pub use playlist::Playlist;
pub use surface::{ControlId, PlayLabel, TrackNumberStyle};
pub use timeline::{KeyQueue, Slot, SlotOp, SlotPlan, TaskSlot};
