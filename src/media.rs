//! Seam between the player core and the browser's media engine.

/// The subset of an `<audio>` element the player drives.
///
/// Implemented for `web_sys::HtmlAudioElement` in the `web` module. Methods take
/// `&self` because DOM handles are shared references into the page.
pub trait MediaElement {
    /// Point the element at a new source URL.
    fn set_source(&self, url: &str);

    /// Run the element's load algorithm for the current source.
    fn load(&self);

    /// Request playback. Rejections (autoplay policy, bad source) are swallowed.
    fn play(&self);

    fn pause(&self);

    /// Native looping, used for repeat mode.
    fn set_looping(&self, looping: bool);

    fn is_paused(&self) -> bool;

    /// Whether playback stopped because the track reached its end.
    fn has_ended(&self) -> bool;

    /// Seek back to the start.
    fn rewind(&self);
}
