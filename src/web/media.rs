use crate::media::MediaElement;
use dioxus::logger::tracing::debug;
use web_sys::{HtmlAudioElement, HtmlMediaElement};

// Calls go through `HtmlMediaElement` explicitly; `self.play()` here would
// resolve back to the trait method.
impl MediaElement for HtmlAudioElement {
    fn set_source(&self, url: &str) {
        HtmlMediaElement::set_src(self, url);
    }

    fn load(&self) {
        HtmlMediaElement::load(self);
    }

    fn play(&self) {
        match HtmlMediaElement::play(self) {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        debug!(?err, "play() was rejected");
                    }
                });
            }
            Err(err) => debug!(?err, "play() threw"),
        }
    }

    fn pause(&self) {
        let _ = HtmlMediaElement::pause(self);
    }

    fn set_looping(&self, looping: bool) {
        HtmlMediaElement::set_loop(self, looping);
    }

    fn is_paused(&self) -> bool {
        HtmlMediaElement::paused(self)
    }

    fn has_ended(&self) -> bool {
        HtmlMediaElement::ended(self)
    }

    fn rewind(&self) {
        HtmlMediaElement::set_current_time(self, 0.0);
    }
}
