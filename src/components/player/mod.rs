use crate::components::PlayerController;
use dioxus::prelude::*;
use rustydeck::web::{CLICK_ELEMENT_ID, MEDIA_ELEMENT_ID};

mod controls;

use controls::{ModeControls, TrackNumber, Transport};

/// The whole player surface: both audio elements and every control.
#[component]
pub fn Player() -> Element {
    let controller = use_context::<PlayerController>();
    let keyboard_nav = (controller.focus)().is_keyboard();
    let click_src = controller.config.read().click_sound_url.clone();

    rsx! {
        div { class: if keyboard_nav { "player keyboard-nav" } else { "player" },
            audio {
                id: MEDIA_ELEMENT_ID,
                preload: "metadata",
                onended: move |_| controller.media_ended(),
                onpause: move |_| controller.media_paused(),
                onplay: move |_| controller.media_played(),
            }
            audio { id: CLICK_ELEMENT_ID, preload: "auto", src: click_src }

            Transport {}
            TrackNumber {}
            ModeControls {}
        }
    }
}
