use crate::components::PlayerController;
use dioxus::prelude::*;
use rustydeck::ControlId;

/// One transport or mode button. Feedback classes and the active state are
/// derived from the controller on every render.
#[component]
pub(super) fn ControlButton(
    control: ControlId,
    text: String,
    #[props(default)] toggle: bool,
    #[props(default)] active: bool,
) -> Element {
    let controller = use_context::<PlayerController>();
    let feedback = (controller.feedback)().classes(control);
    let active_class = if active { "active" } else { "" };
    let pressed = toggle.then(|| active.to_string());
    let text_class = if control == ControlId::PlayPause {
        "play-text"
    } else {
        "control-text"
    };

    rsx! {
        button {
            id: control.dom_id(),
            r#type: "button",
            class: "control-btn {active_class} {feedback}",
            aria_pressed: pressed,
            onclick: move |_| controller.activate(control),
            onfocus: move |_| controller.control_focused(control),
            ontouchend: move |_| controller.touch_released(control),
            span { class: text_class, "{text}" }
        }
    }
}

/// Previous / play-pause / next, in that order.
#[component]
pub(super) fn Transport() -> Element {
    let controller = use_context::<PlayerController>();
    let label = (controller.label)();

    rsx! {
        div { class: "transport",
            ControlButton {
                control: ControlId::Previous,
                text: ControlId::Previous.label().to_string(),
            }
            ControlButton { control: ControlId::PlayPause, text: label.to_string() }
            ControlButton {
                control: ControlId::Next,
                text: ControlId::Next.label().to_string(),
            }
        }
    }
}

/// Repeat and random toggles plus download.
#[component]
pub(super) fn ModeControls() -> Element {
    let controller = use_context::<PlayerController>();
    let state = *controller.navigator.read().state();

    rsx! {
        div { class: "modes",
            ControlButton {
                control: ControlId::Repeat,
                text: ControlId::Repeat.label().to_string(),
                toggle: true,
                active: state.is_repeat(),
            }
            ControlButton {
                control: ControlId::Random,
                text: ControlId::Random.label().to_string(),
                toggle: true,
                active: state.is_random(),
            }
            ControlButton {
                control: ControlId::Download,
                text: ControlId::Download.label().to_string(),
            }
        }
    }
}

#[component]
pub(super) fn TrackNumber() -> Element {
    let controller = use_context::<PlayerController>();
    let style = controller.config.read().track_number_style;
    let index = controller.navigator.read().state().current_index();
    let number = style.format(index);

    rsx! {
        div { class: "track-info",
            span { class: "track-label", "track " }
            span { class: "track-number", "{number}" }
        }
    }
}
