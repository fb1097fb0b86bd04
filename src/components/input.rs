//! Document-level keyboard and pointer listeners.
//!
//! These fire outside any component scope, so they enter the Dioxus runtime
//! with a guard and hand key actions to a coroutine, which runs them where
//! tasks can be spawned.

use crate::components::PlayerController;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use futures_util::StreamExt;
use rustydeck::input::is_activatable_tag;
use rustydeck::web::focused_element;
use rustydeck::KeyAction;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Event, KeyboardEvent};

pub fn use_document_input(controller: PlayerController) {
    let keys = use_coroutine(move |mut rx: UnboundedReceiver<KeyAction>| async move {
        while let Some(action) = rx.next().await {
            controller.handle_key(action);
        }
    });

    use_effect(move || {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };
        let runtime = Runtime::current();

        let key_runtime = runtime.clone();
        let keys = keys.clone();
        let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let _guard = RuntimeGuard::new(key_runtime.clone());
            if event.default_prevented() || event.is_composing() {
                return;
            }
            let focus_activatable = focused_element()
                .map(|element| is_activatable_tag(&element.tag_name()))
                .unwrap_or(false);
            if let Some(action) = controller.resolve_key(&event.code(), focus_activatable) {
                // Space would scroll, arrows would scroll, Enter would click natively.
                event.prevent_default();
                keys.send(action);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let pointer_runtime = runtime.clone();
        let pointer_cb = Closure::wrap(Box::new(move |_event: Event| {
            let _guard = RuntimeGuard::new(pointer_runtime.clone());
            controller.pointer_down();
        }) as Box<dyn FnMut(Event)>);

        let _ = doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
        let _ =
            doc.add_event_listener_with_callback("mousedown", pointer_cb.as_ref().unchecked_ref());
        let _ =
            doc.add_event_listener_with_callback("touchstart", pointer_cb.as_ref().unchecked_ref());
        key_cb.forget();
        pointer_cb.forget();
    });
}
