#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
use components::PlayerShell;

#[cfg(target_arch = "wasm32")]
const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("rustydeck drives a browser <audio> element; run it with `dx serve --platform web`");
}

#[cfg(target_arch = "wasm32")]
#[component]
fn App() -> Element {
    rsx! {
        document::Title { "RustyDeck" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Stylesheet { href: PLAYER_CSS }

        PlayerShell {}
    }
}
