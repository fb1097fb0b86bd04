use crate::components::{use_document_input, use_player_controller, Player};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use rustydeck::config::CONFIG_URL;
use rustydeck::web::{fetch_config, fetch_playlist, ControlRefs};
use rustydeck::PlayerConfig;

async fn load_config() -> PlayerConfig {
    match fetch_config(CONFIG_URL).await {
        Ok(config) => config,
        Err(err) if err.is_not_found() => {
            debug!("no {CONFIG_URL}, using defaults");
            PlayerConfig::default()
        }
        Err(err) => {
            warn!(%err, "ignoring player config");
            PlayerConfig::default()
        }
    }
}

#[component]
pub fn PlayerShell() -> Element {
    let controller = use_player_controller();
    use_context_provider(|| controller);
    use_document_input(controller);

    // Bind the rendered elements once, then load config and playlist.
    use_effect(move || {
        match ControlRefs::resolve() {
            Ok(refs) => controller.attach(refs),
            Err(err) => {
                warn!(%err, "player controls unavailable");
                return;
            }
        }

        spawn(async move {
            let config = load_config().await;
            let playlist_url = config.playlist_url.clone();
            controller.configure(config);

            match fetch_playlist(&playlist_url).await {
                Ok(playlist) => controller.install_playlist(playlist),
                // The player stays idle; nothing is shown to the listener.
                Err(err) => warn!(%err, "playlist unavailable"),
            }
        });
    });

    rsx! {
        Player {}
    }
}
