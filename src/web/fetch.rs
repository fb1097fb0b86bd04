use crate::config::PlayerConfig;
use crate::error::{PlayerError, Result};
use crate::playlist::Playlist;
use dioxus::logger::tracing::debug;
use gloo_net::http::Request;

/// GET `url` and return its body. Non-2xx statuses are errors.
pub async fn fetch_text(url: &str) -> Result<String> {
    let fetch_error = |err: gloo_net::Error| PlayerError::Fetch {
        url: url.to_string(),
        reason: err.to_string(),
    };

    let response = Request::get(url).send().await.map_err(fetch_error)?;
    PlayerError::check_status(url, response.status())?;
    let body = response.text().await.map_err(fetch_error)?;
    debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}

pub async fn fetch_playlist(url: &str) -> Result<Playlist> {
    let body = fetch_text(url).await?;
    Ok(Playlist::parse(&body))
}

pub async fn fetch_config(url: &str) -> Result<PlayerConfig> {
    let body = fetch_text(url).await?;
    PlayerConfig::from_json(&body)
}
