//! Error types for the player core and its browser glue

use thiserror::Error;

/// Player errors
///
/// None of these reach the listener; callers log them and leave the player inert.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Nothing is loaded at the current index
    #[error("No current track")]
    NoCurrentTrack,

    /// The request never produced a response
    #[error("Fetching {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    /// The server answered with a non-success status
    #[error("Fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Config file could not be parsed
    #[error("Invalid player config: {0}")]
    Config(#[from] serde_json::Error),

    /// A control the page needs was not rendered
    #[error("Required element #{0} is missing from the page")]
    MissingElement(&'static str),

    /// A DOM call was rejected by the browser
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl PlayerError {
    /// Accept only 2xx responses; an error page body is never content.
    pub fn check_status(url: &str, status: u16) -> Result<()> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(PlayerError::HttpStatus {
                url: url.to_string(),
                status,
            })
        }
    }

    /// The server said the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PlayerError::HttpStatus { status: 404, .. })
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_pass() {
        for status in [200, 204, 299] {
            assert!(PlayerError::check_status("playlist.txt", status).is_ok());
        }
    }

    #[test]
    fn non_success_statuses_are_fetch_failures() {
        for status in [199, 301, 404, 500] {
            let err = PlayerError::check_status("playlist.txt", status).unwrap_err();
            assert!(
                matches!(err, PlayerError::HttpStatus { status: s, .. } if s == status),
                "status {status} accepted"
            );
        }
    }

    #[test]
    fn only_404_counts_as_missing() {
        let missing = PlayerError::check_status("player.json", 404).unwrap_err();
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "Fetching player.json returned HTTP 404");

        let broken = PlayerError::check_status("player.json", 500).unwrap_err();
        assert!(!broken.is_not_found());
    }
}
