//! Naming and describing a download of the current track.

use crate::error::{PlayerError, Result};

/// Filename used when the URL ends in `/`.
pub const DEFAULT_FILENAME: &str = "track.mp3";

/// Everything the browser needs to save a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub href: String,
    pub filename: String,
}

impl DownloadRequest {
    /// Build a request for `url`, or fail when there is no current track.
    pub fn for_track(url: Option<&str>, fallback: &str) -> Result<Self> {
        let href = url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(PlayerError::NoCurrentTrack)?;
        Ok(Self {
            href: href.to_string(),
            filename: download_filename(href, fallback),
        })
    }
}

/// Last path segment of `url`, percent-decoded.
///
/// Query and fragment are dropped first. An empty segment falls back to
/// `fallback`; bytes that do not decode to UTF-8 keep the raw segment.
pub fn download_filename(url: &str, fallback: &str) -> String {
    let path = url
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    let segment = if segment.is_empty() { fallback } else { segment };

    match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(
            download_filename("https://cdn.example.com/music/My%20Song.mp3", DEFAULT_FILENAME),
            "My Song.mp3"
        );
    }

    #[test]
    fn relative_urls_keep_their_name() {
        assert_eq!(download_filename("tracks/intro.ogg", DEFAULT_FILENAME), "intro.ogg");
        assert_eq!(download_filename("bare.flac", DEFAULT_FILENAME), "bare.flac");
    }

    #[test]
    fn trailing_slash_uses_fallback() {
        assert_eq!(download_filename("https://example.com/stream/", "track.mp3"), "track.mp3");
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            download_filename("https://example.com/a/B%26C.mp3?token=abc#t=10", DEFAULT_FILENAME),
            "B&C.mp3"
        );
    }

    #[test]
    fn invalid_utf8_keeps_raw_segment() {
        assert_eq!(download_filename("/x/bad%FF.mp3", DEFAULT_FILENAME), "bad%FF.mp3");
    }

    #[test]
    fn request_needs_a_track() {
        assert!(matches!(
            DownloadRequest::for_track(None, DEFAULT_FILENAME),
            Err(PlayerError::NoCurrentTrack)
        ));
        assert!(DownloadRequest::for_track(Some("  "), DEFAULT_FILENAME).is_err());

        let request = DownloadRequest::for_track(Some(" music/Song%201.mp3 "), DEFAULT_FILENAME)
            .expect("track present");
        assert_eq!(request.href, "music/Song%201.mp3");
        assert_eq!(request.filename, "Song 1.mp3");
    }
}
