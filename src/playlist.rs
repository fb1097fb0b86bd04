//! Playlist parsing.
//!
//! A playlist file is plain text with one track URL per line. Once parsed the
//! list never changes; a new load replaces it wholesale.

use std::sync::Arc;

/// Ordered, immutable list of track URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    tracks: Arc<[String]>,
}

impl Playlist {
    /// Split a newline-delimited body into track URLs.
    ///
    /// Each line is trimmed (which also drops the `\r` of CRLF files) and blank
    /// lines are skipped, so an empty or whitespace-only body yields an empty
    /// playlist.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tracks.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Playlist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_url_per_line() {
        let playlist = Playlist::parse("a.mp3\nb.mp3\nmusic/c.ogg\n");
        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.get(0), Some("a.mp3"));
        assert_eq!(playlist.get(2), Some("music/c.ogg"));
        assert_eq!(playlist.get(3), None);
    }

    #[test]
    fn trims_whitespace_and_carriage_returns() {
        let playlist = Playlist::parse("  a.mp3  \r\nb.mp3\t\r\n");
        let tracks: Vec<&str> = playlist.iter().collect();
        assert_eq!(tracks, vec!["a.mp3", "b.mp3"]);
    }

    #[test]
    fn skips_blank_lines() {
        let playlist = Playlist::parse("\n\na.mp3\n   \nb.mp3\n\n");
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn empty_body_gives_empty_playlist() {
        assert!(Playlist::parse("").is_empty());
        assert!(Playlist::parse("  \n \r\n").is_empty());
        assert_eq!(Playlist::default(), Playlist::parse(""));
    }
}
