use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::{Track, TrackTableRow};

/// Keyword used when a derived keyword is empty or sanitizes down to nothing.
pub const POPULAR_KEYWORD: &str = "popular songs";

/// Stylistic words the search works better without.
pub const STYLISTIC_WORDS: [&str; 5] = ["vibes", "ballad", "ambient", "melancholic", "mellow"];

/// Normalizes a derived keyword before it is sent to the Spotify search.
///
/// The keyword is lowercased and every occurrence of a [`STYLISTIC_WORDS`] entry is
/// removed, wherever it appears (also inside longer words). Removal is a single
/// left-to-right pass, so text that only forms a stylistic word after another one
/// was cut out is kept. The result is trimmed and replaced by [`POPULAR_KEYWORD`]
/// when it is shorter than two characters. Length counts Unicode scalar values, so a
/// lone emoji is one character and also falls back.
///
/// # Example
///
/// ```
/// assert_eq!(sanitize_keyword(Some("Sad Hindi Vibes")), "sad hindi");
/// assert_eq!(sanitize_keyword(None), "popular songs");
/// ```
pub fn sanitize_keyword(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return POPULAR_KEYWORD.to_string();
    };

    let lowered = raw.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    let mut rest = lowered.as_str();

    while let Some(c) = rest.chars().next() {
        match STYLISTIC_WORDS.iter().find(|w| rest.starts_with(**w)) {
            Some(word) => rest = &rest[word.len()..],
            None => {
                cleaned.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    let cleaned = cleaned.trim();
    if cleaned.chars().count() < 2 {
        return POPULAR_KEYWORD.to_string();
    }
    cleaned.to_string()
}

/// Builds the value of an HTTP Basic `Authorization` header.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            title: t.title.clone(),
            artist: t.artist.clone(),
            album: t.album.clone(),
            popularity: t.popularity,
        })
        .collect()
}
