use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::Error;

/// Seconds before the real expiry at which a cached token is considered stale.
pub const TOKEN_EXPIRY_MARGIN_SECS: u64 = 240;

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn new(access_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        let expires_at = self.obtained_at.saturating_add(self.expires_in);
        now.saturating_add(TOKEN_EXPIRY_MARGIN_SECS) >= expires_at
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Simplified track returned to the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub album: String,
    pub popularity: u32,
    pub spotify_url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl TryFrom<SpotifyTrack> for Track {
    type Error = Error;

    fn try_from(track: SpotifyTrack) -> Result<Self, Self::Error> {
        let id = track
            .id
            .ok_or_else(|| Error::SpotifyApi(format!("track '{}' has no id", track.name)))?;

        Ok(Track {
            id,
            title: track.name,
            artist: track
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            image: track.album.images.into_iter().next().map(|i| i.url),
            album: track.album.name,
            popularity: track.popularity,
            spotify_url: track.external_urls.spotify.unwrap_or_default(),
            preview_url: track.preview_url,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub keyword: String,
    pub songs: Vec<Track>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracksPage {
    pub items: Vec<SpotifyTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<SpotifyArtist>,
    pub album: SpotifyAlbum,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub popularity: u32,
}
