use reqwest::{Client, Response, StatusCode};

use crate::{
    config::Settings,
    error::{Error, Result},
    types::{SearchResponse, SpotifyTrack},
};

/// Market every search is pinned to.
pub const SEARCH_MARKET: &str = "IN";
/// Number of results requested from the search endpoint.
pub const SEARCH_LIMIT: u32 = 20;

/// Searches the Spotify catalogue for tracks matching `keyword`.
///
/// Issues `GET /search?q=<keyword>&type=track&market=IN&limit=20` and returns the
/// raw track items in the order Spotify ranked them. Items may carry a null id
/// (local files); filtering is left to the caller.
pub async fn search_tracks(
    http: &Client,
    settings: &Settings,
    token: &str,
    keyword: &str,
) -> Result<Vec<SpotifyTrack>> {
    let api_url = format!("{uri}/search", uri = settings.spotify_api_url);
    let limit = SEARCH_LIMIT.to_string();

    let response = http
        .get(&api_url)
        .bearer_auth(token)
        .query(&[
            ("q", keyword),
            ("type", "track"),
            ("market", SEARCH_MARKET),
            ("limit", limit.as_str()),
        ])
        .send()
        .await?;

    let json = checked(response, "search").await?.json::<SearchResponse>().await?;
    Ok(json.tracks.items)
}

/// Fetches the full track object for a single id.
pub async fn get_track(
    http: &Client,
    settings: &Settings,
    token: &str,
    id: &str,
) -> Result<SpotifyTrack> {
    let api_url = format!("{uri}/tracks/{id}", uri = settings.spotify_api_url, id = id);

    let response = http.get(&api_url).bearer_auth(token).send().await?;
    let track = checked(response, "track").await?.json::<SpotifyTrack>().await?;
    Ok(track)
}

async fn checked(response: Response, endpoint: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::Auth(format!("{} endpoint rejected the token: {}", endpoint, body)));
    }
    Err(Error::SpotifyApi(format!(
        "{} endpoint answered {}: {}",
        endpoint, status, body
    )))
}
