//! # Spotify Integration Module
//!
//! Client-credentials authentication and the track search used by the
//! recommendation pipeline.
//!
//! ## Flow
//!
//! ```text
//! keyword
//!    ↓
//! TokenManager ── POST /api/token (Basic auth, client_credentials)
//!    ↓
//! GET /search?q=<keyword>&type=track&market=IN&limit=20
//!    ↓
//! first 10 items with an id
//!    ↓
//! GET /tracks/{id}  (up to 5 in flight, reassembled in search order)
//!    ↓
//! Vec<Track>
//! ```
//!
//! The detail fetch can be switched off with `SPOTIFY_TRACK_DETAILS=false`, in
//! which case the search items are projected directly.
//!
//! ## Error Handling
//!
//! [`auth::request_token`] and the functions in [`tracks`] return typed errors.
//! [`search`] is the boundary: it logs whatever went wrong and returns an empty
//! list, discarding any partial results.

pub mod auth;
pub mod tracks;

use futures::{StreamExt, TryStreamExt, stream};

use crate::{
    error::{Error, Result},
    info,
    management::AppState,
    success,
    types::Track,
    warning,
};

/// Maximum number of tracks returned for one keyword.
pub const MAX_TRACKS: usize = 10;
/// Maximum number of detail requests in flight at once.
pub const DETAIL_FETCH_CONCURRENCY: usize = 5;

/// Searches Spotify for `keyword` and returns up to [`MAX_TRACKS`] tracks.
///
/// Never fails: token, search and detail errors are logged and turn into an
/// empty list.
pub async fn search(state: &AppState, keyword: &str) -> Vec<Track> {
    match try_search(state, keyword).await {
        Ok(tracks) => {
            success!("Found {} tracks for '{}'", tracks.len(), keyword);
            tracks
        }
        Err(e) => {
            warning!("Spotify search failed: {}", e);
            Vec::new()
        }
    }
}

async fn try_search(state: &AppState, keyword: &str) -> Result<Vec<Track>> {
    let token = state
        .tokens
        .get_valid_token(&state.http, &state.settings)
        .await?;

    let result = search_with_token(state, keyword, &token).await;
    if let Err(Error::Auth(_)) = &result {
        state.tokens.invalidate(&token).await;
    }
    result
}

async fn search_with_token(state: &AppState, keyword: &str, token: &str) -> Result<Vec<Track>> {
    info!(
        "Spotify search q={} market={} limit={}",
        keyword,
        tracks::SEARCH_MARKET,
        tracks::SEARCH_LIMIT
    );
    let items = tracks::search_tracks(&state.http, &state.settings, token, keyword).await?;

    let candidates: Vec<_> = items
        .into_iter()
        .filter(|item| item.id.is_some())
        .take(MAX_TRACKS)
        .collect();

    if !state.settings.fetch_track_details {
        return candidates.into_iter().map(Track::try_from).collect();
    }

    stream::iter(candidates)
        .map(|item| async move {
            let id = item.id.unwrap_or_default();
            let track = tracks::get_track(&state.http, &state.settings, token, &id).await?;
            Track::try_from(track)
        })
        .buffered(DETAIL_FETCH_CONCURRENCY)
        .try_collect()
        .await
}
