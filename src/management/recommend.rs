use crate::{info, llm, management::AppState, spotify, types::RecommendResponse, utils};

/// Runs the whole pipeline for one message.
///
/// Keyword derivation, sanitizing and the Spotify search run strictly one after
/// the other. Both external stages fall back on their own, so this never fails:
/// the worst case is the fallback keyword with an empty song list.
pub async fn recommend(state: &AppState, message: &str) -> RecommendResponse {
    let raw_keyword = llm::derive_keyword(state, message).await;
    let keyword = utils::sanitize_keyword(Some(&raw_keyword));
    info!("Search keyword: {}", keyword);

    let songs = spotify::search(state, &keyword).await;

    RecommendResponse { keyword, songs }
}
