use crate::{error, info, management::AppState, server, warning};

pub async fn serve(state: AppState) {
    if state.tokens.is_caching() {
        info!("Spotify token cache enabled");
    } else {
        warning!("Spotify token cache disabled, every search exchanges credentials");
    }

    if !state.settings.fetch_track_details {
        info!("Track detail fetch disabled, projecting search results directly");
    }

    if let Err(e) = server::start_api_server(state).await {
        error!("Server stopped. Err: {}", e);
    }
}
