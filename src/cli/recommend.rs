use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{info, management::{self, AppState}, success, utils, warning};

/// Runs the recommendation pipeline once and prints the result as a table.
///
/// With `open` set, the first track is opened in the default browser, which
/// hands it over to the Spotify web player or desktop app.
pub async fn recommend(state: AppState, message: String, open: bool) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Finding songs for your mood...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let response = management::recommend(&state, &message).await;
    pb.finish_and_clear();

    info!("Keyword: {}", response.keyword);
    if response.songs.is_empty() {
        warning!("No Spotify tracks available for this mood.");
        return;
    }

    let table = Table::new(utils::track_table_rows(&response.songs));
    println!("{}", table);
    success!("{} tracks", response.songs.len());

    if open {
        let Some(first) = response.songs.first() else {
            return;
        };
        if webbrowser::open(&first.spotify_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                first.spotify_url
            )
        }
    }
}
