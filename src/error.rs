use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Spotify authentication failed: {0}")]
    Auth(String),

    #[error("Spotify API error: {0}")]
    SpotifyApi(String),

    #[error("Language model error: {0}")]
    Llm(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
