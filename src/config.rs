//! Configuration management for Moodtune.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the language model key, Spotify API credentials, endpoint
//! URLs and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::error::{Error, Result};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_LLM_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// A `.env` in the current working directory is read first, then the one in the
/// platform-specific local data directory under `moodtune/.env`. Variables that are
/// already set are never overwritten, so the process environment always wins.
///
/// # Directory Structure
///
/// The data directory file is looked up in:
/// - Linux: `~/.local/share/moodtune/.env`
/// - macOS: `~/Library/Application Support/moodtune/.env`
/// - Windows: `%LOCALAPPDATA%/moodtune/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an existing
/// `.env` file cannot be parsed. Missing files are not an error.
pub async fn load_env() -> std::result::Result<(), String> {
    dotenv::dotenv().ok();

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodtune/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Resolved runtime configuration.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_address: String,
    pub llm_api_key: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_api_url: String,
    pub spotify_token_url: String,
    pub request_timeout: Duration,
    /// Fetch `/tracks/{id}` for every search hit instead of projecting the search items.
    pub fetch_track_details: bool,
    /// Reuse the client-credentials token until it is close to expiry.
    pub cache_token: bool,
}

impl Settings {
    /// Resolves settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first required variable that is missing
    /// or empty (`GROQ_API_KEY`, `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`), or the
    /// first optional variable whose value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{} must be set", key)))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let timeout_secs = optional("HTTP_TIMEOUT_SECS", &DEFAULT_HTTP_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| Error::Config(format!("HTTP_TIMEOUT_SECS is not a number: {}", e)))?;

        Ok(Self {
            server_address: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            llm_api_key: required("GROQ_API_KEY")?,
            llm_api_url: optional("LLM_API_URL", DEFAULT_LLM_API_URL),
            llm_model: optional("LLM_MODEL", DEFAULT_LLM_MODEL),
            spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            spotify_api_url: optional("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
                .trim_end_matches('/')
                .to_string(),
            spotify_token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL),
            request_timeout: Duration::from_secs(timeout_secs),
            fetch_track_details: parse_flag(
                "SPOTIFY_TRACK_DETAILS",
                &optional("SPOTIFY_TRACK_DETAILS", "true"),
            )?,
            cache_token: parse_flag(
                "SPOTIFY_TOKEN_CACHE",
                &optional("SPOTIFY_TOKEN_CACHE", "true"),
            )?,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
