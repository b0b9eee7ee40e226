use reqwest::Client;
use tokio::sync::Mutex;

use crate::{config::Settings, error::Result, spotify, types::Token};

/// Hands out client-credentials access tokens.
///
/// With caching enabled the last token is kept until it comes within
/// [`crate::types::TOKEN_EXPIRY_MARGIN_SECS`] of its expiry. The lock is held
/// across the exchange, so concurrent callers wait for one refresh instead of
/// each starting their own. With caching disabled every call performs a fresh
/// exchange.
pub struct TokenManager {
    cached: bool,
    token: Mutex<Option<Token>>,
}

impl TokenManager {
    pub fn new(cached: bool) -> Self {
        TokenManager {
            cached,
            token: Mutex::new(None),
        }
    }

    pub async fn get_valid_token(&self, http: &Client, settings: &Settings) -> Result<String> {
        if !self.cached {
            return Ok(spotify::auth::request_token(http, settings)
                .await?
                .access_token);
        }

        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref() {
            if !current.is_expired() {
                return Ok(current.access_token.clone());
            }
        }

        let fresh = spotify::auth::request_token(http, settings).await?;
        let access_token = fresh.access_token.clone();
        *token = Some(fresh);
        Ok(access_token)
    }

    /// Drops the cached token after the Web API rejected `rejected`, so the next
    /// call exchanges credentials again. A newer token cached in the meantime is kept.
    pub async fn invalidate(&self, rejected: &str) {
        let mut token = self.token.lock().await;
        if token.as_ref().is_some_and(|t| t.access_token == rejected) {
            *token = None;
        }
    }

    pub fn is_caching(&self) -> bool {
        self.cached
    }
}
