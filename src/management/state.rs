use std::sync::Arc;

use reqwest::Client;

use crate::{config::Settings, error::Result, management::TokenManager};

/// Everything a request needs, cloned cheaply into each handler.
#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub settings: Arc<Settings>,
    pub tokens: Arc<TokenManager>,
}

impl AppState {
    /// Builds the shared HTTP client with the configured per-call timeout.
    pub fn new(settings: Settings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self {
            http,
            tokens: Arc::new(TokenManager::new(settings.cache_token)),
            settings: Arc::new(settings),
        })
    }
}
