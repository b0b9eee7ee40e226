use reqwest::{Client, StatusCode, header::AUTHORIZATION};

use crate::{
    config::Settings,
    error::{Error, Result},
    types::{Token, TokenResponse},
    utils, warning,
};

/// Exchanges the client credentials for an access token.
///
/// Performs the OAuth 2.0 client-credentials grant against the configured token
/// endpoint, authenticating with HTTP Basic auth built from the client id and
/// secret.
///
/// # Errors
///
/// Every failure is reported as [`Error::Auth`]: empty credentials, a transport
/// error, any status other than `200 OK`, or a body without `access_token`.
/// Callers decide whether to absorb it; this function never hides it.
pub async fn request_token(http: &Client, settings: &Settings) -> Result<Token> {
    if settings.spotify_client_id.is_empty() || settings.spotify_client_secret.is_empty() {
        return Err(Error::Auth("Spotify client credentials are not configured".into()));
    }

    let response = http
        .post(&settings.spotify_token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&settings.spotify_client_id, &settings.spotify_client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::Auth(format!("token request failed: {}", e)))?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        warning!("Spotify token error ({}): {}", status, body);
        return Err(Error::Auth(format!("token endpoint answered {}", status)));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| Error::Auth(format!("failed to parse token response: {}", e)))?;

    Ok(Token::new(token.access_token, token.expires_in))
}
