use crate::config::Config;
use crate::error::{AppError, Result};
use crate::kaonavi::types::AccessToken;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

const GRANT_BODY: &str = "grant_type=client_credentials";
const TOKEN_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Exchange the consumer key/secret for an access token
///
/// Performs a single POST to `{endpoint}token` with HTTP basic
/// authentication; the endpoint already carries its trailing separator.
#[instrument(name = "Requesting access token", skip_all)]
pub(super) async fn request_token(client: &Client, config: &Config) -> Result<AccessToken> {
    let url = format!("{}token", config.endpoint);

    let response = client
        .post(&url)
        .basic_auth(
            &config.credentials.consumer_key,
            Some(&config.credentials.consumer_secret),
        )
        .header(CONTENT_TYPE, TOKEN_CONTENT_TYPE)
        .body(GRANT_BODY)
        .send()
        .await?;

    match response.status() {
        StatusCode::OK => {
            let token: AccessToken = response.json().await?;
            debug!(
                token_type = %token.token_type,
                expires_in = token.expires_in,
                "Access token issued"
            );
            Ok(token)
        }
        StatusCode::UNAUTHORIZED => Err(AppError::AuthenticationFailed),
        StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimited),
        status => {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::UnknownApi { status, body })
        }
    }
}
