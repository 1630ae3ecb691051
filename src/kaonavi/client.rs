use super::KaonaviOperations;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::kaonavi::auth;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;

/// Header carrying the access token on authenticated calls
const TOKEN_HEADER: &str = "Kaonavi-Token";

pub struct KaonaviClient {
    client: Client,
    access_token: String,
    endpoint: String,
}

impl KaonaviClient {
    /// Create a new KaonaviClient with authenticated access
    ///
    /// Exchanges the configured credentials for an access token; the
    /// exchange and all later calls share one HTTP client carrying the
    /// configured timeout.
    #[instrument(name = "Authenticating to Kaonavi", skip_all)]
    pub async fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let token = auth::request_token(&client, config).await?;

        Ok(Self {
            client,
            access_token: token.access_token,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl KaonaviOperations for KaonaviClient {
    #[instrument(name = "Fetching sheet", skip_all, fields(sheet_id))]
    async fn get_sheet(&self, sheet_id: u64) -> Result<Value> {
        let url = format!("{}sheets/{}", self.endpoint, sheet_id);

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, &self.access_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(AppError::SheetNotFound(sheet_id)),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::UnknownApi { status, body })
            }
        }
    }
}
