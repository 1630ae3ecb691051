mod auth;
mod client;
pub mod types;

pub use client::KaonaviClient;

use crate::error::Result;

use async_trait::async_trait;
use serde_json::Value;

/// Operations available against the Kaonavi public API once authenticated
#[async_trait]
pub trait KaonaviOperations {
    async fn get_sheet(&self, sheet_id: u64) -> Result<Value>;
}
