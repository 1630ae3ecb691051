use serde::Deserialize;

// https://developer.kaonavi.jp/api/v2.0/index.html
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
