use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("authentication failed: the consumer key or secret was rejected")]
    AuthenticationFailed,

    #[error("access token issuance is rate limited, try again later")]
    RateLimited,

    #[error("sheet {0} was not found or is not accessible with the current permissions")]
    SheetNotFound(u64),

    #[error("Kaonavi API error: {status} - {body}")]
    UnknownApi {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
