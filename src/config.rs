use crate::error::{AppError, Result};
use dialoguer::{Input, Password};
use std::env;
use url::Url;

pub const CONSUMER_KEY_VAR: &str = "KAONAVI_CONSUMER_KEY";
pub const CONSUMER_SECRET_VAR: &str = "KAONAVI_CONSUMER_SECRET";
pub const ENDPOINT_VAR: &str = "KAONAVI_API_ENDPOINT";
pub const TIMEOUT_VAR: &str = "KAONAVI_API_TIMEOUT";

/// Example production endpoint, shown in help and error text
pub const ENDPOINT_EXAMPLE: &str = "https://api.kaonavi.jp/api/v2.0/";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
}

impl Config {
    /// Resolve all configuration from the environment once, prompting for
    /// missing credentials unless `non_interactive` is set
    pub fn resolve(non_interactive: bool) -> Result<Self> {
        let consumer_key =
            resolve_credential(CONSUMER_KEY_VAR, "Consumer key", false, non_interactive)?;
        let consumer_secret =
            resolve_credential(CONSUMER_SECRET_VAR, "Consumer secret", true, non_interactive)?;
        let endpoint = resolve_endpoint(env_non_empty(ENDPOINT_VAR))?;
        let timeout_secs = resolve_timeout(env::var(TIMEOUT_VAR).ok().as_deref());

        Ok(Self {
            credentials: Credentials {
                consumer_key,
                consumer_secret,
            },
            endpoint,
            timeout_secs,
        })
    }
}

fn env_non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.is_empty())
}

fn resolve_credential(
    var: &str,
    prompt: &str,
    hidden: bool,
    non_interactive: bool,
) -> Result<String> {
    if let Some(value) = env_non_empty(var) {
        return Ok(value);
    }

    if non_interactive {
        return Err(AppError::Config(format!(
            "{} must be set when prompting is disabled",
            var
        )));
    }

    let validate = |input: &String| -> std::result::Result<(), &str> {
        match input.trim().is_empty() {
            true => Err("a value is required"),
            false => Ok(()),
        }
    };

    // Secrets are read without echo; re-prompts until a non-blank value is entered
    let value = match hidden {
        true => Password::new()
            .with_prompt(prompt)
            .validate_with(validate)
            .interact()?,
        false => Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(validate)
            .interact_text()?,
    };

    Ok(value.trim().to_string())
}

/// The endpoint is used as a plain prefix (`{endpoint}token`,
/// `{endpoint}sheets/{id}`), so it must carry its own trailing separator
fn resolve_endpoint(raw: Option<String>) -> Result<String> {
    let endpoint = raw.ok_or_else(|| {
        AppError::Config(format!(
            "{} must be set to the API base URL, e.g. {}",
            ENDPOINT_VAR, ENDPOINT_EXAMPLE
        ))
    })?;

    Url::parse(&endpoint).map_err(|e| {
        AppError::Config(format!(
            "{} is not a valid URL ({}): {}",
            ENDPOINT_VAR, endpoint, e
        ))
    })?;

    Ok(endpoint)
}

fn resolve_timeout(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_default_when_unset() {
        assert_eq!(resolve_timeout(None), 30);
    }

    #[test]
    fn test_timeout_default_when_malformed() {
        assert_eq!(resolve_timeout(Some("notanumber")), 30);
        assert_eq!(resolve_timeout(Some("")), 30);
        assert_eq!(resolve_timeout(Some("-5")), 30);
        assert_eq!(resolve_timeout(Some("1.5")), 30);
    }

    #[test]
    fn test_timeout_parsed() {
        assert_eq!(resolve_timeout(Some("10")), 10);
        assert_eq!(resolve_timeout(Some(" 60 ")), 60);
    }

    #[test]
    fn test_endpoint_required() {
        let err = resolve_endpoint(None).unwrap_err();
        assert!(err.to_string().contains(ENDPOINT_VAR));
    }

    #[test]
    fn test_endpoint_must_be_a_url() {
        let err = resolve_endpoint(Some("not a url".to_string())).unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }

    #[test]
    fn test_endpoint_passed_through_verbatim() {
        let endpoint = resolve_endpoint(Some(ENDPOINT_EXAMPLE.to_string())).unwrap();
        assert_eq!(endpoint, ENDPOINT_EXAMPLE);
    }
}
