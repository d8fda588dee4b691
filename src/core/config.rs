use std::env;
use std::time::Duration;

use crate::errors::SummaryError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub provider_timeout: Duration,
    pub min_text_length: usize,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::Config` when `OPENAI_API_KEY` is missing, a
    /// numeric setting cannot be parsed, or the provider timeout is zero.
    pub fn from_env() -> Result<Self, SummaryError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummaryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY").ok_or_else(|| {
            SummaryError::Config(
                "OPENAI_API_KEY is not set; the completion provider needs a credential".to_string(),
            )
        })?;

        let timeout_secs = parse_or(
            get("PROVIDER_TIMEOUT_SECS"),
            "PROVIDER_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(SummaryError::Config(
                "PROVIDER_TIMEOUT_SECS: must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            openai_api_key,
            openai_org_id: get("OPENAI_ORG_ID"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            provider_timeout: Duration::from_secs(timeout_secs),
            min_text_length: parse_or(
                get("MIN_TEXT_LENGTH"),
                "MIN_TEXT_LENGTH",
                DEFAULT_MIN_TEXT_LENGTH,
            )?,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(get("PORT"), "PORT", 8000)?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &str,
    default: T,
) -> Result<T, SummaryError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| SummaryError::Config(format!("{key}: invalid value '{value}'"))),
        None => Ok(default),
    }
}
