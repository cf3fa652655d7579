use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://15.207.211.78.nip.io/api";
pub const DEFAULT_ORIGIN: &str = "https://www.pikkro.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub origin: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub admin_identifier: Option<String>,
    pub admin_password: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            base_url: env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            origin: env::var("API_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            request_timeout_secs: parse_or_default("REQUEST_TIMEOUT_SECS", 30)?,
            admin_identifier: env::var("ADMIN_IDENTIFIER").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok().map(SecretString::from),
        })
    }

    /// Config pointing at `base_url` with every other value at its default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            origin: DEFAULT_ORIGIN.to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            admin_identifier: None,
            admin_password: None,
        }
    }

    /// `None` when the timeout is disabled with `REQUEST_TIMEOUT_SECS=0`.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
