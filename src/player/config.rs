use std::time::Duration;

use crate::player::error::ClientError;

pub const SERVER_VAR: &str = "REMOTUNE_SERVER";
pub const POLL_VAR: &str = "REMOTUNE_POLL_MS";
pub const TIMEOUT_VAR: &str = "REMOTUNE_TIMEOUT_MS";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            poll_interval: Duration::from_millis(1000),
            request_timeout: Duration::from_millis(5000),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to the
    /// defaults for keys that are absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(server) = lookup(SERVER_VAR) {
            config.base_url = normalize_base_url(&server)?;
        }
        if let Some(poll) = lookup(POLL_VAR) {
            config.poll_interval = parse_millis(POLL_VAR, &poll)?;
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            config.request_timeout = parse_millis(TIMEOUT_VAR, &timeout)?;
        }

        Ok(config)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ClientError::Config(format!(
            "{SERVER_VAR} must be an http(s) URL, got {raw:?}"
        )));
    }
    Ok(trimmed.to_string())
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration, ClientError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ClientError::Config(format!("{key} must be greater than zero"))),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(_) => Err(ClientError::Config(format!(
            "{key} must be a whole number of milliseconds, got {raw:?}"
        ))),
    }
}
