//! Intake endpoint configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

/// Environment variable holding the intake endpoint URL.
pub const ENDPOINT_VAR: &str = "LEAD_INTAKE_URL";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "LEAD_INTAKE_TIMEOUT_SECS";

/// Where and how leads are submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Endpoint receiving the `POST`.
    pub endpoint: Url,
    /// Upper bound on a whole request. `None` waits for the service.
    pub timeout: Option<Duration>,
}

impl IntakeConfig {
    /// Creates a configuration for an absolute http(s) endpoint.
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint).map_err(|e| ConfigError::InvalidUrl {
            value: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                value: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            endpoint: url,
            timeout: None,
        })
    }

    /// Sets the request timeout. A zero timeout would fail every request
    /// and is rejected.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(format!("{timeout:?}")));
        }
        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Reads `LEAD_INTAKE_URL` and `LEAD_INTAKE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key lookup (environment, file, map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ENDPOINT_VAR))?;
        let config = Self::new(endpoint.trim())?;

        match lookup(TIMEOUT_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                config.with_timeout(parse_timeout_secs(&raw)?)
            }
            _ => Ok(config),
        }
    }
}

/// Parses a positive whole number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
