//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → env vars → explicit values.
//!
//! No files are read or written. The API key is the only required value;
//! everything else has a default suitable for the public OMDb endpoint.

use log::debug;
use std::fmt;
use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// How long a lookup may wait on the transport before it counts as timed out.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Pause between receiving a catalog answer and surfacing it. Purely
/// cosmetic, so spinner-driven screens get a visible loading phase.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 3_000;

// ============================================================================
// Environment Variables
// ============================================================================

pub const ENV_API_KEY: &str = "OMDB_API_KEY";
pub const ENV_BASE_URL: &str = "OMDB_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "OMDB_REQUEST_TIMEOUT_MS";
pub const ENV_REVEAL_DELAY_MS: &str = "OMDB_REVEAL_DELAY_MS";

// ============================================================================
// Config Struct
// ============================================================================

#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// Catalog API key. Never baked into the crate; callers pass it in or
    /// export it as `OMDB_API_KEY`.
    pub api_key: String,
    /// Endpoint the lookup GET is issued against.
    pub base_url: String,
    /// Transport deadline for a single request.
    pub request_timeout: Duration,
    /// Fixed pause between receiving a catalog answer and surfacing it.
    /// Applies once per answered request, never to timeouts or transport
    /// failures. Zero disables it.
    pub reveal_delay: Duration,
}

impl OmdbConfig {
    /// Config with the given key and default endpoint and timings.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
        }
    }

    /// Builds a config from the environment.
    ///
    /// `OMDB_API_KEY` is required. `OMDB_BASE_URL`,
    /// `OMDB_REQUEST_TIMEOUT_MS`, and `OMDB_REVEAL_DELAY_MS` override their
    /// defaults when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingApiKey)?;

        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let request_timeout = duration_from_env(
            ENV_REQUEST_TIMEOUT_MS,
            Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        )?;
        let reveal_delay = duration_from_env(
            ENV_REVEAL_DELAY_MS,
            Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
        )?;

        // The key itself stays out of the logs.
        debug!(
            "Resolved config: base_url={base_url}, request_timeout={request_timeout:?}, \
             reveal_delay={reveal_delay:?}"
        );

        Ok(Self {
            api_key,
            base_url,
            request_timeout,
            reveal_delay,
        })
    }
}

/// Reads a millisecond duration from `var`, falling back to `default` when
/// the variable is unset.
fn duration_from_env(var: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse_millis(&raw)
            .map(Duration::from_millis)
            .ok_or(ConfigError::InvalidDuration { var, value: raw }),
        Err(_) => Ok(default),
    }
}

fn parse_millis(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    MissingApiKey,
    InvalidDuration { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey => {
                write!(f, "config error: {ENV_API_KEY} is not set")
            }
            ConfigError::InvalidDuration { var, value } => {
                write!(f, "config error: {var} must be milliseconds, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
