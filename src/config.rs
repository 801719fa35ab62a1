// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Client Configuration
//!
//! [`ClientConfig`] can be built in code or loaded from the environment.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `WEALTH_API_BASE_URL` | Backend base URL | `http://localhost:8000/api/v1` |
//! | `WEALTH_API_TIMEOUT_SECS` | Per-request timeout in seconds | `30` |
//! | `WEALTH_SESSION_FILE` | Session file for [`FileSessionStore`](crate::session::FileSessionStore) | unset (memory) |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::time::Duration;

use crate::error::{ApiError, ApiResult};

pub const BASE_URL_ENV: &str = "WEALTH_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "WEALTH_API_TIMEOUT_SECS";
pub const SESSION_FILE_ENV: &str = "WEALTH_SESSION_FILE";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("wealth-api-client/", env!("CARGO_PKG_VERSION"));

/// Shape of a second-factor challenge in a login response.
///
/// Field names are matched against the raw snake_case body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeSchema {
    /// Boolean field that signals the challenge.
    pub flag_field: String,
    /// Field holding the temporary token for the follow-up call.
    pub temp_token_field: String,
    /// Field naming the delivery method.
    pub method_field: String,
}

impl Default for ChallengeSchema {
    fn default() -> Self {
        Self {
            flag_field: "requires_2fa".to_string(),
            temp_token_field: "temp_token".to_string(),
            method_field: "two_factor_method".to_string(),
        }
    }
}

/// Settings for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub challenge: ChallengeSchema,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            challenge: ChallengeSchema::default(),
        }
    }

    /// Load from `WEALTH_API_*` variables, falling back to defaults.
    pub fn from_env() -> ApiResult<Self> {
        let base_url = env_or_default(BASE_URL_ENV, DEFAULT_BASE_URL);
        let timeout_secs = match env_optional(TIMEOUT_ENV) {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ApiError::Config(format!("{TIMEOUT_ENV} must be a whole number of seconds: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs));
        config.validate()?;
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_challenge_schema(mut self, challenge: ChallengeSchema) -> Self {
        self.challenge = challenge;
        self
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> ApiResult<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {}: {e}", self.base_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ApiError::Config(format!(
                "unsupported base URL scheme: {other}"
            ))),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Trimmed, non-empty value of an environment variable.
pub(crate) fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    env_optional(name).unwrap_or_else(|| default.to_string())
}
