// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client error type.
//!
//! Every operation in this crate returns [`ApiResult`]. Failures fall into
//! three groups:
//!
//! - transport failures (no HTTP status),
//! - HTTP error responses (status plus the parsed error body, when any),
//! - local failures (bad request input, unreadable responses, session storage).

use serde_json::Value;

use crate::session::SessionError;

/// Error returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// The response body could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The request could not be built from the given input.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Client configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Session storage failed to persist or remove a value.
    #[error("session storage error: {0}")]
    Storage(String),

    /// An operation needed stored credentials and none were present.
    #[error("no stored credentials")]
    NotAuthenticated,
}

/// Result alias used across the crate.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build an HTTP error from a status and raw response body.
    ///
    /// The body is kept when it parses as JSON; the message is taken from the
    /// first of `message`, `detail` or `error` that is a string.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed: Option<Value> = serde_json::from_slice(body).ok();
        let message = parsed
            .as_ref()
            .and_then(extract_message)
            .or_else(|| {
                let text = String::from_utf8_lossy(body).trim().to_string();
                (!text.is_empty() && parsed.is_none()).then_some(text)
            })
            .unwrap_or_else(|| default_reason(status).to_string());

        ApiError::Http {
            status,
            message,
            body: parsed,
        }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed JSON error body, if the backend sent one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// True for 401 and 403 responses.
    pub fn is_auth_denied(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

fn extract_message(body: &Value) -> Option<String> {
    ["message", "detail", "error"].iter().find_map(|field| {
        body.get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
    })
}

fn default_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500..=599 => "Server Error",
        _ => "Request failed",
    }
}
