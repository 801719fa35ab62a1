// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wealth API Client - REST client for the wealth-management backend
//!
//! This crate wraps the backend's per-domain REST endpoints, rewrites JSON
//! keys between the backend's snake_case and the caller-facing camelCase,
//! and owns the bearer-token lifecycle.
//!
//! ## Modules
//!
//! - `api` - per-domain operations (accounts, documents, trading, ...)
//! - `auth` - login, registration, second factor, profile
//! - `case` - snake_case / camelCase key rewriting
//! - `http` - transport, shared client, endpoint descriptors, multipart
//! - `session` - token persistence backends
//! - `config` - client settings and environment loading
//! - `telemetry` - tracing subscriber setup
//!
//! ## Example
//!
//! ```no_run
//! use wealth_api_client::{auth::LoginRequest, ApiClient, LoginOutcome};
//!
//! # async fn demo() -> wealth_api_client::ApiResult<()> {
//! let client = ApiClient::from_env()?;
//! match client.auth().login(&LoginRequest::new("ada@example.com", "secret")).await? {
//!     LoginOutcome::Authenticated(_) => {
//!         let summary = client.portfolio().get_portfolio_summary().await?;
//!         println!("{summary}");
//!     }
//!     LoginOutcome::SecondFactorRequired(challenge) => {
//!         println!("code required via {:?}", challenge.method);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod case;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{AuthApi, LoginOutcome, Role, TokenPair, UserSnapshot};
pub use config::{ChallengeSchema, ClientConfig};
pub use error::{ApiError, ApiResult};
pub use http::{ApiClient, DownloadedFile, FilePayload, HttpTransport, MultipartForm};
pub use session::{
    DisabledSessionStore, FileSessionStore, MemorySessionStore, SessionStore, TokenStorage,
};
