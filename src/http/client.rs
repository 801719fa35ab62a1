// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Client
//!
//! Shared HTTP primitive used by every domain module.
//!
//! Each request gets:
//!
//! - `Authorization: Bearer <access token>` when a token is stored,
//! - `Content-Type: application/json` unless set by the caller or the body is
//!   multipart (the transport then supplies the boundary),
//! - status checking: any non-2xx becomes [`ApiError::Http`].

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, warn};

use super::endpoint::{Endpoint, EndpointCall};
use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method, RequestBody, ReqwestTransport};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::{session_store_from_env, SessionStore, TokenStorage};

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for the wealth-management backend.
///
/// Cheap to clone; clones share the transport and the token storage.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    tokens: TokenStorage,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Build a client with the reqwest transport over the given session store.
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> ApiResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(
            config,
            Arc::new(transport),
            TokenStorage::new(store),
        ))
    }

    /// Build a client from `WEALTH_API_*` / `WEALTH_SESSION_FILE`.
    pub fn from_env() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        let store = session_store_from_env()?;
        Self::new(config, store)
    }

    /// Build a client over any transport.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: TokenStorage,
    ) -> Self {
        Self {
            transport,
            tokens,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStorage {
        &self.tokens
    }

    /// True iff a non-empty access token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_authenticated()
    }

    /// Start a call against a declared endpoint.
    pub fn call<'a>(&'a self, endpoint: &'a Endpoint) -> EndpointCall<'a> {
        EndpointCall::new(self, endpoint)
    }

    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.send_json(Method::Get, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.send_json(Method::Post, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.send_json(Method::Put, path, Some(body)).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> ApiResult<Value> {
        self.send_json(Method::Patch, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.send_json(Method::Delete, path, None).await
    }

    async fn send_json(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        let mut request = HttpRequest::new(method, normalize_path(path));
        if let Some(body) = body {
            request.body = RequestBody::Json(body.clone());
        }
        self.execute(request).await?.json()
    }

    /// Send a request with auth and content-type defaults applied.
    ///
    /// Returns the response only for 2xx statuses.
    pub async fn execute(&self, mut request: HttpRequest) -> ApiResult<HttpResponse> {
        if request.header("Authorization").is_none() {
            if let Some(token) = self.tokens.access_token() {
                request.set_header("Authorization", format!("Bearer {token}"));
            }
        }

        if matches!(request.body, RequestBody::Multipart(_)) {
            request.remove_header("Content-Type");
        } else if request.header("Content-Type").is_none() {
            request.set_header("Content-Type", JSON_CONTENT_TYPE);
        }

        let method = request.method;
        let path = request.path.clone();
        let start = Instant::now();
        debug!(%method, %path, "Sending API request");

        let response = self.transport.execute(request).await.map_err(|e| {
            warn!(%method, %path, error = %e, "API request failed before a response");
            e
        })?;
        let duration_ms = start.elapsed().as_millis() as u64;

        if !response.is_success() {
            let err = ApiError::from_response(response.status, &response.body);
            warn!(
                %method,
                %path,
                status = response.status,
                duration_ms,
                error = %err,
                "API request returned an error status"
            );
            return Err(err);
        }

        debug!(%method, %path, status = response.status, duration_ms, "API request succeeded");
        Ok(response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("tokens", &self.tokens)
            .finish()
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
