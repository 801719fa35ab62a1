// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Declarative endpoint descriptors and the shared request builder.
//!
//! Domain modules declare each operation once as an [`Endpoint`] constant:
//! method, path template, the query parameters it recognizes, and how the
//! JSON body and response are re-cased. [`EndpointCall`] then fills in path
//! parameters, options and body and runs the exchange.
//!
//! ```
//! use wealth_api_client::http::{Endpoint, QueryParam};
//!
//! const LIST_DOCUMENTS: Endpoint = Endpoint::get("/documents").with_query(&[
//!     QueryParam::plain("page"),
//!     QueryParam::plain("per_page"),
//!     QueryParam::comma_list("tags"),
//! ]);
//! # let _ = LIST_DOCUMENTS;
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::client::ApiClient;
use super::multipart::{DownloadedFile, MultipartForm};
use super::transport::{HttpRequest, Method, RequestBody};
use crate::case::{camelize, snakeize};
use crate::error::{ApiError, ApiResult};

pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// How a recognized option is written to the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRule {
    /// Scalar as text; arrays are comma-joined.
    Plain,
    /// Array joined with `,` into one value.
    CommaList,
    /// Array sent as one `key=value` pair per element.
    Repeated,
    /// Sent as `key=true` only when the option is `true`.
    Flag,
}

/// One recognized query option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    /// snake_case option name.
    pub field: &'static str,
    /// Name on the wire.
    pub wire: &'static str,
    pub rule: QueryRule,
}

impl QueryParam {
    pub const fn plain(field: &'static str) -> Self {
        Self {
            field,
            wire: field,
            rule: QueryRule::Plain,
        }
    }

    pub const fn comma_list(field: &'static str) -> Self {
        Self {
            field,
            wire: field,
            rule: QueryRule::CommaList,
        }
    }

    pub const fn repeated(field: &'static str) -> Self {
        Self {
            field,
            wire: field,
            rule: QueryRule::Repeated,
        }
    }

    pub const fn flag(field: &'static str) -> Self {
        Self {
            field,
            wire: field,
            rule: QueryRule::Flag,
        }
    }

    /// Send under a different wire name.
    pub const fn sent_as(self, wire: &'static str) -> Self {
        Self { wire, ..self }
    }
}

/// Outbound JSON body handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outbound {
    /// Snake-case every key.
    Snake,
    /// Send unchanged.
    AsIs,
}

/// Inbound JSON body handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound {
    /// Camel-case `data` when the body has it, otherwise the whole body.
    Envelope,
    /// Camel-case the whole body.
    Whole,
    /// Return unchanged.
    AsIs,
}

/// A REST operation.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: Method,
    /// Path template; `{name}` segments are filled positionally.
    pub path: &'static str,
    pub query: &'static [QueryParam],
    pub outbound: Outbound,
    pub inbound: Inbound,
}

impl Endpoint {
    pub const fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: &[],
            outbound: Outbound::Snake,
            inbound: Inbound::Envelope,
        }
    }

    pub const fn get(path: &'static str) -> Self {
        Self::new(Method::Get, path)
    }

    pub const fn post(path: &'static str) -> Self {
        Self::new(Method::Post, path)
    }

    pub const fn put(path: &'static str) -> Self {
        Self::new(Method::Put, path)
    }

    pub const fn patch(path: &'static str) -> Self {
        Self::new(Method::Patch, path)
    }

    pub const fn delete(path: &'static str) -> Self {
        Self::new(Method::Delete, path)
    }

    pub const fn with_query(self, query: &'static [QueryParam]) -> Self {
        Self { query, ..self }
    }

    pub const fn with_outbound(self, outbound: Outbound) -> Self {
        Self { outbound, ..self }
    }

    pub const fn with_inbound(self, inbound: Inbound) -> Self {
        Self { inbound, ..self }
    }
}

/// Serialize the recognized options into query pairs.
///
/// Option keys are snake-cased first, so camelCase JSON and snake_case
/// structs are read alike. Unrecognized keys, nulls, empty strings and empty
/// arrays are dropped.
pub fn build_query(params: &[QueryParam], options: &Value) -> Vec<(String, String)> {
    let Value::Object(_) = options else {
        return Vec::new();
    };
    let options = snakeize(options.clone());

    let mut pairs = Vec::new();
    for param in params {
        let Some(value) = options.get(param.field) else {
            continue;
        };
        match (param.rule, value) {
            (QueryRule::Flag, Value::Bool(true)) => {
                pairs.push((param.wire.to_string(), "true".to_string()));
            }
            (QueryRule::Flag, _) => {}
            (QueryRule::Repeated, Value::Array(items)) => {
                for item in items.iter().filter_map(scalar_text) {
                    pairs.push((param.wire.to_string(), item));
                }
            }
            (QueryRule::Plain | QueryRule::CommaList, Value::Array(items)) => {
                let joined = items
                    .iter()
                    .filter_map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(",");
                if !joined.is_empty() {
                    pairs.push((param.wire.to_string(), joined));
                }
            }
            (_, scalar) => {
                if let Some(text) = scalar_text(scalar) {
                    pairs.push((param.wire.to_string(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Fill `{name}` segments of `template` with `params`, percent-encoded.
pub fn render_path(template: &str, params: &[String]) -> ApiResult<String> {
    let mut remaining = params.iter();
    let mut rendered = String::with_capacity(template.len() + 16);

    for segment in template.split('/').filter(|s| !s.is_empty()) {
        rendered.push('/');
        if segment.starts_with('{') && segment.ends_with('}') {
            let value = remaining
                .next()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| {
                    ApiError::InvalidRequest(format!("missing path parameter {segment} for {template}"))
                })?;
            rendered.push_str(&encode_segment(value));
        } else {
            rendered.push_str(segment);
        }
    }

    if remaining.next().is_some() {
        return Err(ApiError::InvalidRequest(format!(
            "too many path parameters for {template}"
        )));
    }
    if rendered.is_empty() {
        rendered.push('/');
    }
    Ok(rendered)
}

fn encode_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Apply an [`Inbound`] rule to a parsed response body.
pub fn shape_response(inbound: Inbound, body: Value) -> Value {
    match inbound {
        Inbound::AsIs => body,
        Inbound::Whole => camelize(body),
        Inbound::Envelope => match body {
            Value::Object(mut map) if map.contains_key("data") => {
                if let Some(data) = map.remove("data") {
                    map.insert("data".to_string(), camelize(data));
                }
                Value::Object(map)
            }
            other => camelize(other),
        },
    }
}

/// Builder for one exchange with an [`Endpoint`].
///
/// Build errors are deferred to [`send`](Self::send) so calls chain.
#[must_use = "an EndpointCall does nothing until sent"]
pub struct EndpointCall<'a> {
    client: &'a ApiClient,
    endpoint: &'a Endpoint,
    path_params: Vec<String>,
    options: Option<Value>,
    body: RequestBody,
    headers: Vec<(String, String)>,
    error: Option<ApiError>,
}

impl<'a> EndpointCall<'a> {
    pub(crate) fn new(client: &'a ApiClient, endpoint: &'a Endpoint) -> Self {
        Self {
            client,
            endpoint,
            path_params: Vec::new(),
            options: None,
            body: RequestBody::Empty,
            headers: Vec::new(),
            error: None,
        }
    }

    /// Next `{name}` segment of the path template.
    pub fn path_param(mut self, value: impl ToString) -> Self {
        self.path_params.push(value.to_string());
        self
    }

    /// Options object; only the endpoint's recognized params are sent.
    pub fn query<T: Serialize + ?Sized>(mut self, options: &T) -> Self {
        match serde_json::to_value(options) {
            Ok(value) => self.options = Some(value),
            Err(e) => self.fail(ApiError::InvalidRequest(format!("serialize query options: {e}"))),
        }
        self
    }

    /// JSON body, re-cased per the endpoint's [`Outbound`] rule.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => {
                let value = match self.endpoint.outbound {
                    Outbound::Snake => snakeize(value),
                    Outbound::AsIs => value,
                };
                self.body = RequestBody::Json(value);
            }
            Err(e) => self.fail(ApiError::InvalidRequest(format!("serialize request body: {e}"))),
        }
        self
    }

    /// Multipart body, sent without any key transform.
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set `Idempotency-Key`, generating a v4 UUID when none is given.
    pub fn idempotency_key(self, key: Option<String>) -> Self {
        let key = key
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        self.header(IDEMPOTENCY_KEY_HEADER, key)
    }

    fn fail(&mut self, error: ApiError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn into_request(self) -> ApiResult<(&'a ApiClient, Inbound, HttpRequest)> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let path = render_path(self.endpoint.path, &self.path_params)?;
        let mut request = HttpRequest::new(self.endpoint.method, path);
        if let Some(options) = &self.options {
            request.query = build_query(self.endpoint.query, options);
        }
        for (name, value) in self.headers {
            request.set_header(name, value);
        }
        request.body = self.body;

        Ok((self.client, self.endpoint.inbound, request))
    }

    /// Run the exchange and return the re-cased JSON body.
    pub async fn send(self) -> ApiResult<Value> {
        let (client, inbound, request) = self.into_request()?;
        let body = client.execute(request).await?.json()?;
        Ok(shape_response(inbound, body))
    }

    /// Run the exchange and deserialize the re-cased body.
    pub async fn send_as<T: DeserializeOwned>(self) -> ApiResult<T> {
        let value = self.send().await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("unexpected response shape: {e}")))
    }

    /// Run the exchange and return the raw body as a file.
    pub async fn download(self) -> ApiResult<DownloadedFile> {
        let (client, _, request) = self.into_request()?;
        let response = client.execute(request).await?;
        Ok(DownloadedFile::from_response(response))
    }
}
