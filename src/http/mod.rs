// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP layer: transport seam, shared client, endpoint descriptors and
//! multipart bodies.

pub mod client;
pub mod endpoint;
pub mod multipart;
pub mod transport;

pub use client::ApiClient;
pub use endpoint::{
    build_query, render_path, shape_response, Endpoint, EndpointCall, Inbound, Outbound,
    QueryParam, QueryRule, IDEMPOTENCY_KEY_HEADER,
};
pub use multipart::{DownloadedFile, FilePayload, FormPart, MultipartForm};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, RequestBody, ReqwestTransport};
