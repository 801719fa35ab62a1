// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Reports
//!
//! Generated statements and tax documents. Generation is asynchronous on the
//! backend: `generate_report` returns a report in `pending` status which
//! becomes downloadable once `completed`.

use serde::Serialize;
use serde_json::{json, Value};

use super::common::{Page, PAGE, PER_PAGE, STATUS};
use crate::error::ApiResult;
use crate::http::{ApiClient, DownloadedFile, Endpoint, QueryParam};

const LIST: Endpoint = Endpoint::get("/reports").with_query(&[
    PAGE,
    PER_PAGE,
    QueryParam::plain("report_type"),
    STATUS,
]);
const GET: Endpoint = Endpoint::get("/reports/{id}");
const GENERATE: Endpoint = Endpoint::post("/reports/generate");
const DOWNLOAD: Endpoint =
    Endpoint::get("/reports/{id}/download").with_query(&[QueryParam::plain("format")]);
const TAX_DOCUMENTS: Endpoint =
    Endpoint::get("/reports/tax-documents").with_query(&[QueryParam::plain("tax_year")]);
const SCHEDULE: Endpoint = Endpoint::post("/reports/schedules");

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportListOptions {
    #[serde(flatten)]
    pub page: Page,
    pub report_type: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReportsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_reports<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST).query(options).send().await
    }

    pub async fn get_report(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET).path_param(id).send().await
    }

    pub async fn generate_report<T: Serialize + ?Sized>(&self, request: &T) -> ApiResult<Value> {
        self.client.call(&GENERATE).json(request).send().await
    }

    /// Download a completed report, optionally in a specific `format` (`pdf`, `csv`, `xlsx`).
    pub async fn download_report(&self, id: &str, format: Option<&str>) -> ApiResult<DownloadedFile> {
        self.client
            .call(&DOWNLOAD)
            .path_param(id)
            .query(&json!({ "format": format }))
            .download()
            .await
    }

    pub async fn list_tax_documents(&self, tax_year: Option<i32>) -> ApiResult<Value> {
        self.client
            .call(&TAX_DOCUMENTS)
            .query(&json!({ "tax_year": tax_year }))
            .send()
            .await
    }

    pub async fn schedule_report<T: Serialize + ?Sized>(&self, schedule: &T) -> ApiResult<Value> {
        self.client.call(&SCHEDULE).json(schedule).send().await
    }
}
