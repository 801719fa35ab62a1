// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Assets
//!
//! Held assets (public and private), their valuation history and
//! supporting documents such as appraisals or deeds.

use serde::Serialize;
use serde_json::Value;

use super::common::{
    DateRange, Page, SortOrder, END_DATE, PAGE, PER_PAGE, SEARCH, SORT_BY, SORT_ORDER, START_DATE,
    STATUS,
};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, FilePayload, MultipartForm, QueryParam};

const LIST: Endpoint = Endpoint::get("/assets").with_query(&[
    PAGE,
    PER_PAGE,
    QueryParam::plain("asset_class"),
    STATUS,
    SEARCH,
    SORT_BY,
    SORT_ORDER,
]);
const GET: Endpoint = Endpoint::get("/assets/{id}");
const CREATE: Endpoint = Endpoint::post("/assets");
const UPDATE: Endpoint = Endpoint::put("/assets/{id}");
const DELETE: Endpoint = Endpoint::delete("/assets/{id}");
const VALUATIONS: Endpoint = Endpoint::get("/assets/{id}/valuations").with_query(&[
    START_DATE,
    END_DATE,
    QueryParam::plain("interval"),
]);
const UPLOAD_DOCUMENT: Endpoint = Endpoint::post("/assets/{id}/documents");

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetListOptions {
    #[serde(flatten)]
    pub page: Page,
    pub asset_class: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValuationOptions {
    #[serde(flatten)]
    pub range: DateRange,
    /// `daily`, `weekly`, `monthly`.
    pub interval: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AssetDocumentUpload {
    pub document_type: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct AssetsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AssetsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_assets<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST).query(options).send().await
    }

    pub async fn get_asset(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET).path_param(id).send().await
    }

    pub async fn create_asset<T: Serialize + ?Sized>(&self, asset: &T) -> ApiResult<Value> {
        self.client.call(&CREATE).json(asset).send().await
    }

    /// Full replacement of the asset record.
    pub async fn update_asset<T: Serialize + ?Sized>(&self, id: &str, asset: &T) -> ApiResult<Value> {
        self.client.call(&UPDATE).path_param(id).json(asset).send().await
    }

    pub async fn delete_asset(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&DELETE).path_param(id).send().await
    }

    pub async fn get_asset_valuations<Q: Serialize + ?Sized>(
        &self,
        id: &str,
        options: &Q,
    ) -> ApiResult<Value> {
        self.client
            .call(&VALUATIONS)
            .path_param(id)
            .query(options)
            .send()
            .await
    }

    pub async fn upload_asset_document(
        &self,
        id: &str,
        file: FilePayload,
        upload: &AssetDocumentUpload,
    ) -> ApiResult<Value> {
        let form = MultipartForm::new()
            .file("file", file)
            .text_opt("document_type", upload.document_type.as_deref())
            .text_opt("description", upload.description.as_deref());

        self.client
            .call(&UPLOAD_DOCUMENT)
            .path_param(id)
            .multipart(form)
            .send()
            .await
    }
}
