// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Document Vault
//!
//! Statements, tax forms and uploaded files.
//!
//! Uploads go to `/files/upload` as multipart and skip the JSON key
//! transform entirely; downloads and previews return raw bytes.

use serde::Serialize;
use serde_json::Value;

use super::common::{Page, SortOrder, PAGE, PER_PAGE, SEARCH, SORT_BY, SORT_ORDER};
use crate::error::ApiResult;
use crate::http::{ApiClient, DownloadedFile, Endpoint, FilePayload, MultipartForm, QueryParam};

const LIST: Endpoint = Endpoint::get("/documents").with_query(&[
    PAGE,
    PER_PAGE,
    QueryParam::plain("category"),
    SEARCH,
    SORT_BY,
    SORT_ORDER,
    QueryParam::comma_list("tags"),
]);
const GET: Endpoint = Endpoint::get("/documents/{id}");
const DOWNLOAD: Endpoint = Endpoint::get("/documents/{id}/download");
const DELETE: Endpoint = Endpoint::delete("/documents/{id}");
const SHARE: Endpoint = Endpoint::post("/documents/{id}/share");
const STATISTICS: Endpoint = Endpoint::get("/documents/statistics");
const PREVIEW: Endpoint = Endpoint::get("/documents/{id}/preview");
const UPLOAD: Endpoint = Endpoint::post("/files/upload");

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentListOptions {
    #[serde(flatten)]
    pub page: Page,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    /// Sent as one comma-separated value.
    pub tags: Vec<String>,
}

/// Metadata sent alongside an uploaded file.
#[derive(Debug, Clone, Default)]
pub struct DocumentUpload {
    pub category: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub is_private: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
pub struct DocumentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DocumentsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_documents<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST).query(options).send().await
    }

    pub async fn get_document(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET).path_param(id).send().await
    }

    pub async fn download_document(&self, id: &str) -> ApiResult<DownloadedFile> {
        self.client.call(&DOWNLOAD).path_param(id).download().await
    }

    pub async fn delete_document(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&DELETE).path_param(id).send().await
    }

    /// Share with other users, e.g. `{ "userIds": [..], "permission": "view" }`.
    pub async fn share_document<T: Serialize + ?Sized>(
        &self,
        id: &str,
        share: &T,
    ) -> ApiResult<Value> {
        self.client.call(&SHARE).path_param(id).json(share).send().await
    }

    pub async fn get_document_statistics(&self) -> ApiResult<Value> {
        self.client.call(&STATISTICS).send().await
    }

    pub async fn preview_document(&self, id: &str) -> ApiResult<DownloadedFile> {
        self.client.call(&PREVIEW).path_param(id).download().await
    }

    pub async fn upload_document(
        &self,
        file: FilePayload,
        upload: &DocumentUpload,
    ) -> ApiResult<Value> {
        let tags = (!upload.tags.is_empty()).then(|| upload.tags.join(","));
        let form = MultipartForm::new()
            .file("file", file)
            .text_opt("category", upload.category.as_deref())
            .text_opt("description", upload.description.as_deref())
            .text_opt("tags", tags)
            .text_opt("is_private", upload.is_private);

        self.client.call(&UPLOAD).multipart(form).send().await
    }
}
