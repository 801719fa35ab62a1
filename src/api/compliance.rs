// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! KYC, investor accreditation and compliance checks.

use serde::Serialize;
use serde_json::Value;

use super::common::{Page, PAGE, PER_PAGE, STATUS};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, FilePayload, MultipartForm, QueryParam};

const STATUS_ENDPOINT: Endpoint = Endpoint::get("/compliance/status");
const SUBMIT_KYC: Endpoint = Endpoint::post("/compliance/kyc");
const UPLOAD_KYC_DOCUMENT: Endpoint = Endpoint::post("/compliance/kyc/documents");
const GET_ACCREDITATION: Endpoint = Endpoint::get("/compliance/accreditation");
const SUBMIT_ACCREDITATION: Endpoint = Endpoint::post("/compliance/accreditation");
const LIST_CHECKS: Endpoint = Endpoint::get("/compliance/checks").with_query(&[
    STATUS,
    QueryParam::plain("check_type"),
    PAGE,
    PER_PAGE,
]);

#[derive(Debug, Clone, Default, Serialize)]
pub struct ComplianceCheckOptions {
    pub status: Option<String>,
    /// `aml`, `sanctions`, `pep`, ...
    pub check_type: Option<String>,
    #[serde(flatten)]
    pub page: Page,
}

#[derive(Debug, Clone, Copy)]
pub struct ComplianceApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ComplianceApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_compliance_status(&self) -> ApiResult<Value> {
        self.client.call(&STATUS_ENDPOINT).send().await
    }

    pub async fn submit_kyc<T: Serialize + ?Sized>(&self, kyc: &T) -> ApiResult<Value> {
        self.client.call(&SUBMIT_KYC).json(kyc).send().await
    }

    /// Upload an identity document (`passport`, `drivers_license`, `utility_bill`, ...).
    pub async fn upload_kyc_document(
        &self,
        file: FilePayload,
        document_type: &str,
    ) -> ApiResult<Value> {
        let form = MultipartForm::new()
            .file("file", file)
            .text("document_type", document_type);
        self.client.call(&UPLOAD_KYC_DOCUMENT).multipart(form).send().await
    }

    pub async fn get_accreditation(&self) -> ApiResult<Value> {
        self.client.call(&GET_ACCREDITATION).send().await
    }

    pub async fn submit_accreditation<T: Serialize + ?Sized>(
        &self,
        accreditation: &T,
    ) -> ApiResult<Value> {
        self.client
            .call(&SUBMIT_ACCREDITATION)
            .json(accreditation)
            .send()
            .await
    }

    pub async fn list_compliance_checks<Q: Serialize + ?Sized>(
        &self,
        options: &Q,
    ) -> ApiResult<Value> {
        self.client.call(&LIST_CHECKS).query(options).send().await
    }
}
