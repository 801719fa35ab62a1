// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Payments
//!
//! Outgoing payments and stored payment methods.
//!
//! Payment creation carries an `Idempotency-Key` header so a retried call
//! cannot charge twice. Pass the same key when retrying; omit it to have a
//! fresh UUID generated.

use serde::Serialize;
use serde_json::Value;

use super::common::{DateRange, Page, END_DATE, PAGE, PER_PAGE, START_DATE, STATUS};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint};

const LIST: Endpoint =
    Endpoint::get("/payments").with_query(&[PAGE, PER_PAGE, STATUS, START_DATE, END_DATE]);
const GET: Endpoint = Endpoint::get("/payments/{id}");
const CREATE: Endpoint = Endpoint::post("/payments");
const CANCEL: Endpoint = Endpoint::post("/payments/{id}/cancel");
const LIST_METHODS: Endpoint = Endpoint::get("/payments/methods");
const ADD_METHOD: Endpoint = Endpoint::post("/payments/methods");
const REMOVE_METHOD: Endpoint = Endpoint::delete("/payments/methods/{id}");

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentListOptions {
    #[serde(flatten)]
    pub page: Page,
    pub status: Option<String>,
    #[serde(flatten)]
    pub range: DateRange,
}

#[derive(Debug, Clone, Copy)]
pub struct PaymentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_payments<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST).query(options).send().await
    }

    pub async fn get_payment(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET).path_param(id).send().await
    }

    pub async fn create_payment<T: Serialize + ?Sized>(
        &self,
        payment: &T,
        idempotency_key: Option<String>,
    ) -> ApiResult<Value> {
        self.client
            .call(&CREATE)
            .idempotency_key(idempotency_key)
            .json(payment)
            .send()
            .await
    }

    pub async fn cancel_payment(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&CANCEL).path_param(id).send().await
    }

    pub async fn list_payment_methods(&self) -> ApiResult<Value> {
        self.client.call(&LIST_METHODS).send().await
    }

    pub async fn add_payment_method<T: Serialize + ?Sized>(&self, method: &T) -> ApiResult<Value> {
        self.client.call(&ADD_METHOD).json(method).send().await
    }

    pub async fn remove_payment_method(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&REMOVE_METHOD).path_param(id).send().await
    }
}
