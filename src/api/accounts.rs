// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Investment accounts, their balances and activity.

use serde::Serialize;
use serde_json::Value;

use super::common::{DateRange, Page, END_DATE, PAGE, PER_PAGE, START_DATE, STATUS};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, QueryParam};

const LIST: Endpoint = Endpoint::get("/accounts").with_query(&[
    PAGE,
    PER_PAGE,
    STATUS,
    QueryParam::plain("account_type"),
]);
const GET: Endpoint = Endpoint::get("/accounts/{id}");
const CREATE: Endpoint = Endpoint::post("/accounts");
const UPDATE: Endpoint = Endpoint::patch("/accounts/{id}");
const CLOSE: Endpoint = Endpoint::delete("/accounts/{id}");
const BALANCES: Endpoint = Endpoint::get("/accounts/{id}/balances");
const ACTIVITY: Endpoint =
    Endpoint::get("/accounts/{id}/activity").with_query(&[PAGE, PER_PAGE, START_DATE, END_DATE]);

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountListOptions {
    #[serde(flatten)]
    pub page: Page,
    pub status: Option<String>,
    /// `individual`, `joint`, `ira`, `trust`, ...
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountActivityOptions {
    #[serde(flatten)]
    pub page: Page,
    #[serde(flatten)]
    pub range: DateRange,
}

#[derive(Debug, Clone, Copy)]
pub struct AccountsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AccountsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_accounts<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST).query(options).send().await
    }

    pub async fn get_account(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET).path_param(id).send().await
    }

    pub async fn create_account<T: Serialize + ?Sized>(&self, account: &T) -> ApiResult<Value> {
        self.client.call(&CREATE).json(account).send().await
    }

    pub async fn update_account<T: Serialize + ?Sized>(
        &self,
        id: &str,
        changes: &T,
    ) -> ApiResult<Value> {
        self.client.call(&UPDATE).path_param(id).json(changes).send().await
    }

    pub async fn close_account(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&CLOSE).path_param(id).send().await
    }

    pub async fn get_account_balances(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&BALANCES).path_param(id).send().await
    }

    pub async fn get_account_activity<Q: Serialize + ?Sized>(
        &self,
        id: &str,
        options: &Q,
    ) -> ApiResult<Value> {
        self.client
            .call(&ACTIVITY)
            .path_param(id)
            .query(options)
            .send()
            .await
    }
}
