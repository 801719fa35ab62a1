// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Portfolio views. All figures are computed server-side.

use serde::Serialize;
use serde_json::{json, Value};

use super::common::{
    DateRange, Page, SortOrder, END_DATE, PAGE, PER_PAGE, SORT_BY, SORT_ORDER, START_DATE,
};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, QueryParam};

const ASSET_CLASS: QueryParam = QueryParam::plain("asset_class");

const SUMMARY: Endpoint = Endpoint::get("/portfolio/summary");
const HOLDINGS: Endpoint =
    Endpoint::get("/portfolio/holdings").with_query(&[ASSET_CLASS, SORT_BY, SORT_ORDER]);
const PERFORMANCE: Endpoint = Endpoint::get("/portfolio/performance").with_query(&[
    QueryParam::plain("period"),
    QueryParam::plain("benchmark"),
]);
const ALLOCATION: Endpoint =
    Endpoint::get("/portfolio/allocation").with_query(&[QueryParam::plain("group_by")]);
const TRANSACTIONS: Endpoint = Endpoint::get("/portfolio/transactions").with_query(&[
    PAGE,
    PER_PAGE,
    QueryParam::plain("type"),
    START_DATE,
    END_DATE,
]);

#[derive(Debug, Clone, Default, Serialize)]
pub struct HoldingsOptions {
    pub asset_class: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformanceOptions {
    /// `1m`, `3m`, `ytd`, `1y`, `all`, ...
    pub period: Option<String>,
    pub benchmark: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioTransactionOptions {
    #[serde(flatten)]
    pub page: Page,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    #[serde(flatten)]
    pub range: DateRange,
}

#[derive(Debug, Clone, Copy)]
pub struct PortfolioApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PortfolioApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_portfolio_summary(&self) -> ApiResult<Value> {
        self.client.call(&SUMMARY).send().await
    }

    pub async fn get_holdings<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&HOLDINGS).query(options).send().await
    }

    pub async fn get_performance<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&PERFORMANCE).query(options).send().await
    }

    /// Allocation breakdown grouped by `asset_class`, `sector`, `region`, ...
    pub async fn get_allocation(&self, group_by: Option<&str>) -> ApiResult<Value> {
        self.client
            .call(&ALLOCATION)
            .query(&json!({ "group_by": group_by }))
            .send()
            .await
    }

    pub async fn get_portfolio_transactions<Q: Serialize + ?Sized>(
        &self,
        options: &Q,
    ) -> ApiResult<Value> {
        self.client.call(&TRANSACTIONS).query(options).send().await
    }
}
