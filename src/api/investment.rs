// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Investment opportunities and the investor's commitments to them.

use serde::Serialize;
use serde_json::Value;

use super::common::{Page, PAGE, PER_PAGE, STATUS};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, QueryParam};

const LIST_OPPORTUNITIES: Endpoint = Endpoint::get("/investments/opportunities").with_query(&[
    PAGE,
    PER_PAGE,
    QueryParam::plain("category"),
    QueryParam::plain("risk_level"),
    QueryParam::plain("min_investment"),
    STATUS,
]);
const GET_OPPORTUNITY: Endpoint = Endpoint::get("/investments/opportunities/{id}");
const CREATE: Endpoint = Endpoint::post("/investments");
const LIST: Endpoint = Endpoint::get("/investments").with_query(&[STATUS, PAGE, PER_PAGE]);
const GET: Endpoint = Endpoint::get("/investments/{id}");
const CANCEL: Endpoint = Endpoint::post("/investments/{id}/cancel");

#[derive(Debug, Clone, Default, Serialize)]
pub struct OpportunityListOptions {
    #[serde(flatten)]
    pub page: Page,
    pub category: Option<String>,
    pub risk_level: Option<String>,
    pub min_investment: Option<u64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvestmentListOptions {
    pub status: Option<String>,
    #[serde(flatten)]
    pub page: Page,
}

#[derive(Debug, Clone, Copy)]
pub struct InvestmentApi<'a> {
    client: &'a ApiClient,
}

impl<'a> InvestmentApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_opportunities<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST_OPPORTUNITIES).query(options).send().await
    }

    pub async fn get_opportunity(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET_OPPORTUNITY).path_param(id).send().await
    }

    pub async fn create_investment<T: Serialize + ?Sized>(&self, investment: &T) -> ApiResult<Value> {
        self.client.call(&CREATE).json(investment).send().await
    }

    pub async fn list_investments<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST).query(options).send().await
    }

    pub async fn get_investment(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET).path_param(id).send().await
    }

    pub async fn cancel_investment(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&CANCEL).path_param(id).send().await
    }
}
