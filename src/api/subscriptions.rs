// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Service plans, the user's subscription and its invoices.

use serde::Serialize;
use serde_json::{json, Value};

use super::common::{Page, PAGE, PER_PAGE, STATUS};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, QueryParam};

const PLANS: Endpoint =
    Endpoint::get("/subscriptions/plans").with_query(&[QueryParam::plain("billing_interval")]);
const CURRENT: Endpoint = Endpoint::get("/subscriptions/current");
const SUBSCRIBE: Endpoint = Endpoint::post("/subscriptions");
const CHANGE_PLAN: Endpoint = Endpoint::patch("/subscriptions/{id}");
const CANCEL: Endpoint = Endpoint::post("/subscriptions/{id}/cancel");
const INVOICES: Endpoint =
    Endpoint::get("/subscriptions/invoices").with_query(&[PAGE, PER_PAGE, STATUS]);

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceListOptions {
    #[serde(flatten)]
    pub page: Page,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct SubscriptionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SubscriptionsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Available plans, optionally for one `billing_interval` (`monthly`, `annual`).
    pub async fn list_plans(&self, billing_interval: Option<&str>) -> ApiResult<Value> {
        self.client
            .call(&PLANS)
            .query(&json!({ "billing_interval": billing_interval }))
            .send()
            .await
    }

    pub async fn get_current_subscription(&self) -> ApiResult<Value> {
        self.client.call(&CURRENT).send().await
    }

    pub async fn subscribe<T: Serialize + ?Sized>(&self, subscription: &T) -> ApiResult<Value> {
        self.client.call(&SUBSCRIBE).json(subscription).send().await
    }

    pub async fn change_plan(&self, subscription_id: &str, plan_id: &str) -> ApiResult<Value> {
        self.client
            .call(&CHANGE_PLAN)
            .path_param(subscription_id)
            .json(&json!({ "plan_id": plan_id }))
            .send()
            .await
    }

    pub async fn cancel_subscription(
        &self,
        subscription_id: &str,
        reason: Option<&str>,
    ) -> ApiResult<Value> {
        self.client
            .call(&CANCEL)
            .path_param(subscription_id)
            .json(&json!({ "reason": reason }))
            .send()
            .await
    }

    pub async fn list_invoices<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&INVOICES).query(options).send().await
    }
}
