// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Trading
//!
//! Order entry and market data. Orders are placed with an
//! `Idempotency-Key` so a retry after a dropped connection does not place a
//! second order.

use serde::Serialize;
use serde_json::{json, Value};

use super::common::{DateRange, Page, END_DATE, PAGE, PER_PAGE, START_DATE, STATUS};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, QueryParam};

const SYMBOL: QueryParam = QueryParam::plain("symbol");

const LIST_ORDERS: Endpoint = Endpoint::get("/trading/orders").with_query(&[
    PAGE,
    PER_PAGE,
    STATUS,
    QueryParam::plain("side"),
    SYMBOL,
]);
const GET_ORDER: Endpoint = Endpoint::get("/trading/orders/{id}");
const PLACE_ORDER: Endpoint = Endpoint::post("/trading/orders");
const CANCEL_ORDER: Endpoint = Endpoint::delete("/trading/orders/{id}");
const QUOTE: Endpoint = Endpoint::get("/trading/quotes/{symbol}");
const ORDER_BOOK: Endpoint =
    Endpoint::get("/trading/order-book/{symbol}").with_query(&[QueryParam::plain("depth")]);
const LIST_TRADES: Endpoint = Endpoint::get("/trading/trades").with_query(&[
    SYMBOL,
    START_DATE,
    END_DATE,
    PAGE,
    PER_PAGE,
]);

#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderListOptions {
    #[serde(flatten)]
    pub page: Page,
    pub status: Option<String>,
    /// `buy` or `sell`.
    pub side: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TradeListOptions {
    pub symbol: Option<String>,
    #[serde(flatten)]
    pub range: DateRange,
    #[serde(flatten)]
    pub page: Page,
}

#[derive(Debug, Clone, Copy)]
pub struct TradingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TradingApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_orders<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST_ORDERS).query(options).send().await
    }

    pub async fn get_order(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET_ORDER).path_param(id).send().await
    }

    pub async fn place_order<T: Serialize + ?Sized>(
        &self,
        order: &T,
        idempotency_key: Option<String>,
    ) -> ApiResult<Value> {
        self.client
            .call(&PLACE_ORDER)
            .idempotency_key(idempotency_key)
            .json(order)
            .send()
            .await
    }

    pub async fn cancel_order(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&CANCEL_ORDER).path_param(id).send().await
    }

    pub async fn get_quote(&self, symbol: &str) -> ApiResult<Value> {
        self.client.call(&QUOTE).path_param(symbol).send().await
    }

    pub async fn get_order_book(&self, symbol: &str, depth: Option<u32>) -> ApiResult<Value> {
        self.client
            .call(&ORDER_BOOK)
            .path_param(symbol)
            .query(&json!({ "depth": depth }))
            .send()
            .await
    }

    pub async fn list_trades<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST_TRADES).query(options).send().await
    }
}
