// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Banking
//!
//! Linked external bank accounts and money movement between them and the
//! platform.
//!
//! ## Linking Flow
//!
//! 1. `link_bank_account` with routing/account details or an aggregator token
//! 2. `verify_bank_account` with the micro-deposit amounts (when required)
//! 3. `create_transfer` once the account is verified

use serde::Serialize;
use serde_json::Value;

use super::common::{DateRange, Page, END_DATE, PAGE, PER_PAGE, START_DATE};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, QueryParam};

const LIST_ACCOUNTS: Endpoint = Endpoint::get("/banking/accounts");
const LINK_ACCOUNT: Endpoint = Endpoint::post("/banking/accounts");
const UNLINK_ACCOUNT: Endpoint = Endpoint::delete("/banking/accounts/{id}");
const VERIFY_ACCOUNT: Endpoint = Endpoint::post("/banking/accounts/{id}/verify");
const LIST_TRANSACTIONS: Endpoint = Endpoint::get("/banking/transactions").with_query(&[
    QueryParam::plain("account_id"),
    QueryParam::plain("type"),
    START_DATE,
    END_DATE,
    PAGE,
    PER_PAGE,
]);
const CREATE_TRANSFER: Endpoint = Endpoint::post("/banking/transfers");
const GET_TRANSFER: Endpoint = Endpoint::get("/banking/transfers/{id}");

#[derive(Debug, Clone, Default, Serialize)]
pub struct BankTransactionOptions {
    pub account_id: Option<String>,
    /// `deposit` or `withdrawal`.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    #[serde(flatten)]
    pub range: DateRange,
    #[serde(flatten)]
    pub page: Page,
}

#[derive(Debug, Clone, Copy)]
pub struct BankingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BankingApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_bank_accounts(&self) -> ApiResult<Value> {
        self.client.call(&LIST_ACCOUNTS).send().await
    }

    pub async fn link_bank_account<T: Serialize + ?Sized>(&self, details: &T) -> ApiResult<Value> {
        self.client.call(&LINK_ACCOUNT).json(details).send().await
    }

    pub async fn unlink_bank_account(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&UNLINK_ACCOUNT).path_param(id).send().await
    }

    pub async fn verify_bank_account<T: Serialize + ?Sized>(
        &self,
        id: &str,
        verification: &T,
    ) -> ApiResult<Value> {
        self.client
            .call(&VERIFY_ACCOUNT)
            .path_param(id)
            .json(verification)
            .send()
            .await
    }

    pub async fn list_bank_transactions<Q: Serialize + ?Sized>(
        &self,
        options: &Q,
    ) -> ApiResult<Value> {
        self.client.call(&LIST_TRANSACTIONS).query(options).send().await
    }

    pub async fn create_transfer<T: Serialize + ?Sized>(&self, transfer: &T) -> ApiResult<Value> {
        self.client.call(&CREATE_TRANSFER).json(transfer).send().await
    }

    pub async fn get_transfer(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET_TRANSFER).path_param(id).send().await
    }
}
