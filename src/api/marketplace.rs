// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Secondary Marketplace
//!
//! Investors list positions for sale; other investors make offers that the
//! seller accepts or rejects.

use serde::Serialize;
use serde_json::Value;

use super::common::{Page, PAGE, PER_PAGE, SEARCH, SORT_BY, STATUS};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, QueryParam};

const LIST_LISTINGS: Endpoint = Endpoint::get("/marketplace/listings").with_query(&[
    PAGE,
    PER_PAGE,
    QueryParam::plain("category"),
    SEARCH,
    QueryParam::plain("min_price"),
    QueryParam::plain("max_price"),
    SORT_BY,
]);
const GET_LISTING: Endpoint = Endpoint::get("/marketplace/listings/{id}");
const CREATE_LISTING: Endpoint = Endpoint::post("/marketplace/listings");
const UPDATE_LISTING: Endpoint = Endpoint::patch("/marketplace/listings/{id}");
const WITHDRAW_LISTING: Endpoint = Endpoint::delete("/marketplace/listings/{id}");
const MAKE_OFFER: Endpoint = Endpoint::post("/marketplace/listings/{id}/offers");
const LIST_OFFERS: Endpoint = Endpoint::get("/marketplace/offers")
    .with_query(&[STATUS, QueryParam::plain("role")]);
const ACCEPT_OFFER: Endpoint = Endpoint::post("/marketplace/offers/{id}/accept");
const REJECT_OFFER: Endpoint = Endpoint::post("/marketplace/offers/{id}/reject");

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingOptions {
    #[serde(flatten)]
    pub page: Page,
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OfferListOptions {
    pub status: Option<String>,
    /// `buyer` or `seller`.
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct MarketplaceApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MarketplaceApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_listings<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST_LISTINGS).query(options).send().await
    }

    pub async fn get_listing(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET_LISTING).path_param(id).send().await
    }

    pub async fn create_listing<T: Serialize + ?Sized>(&self, listing: &T) -> ApiResult<Value> {
        self.client.call(&CREATE_LISTING).json(listing).send().await
    }

    pub async fn update_listing<T: Serialize + ?Sized>(
        &self,
        id: &str,
        changes: &T,
    ) -> ApiResult<Value> {
        self.client
            .call(&UPDATE_LISTING)
            .path_param(id)
            .json(changes)
            .send()
            .await
    }

    pub async fn withdraw_listing(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&WITHDRAW_LISTING).path_param(id).send().await
    }

    pub async fn make_offer<T: Serialize + ?Sized>(
        &self,
        listing_id: &str,
        offer: &T,
    ) -> ApiResult<Value> {
        self.client
            .call(&MAKE_OFFER)
            .path_param(listing_id)
            .json(offer)
            .send()
            .await
    }

    pub async fn list_offers<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST_OFFERS).query(options).send().await
    }

    pub async fn accept_offer(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&ACCEPT_OFFER).path_param(id).send().await
    }

    pub async fn reject_offer(&self, id: &str, reason: Option<&str>) -> ApiResult<Value> {
        let call = self.client.call(&REJECT_OFFER).path_param(id);
        match reason {
            Some(reason) => call.json(&serde_json::json!({ "reason": reason })).send().await,
            None => call.send().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Method, RequestBody};
    use crate::test_support::mock_client;
    use serde_json::json;

    #[tokio::test]
    async fn listings_price_filter() {
        let (client, mock) = mock_client();
        mock.push_json(200, json!({ "data": [{ "asking_price": 12.5 }] }));

        let body = client
            .marketplace()
            .list_listings(&ListingOptions {
                min_price: Some(10.0),
                max_price: Some(99.5),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(body["data"][0]["askingPrice"], json!(12.5));

        let request = mock.last_request();
        assert_eq!(request.query_value("min_price"), Some("10.0"));
        assert_eq!(request.query_value("max_price"), Some("99.5"));
    }

    #[tokio::test]
    async fn listing_lifecycle() {
        let (client, mock) = mock_client();
        let market = client.marketplace();
        for _ in 0..4 {
            mock.push_json(200, json!({ "data": {} }));
        }

        market
            .create_listing(&json!({ "holdingId": "h1", "askingPrice": 100 }))
            .await
            .unwrap();
        market
            .update_listing("l1", &json!({ "askingPrice": 95 }))
            .await
            .unwrap();
        market
            .make_offer("l1", &json!({ "offerPrice": 90, "quantity": 10 }))
            .await
            .unwrap();
        market.withdraw_listing("l1").await.unwrap();

        let requests = mock.requests();
        assert_eq!(
            requests[0].body,
            RequestBody::Json(json!({ "holding_id": "h1", "asking_price": 100 }))
        );
        assert_eq!(requests[1].method, Method::Patch);
        assert_eq!(requests[2].path, "/marketplace/listings/l1/offers");
        assert_eq!(
            requests[2].body,
            RequestBody::Json(json!({ "offer_price": 90, "quantity": 10 }))
        );
        assert_eq!(requests[3].method, Method::Delete);
    }

    #[tokio::test]
    async fn offers_accept_reject() {
        let (client, mock) = mock_client();
        let market = client.marketplace();
        for _ in 0..4 {
            mock.push_json(200, json!({ "data": [] }));
        }

        market
            .list_offers(&OfferListOptions {
                role: Some("seller".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(mock.last_request().query_value("role"), Some("seller"));

        market.accept_offer("of1").await.unwrap();
        assert_eq!(mock.last_request().path, "/marketplace/offers/of1/accept");

        market.reject_offer("of2", Some("Too low")).await.unwrap();
        let reject = mock.last_request();
        assert_eq!(reject.path, "/marketplace/offers/of2/reject");
        assert_eq!(reject.body, RequestBody::Json(json!({ "reason": "Too low" })));

        market.reject_offer("of3", None).await.unwrap();
        assert_eq!(mock.last_request().body, RequestBody::Empty);
    }
}
