// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Advisor CRM
//!
//! Client management for advisors and managers.
//!
//! The updates feed is optional for most roles: when the backend answers
//! 401 or 403, [`CrmApi::get_crm_updates`] returns an empty feed instead of
//! failing. No other operation downgrades errors.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use super::common::{Page, SortOrder, PAGE, PER_PAGE, SEARCH, SORT_BY, SORT_ORDER, STATUS};
use crate::error::ApiResult;
use crate::http::{ApiClient, Endpoint, QueryParam};

const LIST_USERS: Endpoint = Endpoint::get("/crm/users").with_query(&[
    PAGE,
    PER_PAGE,
    SEARCH,
    QueryParam::plain("role"),
    STATUS,
    SORT_BY,
    SORT_ORDER,
]);
const GET_USER: Endpoint = Endpoint::get("/crm/users/{id}");
const UPDATE_USER: Endpoint = Endpoint::patch("/crm/users/{id}");
const DASHBOARD: Endpoint =
    Endpoint::get("/crm/dashboard/overview").with_query(&[QueryParam::plain("period")]);
const GET_UPDATES: Endpoint = Endpoint::get("/crm/updates").with_query(&[
    QueryParam::plain("limit"),
    QueryParam::plain("since"),
    QueryParam::plain("category"),
]);
const CREATE_UPDATE: Endpoint = Endpoint::post("/crm/updates");

const UPDATES_UNAVAILABLE: &str = "Updates not available";

#[derive(Debug, Clone, Default, Serialize)]
pub struct CrmUserListOptions {
    #[serde(flatten)]
    pub page: Page,
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CrmUpdatesOptions {
    pub limit: Option<u32>,
    pub since: Option<DateTime<Utc>>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct CrmApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CrmApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_crm_users<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        self.client.call(&LIST_USERS).query(options).send().await
    }

    pub async fn get_crm_user(&self, id: &str) -> ApiResult<Value> {
        self.client.call(&GET_USER).path_param(id).send().await
    }

    pub async fn update_crm_user<T: Serialize + ?Sized>(
        &self,
        id: &str,
        changes: &T,
    ) -> ApiResult<Value> {
        self.client
            .call(&UPDATE_USER)
            .path_param(id)
            .json(changes)
            .send()
            .await
    }

    /// Dashboard aggregates for `period` (`7d`, `30d`, `90d`, `1y`, ...).
    pub async fn get_dashboard_overview(&self, period: Option<&str>) -> ApiResult<Value> {
        self.client
            .call(&DASHBOARD)
            .query(&json!({ "period": period }))
            .send()
            .await
    }

    /// Recent CRM activity.
    ///
    /// A 401 or 403 yields `{ "data": [], "message": "Updates not available" }`.
    pub async fn get_crm_updates<Q: Serialize + ?Sized>(&self, options: &Q) -> ApiResult<Value> {
        match self.client.call(&GET_UPDATES).query(options).send().await {
            Err(e) if e.is_auth_denied() => {
                warn!(status = ?e.status(), "CRM updates not available for this session");
                Ok(json!({ "data": [], "message": UPDATES_UNAVAILABLE }))
            }
            other => other,
        }
    }

    pub async fn create_crm_update<T: Serialize + ?Sized>(&self, update: &T) -> ApiResult<Value> {
        self.client.call(&CREATE_UPDATE).json(update).send().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::{Method, RequestBody};
    use crate::test_support::mock_client;
    use chrono::TimeZone;

    #[tokio::test]
    async fn updates_forbidden_downgrades_to_empty_feed() {
        let (client, mock) = mock_client();
        mock.push_json(403, json!({ "detail": "Forbidden" }));

        let body = client
            .crm()
            .get_crm_updates(&CrmUpdatesOptions::default())
            .await
            .unwrap();
        assert_eq!(body, json!({ "data": [], "message": "Updates not available" }));
    }

    #[tokio::test]
    async fn updates_unauthorized_downgrades_too() {
        let (client, mock) = mock_client();
        mock.push_json(401, json!({}));

        let body = client.crm().get_crm_updates(&json!({})).await.unwrap();
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn updates_other_errors_propagate() {
        let (client, mock) = mock_client();
        mock.push_json(500, json!({ "message": "boom" }));
        mock.push_error(ApiError::Transport("reset".into()));

        let err = client.crm().get_crm_updates(&json!({})).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        let err = client.crm().get_crm_updates(&json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn other_operations_do_not_downgrade() {
        let (client, mock) = mock_client();
        mock.push_json(403, json!({ "detail": "Forbidden" }));

        let err = client
            .crm()
            .list_crm_users(&CrmUserListOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
    }

    #[tokio::test]
    async fn updates_query_and_shape() {
        let (client, mock) = mock_client();
        mock.push_json(
            200,
            json!({ "data": [{ "update_type": "note", "created_at": "2024-05-01T00:00:00Z" }] }),
        );

        let body = client
            .crm()
            .get_crm_updates(&CrmUpdatesOptions {
                limit: Some(10),
                since: Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()),
                category: None,
            })
            .await
            .unwrap();
        assert_eq!(body["data"][0]["updateType"], json!("note"));

        let request = mock.last_request();
        assert_eq!(request.path, "/crm/updates");
        assert_eq!(request.query_value("limit"), Some("10"));
        assert_eq!(request.query_value("since"), Some("2024-05-01T00:00:00Z"));
        assert_eq!(request.query_value("category"), None);
    }

    #[tokio::test]
    async fn users_and_dashboard() {
        let (client, mock) = mock_client();
        let crm = client.crm();
        mock.push_json(200, json!({ "data": [], "pagination": { "total_pages": 0 } }));
        mock.push_json(200, json!({ "data": { "id": 5 } }));
        mock.push_json(200, json!({ "total_aum": 1000 }));
        mock.push_json(201, json!({ "data": { "id": 1 } }));

        let list = crm
            .list_crm_users(&CrmUserListOptions {
                role: Some("investor".into()),
                sort_order: Some(SortOrder::Desc),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(list["pagination"], json!({ "total_pages": 0 }));
        let first = mock.last_request();
        assert_eq!(first.query_value("role"), Some("investor"));
        assert_eq!(first.query_value("sort_order"), Some("desc"));

        crm.update_crm_user("5", &json!({ "riskProfile": "moderate" }))
            .await
            .unwrap();
        let update = mock.last_request();
        assert_eq!(update.method, Method::Patch);
        assert_eq!(update.path, "/crm/users/5");
        assert_eq!(update.body, RequestBody::Json(json!({ "risk_profile": "moderate" })));

        let overview = crm.get_dashboard_overview(Some("30d")).await.unwrap();
        assert_eq!(overview, json!({ "totalAum": 1000 }));
        assert_eq!(mock.last_request().query_value("period"), Some("30d"));

        crm.create_crm_update(&json!({ "clientId": 5, "body": "Called" }))
            .await
            .unwrap();
        assert_eq!(
            mock.last_request().body,
            RequestBody::Json(json!({ "client_id": 5, "body": "Called" }))
        );
    }
}
