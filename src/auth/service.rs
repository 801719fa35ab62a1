// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Auth Operations
//!
//! [`AuthApi`] wraps the `/auth/*` and `/users/me` endpoints and owns the
//! token lifecycle: credentials returned by the backend are persisted in one
//! batch, and [`AuthApi::logout`] / [`AuthApi::clear_tokens`] remove them.
//!
//! Responses are inspected in their raw snake_case form. When the body wraps
//! its payload in a top-level `data` object, that object is inspected instead.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::models::{
    AuthSession, ChangePasswordRequest, LoginOutcome, LoginRequest, OtpRequest,
    RegisterRequest, ResetPasswordRequest, SecondFactorChallenge, TokenPair, UserSnapshot,
    VerifyOtpRequest,
};
use crate::case::camelize;
use crate::error::{ApiError, ApiResult};
use crate::http::{ApiClient, Endpoint, Inbound};

const REGISTER: Endpoint = Endpoint::post("/auth/register").with_inbound(Inbound::AsIs);
const LOGIN: Endpoint = Endpoint::post("/auth/login").with_inbound(Inbound::AsIs);
const REFRESH: Endpoint = Endpoint::post("/auth/refresh").with_inbound(Inbound::AsIs);
const LOGOUT: Endpoint = Endpoint::post("/auth/logout");
const REQUEST_OTP: Endpoint = Endpoint::post("/auth/otp/request");
const VERIFY_OTP: Endpoint = Endpoint::post("/auth/otp/verify").with_inbound(Inbound::AsIs);
const REQUEST_PASSWORD_RESET: Endpoint = Endpoint::post("/auth/password-reset/request");
const RESET_PASSWORD: Endpoint = Endpoint::post("/auth/password-reset/confirm");
const VERIFY_EMAIL: Endpoint = Endpoint::post("/auth/verify-email").with_inbound(Inbound::AsIs);
const RESEND_VERIFICATION: Endpoint = Endpoint::post("/auth/verify-email/resend");
const GET_PROFILE: Endpoint = Endpoint::get("/users/me").with_inbound(Inbound::AsIs);
const UPDATE_PROFILE: Endpoint = Endpoint::patch("/users/me").with_inbound(Inbound::AsIs);
const CHANGE_PASSWORD: Endpoint = Endpoint::post("/auth/change-password");

/// Authentication and profile operations.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an account. Credentials in the response are persisted.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<Value> {
        let body = self.client.call(&REGISTER).json(request).send().await?;
        if let Some(session) = self.persist_if_issued(&body)? {
            info!(user_id = ?session.user.as_ref().map(|u| u.id.as_str()), "Registered and signed in");
        } else {
            info!("Registered; awaiting verification before sign-in");
        }
        Ok(camelize(body))
    }

    /// Sign in with email and password (and an optional one-time code).
    ///
    /// Storage is only written when the backend issued both tokens. A
    /// second-factor challenge is returned as
    /// [`LoginOutcome::SecondFactorRequired`] with storage untouched.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginOutcome> {
        let body = self.client.call(&LOGIN).json(request).send().await?;
        let payload = payload(&body);

        if let Some(tokens) = extract_tokens(payload) {
            let user = extract_user(payload);
            self.client.tokens().save_session(&tokens, user.as_ref())?;
            info!(user_id = ?user.as_ref().map(|u| u.id.as_str()), "Signed in");
            return Ok(LoginOutcome::Authenticated(AuthSession {
                tokens,
                user,
                response: camelize(body),
            }));
        }

        let schema = &self.client.config().challenge;
        if payload.get(&schema.flag_field).is_some_and(is_truthy) {
            let challenge = SecondFactorChallenge {
                temp_token: string_field(payload, &schema.temp_token_field),
                method: string_field(payload, &schema.method_field),
                payload: camelize(payload.clone()),
            };
            info!(method = ?challenge.method, "Second factor required");
            return Ok(LoginOutcome::SecondFactorRequired(challenge));
        }

        Err(ApiError::InvalidResponse(
            "login response carried neither tokens nor a second-factor challenge".to_string(),
        ))
    }

    /// Exchange the stored refresh token for a new pair.
    ///
    /// Fails with [`ApiError::NotAuthenticated`] before any request when no
    /// refresh token is stored.
    pub async fn refresh_token(&self) -> ApiResult<TokenPair> {
        let tokens = self.client.tokens();
        let refresh_token = tokens.refresh_token().ok_or(ApiError::NotAuthenticated)?;

        let body = self
            .client
            .call(&REFRESH)
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await?;
        let payload = payload(&body);

        let access_token = string_field(payload, "access_token").ok_or_else(|| {
            ApiError::InvalidResponse("refresh response has no access_token".to_string())
        })?;
        let pair = TokenPair {
            access_token,
            refresh_token: string_field(payload, "refresh_token").unwrap_or(refresh_token),
            expires_in: payload.get("expires_in").and_then(Value::as_u64),
        };

        tokens.save(&pair, None)?;
        info!("Access token refreshed");
        Ok(pair)
    }

    pub async fn request_otp(&self, request: &OtpRequest) -> ApiResult<Value> {
        self.client.call(&REQUEST_OTP).json(request).send().await
    }

    /// Verify a one-time code. When this completes a second-factor login the
    /// issued credentials are persisted.
    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> ApiResult<Value> {
        let body = self.client.call(&VERIFY_OTP).json(request).send().await?;
        if self.persist_if_issued(&body)?.is_some() {
            info!("Second factor verified; signed in");
        }
        Ok(camelize(body))
    }

    pub async fn request_password_reset(&self, email: &str) -> ApiResult<Value> {
        self.client
            .call(&REQUEST_PASSWORD_RESET)
            .json(&json!({ "email": email }))
            .send()
            .await
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<Value> {
        self.client.call(&RESET_PASSWORD).json(request).send().await
    }

    /// Confirm an email address. A returned user refreshes the cached snapshot.
    pub async fn verify_email(&self, token: &str) -> ApiResult<Value> {
        let body = self
            .client
            .call(&VERIFY_EMAIL)
            .json(&json!({ "token": token }))
            .send()
            .await?;
        if let Some(user) = extract_user(payload(&body)) {
            self.client.tokens().save_user(&user)?;
        }
        Ok(camelize(body))
    }

    pub async fn resend_verification_email(&self, email: &str) -> ApiResult<Value> {
        self.client
            .call(&RESEND_VERIFICATION)
            .json(&json!({ "email": email }))
            .send()
            .await
    }

    /// Fetch the signed-in user's profile and refresh the cached snapshot.
    pub async fn get_user_profile(&self) -> ApiResult<UserSnapshot> {
        let body = self.client.call(&GET_PROFILE).send().await?;
        self.cache_profile(body)
    }

    /// Update profile fields and refresh the cached snapshot.
    pub async fn update_user_profile<T: Serialize + ?Sized>(
        &self,
        changes: &T,
    ) -> ApiResult<UserSnapshot> {
        let body = self.client.call(&UPDATE_PROFILE).json(changes).send().await?;
        self.cache_profile(body)
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<Value> {
        self.client.call(&CHANGE_PASSWORD).json(request).send().await
    }

    /// Revoke the session server-side and clear local credentials.
    ///
    /// Local credentials are cleared even when the request fails; the
    /// request error is returned afterwards.
    pub async fn logout(&self) -> ApiResult<()> {
        let tokens = self.client.tokens();
        let result = if tokens.is_authenticated() {
            let body = match tokens.refresh_token() {
                Some(refresh_token) => json!({ "refresh_token": refresh_token }),
                None => json!({}),
            };
            self.client.call(&LOGOUT).json(&body).send().await.map(drop)
        } else {
            Ok(())
        };

        tokens.clear()?;
        match &result {
            Ok(()) => info!("Signed out"),
            Err(e) => warn!(error = %e, "Server-side logout failed; local session cleared"),
        }
        result
    }

    /// True iff a non-empty access token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.client.tokens().is_authenticated()
    }

    /// Remove both tokens and the cached user. Safe to call repeatedly.
    pub fn clear_tokens(&self) -> ApiResult<()> {
        self.client.tokens().clear()
    }

    /// Cached snapshot of the signed-in user.
    pub fn current_user(&self) -> Option<UserSnapshot> {
        self.client.tokens().user()
    }

    fn persist_if_issued(&self, body: &Value) -> ApiResult<Option<AuthSession>> {
        let payload = payload(body);
        let Some(tokens) = extract_tokens(payload) else {
            return Ok(None);
        };
        let user = extract_user(payload);
        self.client.tokens().save_session(&tokens, user.as_ref())?;
        Ok(Some(AuthSession {
            tokens,
            user,
            response: camelize(body.clone()),
        }))
    }

    fn cache_profile(&self, body: Value) -> ApiResult<UserSnapshot> {
        let payload = payload(&body);
        let raw = payload.get("user").unwrap_or(payload);
        let user: UserSnapshot = serde_json::from_value(camelize(raw.clone()))
            .map_err(|e| ApiError::InvalidResponse(format!("unexpected profile shape: {e}")))?;
        self.client.tokens().save_user(&user)?;
        Ok(user)
    }
}

/// The `data` object when the body is enveloped, else the body.
fn payload(body: &Value) -> &Value {
    match body.get("data") {
        Some(data @ Value::Object(_)) => data,
        _ => body,
    }
}

fn string_field(payload: &Value, field: &str) -> Option<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn extract_tokens(payload: &Value) -> Option<TokenPair> {
    Some(TokenPair {
        access_token: string_field(payload, "access_token")?,
        refresh_token: string_field(payload, "refresh_token")?,
        expires_in: payload.get("expires_in").and_then(Value::as_u64),
    })
}

fn extract_user(payload: &Value) -> Option<UserSnapshot> {
    let raw = payload.get("user").filter(|u| u.is_object())?;
    match serde_json::from_value(camelize(raw.clone())) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable user object in auth response");
            None
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{OtpPurpose, Role};
    use crate::config::{ChallengeSchema, ClientConfig};
    use crate::http::{Method, RequestBody};
    use crate::session::TokenStorage;
    use crate::test_support::{mock_client, MockTransport};
    use std::sync::Arc;

    fn login_body() -> Value {
        json!({
            "access_token": "acc-1",
            "refresh_token": "ref-1",
            "expires_in": 900,
            "user": {
                "id": 7,
                "email": "ada@example.com",
                "first_name": "Ada",
                "role": "advisor",
                "two_factor_enabled": false
            }
        })
    }

    async fn signed_in() -> (ApiClient, Arc<MockTransport>) {
        let (client, mock) = mock_client();
        mock.push_json(200, login_body());
        client
            .auth()
            .login(&LoginRequest::new("ada@example.com", "pw"))
            .await
            .unwrap();
        (client, mock)
    }

    #[tokio::test]
    async fn login_persists_tokens_and_user() {
        let (client, mock) = mock_client();
        mock.push_json(200, login_body());

        let outcome = client
            .auth()
            .login(&LoginRequest::new("ada@example.com", "pw").with_otp("123456"))
            .await
            .unwrap();

        let LoginOutcome::Authenticated(session) = outcome else {
            panic!("expected an authenticated session");
        };
        assert_eq!(session.tokens.access_token, "acc-1");
        assert_eq!(session.tokens.expires_in, Some(900));
        assert_eq!(session.response["user"]["firstName"], json!("Ada"));

        let auth = client.auth();
        assert!(auth.is_authenticated());
        assert_eq!(client.tokens().access_token().as_deref(), Some("acc-1"));
        assert_eq!(client.tokens().refresh_token().as_deref(), Some("ref-1"));

        let user = auth.current_user().unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert!(user.has_role(Role::Advisor));
        assert!(!user.has_role(Role::Manager));

        let request = mock.last_request();
        assert_eq!(request.path, "/auth/login");
        assert_eq!(
            request.body,
            RequestBody::Json(json!({
                "email": "ada@example.com",
                "password": "pw",
                "otp_code": "123456"
            }))
        );
    }

    #[tokio::test]
    async fn second_login_without_user_drops_previous_snapshot() {
        let (client, mock) = signed_in().await;
        assert!(client.auth().current_user().is_some());

        mock.push_json(200, json!({ "access_token": "b1", "refresh_token": "r2" }));
        let outcome = client
            .auth()
            .login(&LoginRequest::new("bob@example.com", "pw"))
            .await
            .unwrap();

        assert!(outcome.is_authenticated());
        assert_eq!(client.tokens().access_token().as_deref(), Some("b1"));
        assert_eq!(client.tokens().refresh_token().as_deref(), Some("r2"));
        assert_eq!(client.auth().current_user(), None);
    }

    #[tokio::test]
    async fn login_with_unreadable_user_drops_previous_snapshot() {
        let (client, mock) = signed_in().await;
        mock.push_json(
            200,
            json!({
                "access_token": "b1",
                "refresh_token": "r2",
                "user": { "email": "bob@example.com" }
            }),
        );

        client
            .auth()
            .login(&LoginRequest::new("bob@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(client.auth().current_user(), None);
    }

    #[tokio::test]
    async fn login_reads_enveloped_tokens() {
        let (client, mock) = mock_client();
        mock.push_json(200, json!({ "data": login_body(), "message": "ok" }));

        let outcome = client
            .auth()
            .login(&LoginRequest::new("ada@example.com", "pw"))
            .await
            .unwrap();
        assert!(outcome.is_authenticated());
        assert!(client.is_authenticated());
    }

    #[tokio::test]
    async fn second_factor_challenge_leaves_storage_untouched() {
        let (client, mock) = mock_client();
        mock.push_json(
            200,
            json!({
                "requires_2fa": true,
                "temp_token": "tmp-9",
                "two_factor_method": "totp"
            }),
        );

        let outcome = client
            .auth()
            .login(&LoginRequest::new("ada@example.com", "pw"))
            .await
            .unwrap();

        let LoginOutcome::SecondFactorRequired(challenge) = outcome else {
            panic!("expected a challenge");
        };
        assert_eq!(challenge.temp_token.as_deref(), Some("tmp-9"));
        assert_eq!(challenge.method.as_deref(), Some("totp"));
        assert_eq!(challenge.payload["tempToken"], json!("tmp-9"));

        assert!(!client.is_authenticated());
        assert_eq!(client.tokens().refresh_token(), None);
        assert_eq!(client.auth().current_user(), None);
    }

    #[tokio::test]
    async fn challenge_schema_is_configurable() {
        let mock = Arc::new(MockTransport::new());
        let config = ClientConfig::default().with_challenge_schema(ChallengeSchema {
            flag_field: "mfa_required".to_string(),
            temp_token_field: "mfa_token".to_string(),
            method_field: "mfa_channel".to_string(),
        });
        let client = ApiClient::with_transport(config, mock.clone(), TokenStorage::in_memory());
        mock.push_json(200, json!({ "mfa_required": 1, "mfa_token": "m-1", "mfa_channel": "sms" }));

        let outcome = client
            .auth()
            .login(&LoginRequest::new("a@b.c", "pw"))
            .await
            .unwrap();
        let LoginOutcome::SecondFactorRequired(challenge) = outcome else {
            panic!("expected a challenge");
        };
        assert_eq!(challenge.temp_token.as_deref(), Some("m-1"));
        assert_eq!(challenge.method.as_deref(), Some("sms"));
    }

    #[tokio::test]
    async fn login_without_tokens_or_challenge_is_invalid() {
        let (client, mock) = mock_client();
        mock.push_json(200, json!({ "access_token": "only-one", "requires_2fa": false }));

        let err = client
            .auth()
            .login(&LoginRequest::new("a@b.c", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn failed_login_surfaces_status() {
        let (client, mock) = mock_client();
        mock.push_json(401, json!({ "detail": "Invalid credentials" }));

        let err = client
            .auth()
            .login(&LoginRequest::new("a@b.c", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn clear_tokens_signs_out_locally() {
        let (client, _mock) = signed_in().await;
        let auth = client.auth();

        auth.clear_tokens().unwrap();
        assert!(!auth.is_authenticated());
        assert_eq!(client.tokens().access_token(), None);
        assert_eq!(client.tokens().refresh_token(), None);
        assert_eq!(auth.current_user(), None);

        auth.clear_tokens().unwrap();
    }

    #[tokio::test]
    async fn register_persists_only_when_tokens_issued() {
        let (client, mock) = mock_client();
        mock.push_json(201, json!({ "message": "Check your inbox", "user_id": 3 }));

        let request = RegisterRequest {
            email: "ada@example.com".into(),
            password: "pw".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            phone_number: None,
            referral_code: Some("FRIEND".into()),
            accept_terms: true,
        };
        let body = client.auth().register(&request).await.unwrap();
        assert_eq!(body["userId"], json!(3));
        assert!(!client.is_authenticated());
        assert_eq!(
            mock.last_request().body,
            RequestBody::Json(json!({
                "email": "ada@example.com",
                "password": "pw",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "referral_code": "FRIEND",
                "accept_terms": true
            }))
        );

        mock.push_json(201, login_body());
        client.auth().register(&request).await.unwrap();
        assert!(client.is_authenticated());
    }

    #[tokio::test]
    async fn refresh_rotates_tokens() {
        let (client, mock) = signed_in().await;
        mock.push_json(200, json!({ "access_token": "acc-2", "refresh_token": "ref-2" }));

        let pair = client.auth().refresh_token().await.unwrap();
        assert_eq!(pair.access_token, "acc-2");

        let request = mock.last_request();
        assert_eq!(request.path, "/auth/refresh");
        assert_eq!(request.body, RequestBody::Json(json!({ "refresh_token": "ref-1" })));
        assert_eq!(client.tokens().refresh_token().as_deref(), Some("ref-2"));
        assert!(client.auth().current_user().is_some());
    }

    #[tokio::test]
    async fn refresh_keeps_refresh_token_when_not_rotated() {
        let (client, mock) = signed_in().await;
        mock.push_json(200, json!({ "data": { "access_token": "acc-3" } }));

        client.auth().refresh_token().await.unwrap();
        assert_eq!(client.tokens().access_token().as_deref(), Some("acc-3"));
        assert_eq!(client.tokens().refresh_token().as_deref(), Some("ref-1"));
    }

    #[tokio::test]
    async fn refresh_without_token_makes_no_request() {
        let (client, mock) = mock_client();
        let err = client.auth().refresh_token().await.unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn verify_otp_completes_second_factor_login() {
        let (client, mock) = mock_client();
        mock.push_json(200, login_body());

        let request = VerifyOtpRequest {
            code: "654321".into(),
            temp_token: Some("tmp-9".into()),
            purpose: Some(OtpPurpose::Login),
            ..Default::default()
        };
        client.auth().verify_otp(&request).await.unwrap();

        assert!(client.is_authenticated());
        assert_eq!(
            mock.last_request().body,
            RequestBody::Json(json!({
                "code": "654321",
                "temp_token": "tmp-9",
                "purpose": "login"
            }))
        );
    }

    #[tokio::test]
    async fn verify_otp_without_user_drops_previous_snapshot() {
        let (client, mock) = signed_in().await;
        mock.push_json(200, json!({ "data": { "access_token": "b1", "refresh_token": "r2" } }));

        let request = VerifyOtpRequest {
            code: "654321".into(),
            temp_token: Some("tmp-9".into()),
            purpose: Some(OtpPurpose::Login),
            ..Default::default()
        };
        client.auth().verify_otp(&request).await.unwrap();

        assert_eq!(client.tokens().access_token().as_deref(), Some("b1"));
        assert_eq!(client.auth().current_user(), None);
    }

    #[tokio::test]
    async fn otp_and_password_flows_hit_their_paths() {
        let (client, mock) = mock_client();
        let auth = client.auth();
        for _ in 0..5 {
            mock.push_json(200, json!({ "message": "sent" }));
        }

        auth.request_otp(&OtpRequest {
            email: "a@b.c".into(),
            purpose: OtpPurpose::PasswordReset,
        })
        .await
        .unwrap();
        auth.request_password_reset("a@b.c").await.unwrap();
        auth.reset_password(&ResetPasswordRequest {
            token: "t".into(),
            new_password: "n".into(),
        })
        .await
        .unwrap();
        auth.resend_verification_email("a@b.c").await.unwrap();
        auth.change_password(&ChangePasswordRequest {
            current_password: "o".into(),
            new_password: "n".into(),
        })
        .await
        .unwrap();

        let paths: Vec<_> = mock.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/auth/otp/request",
                "/auth/password-reset/request",
                "/auth/password-reset/confirm",
                "/auth/verify-email/resend",
                "/auth/change-password",
            ]
        );
        assert_eq!(
            mock.requests()[2].body,
            RequestBody::Json(json!({ "token": "t", "new_password": "n" }))
        );
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn verify_email_refreshes_cached_user() {
        let (client, mock) = signed_in().await;
        mock.push_json(
            200,
            json!({ "message": "verified", "user": { "id": 7, "email_verified": true } }),
        );

        let body = client.auth().verify_email("tok").await.unwrap();
        assert_eq!(body["message"], json!("verified"));
        assert!(client.auth().current_user().unwrap().email_verified);
    }

    #[tokio::test]
    async fn profile_reads_refresh_snapshot() {
        let (client, mock) = signed_in().await;
        mock.push_json(
            200,
            json!({ "data": { "id": 7, "first_name": "Augusta", "kyc_verified": true } }),
        );

        let user = client.auth().get_user_profile().await.unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Augusta"));
        assert_eq!(client.auth().current_user(), Some(user));
        assert_eq!(mock.last_request().method, Method::Get);
        assert_eq!(mock.last_request().header("Authorization"), Some("Bearer acc-1"));
    }

    #[tokio::test]
    async fn update_profile_snake_cases_changes() {
        let (client, mock) = signed_in().await;
        mock.push_json(200, json!({ "user": { "id": 7, "last_name": "King" } }));

        let user = client
            .auth()
            .update_user_profile(&json!({ "lastName": "King" }))
            .await
            .unwrap();
        assert_eq!(user.last_name.as_deref(), Some("King"));

        let request = mock.last_request();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.body, RequestBody::Json(json!({ "last_name": "King" })));
    }

    #[tokio::test]
    async fn logout_clears_even_when_request_fails() {
        let (client, mock) = signed_in().await;
        mock.push_json(500, json!({ "message": "boom" }));

        let err = client.auth().logout().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(!client.is_authenticated());
        assert_eq!(
            mock.last_request().body,
            RequestBody::Json(json!({ "refresh_token": "ref-1" }))
        );
    }

    #[tokio::test]
    async fn logout_when_signed_out_is_local_only() {
        let (client, mock) = mock_client();
        client.auth().logout().await.unwrap();
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn disabled_store_makes_persistence_a_no_op() {
        let mock = Arc::new(MockTransport::new());
        let client = ApiClient::with_transport(
            ClientConfig::default(),
            mock.clone(),
            TokenStorage::new(Arc::new(crate::session::DisabledSessionStore)),
        );
        mock.push_json(200, login_body());

        let outcome = client
            .auth()
            .login(&LoginRequest::new("ada@example.com", "pw"))
            .await
            .unwrap();
        assert!(outcome.is_authenticated());
        assert!(!client.is_authenticated());
        assert_eq!(client.auth().current_user(), None);
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("True")));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("no")));
    }
}
