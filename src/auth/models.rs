// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Auth Data Models
//!
//! Request bodies are declared in camelCase and snake-cased on the way out,
//! like every other outbound payload. [`TokenPair`] is read from the raw
//! snake_case response; [`UserSnapshot`] from the camel-cased `user` object.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::Role;

// =============================================================================
// Credentials
// =============================================================================

/// Access + refresh credentials issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Cached profile fields of the signed-in user.
///
/// Never a source of truth; refreshed whenever the backend returns a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub kyc_verified: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
    /// Remaining profile fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserSnapshot {
    /// Parsed role; unknown role names yield `None`.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    /// Client-side gate: does the cached role cover `required`?
    pub fn has_role(&self, required: Role) -> bool {
        self.role()
            .map(|role| role.has_privilege(required))
            .unwrap_or(false)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

// =============================================================================
// Requests
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    pub accept_terms: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// One-time second-factor code, when the caller already has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_code: Option<String>,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            otp_code: None,
        }
    }

    pub fn with_otp(mut self, code: impl Into<String>) -> Self {
        self.otp_code = Some(code.into());
        self
    }
}

/// What a one-time code is being requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    Login,
    TwoFactorSetup,
    PasswordReset,
    EmailVerification,
    Withdrawal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRequest {
    pub email: String,
    pub purpose: OtpPurpose,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Temporary token from a second-factor challenge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<OtpPurpose>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// =============================================================================
// Outcomes
// =============================================================================

/// Result of a call that issued credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub tokens: TokenPair,
    pub user: Option<UserSnapshot>,
    /// Full camel-cased response body.
    pub response: Value,
}

/// Second-factor step requested by the backend instead of credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondFactorChallenge {
    /// Token to present with the code in the follow-up verification.
    pub temp_token: Option<String>,
    /// Delivery method (`totp`, `sms`, `email`, ...), when reported.
    pub method: Option<String>,
    /// Full camel-cased challenge payload.
    pub payload: Value,
}

/// Outcome of [`AuthApi::login`](super::AuthApi::login).
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated(AuthSession),
    SecondFactorRequired(SecondFactorChallenge),
}

impl LoginOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginOutcome::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_snapshot_accepts_numeric_id_and_keeps_extra_fields() {
        let user: UserSnapshot = serde_json::from_value(json!({
            "id": 42,
            "email": "ada@example.com",
            "role": "Advisor",
            "emailVerified": true,
            "preferredCurrency": "EUR"
        }))
        .unwrap();

        assert_eq!(user.id, "42");
        assert!(user.email_verified);
        assert!(!user.kyc_verified);
        assert_eq!(user.role(), Some(Role::Advisor));
        assert_eq!(user.extra.get("preferredCurrency"), Some(&json!("EUR")));
    }

    #[test]
    fn user_snapshot_rejects_missing_id() {
        let result: Result<UserSnapshot, _> = serde_json::from_value(json!({ "email": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_role_grants_nothing() {
        let user: UserSnapshot =
            serde_json::from_value(json!({ "id": "u1", "role": "auditor" })).unwrap();
        assert_eq!(user.role(), None);
        assert!(!user.has_role(Role::Investor));
    }

    #[test]
    fn login_request_omits_missing_otp() {
        let body = serde_json::to_value(LoginRequest::new("a@b.c", "pw")).unwrap();
        assert_eq!(body, json!({ "email": "a@b.c", "password": "pw" }));

        let body = serde_json::to_value(LoginRequest::new("a@b.c", "pw").with_otp("123456")).unwrap();
        assert_eq!(body["otpCode"], "123456");
    }

    #[test]
    fn otp_purpose_serializes_snake_case() {
        let body = serde_json::to_value(OtpRequest {
            email: "a@b.c".into(),
            purpose: OtpPurpose::PasswordReset,
        })
        .unwrap();
        assert_eq!(body["purpose"], "password_reset");
    }
}
