// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer-credential storage on top of a [`SessionStore`].

use std::sync::Arc;

use tracing::warn;

use super::{MemorySessionStore, SessionStore};
use crate::auth::{TokenPair, UserSnapshot};
use crate::error::ApiResult;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_INFO_KEY: &str = "user_info";

/// Typed view over the session keys.
///
/// Clones share the same backend.
#[derive(Clone)]
pub struct TokenStorage {
    store: Arc<dyn SessionStore>,
}

impl TokenStorage {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Token storage over a fresh [`MemorySessionStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// Persist a token pair and, when given, the user snapshot in one batch.
    ///
    /// A `None` user leaves any cached snapshot in place.
    pub fn save(&self, tokens: &TokenPair, user: Option<&UserSnapshot>) -> ApiResult<()> {
        let mut entries = vec![
            (ACCESS_TOKEN_KEY, tokens.access_token.clone()),
            (REFRESH_TOKEN_KEY, tokens.refresh_token.clone()),
        ];
        if let Some(user) = user {
            entries.push((USER_INFO_KEY, serialize_user(user)?));
        }
        self.store.set_many(&entries)?;
        Ok(())
    }

    /// Persist a freshly issued sign-in.
    ///
    /// Unlike [`TokenStorage::save`], a `None` user drops any cached snapshot
    /// in the same batch, so the cache never describes another account.
    pub fn save_session(&self, tokens: &TokenPair, user: Option<&UserSnapshot>) -> ApiResult<()> {
        let mut entries = vec![
            (ACCESS_TOKEN_KEY, tokens.access_token.clone()),
            (REFRESH_TOKEN_KEY, tokens.refresh_token.clone()),
        ];
        let mut stale = Vec::new();
        match user {
            Some(user) => entries.push((USER_INFO_KEY, serialize_user(user)?)),
            None => stale.push(USER_INFO_KEY),
        }
        self.store.write_batch(&entries, &stale)?;
        Ok(())
    }

    /// Replace the cached user snapshot only.
    pub fn save_user(&self, user: &UserSnapshot) -> ApiResult<()> {
        self.store.set(USER_INFO_KEY, &serialize_user(user)?)?;
        Ok(())
    }

    pub fn access_token(&self) -> Option<String> {
        non_empty(self.store.get(ACCESS_TOKEN_KEY))
    }

    pub fn refresh_token(&self) -> Option<String> {
        non_empty(self.store.get(REFRESH_TOKEN_KEY))
    }

    /// Cached user snapshot. An unreadable blob is treated as absent.
    pub fn user(&self) -> Option<UserSnapshot> {
        let raw = self.store.get(USER_INFO_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable cached user snapshot");
                None
            }
        }
    }

    /// True iff a non-empty access token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Remove the token pair and the user snapshot. Safe to call repeatedly.
    pub fn clear(&self) -> ApiResult<()> {
        self.store
            .remove_many(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_INFO_KEY])?;
        Ok(())
    }
}

impl std::fmt::Debug for TokenStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStorage")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

fn serialize_user(user: &UserSnapshot) -> ApiResult<String> {
    serde_json::to_string(user)
        .map_err(|e| crate::error::ApiError::Storage(format!("serialize user snapshot: {e}")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
