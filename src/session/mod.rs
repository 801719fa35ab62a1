// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Session Storage
//!
//! Key-value persistence for the bearer credentials and the cached user
//! snapshot. The storage backend is injected through [`SessionStore`] so it
//! can be swapped per environment and mocked in tests.
//!
//! ## Backends
//!
//! | Store | Persistence |
//! |-------|-------------|
//! | [`MemorySessionStore`] | process lifetime |
//! | [`FileSessionStore`] | JSON file, atomic rewrite on every change |
//! | [`DisabledSessionStore`] | none; reads return `None`, writes are no-ops |
//!
//! ## Keys
//!
//! ```text
//! access_token    # bearer credential
//! refresh_token   # long-lived credential for /auth/refresh
//! user_info       # JSON-serialized UserSnapshot
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

pub mod file;
pub mod memory;
pub mod tokens;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use tokens::{TokenStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_INFO_KEY};

/// Error raised by a session backend.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session store lock poisoned")]
    Poisoned,
}

/// Result type for session backends.
pub type SessionResult<T> = Result<T, SessionError>;

/// Key-value storage for session state.
///
/// Reads are synchronous and always observe the latest completed write made
/// through the same store.
pub trait SessionStore: Send + Sync {
    /// Read a value. Missing keys and unavailable backends both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> SessionResult<()>;

    /// Store several values as one unit.
    ///
    /// Backends that can apply the batch atomically override this.
    fn set_many(&self, entries: &[(&str, String)]) -> SessionResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Remove several keys as one unit.
    fn remove_many(&self, keys: &[&str]) -> SessionResult<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }

    /// Store `set` and remove `remove` as one unit.
    fn write_batch(&self, set: &[(&str, String)], remove: &[&str]) -> SessionResult<()> {
        self.set_many(set)?;
        self.remove_many(remove)
    }
}

/// Store used when no storage backend exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSessionStore;

impl SessionStore for DisabledSessionStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> SessionResult<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> SessionResult<()> {
        Ok(())
    }
}

/// Pick a backend from `WEALTH_SESSION_FILE`.
///
/// A set, non-empty variable selects a [`FileSessionStore`] at that path;
/// otherwise a fresh [`MemorySessionStore`] is returned.
pub fn session_store_from_env() -> SessionResult<Arc<dyn SessionStore>> {
    match crate::config::env_optional(crate::config::SESSION_FILE_ENV) {
        Some(path) => Ok(Arc::new(FileSessionStore::open(PathBuf::from(path))?)),
        None => Ok(Arc::new(MemorySessionStore::new())),
    }
}
