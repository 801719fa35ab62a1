// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory session store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{SessionError, SessionResult, SessionStore};

/// Process-local session store.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self.entries.write().map_err(|_| SessionError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self.entries.write().map_err(|_| SessionError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn set_many(&self, batch: &[(&str, String)]) -> SessionResult<()> {
        let mut entries = self.entries.write().map_err(|_| SessionError::Poisoned)?;
        for (key, value) in batch {
            entries.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> SessionResult<()> {
        let mut entries = self.entries.write().map_err(|_| SessionError::Poisoned)?;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }

    fn write_batch(&self, set: &[(&str, String)], remove: &[&str]) -> SessionResult<()> {
        let mut entries = self.entries.write().map_err(|_| SessionError::Poisoned)?;
        for (key, value) in set {
            entries.insert((*key).to_string(), value.clone());
        }
        for key in remove {
            entries.remove(*key);
        }
        Ok(())
    }
}
