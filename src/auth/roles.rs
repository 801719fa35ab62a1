// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User roles for client-side gating.

use serde::{Deserialize, Serialize};

/// Roles carried in the cached user snapshot.
///
/// These only decide what the client offers to show. The backend enforces
/// the real permissions.
///
/// ## Role Hierarchy
///
/// - `Admin` - everything
/// - `Manager` - CRM and advisor tooling
/// - `Advisor` - advisor tooling
/// - `Investor` - own portfolio only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Advisor,
    Investor,
}

impl Role {
    /// Check if this role has at least the privileges of the required role.
    pub fn has_privilege(&self, required: Role) -> bool {
        match (self, required) {
            (Role::Admin, _) => true,
            (Role::Manager, Role::Manager | Role::Advisor) => true,
            (Role::Advisor, Role::Advisor) => true,
            (Role::Investor, Role::Investor) => true,
            _ => false,
        }
    }

    /// Parse role from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_lowercase().as_str() {
            "admin" | "superadmin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "advisor" => Some(Role::Advisor),
            "investor" | "client" | "user" => Some(Role::Investor),
            _ => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Investor
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Advisor => write!(f, "advisor"),
            Role::Investor => write!(f, "investor"),
        }
    }
}
