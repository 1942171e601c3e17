// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! User roles and route authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::AuthError;

/// User roles for authorization.
///
/// Routes declare the set of roles allowed to reach them; access is a plain
/// membership test. There is no privilege hierarchy: an allow-list that
/// should admit admins must name `Admin` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Normal application user.
    User,
    /// Administrative access.
    Admin,
}

impl Role {
    /// Parse role from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl Default for Role {
    /// Default role is User (least privilege for authenticated users).
    fn default() -> Self {
        Role::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Check that `role` is a member of a route's allowed-role set.
///
/// Must only be called once an identity has been attached by mandatory
/// enforcement; the router wiring guarantees that ordering.
pub fn authorize(role: Role, allowed: &[Role]) -> Result<(), AuthError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden(role))
    }
}
