// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! # Core Data Models
//!
//! This module defines the user-account record and the identifier newtype
//! shared by the user store, the authentication core and the REST API.
//!
//! ## User Id Type
//!
//! The [`UserId`] newtype wraps the opaque account identifier carried in the
//! `sub` claim of access tokens. It provides type safety and clear semantics.
//!
//! ## Account Lifecycle Fields
//!
//! `is_active`, `failed_login_attempts` and `lock_until` are owned and
//! mutated by the account-management subsystem. The authentication core only
//! ever reads them; see [`crate::auth::policy`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Role;

// =============================================================================
// User Id Type
// =============================================================================

/// Opaque user account identifier.
///
/// Matches the `sub` claim of issued access tokens.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub String);

impl UserId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        UserId(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

// =============================================================================
// User Account Record
// =============================================================================

/// A user account as stored by the user-store collaborator.
///
/// The authentication core reads one record per request and never writes
/// back through it. `failed_login_attempts` and `lock_until` are maintained
/// by login-failure tracking in the account-management subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserAccount {
    /// Unique account identifier.
    pub id: UserId,
    /// Contact email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role used for route authorization.
    pub role: Role,
    /// Whether the account is active. Deactivated accounts cannot
    /// authenticate.
    pub is_active: bool,
    /// Consecutive failed login attempts recorded by account management.
    pub failed_login_attempts: u32,
    /// When set and in the future, the account is temporarily locked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_until: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create an active, unlocked account with the given id and role.
    pub fn new(id: UserId, email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            role,
            is_active: true,
            failed_login_attempts: 0,
            lock_until: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_round_trips() {
        let id = UserId::from("user_123");
        assert_eq!(id.to_string(), "user_123");
        assert_eq!(String::from(id), "user_123");
    }

    #[test]
    fn new_accounts_are_active_and_unlocked() {
        let account = UserAccount::new(UserId::random(), "a@b.test", "Ada", Role::User);
        assert!(account.is_active);
        assert_eq!(account.failed_login_attempts, 0);
        assert!(account.lock_until.is_none());
    }
}
