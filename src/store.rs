// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! User-store collaborator.
//!
//! The authentication core talks to the user store through the [`UserStore`]
//! trait and only ever looks accounts up by identifier. The production
//! deployment backs this with the account database; [`InMemoryUserStore`]
//! is the in-process implementation used for development and tests.
//!
//! "No such user" and "lookup failed" are different outcomes: the former is
//! `Ok(None)`, the latter is [`StoreError`]. Callers must not conflate them.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{UserAccount, UserId};

/// Failure of the user-store collaborator itself.
///
/// Timeout and cancellation of the underlying lookup are the store
/// implementation's responsibility; a hung backend must surface here rather
/// than block the request pipeline indefinitely.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not complete the lookup.
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

/// Identifier lookup against the user store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the account with the given id.
    ///
    /// Returns `Ok(None)` when no such account exists.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserAccount>, StoreError>;
}

/// In-memory user store.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, UserAccount>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an account.
    pub async fn insert(&self, account: UserAccount) {
        self.users
            .write()
            .await
            .insert(account.id.clone(), account);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserAccount>, StoreError> {
        Ok(self.users.read().await.get(id).cloned())
    }
}

/// Store stub whose lookups always fail, for exercising degraded-store
/// paths in tests.
#[cfg(test)]
pub struct FailingUserStore;

#[cfg(test)]
#[async_trait]
impl UserStore for FailingUserStore {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<UserAccount>, StoreError> {
        Err(StoreError::Unavailable("injected failure".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    #[tokio::test]
    async fn find_by_id_returns_inserted_account() {
        let store = InMemoryUserStore::new();
        let account = UserAccount::new(UserId::from("user_1"), "u@ht.test", "U", Role::User);
        store.insert(account.clone()).await;

        let found = store.find_by_id(&UserId::from("user_1")).await.unwrap();
        assert_eq!(found, Some(account));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let store = InMemoryUserStore::new();
        let found = store.find_by_id(&UserId::from("missing")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn insert_replaces_existing_account() {
        let store = InMemoryUserStore::new();
        let mut account = UserAccount::new(UserId::from("user_1"), "u@ht.test", "U", Role::User);
        store.insert(account.clone()).await;

        account.is_active = false;
        store.insert(account).await;

        let found = store
            .find_by_id(&UserId::from("user_1"))
            .await
            .unwrap()
            .unwrap();
        assert!(!found.is_active);
    }
}
