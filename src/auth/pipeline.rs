// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! The request authentication pipeline.
//!
//! One deterministic, single-pass sequence shared by both enforcement
//! modes: extract the credential, verify it, resolve the identity, check
//! account policy. Every stage folds its failure into [`AuthError`]; the
//! callers in [`super::middleware`] differ only in what they do with an
//! `Err`. Mandatory enforcement rejects; optional enforcement discards it
//! and continues anonymously.
//!
//! The store lookup is the pipeline's only await point. Nothing here holds
//! state across requests.

use axum::http::HeaderMap;
use chrono::Utc;

use crate::models::UserId;
use crate::state::AppState;

use super::claims::AuthenticatedUser;
use super::credentials::extract_credential;
use super::error::AuthError;
use super::policy::{check_account, PolicyViolation};

/// Run the four-stage pipeline against a request's headers.
///
/// On success the caller attaches the returned identity to the request; the
/// identity has passed the active and lock checks as of this call's single
/// store read.
pub async fn authenticate(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<AuthenticatedUser, AuthError> {
    let credential = extract_credential(headers).ok_or(AuthError::Unauthenticated)?;

    // Missing and invalid credentials surface identically to the client.
    let claims = state
        .tokens
        .verify(&credential)
        .map_err(|_| AuthError::Unauthenticated)?;

    let subject = UserId::from(claims.sub);
    let account = state
        .users
        .find_by_id(&subject)
        .await
        .map_err(|e| {
            tracing::warn!(user_id = %subject, error = %e, "user store lookup failed");
            AuthError::StoreUnavailable
        })?
        .ok_or(AuthError::AccountNotFound)?;

    check_account(&account, Utc::now()).map_err(|violation| match violation {
        PolicyViolation::Deactivated => AuthError::AccountDeactivated,
        PolicyViolation::Locked => AuthError::AccountLocked,
    })?;

    Ok(AuthenticatedUser::from_account(&account))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::HeaderValue;
    use chrono::Duration;

    use super::*;
    use crate::auth::roles::{authorize, Role};
    use crate::auth::token::TokenConfig;
    use crate::models::UserAccount;
    use crate::store::{FailingUserStore, InMemoryUserStore};

    const SECRET: &str = "pipeline-test-secret";

    async fn state_with(accounts: Vec<UserAccount>) -> AppState {
        let store = InMemoryUserStore::new();
        for account in accounts {
            store.insert(account).await;
        }
        AppState::new(Arc::new(store), TokenConfig::new(SECRET, 3600))
    }

    fn bearer(state: &AppState, id: &UserId) -> HeaderMap {
        let token = state.tokens.issue(id).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn missing_credential_is_unauthenticated() {
        let state = state_with(vec![]).await;
        let err = authenticate(&HeaderMap::new(), &state).await.unwrap_err();
        assert_eq!(err, AuthError::Unauthenticated);
    }

    #[tokio::test]
    async fn expired_token_is_unauthenticated() {
        let id = UserId::from("user_1");
        let state = state_with(vec![UserAccount::new(
            id.clone(),
            "u@ht.test",
            "U",
            Role::User,
        )])
        .await;

        // Same state, but tokens minted with a lifetime already in the past.
        let stale = TokenConfig::new(SECRET, -3600).issue(&id).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {stale}")).unwrap(),
        );

        let err = authenticate(&headers, &state).await.unwrap_err();
        assert_eq!(err, AuthError::Unauthenticated);
        // Expiry and absence are indistinguishable from outside.
        assert_eq!(err.to_string(), "Not authorized to access this route");
    }

    #[tokio::test]
    async fn unknown_subject_is_account_not_found() {
        let state = state_with(vec![]).await;
        let headers = bearer(&state, &UserId::from("ghost"));

        let err = authenticate(&headers, &state).await.unwrap_err();
        assert_eq!(err, AuthError::AccountNotFound);
    }

    #[tokio::test]
    async fn store_failure_is_store_unavailable() {
        let state = AppState::new(Arc::new(FailingUserStore), TokenConfig::new(SECRET, 3600));
        let headers = bearer(&state, &UserId::from("user_1"));

        let err = authenticate(&headers, &state).await.unwrap_err();
        assert_eq!(err, AuthError::StoreUnavailable);
    }

    #[tokio::test]
    async fn deactivated_account_is_rejected_even_when_also_locked() {
        let id = UserId::from("user_1");
        let mut account = UserAccount::new(id.clone(), "u@ht.test", "U", Role::User);
        account.is_active = false;
        account.lock_until = Some(Utc::now() + Duration::hours(1));
        let state = state_with(vec![account]).await;

        let err = authenticate(&bearer(&state, &id), &state).await.unwrap_err();
        assert_eq!(err, AuthError::AccountDeactivated);
    }

    #[tokio::test]
    async fn locked_account_is_rejected_until_the_lock_expires() {
        let id = UserId::from("user_1");
        let mut account = UserAccount::new(id.clone(), "u@ht.test", "U", Role::User);
        account.lock_until = Some(Utc::now() + Duration::hours(1));
        let state = state_with(vec![account.clone()]).await;

        let err = authenticate(&bearer(&state, &id), &state).await.unwrap_err();
        assert_eq!(err, AuthError::AccountLocked);

        // The same account with an elapsed lock authenticates normally.
        account.lock_until = Some(Utc::now() - Duration::hours(1));
        let state = state_with(vec![account]).await;
        let user = authenticate(&bearer(&state, &id), &state).await.unwrap();
        assert_eq!(user.user_id, id);
    }

    #[tokio::test]
    async fn header_credential_wins_over_cookie_credential() {
        let id = UserId::from("user_1");
        let state = state_with(vec![UserAccount::new(
            id.clone(),
            "u@ht.test",
            "U",
            Role::User,
        )])
        .await;

        // Valid cookie, garbage header: the header must be the one consulted.
        let token = state.tokens.issue(&id).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer garbage"));
        headers.insert(
            "cookie",
            HeaderValue::from_str(&format!("token={token}")).unwrap(),
        );

        let err = authenticate(&headers, &state).await.unwrap_err();
        assert_eq!(err, AuthError::Unauthenticated);
    }

    #[tokio::test]
    async fn cookie_credential_authenticates_browser_sessions() {
        let id = UserId::from("user_1");
        let state = state_with(vec![UserAccount::new(
            id.clone(),
            "u@ht.test",
            "U",
            Role::User,
        )])
        .await;

        let token = state.tokens.issue(&id).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_str(&format!("token={token}")).unwrap(),
        );

        let user = authenticate(&headers, &state).await.unwrap();
        assert_eq!(user.user_id, id);
    }

    #[tokio::test]
    async fn attached_identity_then_fails_admin_only_authorization() {
        let id = UserId::from("user_1");
        let state = state_with(vec![UserAccount::new(
            id.clone(),
            "u@ht.test",
            "U",
            Role::User,
        )])
        .await;

        let user = authenticate(&bearer(&state, &id), &state).await.unwrap();
        assert_eq!(user.role, Role::User);

        let err = authorize(user.role, &[Role::Admin]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "User role user is not authorized to access this route"
        );
    }
}
