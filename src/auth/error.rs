// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! Authentication and authorization errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::roles::Role;

/// Terminal per-request authentication/authorization failures.
///
/// `Unauthenticated` covers both "no credential present" and "invalid or
/// expired token"; the response text never reveals which one occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No credential, or a credential that failed verification.
    Unauthenticated,
    /// The token's subject does not exist in the user store.
    AccountNotFound,
    /// The account has been deactivated.
    AccountDeactivated,
    /// The account is temporarily locked.
    AccountLocked,
    /// The authenticated role is not in the route's allowed set.
    Forbidden(Role),
    /// The user store could not complete the lookup.
    StoreUnavailable,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Unauthenticated => "unauthenticated",
            AuthError::AccountNotFound => "account_not_found",
            AuthError::AccountDeactivated => "account_deactivated",
            AuthError::AccountLocked => "account_locked",
            AuthError::Forbidden(_) => "forbidden",
            AuthError::StoreUnavailable => "store_unavailable",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Unauthenticated | AuthError::AccountDeactivated => StatusCode::UNAUTHORIZED,
            AuthError::AccountNotFound => StatusCode::NOT_FOUND,
            AuthError::AccountLocked => StatusCode::LOCKED,
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
            // From the client's perspective authentication could not be
            // completed; the store's failure detail stays in the logs.
            AuthError::StoreUnavailable => StatusCode::UNAUTHORIZED,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Unauthenticated | AuthError::StoreUnavailable => {
                write!(f, "Not authorized to access this route")
            }
            AuthError::AccountNotFound => write!(f, "No user found with this id"),
            AuthError::AccountDeactivated => write!(f, "User account is deactivated"),
            AuthError::AccountLocked => write!(
                f,
                "Account is temporarily locked due to too many failed login attempts"
            ),
            AuthError::Forbidden(role) => {
                write!(f, "User role {role} is not authorized to access this route")
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}
