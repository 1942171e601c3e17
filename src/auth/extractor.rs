// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! Axum extractors for authenticated users.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```
//!
//! When a route already sits behind [`super::middleware::require_auth`] the
//! extractor just picks the identity out of the request extensions; on bare
//! routes it runs the full pipeline itself.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::state::AppState;

use super::claims::AuthenticatedUser;
use super::error::AuthError;
use super::pipeline::authenticate;

/// Extractor for authenticated users (mandatory enforcement).
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // First check if middleware already attached the identity.
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>().cloned() {
            return Ok(Auth(user));
        }

        let user = authenticate(&parts.headers, state).await?;
        Ok(Auth(user))
    }
}

/// Optional authentication extractor.
///
/// Returns `None` instead of rejecting when no valid identity can be
/// established; never fails.
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match Auth::from_request_parts(parts, state).await {
            Ok(Auth(user)) => Ok(OptionalAuth(Some(user))),
            Err(_) => Ok(OptionalAuth(None)),
        }
    }
}
