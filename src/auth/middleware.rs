// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! Enforcement middleware for Axum.
//!
//! Three layers compose the authentication core into the router:
//!
//! - [`require_auth`]: mandatory enforcement. Any pipeline failure rejects
//!   the request before the handler runs; success attaches the identity to
//!   the request extensions.
//! - [`optional_auth`]: optional enforcement. The same pipeline, but every
//!   failure (a degraded user store included) collapses to anonymous
//!   continuation. This layer never rejects; it only ever enriches.
//! - [`authorize_roles`]: role gate. Layered strictly inside
//!   [`require_auth`]; checks the attached identity's role against the
//!   route's allowed-role set.
//!
//! The two enforcement modes stay separate entry points because their
//! failure handling diverges at every stage, not just at the end.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

use super::claims::AuthenticatedUser;
use super::pipeline::authenticate;
use super::roles::{authorize, Role};

/// Mandatory enforcement: reject on any authentication failure.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(request.headers(), &state).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

/// Optional enforcement: attach an identity when the full pipeline
/// succeeds, continue anonymously otherwise.
pub async fn optional_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Ok(user) = authenticate(request.headers(), &state).await {
        request.extensions_mut().insert(user);
    }
    next.run(request).await
}

/// Role gate over the identity attached by [`require_auth`].
///
/// Reaching this without an attached identity is a router wiring bug, not a
/// client error; it renders as a 500 rather than leaking an auth status.
pub async fn authorize_roles(
    allowed: &'static [Role],
    request: Request,
    next: Next,
) -> Response {
    let Some(user) = request.extensions().get::<AuthenticatedUser>() else {
        tracing::error!("role gate reached without an authenticated identity");
        return ApiError::internal("internal server error").into_response();
    };

    match authorize(user.role, allowed) {
        Ok(()) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}
