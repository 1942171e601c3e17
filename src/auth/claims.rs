// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! Access-token claims and the authenticated-user representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{UserAccount, UserId};

use super::roles::Role;

/// Claims carried by an access token.
///
/// Tokens are issued by the account-management subsystem at login; this
/// server only verifies them. The subject is the account id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the account id.
    pub sub: String,
    /// Issued-at timestamp (Unix seconds).
    pub iat: i64,
    /// Expiration timestamp (Unix seconds).
    pub exp: i64,
}

/// Authenticated user attached to a request after successful mandatory
/// enforcement, or by optional enforcement when the full pipeline succeeds.
///
/// Built from the user-store record, not from the token, so the role and
/// contact fields reflect the account as of this request's single store
/// read. Immutable for the remainder of the request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Canonical account id (token `sub` claim).
    pub user_id: UserId,
    /// Contact email from the account record.
    pub email: String,
    /// Role used for route authorization.
    pub role: Role,
}

impl AuthenticatedUser {
    /// Condense a resolved account record into the request-attached identity.
    pub fn from_account(account: &UserAccount) -> Self {
        Self {
            user_id: account.id.clone(),
            email: account.email.clone(),
            role: account.role,
        }
    }

    /// Check if this user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
