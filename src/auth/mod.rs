// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! # Authentication and Authorization Core
//!
//! Turns an inbound credential into a trusted identity, enforces
//! account-lifecycle policy and gates route access by role.
//!
//! ## Request Flow
//!
//! 1. [`credentials`] pulls the candidate token (`Authorization: Bearer`
//!    header first, `token` cookie second)
//! 2. [`token`] verifies signature and expiry against the shared secret
//! 3. the user store resolves the subject to a live account (the one await
//!    point in the pipeline)
//! 4. [`policy`] checks the account is active and not locked
//! 5. the identity is attached to the request; [`roles`] gates role-limited
//!    routes afterwards
//!
//! ## Enforcement Modes
//!
//! [`middleware::require_auth`] rejects on any failure with the status and
//! message of the failing stage. [`middleware::optional_auth`] runs the same
//! pipeline but degrades to anonymous on every failure, a degraded user
//! store included, so optional routes keep serving through store incidents.
//! Role gating exists only behind mandatory enforcement.

pub mod claims;
pub mod credentials;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod pipeline;
pub mod policy;
pub mod roles;
pub mod token;

pub use claims::AuthenticatedUser;
pub use error::AuthError;
pub use extractor::{Auth, OptionalAuth};
pub use roles::Role;
