// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `5000` |
//! | `APP_ENV` | Deployment environment reported by `/health` | `development` |
//! | `JWT_SECRET` | Shared secret for signing/verifying access tokens | Required |
//! | `JWT_TTL_SECS` | Lifetime of issued access tokens in seconds | `604800` (7 days) |
//! | `FRONTEND_URL` | Allowed CORS origin for the web frontend | Permissive CORS |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |
//! | `SEED_ADMIN_ID` | Seed a demo admin account with this id at startup | Unset |
//! | `SEED_USER_ID` | Seed a demo user account with this id at startup | Unset |

/// Environment variable name for the deployment environment label.
pub const APP_ENV_ENV: &str = "APP_ENV";

/// Default deployment environment label.
pub const DEFAULT_APP_ENV: &str = "development";

/// Environment variable name for the shared token-signing secret.
///
/// The secret is loaded exactly once at startup and held for the lifetime of
/// the process. Startup fails if it is not set; there is no fallback value.
/// Rotation requires a restart.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable name for the issued-token lifetime in seconds.
pub const JWT_TTL_ENV: &str = "JWT_TTL_SECS";

/// Default lifetime of issued access tokens: 7 days.
pub const DEFAULT_JWT_TTL_SECS: i64 = 604_800;

/// Environment variable name for the frontend origin allowed by CORS.
///
/// When unset the server falls back to a permissive CORS policy, which is
/// only acceptable for local development.
pub const FRONTEND_URL_ENV: &str = "FRONTEND_URL";

/// Environment variable names for startup demo seeding.
///
/// When set, an active account with the given id is inserted into the
/// in-memory user store and a bearer token for it is written to the log so
/// the API can be exercised without a separate identity provisioning step.
pub const SEED_ADMIN_ID_ENV: &str = "SEED_ADMIN_ID";
pub const SEED_USER_ID_ENV: &str = "SEED_USER_ID";
