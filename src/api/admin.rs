// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! Admin-only API endpoints.
//!
//! The router wires these behind mandatory enforcement plus an
//! `{admin}` allow-list; handlers here can assume an admin identity is
//! attached.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Service statistics response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatsResponse {
    /// Seconds since the server started.
    pub uptime_seconds: i64,
    /// Server start time (RFC 3339).
    pub started_at: String,
    /// Current timestamp.
    pub timestamp: String,
}

/// Get service statistics.
#[utoipa::path(
    get,
    path = "/v1/admin/stats",
    tag = "Admin",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Service statistics", body = ServiceStatsResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
        (status = 403, description = "Forbidden - admin role required"),
    )
)]
pub async fn service_stats(State(state): State<AppState>) -> Json<ServiceStatsResponse> {
    let now = Utc::now();
    Json(ServiceStatsResponse {
        uptime_seconds: (now - state.started_at).num_seconds(),
        started_at: state.started_at.to_rfc3339(),
        timestamp: now.to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::token::TokenConfig;
    use crate::store::InMemoryUserStore;

    #[tokio::test]
    async fn stats_report_nonnegative_uptime() {
        let state = AppState::new(
            Arc::new(InMemoryUserStore::new()),
            TokenConfig::new("admin-test-secret", 3600),
        );

        let Json(stats) = service_stats(State(state)).await;
        assert!(stats.uptime_seconds >= 0);
        assert!(!stats.started_at.is_empty());
    }
}
