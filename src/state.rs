// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::auth::token::TokenConfig;
use crate::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    /// User-store collaborator, shared across requests.
    pub users: Arc<dyn UserStore>,
    /// Token signing/verification material, built once at startup.
    pub tokens: Arc<TokenConfig>,
    /// Process start time, reported by the admin stats endpoint.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenConfig) -> Self {
        Self {
            users,
            tokens: Arc::new(tokens),
            started_at: Utc::now(),
        }
    }
}
