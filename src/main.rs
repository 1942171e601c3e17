// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

use std::{env, net::SocketAddr, sync::Arc};

use healthtrack_server::api::router;
use healthtrack_server::auth::token::TokenConfig;
use healthtrack_server::auth::Role;
use healthtrack_server::config::{
    DEFAULT_JWT_TTL_SECS, JWT_SECRET_ENV, JWT_TTL_ENV, SEED_ADMIN_ID_ENV, SEED_USER_ID_ENV,
};
use healthtrack_server::models::{UserAccount, UserId};
use healthtrack_server::state::AppState;
use healthtrack_server::store::InMemoryUserStore;

#[tokio::main]
async fn main() {
    init_tracing();

    // The shared secret is loaded exactly once; startup fails without it.
    let secret = env::var(JWT_SECRET_ENV)
        .unwrap_or_else(|_| panic!("{JWT_SECRET_ENV} must be set"));
    let ttl_secs: i64 = env::var(JWT_TTL_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_JWT_TTL_SECS);
    let tokens = TokenConfig::new(&secret, ttl_secs);

    let store = InMemoryUserStore::new();
    seed_demo_accounts(&store, &tokens).await;

    let state = AppState::new(Arc::new(store), tokens);
    let app = router(state);

    // Parse bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!(%addr, "HealthTrack API listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

/// Seed demo accounts from the environment and log a bearer token for each,
/// so a fresh server can be exercised without separate provisioning.
async fn seed_demo_accounts(store: &InMemoryUserStore, tokens: &TokenConfig) {
    let seeds = [
        (SEED_ADMIN_ID_ENV, Role::Admin, "Demo Admin"),
        (SEED_USER_ID_ENV, Role::User, "Demo User"),
    ];

    for (env_name, role, name) in seeds {
        let Ok(id) = env::var(env_name) else {
            continue;
        };
        let id = UserId::from(id);
        let email = format!("{id}@healthtrack.local");
        store
            .insert(UserAccount::new(id.clone(), email, name, role))
            .await;

        match tokens.issue(&id) {
            Ok(token) => {
                tracing::info!(user_id = %id, role = %role, token = %token, "seeded demo account");
            }
            Err(error) => {
                tracing::warn!(user_id = %id, %error, "failed to issue demo token");
            }
        }
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}
