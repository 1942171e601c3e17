// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, Uri},
    middleware::{from_fn, from_fn_with_state, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{middleware, Role},
    config::FRONTEND_URL_ENV,
    error::ApiError,
    state::AppState,
};

pub mod admin;
pub mod catalog;
pub mod health;
pub mod users;

/// Roles allowed on `/v1/admin` routes.
const ADMIN_ROLES: &[Role] = &[Role::Admin];

async fn admin_gate(request: Request, next: Next) -> Response {
    middleware::authorize_roles(ADMIN_ROLES, request, next).await
}

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route(
            "/users/me",
            get(users::get_current_user)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_auth)),
        )
        .route(
            "/catalog/products",
            get(catalog::list_products)
                .route_layer(from_fn_with_state(state.clone(), middleware::optional_auth)),
        )
        .route(
            "/admin/stats",
            get(admin::service_stats)
                .route_layer(from_fn(admin_gate))
                .route_layer(from_fn_with_state(state.clone(), middleware::require_auth)),
        )
        .with_state(state);

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// CORS policy: restricted to the configured frontend origin (credentials
/// allowed for the session cookie), permissive for local development when
/// no origin is configured.
fn cors_layer() -> CorsLayer {
    match std::env::var(FRONTEND_URL_ENV)
        .ok()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::permissive(),
    }
}

/// Response for GET /
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// Greeting message.
    pub message: String,
    /// Server version.
    pub version: String,
    /// Where the interactive API documentation lives.
    pub documentation: String,
}

/// Welcome endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "API welcome information", body = WelcomeResponse)
    )
)]
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the HealthTrack API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documentation: "/docs".to_string(),
    })
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route {uri} not found"))
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        welcome,
        health::health,
        health::liveness,
        users::get_current_user,
        catalog::list_products,
        admin::service_stats
    ),
    components(
        schemas(
            WelcomeResponse,
            health::HealthResponse,
            health::LivenessResponse,
            users::UserMeResponse,
            catalog::Product,
            catalog::CatalogResponse,
            admin::ServiceStatsResponse,
            crate::models::UserId,
            Role
        )
    ),
    tags(
        (name = "Health", description = "Service health and metadata"),
        (name = "Users", description = "Authenticated user information"),
        (name = "Catalog", description = "Health store catalog"),
        (name = "Admin", description = "Administrative operations")
    )
)]
struct ApiDoc;

/// Registers the `bearer` security scheme referenced by the protected
/// routes' `security(...)` annotations.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
