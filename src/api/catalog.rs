// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 HealthTrack

//! Store catalog endpoints.
//!
//! The store page is public: anyone can browse products. Requests that
//! arrive with a valid session additionally see member pricing, so this
//! route sits behind optional enforcement.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::OptionalAuth;

/// A product in the health store.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Product {
    /// Catalog identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// List price in cents.
    pub price_cents: u32,
    /// Member price in cents; only present for authenticated requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_price_cents: Option<u32>,
}

/// Response for GET /v1/catalog/products
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    /// Available products.
    pub products: Vec<Product>,
    /// Whether member pricing is included.
    pub personalized: bool,
}

/// Members pay 90% of list price, rounded down.
const MEMBER_DISCOUNT_NUM: u32 = 9;
const MEMBER_DISCOUNT_DEN: u32 = 10;

fn base_catalog() -> Vec<Product> {
    let items: [(u32, &str, &str, u32); 6] = [
        (1, "Organic Eggs", "Protein", 599),
        (2, "Greek Yogurt", "Dairy", 499),
        (3, "Quinoa", "Grains", 799),
        (4, "Almonds", "Nuts", 899),
        (5, "Protein Powder", "Supplements", 2499),
        (6, "Blueberries", "Fruits", 699),
    ];

    items
        .into_iter()
        .map(|(id, name, category, price_cents)| Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price_cents,
            member_price_cents: None,
        })
        .collect()
}

/// List store products.
///
/// Optional enforcement: an attached identity unlocks member pricing, but
/// the route serves anonymous requests identically otherwise.
#[utoipa::path(
    get,
    path = "/v1/catalog/products",
    tag = "Catalog",
    responses(
        (status = 200, description = "Product catalog", body = CatalogResponse)
    )
)]
pub async fn list_products(OptionalAuth(user): OptionalAuth) -> Json<CatalogResponse> {
    let mut products = base_catalog();
    let personalized = user.is_some();

    if personalized {
        for product in &mut products {
            product.member_price_cents =
                Some(product.price_cents * MEMBER_DISCOUNT_NUM / MEMBER_DISCOUNT_DEN);
        }
    }

    Json(CatalogResponse {
        products,
        personalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthenticatedUser, Role};
    use crate::models::UserId;

    #[tokio::test]
    async fn anonymous_requests_see_list_prices_only() {
        let Json(response) = list_products(OptionalAuth(None)).await;
        assert!(!response.personalized);
        assert!(response
            .products
            .iter()
            .all(|p| p.member_price_cents.is_none()));
    }

    #[tokio::test]
    async fn authenticated_requests_see_member_pricing() {
        let user = AuthenticatedUser {
            user_id: UserId::from("user_1"),
            email: "u@ht.test".to_string(),
            role: Role::User,
        };

        let Json(response) = list_products(OptionalAuth(Some(user))).await;
        assert!(response.personalized);

        let eggs = &response.products[0];
        assert_eq!(eggs.price_cents, 599);
        assert_eq!(eggs.member_price_cents, Some(539));
    }
}
