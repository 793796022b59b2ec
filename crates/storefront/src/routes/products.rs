//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use torres_core::{Category, Product, ProductCriteria, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Catalog query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// List products matching the query.
///
/// An unknown category label matches nothing, it is not an error.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    let category = match query.category.as_deref() {
        Some(label) => match label.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => return Ok(Json(Vec::new())),
        },
        None => None,
    };

    let criteria = ProductCriteria {
        search: query.search,
        category,
    };

    let products = state.catalog().find_all(&criteria)?;
    Ok(Json(products))
}

/// Fetch a single product by id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .find_by_id(ProductId::new(id))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::StorefrontConfig;
    use crate::routes;
    use crate::state::AppState;

    fn test_app() -> axum::Router {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            events_forward: None,
            sentry_dsn: None,
        };
        routes::routes().with_state(AppState::new(config))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_index_returns_full_catalog() {
        let (status, json) = get_json("/api/products").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_index_filters_by_category() {
        let (status, json) = get_json("/api/products?category=INFANTIL").await;
        assert_eq!(status, StatusCode::OK);
        let products = json.as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p["category"] == "INFANTIL"));
    }

    #[tokio::test]
    async fn test_index_unknown_category_is_empty_not_error() {
        let (status, json) = get_json("/api/products?category=CALZADO").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_index_search_matches_name_and_brand() {
        let (status, json) = get_json("/api/products?search=power").await;
        assert_eq!(status, StatusCode::OK);
        let products = json.as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["brand"], "Power");
    }

    #[tokio::test]
    async fn test_show_found() {
        let (status, json) = get_json("/api/products/5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Tacones Elegantes");
        assert_eq!(json["priceNew"], 199.90);
    }

    #[tokio::test]
    async fn test_show_not_found() {
        let (status, json) = get_json("/api/products/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Product not found");
    }
}
