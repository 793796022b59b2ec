//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Health banner
//! GET  /health                 - Liveness check
//!
//! # Products
//! GET  /api/products           - Product listing (?search=&category=)
//! GET  /api/products/{id}      - Product detail
//!
//! # Analytics events
//! POST /api/events             - Track an event
//! GET  /api/events             - List tracked events (?type=)
//! ```

pub mod events;
pub mod products;

use axum::{
    Router,
    routing::get,
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the event routes router.
pub fn event_routes() -> Router<AppState> {
    Router::new().route("/", get(events::list).post(events::track))
}

/// Create all routes for the storefront API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .nest("/api/products", product_routes())
        .nest("/api/events", event_routes())
}

/// Root health banner, kept for parity with deployment checks.
async fn banner() -> &'static str {
    "Comercial Torres Backend is running"
}
