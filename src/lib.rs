//! Seasonal room pricing service.
//!
//! Exposes `POST /predict`, which applies a month-based multiplier to a base
//! nightly rate, and `GET /health`.

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::ServerConfig;
pub use error::{AppError, Result};

/// Build the application router.
///
/// Handlers are stateless, so there is no shared state to thread through.
/// Every route allows any origin.
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .merge(pricing::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
