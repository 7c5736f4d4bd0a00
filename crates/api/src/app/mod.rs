//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: service construction and seeding
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`
/// and the black-box tests).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    let auth_state = middleware::AuthState {
        keys: services.keys.clone(),
        registry: services.registry.clone(),
    };

    // Protected routes: everything behind the session token.
    let protected = routes::router()
        .layer(Extension(services.clone()))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router().layer(Extension(services)))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
