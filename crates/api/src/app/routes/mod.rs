use axum::Router;

pub mod auth;
pub mod common;
pub mod meta;
pub mod roles;
pub mod system;
pub mod users;

/// Router for the public endpoints (no session token).
pub fn public_router() -> Router {
    auth::router()
}

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/users", users::router())
        .nest("/roles", roles::router())
        .nest("/meta", meta::router())
}
