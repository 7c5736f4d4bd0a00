use axum::http::StatusCode;

/// GET /health — liveness only, no auth.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
