use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use backoffice_auth::{RoleRegistry, TokenKeys, extract_bearer};
use backoffice_identity::UserId;

use crate::app::errors::json_error;
use crate::context::AuthContext;

#[derive(Clone)]
pub struct AuthState {
    pub keys: Arc<TokenKeys>,
    pub registry: RoleRegistry,
}

/// The one body every credential failure answers with.
fn unauthorized() -> Response {
    json_error(
        StatusCode::UNAUTHORIZED,
        "unauthorized",
        "missing or invalid credential",
    )
}

/// Derive the [`AuthContext`] from the bearer token.
///
/// Every failure (missing header, malformed or expired token, role
/// code the registry does not know) collapses into the same 401
/// envelope; the distinction only reaches the logs.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = extract_bearer(header).map_err(|err| {
        tracing::debug!(error = %err, "rejected request credential");
        unauthorized()
    })?;

    let claims = state.keys.verify(token).map_err(|err| {
        tracing::debug!(error = %err, "rejected session token");
        unauthorized()
    })?;

    let role = state
        .registry
        .find_by_code(&claims.role)
        .map_err(|err| {
            tracing::debug!(error = %err, "token carries unknown role");
            unauthorized()
        })?
        .clone();

    req.extensions_mut()
        .insert(AuthContext::new(UserId::from(claims.sub), role));

    Ok(next.run(req).await)
}
