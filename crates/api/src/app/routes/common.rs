//! Shared handler helpers.

use axum::http::StatusCode;
use axum::response::Response;

use backoffice_auth::guard;

use crate::app::errors::json_error;
use crate::app::services::AppServices;
use crate::context::AuthContext;

/// Require the caller's role to grant at least `required`.
///
/// The registry lookup of `required` can only fail on a typo in a
/// route definition, which is a server bug, not a client error.
pub fn require_role(
    services: &AppServices,
    ctx: &AuthContext,
    required: &str,
) -> Result<(), Response> {
    let required = services.registry.find_by_code(required).map_err(|err| {
        tracing::error!(error = %err, "route requires a role the registry does not know");
        json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "internal error",
        )
    })?;

    guard(ctx.role(), required)
        .map_err(|err| json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string()))
}
