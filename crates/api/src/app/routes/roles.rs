//! Role listing. Readable by any authenticated user.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
};

use backoffice_auth::USER;
use backoffice_core::{PageRequest, list};

use crate::app::routes::common::require_role;
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new().route("/", get(list_roles))
}

/// GET /roles
pub async fn list_roles(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Query(page): Query<PageRequest>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, USER) {
        return resp;
    }

    let listing = list(services.registry.roles().to_vec(), &page);
    Json(listing).into_response()
}
