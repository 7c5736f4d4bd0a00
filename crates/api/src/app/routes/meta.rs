//! Reference-code catalog endpoints.
//!
//! `/codes/:key` reads the key as a type code on POST (create under a
//! type) and as a code id everywhere else; the router needs one
//! parameter name per path.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use backoffice_auth::{ADMIN, USER};
use backoffice_catalog::{CodeId, NewCode};
use backoffice_core::PageRequest;

use crate::app::errors::{catalog_error_to_response, json_error};
use crate::app::routes::common::require_role;
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/codesByType/:codeType", get(codes_by_type))
        .route("/codesByType/:codeType/all", get(codes_by_type_all))
        .route(
            "/codes/:key",
            get(get_code)
                .post(create_code)
                .put(replace_code)
                .patch(patch_code),
        )
        .route("/codes/:key/deprecate", post(deprecate_code))
        .route("/codes/:key/undeprecate", post(undeprecate_code))
}

fn parse_code_id(key: &str) -> Result<CodeId, axum::response::Response> {
    key.parse::<Uuid>().map(CodeId::from).map_err(|_| {
        json_error(StatusCode::BAD_REQUEST, "invalid_input", "invalid code id")
    })
}

/// GET /meta/codesByType/:codeType — deprecated codes excluded.
pub async fn codes_by_type(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(code_type): Path<String>,
    Query(page): Query<PageRequest>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, USER) {
        return resp;
    }

    match services.catalog.list_by_type(&code_type, &page, false) {
        Ok(listing) => Json(listing).into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}

/// GET /meta/codesByType/:codeType/all — everything, deprecated
/// included.
pub async fn codes_by_type_all(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(code_type): Path<String>,
    Query(page): Query<PageRequest>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }

    match services.catalog.list_by_type(&code_type, &page, true) {
        Ok(listing) => Json(listing).into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}

/// GET /meta/codes/:codeId
pub async fn get_code(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(key): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, USER) {
        return resp;
    }
    let id = match parse_code_id(&key) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.catalog.get_code(&id) {
        Ok(code) => Json(code).into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}

/// POST /meta/codes/:codeType — create a code under a type.
pub async fn create_code(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(key): Path<String>,
    Json(body): Json<NewCode>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }

    match services.catalog.create_code(&key, body) {
        Ok(code) => (StatusCode::CREATED, Json(code)).into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}

/// PUT /meta/codes/:codeId — full replace of the mutable fields.
pub async fn replace_code(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(key): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }
    let id = match parse_code_id(&key) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.catalog.replace_code(&id, &body) {
        Ok(code) => Json(code).into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}

/// PATCH /meta/codes/:codeId — partial update.
pub async fn patch_code(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(key): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }
    let id = match parse_code_id(&key) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.catalog.patch_code(&id, &body) {
        Ok(code) => Json(code).into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}

/// POST /meta/codes/:codeId/deprecate
pub async fn deprecate_code(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(key): Path<String>,
) -> axum::response::Response {
    set_deprecated(services, ctx, &key, true).await
}

/// POST /meta/codes/:codeId/undeprecate
pub async fn undeprecate_code(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(key): Path<String>,
) -> axum::response::Response {
    set_deprecated(services, ctx, &key, false).await
}

async fn set_deprecated(
    services: Arc<AppServices>,
    ctx: AuthContext,
    key: &str,
    deprecated: bool,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }
    let id = match parse_code_id(key) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.catalog.set_deprecated(&id, deprecated) {
        Ok(code) => Json(code).into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}
