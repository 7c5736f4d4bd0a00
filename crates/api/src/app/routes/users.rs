//! User administration endpoints. Everything here requires `ADMIN`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use backoffice_auth::ADMIN;
use backoffice_core::PageRequest;
use backoffice_identity::{NewUser, UserId};

use crate::app::dto::{user_listing_to_json, user_to_json};
use crate::app::errors::identity_error_to_response;
use crate::app::routes::common::require_role;
use crate::app::services::AppServices;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
}

/// GET /users
pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Query(page): Query<PageRequest>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }

    let listing = services.users.list(&page);
    Json(user_listing_to_json(&listing)).into_response()
}

/// POST /users
pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Json(body): Json<NewUser>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }

    match services.users.create_user(body) {
        Ok(user) => (StatusCode::CREATED, Json(user_to_json(&user))).into_response(),
        Err(err) => identity_error_to_response(err),
    }
}

/// GET /users/:id
pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }

    match services.users.get(&UserId::from(id)) {
        Ok(user) => Json(user_to_json(&user)).into_response(),
        Err(err) => identity_error_to_response(err),
    }
}

/// PUT /users/:id — full replace of the mutable fields.
pub async fn replace_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }

    match services.users.update_user(&UserId::from(id), &body, true) {
        Ok(user) => Json(user_to_json(&user)).into_response(),
        Err(err) => identity_error_to_response(err),
    }
}

/// PATCH /users/:id — partial update of the mutable fields.
pub async fn patch_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }

    match services.users.update_user(&UserId::from(id), &body, false) {
        Ok(user) => Json(user_to_json(&user)).into_response(),
        Err(err) => identity_error_to_response(err),
    }
}

/// DELETE /users/:id — refuses the caller's own account.
pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> axum::response::Response {
    if let Err(resp) = require_role(&services, &ctx, ADMIN) {
        return resp;
    }

    match services.users.delete_user(&ctx.user_id(), &UserId::from(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => identity_error_to_response(err),
    }
}
