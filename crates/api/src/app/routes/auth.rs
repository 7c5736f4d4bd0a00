//! Public authentication endpoints: login and the forgot-password
//! flow.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
};
use serde::Deserialize;
use serde_json::json;

use crate::app::dto::user_to_json;
use crate::app::errors::{identity_error_to_response, json_error};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/forgot-password/init", post(forgot_password_init))
        .route("/forgot-password/confirm", put(forgot_password_confirm))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/login
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<LoginRequest>,
) -> axum::response::Response {
    let user = match services.users.authenticate(&body.username, &body.password) {
        Ok(user) => user,
        Err(err) => {
            tracing::info!(username = %body.username, error = %err, "login rejected");
            return identity_error_to_response(err);
        }
    };

    let token = match services.issue_token(&user) {
        Ok(token) => token,
        Err(err) => {
            tracing::error!(error = %err, "failed to sign session token");
            return json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal error",
            );
        }
    };

    Json(json!({
        "token": token,
        "user": user_to_json(&user),
    }))
    .into_response()
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// POST /forgot-password/init
pub async fn forgot_password_init(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<ForgotPasswordRequest>,
) -> axum::response::Response {
    match services.users.request_password_reset(&body.email) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => identity_error_to_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct ConfirmQuery {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub password: String,
}

/// PUT /forgot-password/confirm?token=
pub async fn forgot_password_confirm(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ConfirmQuery>,
    Json(body): Json<ConfirmRequest>,
) -> axum::response::Response {
    match services
        .users
        .complete_password_reset(&query.token, &body.password)
    {
        Ok(user) => Json(user_to_json(&user)).into_response(),
        Err(err) => identity_error_to_response(err),
    }
}
