use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use backoffice_catalog::CatalogError;
use backoffice_identity::IdentityError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map identity failures to responses.
///
/// Status failures carry their specific codes (`user_unconfirmed`,
/// `user_blocked`, `user_inactive`): account state is not a secret.
/// Credential correctness is, so `InvalidCredentials` stays one
/// generic 400 whatever actually went wrong.
pub fn identity_error_to_response(err: IdentityError) -> axum::response::Response {
    match err {
        IdentityError::InvalidCredentials => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_credentials",
            "invalid username or password",
        ),
        IdentityError::UserUnconfirmed => {
            json_error(StatusCode::UNAUTHORIZED, "user_unconfirmed", err.to_string())
        }
        IdentityError::UserBlocked => {
            json_error(StatusCode::UNAUTHORIZED, "user_blocked", err.to_string())
        }
        IdentityError::UserInactive => {
            json_error(StatusCode::UNAUTHORIZED, "user_inactive", err.to_string())
        }
        IdentityError::UserNotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        IdentityError::RoleNotFound(_) => {
            json_error(StatusCode::BAD_REQUEST, "unknown_role", err.to_string())
        }
        IdentityError::InvalidOrExpiredToken => {
            json_error(StatusCode::BAD_REQUEST, "invalid_token", err.to_string())
        }
        IdentityError::CannotDeleteSelf => {
            json_error(StatusCode::FORBIDDEN, "cannot_delete_self", err.to_string())
        }
        IdentityError::InvalidInput(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        IdentityError::DuplicateEmail => {
            json_error(StatusCode::CONFLICT, "duplicate_email", err.to_string())
        }
        IdentityError::Hash => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "internal error",
        ),
    }
}

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::CodeNotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        CatalogError::CodeTypeNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        CatalogError::DuplicateCodeType(_) => {
            json_error(StatusCode::CONFLICT, "duplicate_code_type", err.to_string())
        }
        CatalogError::DuplicateCodeValue(_) => {
            json_error(StatusCode::CONFLICT, "duplicate_code_value", err.to_string())
        }
        CatalogError::InvalidInput(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
    }
}
