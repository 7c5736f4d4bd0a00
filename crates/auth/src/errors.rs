use thiserror::Error;

/// Authentication/authorization failure kinds.
///
/// Callers may log the precise kind, but credential failures must all
/// surface as the same generic denial to the outside — which one fired
/// is not information the client gets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, wrong scheme, or empty token.
    #[error("missing or malformed bearer credential")]
    MissingOrMalformedCredential,

    /// Token failed signature or shape verification.
    #[error("invalid credential")]
    InvalidCredential,

    /// Token was valid once but is past its expiry.
    #[error("expired credential")]
    ExpiredCredential,

    /// Authenticated role does not dominate the required role.
    #[error("role '{actual}' does not grant '{required}' access")]
    InsufficientPermission { actual: String, required: String },

    /// Role code matches nothing in the registry.
    #[error("unknown role code '{0}'")]
    RoleNotFound(String),
}
