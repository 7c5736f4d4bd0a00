use thiserror::Error;

/// Lifecycle/identity failure kinds.
///
/// `InvalidCredentials` deliberately covers both unknown-email and
/// wrong-password logins so the two stay indistinguishable to callers.
/// Status failures are distinct kinds: account state is not secret,
/// credential correctness is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Unknown email or wrong password. One kind, on purpose.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Account is still waiting for its first password to be set.
    #[error("user has not completed registration")]
    UserUnconfirmed,

    /// Account is administratively blocked.
    #[error("user is blocked")]
    UserBlocked,

    /// Account exists but access has been switched off.
    #[error("user has no access")]
    UserInactive,

    #[error("user not found")]
    UserNotFound,

    /// Role code matches nothing in the registry.
    #[error("unknown role code '{0}'")]
    RoleNotFound(String),

    /// Reset token does not match any account (stale, consumed, or
    /// never issued — indistinguishable by design).
    #[error("reset token is invalid or expired")]
    InvalidOrExpiredToken,

    /// The acting identity tried to delete itself.
    #[error("cannot delete your own account")]
    CannotDeleteSelf,

    /// Payload contains fields outside the allow-list, or required
    /// fields are missing/malformed. Carries the offending field names.
    #[error("invalid input: {}", .0.join(", "))]
    InvalidInput(Vec<String>),

    /// Email is already taken by another account (case-insensitive).
    #[error("email is already in use")]
    DuplicateEmail,

    /// Password hashing failed. Not a client error.
    #[error("failed to hash password")]
    Hash,
}
