//! Ports to the persistence and notification collaborators.

use crate::{IdentityError, User, UserId};

/// Persistence collaborator for user accounts.
///
/// The store owns the consistency guarantees the lifecycle manager
/// leans on: atomic case-insensitive email uniqueness on insert and
/// update, and compare-and-clear semantics for reset-token
/// consumption (a token can be redeemed exactly once).
pub trait UserStore: Send + Sync {
    /// Insert a new account. Fails with [`IdentityError::DuplicateEmail`]
    /// when the email is already taken.
    fn insert(&self, user: User) -> Result<User, IdentityError>;

    fn find_by_id(&self, id: &UserId) -> Option<User>;

    /// Lookup by email, case-insensitive.
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Replace the stored account. Fails with
    /// [`IdentityError::UserNotFound`] for unknown ids and
    /// [`IdentityError::DuplicateEmail`] when the new email collides.
    fn update(&self, user: User) -> Result<User, IdentityError>;

    fn delete(&self, id: &UserId) -> Result<(), IdentityError>;

    fn list(&self) -> Vec<User>;

    /// Atomically redeem a reset token: find the holder, clear the
    /// token, install `new_password_hash`, and move the account to
    /// `Registered`. A token that matches nothing, or whose holder is
    /// `Blocked`, fails with [`IdentityError::InvalidOrExpiredToken`] —
    /// redemption must never lift an administrative block.
    fn consume_reset_token(
        &self,
        token: &str,
        new_password_hash: String,
    ) -> Result<User, IdentityError>;
}

/// Notifier collaborator: delivers the password-setup notice.
///
/// Best-effort from the lifecycle manager's perspective; a failure is
/// logged and never rolls back the operation that triggered it.
pub trait PasswordNoticeSender: Send + Sync {
    fn send_password_setup(&self, email: &str, token: &str) -> anyhow::Result<()>;
}
