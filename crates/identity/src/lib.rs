//! `backoffice-identity` — user account lifecycle management.
//!
//! Owns the user status state machine, password login, reset-token
//! issuance/consumption, and the allow-list of client-mutable fields.
//! Persistence and notification are ports ([`UserStore`],
//! [`PasswordNoticeSender`]) implemented elsewhere.

pub mod error;
pub mod lifecycle;
pub mod password;
pub mod store;
pub mod user;

pub use error::IdentityError;
pub use lifecycle::{UserLifecycle, check_status};
pub use store::{PasswordNoticeSender, UserStore};
pub use user::{MUTABLE_FIELDS, NewUser, User, UserId, UserStatus, UserUpdate};
