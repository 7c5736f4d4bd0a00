//! `backoffice-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: header
//! parsing takes a string, token verification takes a token, the guard
//! takes two roles. Wiring those to requests lives in the API crate.

pub mod authorize;
pub mod claims;
pub mod credentials;
pub mod errors;
pub mod roles;

pub use authorize::guard;
pub use claims::{AccessClaims, TokenKeys};
pub use credentials::extract_bearer;
pub use errors::AuthError;
pub use roles::{ADMIN, Role, RoleRegistry, SUPERUSER, USER};
