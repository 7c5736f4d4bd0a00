use serde::{Deserialize, Serialize};
use uuid::Uuid;

use backoffice_auth::Role;
use backoffice_core::{Listable, disallowed_fields};

use crate::IdentityError;

// ─────────────────────────────────────────────────────────────────────────────
// User ID
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a user account.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User Status
// ─────────────────────────────────────────────────────────────────────────────

/// Account status state machine.
///
/// `Registered` is the only state permitting authentication.
/// `CompleteRegistration` means a mandatory password set is pending;
/// `Blocked` is an administrative lockout. Both deny login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Registered,
    CompleteRegistration,
    Blocked,
}

impl UserStatus {
    pub fn code(&self) -> &'static str {
        match self {
            UserStatus::Registered => "REGISTERED",
            UserStatus::CompleteRegistration => "COMPLETE_REGISTRATION",
            UserStatus::Blocked => "BLOCKED",
        }
    }
}

impl core::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// User account.
///
/// # Invariants
/// - `email` is unique (case-insensitive) across all stored users;
///   enforced atomically by the store.
/// - `status` and `reset_password_token` are only ever written by the
///   lifecycle manager, never directly from a client payload.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: Role,
    pub status: UserStatus,
    pub reset_password_token: Option<String>,
    pub has_access: bool,
}

impl Listable for User {
    const RESOURCE: &'static str = "users";
    const DEFAULT_SORT_FIELD: &'static str = "email";
    const SORT_FIELDS: &'static [&'static str] =
        &["email", "firstName", "lastName", "role", "status"];

    fn sort_key(&self, field: &str) -> String {
        match field {
            "firstName" => self.first_name.to_lowercase(),
            "lastName" => self.last_name.to_lowercase(),
            "role" => self.role.code.clone(),
            "status" => self.status.code().to_string(),
            _ => self.email.to_lowercase(),
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.email, &self.first_name, &self.last_name]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Input for creating an account (administrative operation).
///
/// `change_password` decides the initial state: `true` means the user
/// must set their own password first (`CompleteRegistration` plus a
/// mailed reset token), `false` means the account is usable as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
    #[serde(default = "default_has_access")]
    pub has_access: bool,
    #[serde(default)]
    pub change_password: bool,
}

fn default_has_access() -> bool {
    true
}

/// The only fields a client update payload may carry.
///
/// `status` and anything registration-related are deliberately absent:
/// state transitions go through lifecycle operations, never through a
/// field write.
pub const MUTABLE_FIELDS: &[&str] = &["email", "firstName", "lastName", "role", "hasAccess"];

/// Allow-listed update, shared by full replace and partial update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub has_access: Option<bool>,
}

impl UserUpdate {
    /// Parse a raw payload against the allow-list.
    ///
    /// Runs before any lookup or mutation; a payload touching a
    /// disallowed field (e.g. `status`) fails here with the offending
    /// names and nothing else happens.
    pub fn from_value(payload: &serde_json::Value) -> Result<Self, IdentityError> {
        let offending = disallowed_fields(payload, MUTABLE_FIELDS);
        if !offending.is_empty() {
            return Err(IdentityError::InvalidInput(offending));
        }

        serde_json::from_value(payload.clone())
            .map_err(|_| IdentityError::InvalidInput(vec!["body".to_string()]))
    }

    /// Names of allow-listed fields absent from this update.
    ///
    /// Full replace requires all of them; partial update requires none.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.email.is_none() {
            missing.push("email".to_string());
        }
        if self.first_name.is_none() {
            missing.push("firstName".to_string());
        }
        if self.last_name.is_none() {
            missing.push("lastName".to_string());
        }
        if self.role.is_none() {
            missing.push("role".to_string());
        }
        if self.has_access.is_none() {
            missing.push("hasAccess".to_string());
        }
        missing
    }
}
