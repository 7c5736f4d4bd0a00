use serde::{Deserialize, Serialize};

use backoffice_core::Listable;

use crate::AuthError;

/// Built-in role codes, lowest to highest.
pub const USER: &str = "USER";
pub const ADMIN: &str = "ADMIN";
pub const SUPERUSER: &str = "SUPERUSER";

/// Role with a numeric rank used for hierarchical permission checks.
///
/// Roles are totally ordered by `level`; a single integer dimension
/// keeps comparison O(1) and unambiguous, at the cost of expressing
/// only one hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    pub code: String,
    pub level: i32,
}

impl Role {
    pub fn new(code: impl Into<String>, level: i32) -> Self {
        Self {
            code: code.into(),
            level,
        }
    }

    /// Whether this role grants at least the access of `required`.
    pub fn dominates(&self, required: &Role) -> bool {
        self.level >= required.level
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.code)
    }
}

impl Listable for Role {
    const RESOURCE: &'static str = "roles";
    const DEFAULT_SORT_FIELD: &'static str = "level";
    const SORT_FIELDS: &'static [&'static str] = &["code", "level"];

    fn sort_key(&self, field: &str) -> String {
        match field {
            "code" => self.code.to_lowercase(),
            // Zero-padded so lexicographic order matches numeric order.
            _ => format!("{:010}", self.level),
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.code]
    }
}

/// Immutable catalog of the roles this process knows about.
///
/// Built once at startup; there is deliberately no mutation API.
/// Uniqueness of `code` is an invariant of construction.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    roles: Vec<Role>,
}

impl RoleRegistry {
    /// The stock hierarchy: `USER` < `ADMIN` < `SUPERUSER`.
    pub fn builtin() -> Self {
        Self {
            roles: vec![
                Role::new(USER, 1),
                Role::new(ADMIN, 2),
                Role::new(SUPERUSER, 3),
            ],
        }
    }

    pub fn find_by_code(&self, code: &str) -> Result<&Role, AuthError> {
        self.roles
            .iter()
            .find(|role| role.code == code)
            .ok_or_else(|| AuthError::RoleNotFound(code.to_string()))
    }

    pub fn level_of(&self, code: &str) -> Result<i32, AuthError> {
        self.find_by_code(code).map(|role| role.level)
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}
