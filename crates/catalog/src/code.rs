use serde::{Deserialize, Serialize};
use uuid::Uuid;

use backoffice_core::{Listable, disallowed_fields};

use crate::CatalogError;

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a code type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTypeId(Uuid);

impl CodeTypeId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CodeTypeId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for CodeTypeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for CodeTypeId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Unique identifier for a code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeId(Uuid);

impl CodeId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for CodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for CodeId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities
// ─────────────────────────────────────────────────────────────────────────────

/// A grouping of codes, addressed by its unique `code` string
/// (e.g. `LANGUAGE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeType {
    pub id: CodeTypeId,
    pub code: String,
}

/// One entry in a code type.
///
/// `value` is the stable machine-facing token, unique within its type;
/// `name` is the display label. Deprecated codes stay resolvable by id
/// but drop out of default listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Code {
    pub id: CodeId,
    #[serde(skip)]
    pub code_type_id: CodeTypeId,
    pub value: String,
    pub name: String,
    pub description: Option<String>,
    pub deprecated: bool,
}

impl Listable for Code {
    const RESOURCE: &'static str = "codes";
    const DEFAULT_SORT_FIELD: &'static str = "value";
    const SORT_FIELDS: &'static [&'static str] = &["value", "name"];

    fn sort_key(&self, field: &str) -> String {
        match field {
            "name" => self.name.to_lowercase(),
            _ => self.value.to_lowercase(),
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.value, &self.name]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Input for creating a code under a type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCode {
    pub value: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The only fields a client update payload may carry. `deprecated` is
/// deliberately absent: deprecation goes through its own operations.
pub const CODE_MUTABLE_FIELDS: &[&str] = &["value", "name", "description"];

/// Allow-listed code update, shared by full replace and partial update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeUpdate {
    pub value: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CodeUpdate {
    /// Parse a raw payload against the allow-list; off-list fields
    /// fail with their names before anything is looked up.
    pub fn from_value(payload: &serde_json::Value) -> Result<Self, CatalogError> {
        let offending = disallowed_fields(payload, CODE_MUTABLE_FIELDS);
        if !offending.is_empty() {
            return Err(CatalogError::InvalidInput(offending));
        }

        serde_json::from_value(payload.clone())
            .map_err(|_| CatalogError::InvalidInput(vec!["body".to_string()]))
    }

    /// Required fields absent from this update. `description` is not
    /// required on full replace — omitting it there clears the stored
    /// value instead.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.value.is_none() {
            missing.push("value".to_string());
        }
        if self.name.is_none() {
            missing.push("name".to_string());
        }
        missing
    }
}
