use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("code not found")]
    CodeNotFound,

    /// No code type with this type code exists.
    #[error("unknown code type '{0}'")]
    CodeTypeNotFound(String),

    /// A code type with this type code already exists.
    #[error("code type '{0}' already exists")]
    DuplicateCodeType(String),

    /// Another code under the same type already carries this value.
    #[error("code value '{0}' already exists for this type")]
    DuplicateCodeValue(String),

    /// Payload contains fields outside the allow-list, or required
    /// fields are missing. Carries the offending field names.
    #[error("invalid input: {}", .0.join(", "))]
    InvalidInput(Vec<String>),
}
