//! Port to the catalog's persistence collaborator.

use crate::{CatalogError, Code, CodeId, CodeType, CodeTypeId};

/// Persistence collaborator for code types and codes.
///
/// The store owns the uniqueness guarantees: type codes are unique
/// globally, code values are unique within their type
/// (case-insensitive for both).
pub trait CatalogStore: Send + Sync {
    /// Fails with [`CatalogError::DuplicateCodeType`] when the type
    /// code is taken.
    fn insert_code_type(&self, code_type: CodeType) -> Result<CodeType, CatalogError>;

    fn find_code_type(&self, code: &str) -> Option<CodeType>;

    /// Fails with [`CatalogError::DuplicateCodeValue`] when the value
    /// collides within the type.
    fn insert_code(&self, code: Code) -> Result<Code, CatalogError>;

    fn find_code(&self, id: &CodeId) -> Option<Code>;

    /// Replace the stored code. Fails with [`CatalogError::CodeNotFound`]
    /// for unknown ids and [`CatalogError::DuplicateCodeValue`] when
    /// the new value collides within the type.
    fn update_code(&self, code: Code) -> Result<Code, CatalogError>;

    fn list_codes(&self, code_type_id: &CodeTypeId) -> Vec<Code>;
}
