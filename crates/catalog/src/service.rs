//! The code catalog service: validation and orchestration over a
//! [`CatalogStore`].

use std::sync::Arc;

use backoffice_core::{Listing, PageRequest, list};

use crate::{
    CatalogError, CatalogStore, Code, CodeId, CodeType, CodeTypeId, CodeUpdate, NewCode,
};

pub struct CodeCatalog {
    store: Arc<dyn CatalogStore>,
}

impl CodeCatalog {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Register a new code type. Type codes are normalized to
    /// uppercase; `LANGUAGE` and `language` are the same type.
    pub fn create_code_type(&self, code: &str) -> Result<CodeType, CatalogError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(CatalogError::InvalidInput(vec!["codeType".to_string()]));
        }

        self.store.insert_code_type(CodeType {
            id: CodeTypeId::new(),
            code,
        })
    }

    /// Create a code under an existing type.
    pub fn create_code(&self, type_code: &str, input: NewCode) -> Result<Code, CatalogError> {
        let code_type = self.resolve_type(type_code)?;
        let value = required_field(&input.value, "value")?;
        let name = required_field(&input.name, "name")?;

        self.store.insert_code(Code {
            id: CodeId::new(),
            code_type_id: code_type.id,
            value,
            name,
            description: input.description.map(|d| d.trim().to_string()),
            deprecated: false,
        })
    }

    pub fn get_code(&self, id: &CodeId) -> Result<Code, CatalogError> {
        self.store.find_code(id).ok_or(CatalogError::CodeNotFound)
    }

    /// Full replace: `value` and `name` must be present, and an
    /// omitted `description` clears the stored one.
    pub fn replace_code(
        &self,
        id: &CodeId,
        payload: &serde_json::Value,
    ) -> Result<Code, CatalogError> {
        self.apply_update(id, payload, true)
    }

    /// Partial update: only the supplied fields change.
    pub fn patch_code(
        &self,
        id: &CodeId,
        payload: &serde_json::Value,
    ) -> Result<Code, CatalogError> {
        self.apply_update(id, payload, false)
    }

    /// Deprecate or reinstate a code. Idempotent in effect, but an
    /// unresolvable id still fails.
    pub fn set_deprecated(&self, id: &CodeId, deprecated: bool) -> Result<Code, CatalogError> {
        let mut code = self.get_code(id)?;
        code.deprecated = deprecated;
        self.store.update_code(code)
    }

    /// List the codes of a type through the listing engine.
    ///
    /// Deprecated codes are filtered out unless `include_deprecated`
    /// is set (the privileged mode). The filter runs before the
    /// engine, so `total_count` reflects only visible codes.
    pub fn list_by_type(
        &self,
        type_code: &str,
        page: &PageRequest,
        include_deprecated: bool,
    ) -> Result<Listing<Code>, CatalogError> {
        let code_type = self.resolve_type(type_code)?;
        let mut codes = self.store.list_codes(&code_type.id);
        if !include_deprecated {
            codes.retain(|code| !code.deprecated);
        }
        Ok(list(codes, page))
    }

    fn apply_update(
        &self,
        id: &CodeId,
        payload: &serde_json::Value,
        require_all: bool,
    ) -> Result<Code, CatalogError> {
        let update = CodeUpdate::from_value(payload)?;
        if require_all {
            let missing = update.missing_fields();
            if !missing.is_empty() {
                return Err(CatalogError::InvalidInput(missing));
            }
        }

        let mut code = self.get_code(id)?;
        if let Some(value) = update.value {
            code.value = required_field(&value, "value")?;
        }
        if let Some(name) = update.name {
            code.name = required_field(&name, "name")?;
        }
        if require_all {
            // Replace semantics: the payload is the whole code, so a
            // missing description clears it.
            code.description = update.description.map(|d| d.trim().to_string());
        } else if let Some(description) = update.description {
            code.description = Some(description.trim().to_string());
        }

        self.store.update_code(code)
    }

    fn resolve_type(&self, type_code: &str) -> Result<CodeType, CatalogError> {
        let type_code = type_code.trim().to_uppercase();
        self.store
            .find_code_type(&type_code)
            .ok_or(CatalogError::CodeTypeNotFound(type_code))
    }
}

fn required_field(raw: &str, name: &str) -> Result<String, CatalogError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CatalogError::InvalidInput(vec![name.to_string()]));
    }
    Ok(value.to_string())
}
