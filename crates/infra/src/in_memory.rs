//! In-memory adapters for the user and catalog stores.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use backoffice_catalog::{CatalogError, CatalogStore, Code, CodeId, CodeType, CodeTypeId};
use backoffice_identity::{IdentityError, User, UserId, UserStatus, UserStore};

// A poisoned lock only means another thread panicked mid-write; the
// map itself stays usable, so recover instead of propagating.

// ─────────────────────────────────────────────────────────────────────────────
// User store
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn email_taken(users: &HashMap<UserId, User>, email: &str, except: Option<&UserId>) -> bool {
        users.values().any(|user| {
            user.email.eq_ignore_ascii_case(email) && except != Some(&user.id)
        })
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: User) -> Result<User, IdentityError> {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if Self::email_taken(&users, &user.email, None) {
            return Err(IdentityError::DuplicateEmail);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: &UserId) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    fn update(&self, user: User) -> Result<User, IdentityError> {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if !users.contains_key(&user.id) {
            return Err(IdentityError::UserNotFound);
        }
        if Self::email_taken(&users, &user.email, Some(&user.id)) {
            return Err(IdentityError::DuplicateEmail);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    fn delete(&self, id: &UserId) -> Result<(), IdentityError> {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        users
            .remove(id)
            .map(|_| ())
            .ok_or(IdentityError::UserNotFound)
    }

    fn list(&self) -> Vec<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.values().cloned().collect()
    }

    fn consume_reset_token(
        &self,
        token: &str,
        new_password_hash: String,
    ) -> Result<User, IdentityError> {
        if token.is_empty() {
            return Err(IdentityError::InvalidOrExpiredToken);
        }

        let mut users = self
            .users
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let user = users
            .values_mut()
            .find(|user| user.reset_password_token.as_deref() == Some(token))
            .ok_or(IdentityError::InvalidOrExpiredToken)?;

        // Redemption never lifts an administrative block.
        if user.status == UserStatus::Blocked {
            return Err(IdentityError::InvalidOrExpiredToken);
        }

        user.reset_password_token = None;
        user.password_hash = new_password_hash;
        user.status = UserStatus::Registered;
        Ok(user.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog store
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    code_types: RwLock<HashMap<CodeTypeId, CodeType>>,
    codes: RwLock<HashMap<CodeId, Code>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn value_taken(
        codes: &HashMap<CodeId, Code>,
        code_type_id: &CodeTypeId,
        value: &str,
        except: Option<&CodeId>,
    ) -> bool {
        codes.values().any(|code| {
            code.code_type_id == *code_type_id
                && code.value.eq_ignore_ascii_case(value)
                && except != Some(&code.id)
        })
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn insert_code_type(&self, code_type: CodeType) -> Result<CodeType, CatalogError> {
        let mut code_types = self
            .code_types
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if code_types
            .values()
            .any(|existing| existing.code.eq_ignore_ascii_case(&code_type.code))
        {
            return Err(CatalogError::DuplicateCodeType(code_type.code));
        }

        code_types.insert(code_type.id, code_type.clone());
        Ok(code_type)
    }

    fn find_code_type(&self, code: &str) -> Option<CodeType> {
        let code_types = self
            .code_types
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        code_types
            .values()
            .find(|code_type| code_type.code.eq_ignore_ascii_case(code))
            .cloned()
    }

    fn insert_code(&self, code: Code) -> Result<Code, CatalogError> {
        let mut codes = self.codes.write().unwrap_or_else(PoisonError::into_inner);

        if Self::value_taken(&codes, &code.code_type_id, &code.value, None) {
            return Err(CatalogError::DuplicateCodeValue(code.value));
        }

        codes.insert(code.id, code.clone());
        Ok(code)
    }

    fn find_code(&self, id: &CodeId) -> Option<Code> {
        let codes = self.codes.read().unwrap_or_else(PoisonError::into_inner);
        codes.get(id).cloned()
    }

    fn update_code(&self, code: Code) -> Result<Code, CatalogError> {
        let mut codes = self.codes.write().unwrap_or_else(PoisonError::into_inner);

        if !codes.contains_key(&code.id) {
            return Err(CatalogError::CodeNotFound);
        }
        if Self::value_taken(&codes, &code.code_type_id, &code.value, Some(&code.id)) {
            return Err(CatalogError::DuplicateCodeValue(code.value));
        }

        codes.insert(code.id, code.clone());
        Ok(code)
    }

    fn list_codes(&self, code_type_id: &CodeTypeId) -> Vec<Code> {
        let codes = self.codes.read().unwrap_or_else(PoisonError::into_inner);
        codes
            .values()
            .filter(|code| code.code_type_id == *code_type_id)
            .cloned()
            .collect()
    }
}
