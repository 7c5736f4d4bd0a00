//! Service construction and seeding for the API process.

use std::sync::Arc;

use chrono::{Duration, Utc};

use backoffice_auth::{ADMIN, AccessClaims, AuthError, RoleRegistry, TokenKeys};
use backoffice_catalog::{CatalogError, CodeCatalog, NewCode};
use backoffice_identity::{
    IdentityError, NewUser, PasswordNoticeSender, User, UserLifecycle,
};
use backoffice_infra::{InMemoryCatalogStore, InMemoryUserStore};

/// Session token lifetime.
const TOKEN_TTL_HOURS: i64 = 8;

/// Everything the handlers need, wired once at startup.
pub struct AppServices {
    pub registry: RoleRegistry,
    pub keys: Arc<TokenKeys>,
    pub users: UserLifecycle,
    pub catalog: CodeCatalog,
}

impl AppServices {
    /// Wire the services over the in-memory adapters.
    ///
    /// The notifier is injected so tests can observe the
    /// password-setup notices the lifecycle sends.
    pub fn in_memory(jwt_secret: &str, notifier: Arc<dyn PasswordNoticeSender>) -> Self {
        let registry = RoleRegistry::builtin();
        let keys = Arc::new(TokenKeys::new(jwt_secret.as_bytes()));

        let users = UserLifecycle::new(
            Arc::new(InMemoryUserStore::new()),
            notifier,
            registry.clone(),
        );
        let catalog = CodeCatalog::new(Arc::new(InMemoryCatalogStore::new()));

        Self {
            registry,
            keys,
            users,
            catalog,
        }
    }

    /// Sign a session token for an authenticated user.
    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let claims = AccessClaims::new(
            *user.id.as_uuid(),
            user.role.code.clone(),
            Utc::now(),
            Duration::hours(TOKEN_TTL_HOURS),
        );
        self.keys.sign(&claims)
    }

    /// Create the bootstrap administrator account.
    pub fn seed_admin(&self, email: &str, password: &str) -> Result<User, IdentityError> {
        self.users.create_user(NewUser {
            email: email.to_string(),
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            password: password.to_string(),
            role: ADMIN.to_string(),
            has_access: true,
            change_password: false,
        })
    }

    /// Seed the stock reference data: the `LANGUAGE` code type and its
    /// initial codes.
    pub fn seed_reference_data(&self) -> Result<(), CatalogError> {
        self.catalog.create_code_type("LANGUAGE")?;
        for (value, name) in [("EN", "English"), ("NL", "Dutch"), ("FR", "French")] {
            self.catalog.create_code(
                "LANGUAGE",
                NewCode {
                    value: value.to_string(),
                    name: name.to_string(),
                    description: None,
                },
            )?;
        }
        Ok(())
    }
}
