//! Integration tests wiring the domain services to the in-memory
//! adapters.
//!
//! Tests: lifecycle operations → UserStore/NoticeSender, catalog
//! operations → CatalogStore, listings through the listing engine.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use backoffice_auth::{ADMIN, RoleRegistry, USER};
    use backoffice_catalog::{CatalogError, CodeCatalog, NewCode};
    use backoffice_core::PageRequest;
    use backoffice_identity::{
        IdentityError, NewUser, User, UserId, UserLifecycle, UserStatus, UserStore,
    };

    use crate::in_memory::{InMemoryCatalogStore, InMemoryUserStore};
    use crate::notify::RecordingNotifier;

    fn lifecycle() -> (UserLifecycle, Arc<InMemoryUserStore>, Arc<RecordingNotifier>) {
        let store = Arc::new(InMemoryUserStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let lifecycle = UserLifecycle::new(
            store.clone(),
            notifier.clone(),
            RoleRegistry::builtin(),
        );
        (lifecycle, store, notifier)
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "secret123".to_string(),
            role: USER.to_string(),
            has_access: true,
            change_password: false,
        }
    }

    fn catalog() -> CodeCatalog {
        CodeCatalog::new(Arc::new(InMemoryCatalogStore::new()))
    }

    // ── lifecycle ────────────────────────────────────────────────────

    #[test]
    fn created_user_can_log_in() {
        let (lifecycle, _, _) = lifecycle();

        let user = lifecycle.create_user(new_user("ada@example.com")).unwrap();
        assert_eq!(user.status, UserStatus::Registered);
        assert!(user.reset_password_token.is_none());

        let authed = lifecycle.authenticate("ada@example.com", "secret123").unwrap();
        assert_eq!(authed.id, user.id);
    }

    #[test]
    fn login_is_case_insensitive_on_email() {
        let (lifecycle, _, _) = lifecycle();
        lifecycle.create_user(new_user("Ada@Example.com")).unwrap();

        assert!(lifecycle.authenticate("ADA@EXAMPLE.COM", "secret123").is_ok());
    }

    #[test]
    fn wrong_password_and_unknown_email_are_indistinguishable() {
        let (lifecycle, _, _) = lifecycle();
        lifecycle.create_user(new_user("ada@example.com")).unwrap();

        let wrong_password = lifecycle
            .authenticate("ada@example.com", "nope")
            .unwrap_err();
        let unknown_email = lifecycle
            .authenticate("ghost@example.com", "secret123")
            .unwrap_err();

        assert_eq!(wrong_password, IdentityError::InvalidCredentials);
        assert_eq!(unknown_email, IdentityError::InvalidCredentials);
    }

    #[test]
    fn change_password_creation_starts_unconfirmed_and_notifies() {
        let (lifecycle, _, notifier) = lifecycle();

        let mut input = new_user("ada@example.com");
        input.change_password = true;
        let user = lifecycle.create_user(input).unwrap();

        assert_eq!(user.status, UserStatus::CompleteRegistration);
        assert!(user.reset_password_token.is_some());

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "ada@example.com");
        assert_eq!(sent[0].1.len(), 40);

        // Correct password, but registration is not complete yet.
        assert_eq!(
            lifecycle.authenticate("ada@example.com", "secret123"),
            Err(IdentityError::UserUnconfirmed)
        );
    }

    #[test]
    fn reset_token_completes_registration_exactly_once() {
        let (lifecycle, _, notifier) = lifecycle();

        let mut input = new_user("ada@example.com");
        input.change_password = true;
        lifecycle.create_user(input).unwrap();

        let token = notifier.last_token().unwrap();
        let user = lifecycle.complete_password_reset(&token, "fresh-pass").unwrap();
        assert_eq!(user.status, UserStatus::Registered);
        assert!(user.reset_password_token.is_none());

        assert!(lifecycle.authenticate("ada@example.com", "fresh-pass").is_ok());
        assert_eq!(
            lifecycle.complete_password_reset(&token, "again"),
            Err(IdentityError::InvalidOrExpiredToken)
        );
    }

    #[test]
    fn forgot_password_reissues_and_invalidates_earlier_tokens() {
        let (lifecycle, _, notifier) = lifecycle();
        lifecycle.create_user(new_user("ada@example.com")).unwrap();

        lifecycle.request_password_reset("ada@example.com").unwrap();
        let first = notifier.last_token().unwrap();
        lifecycle.request_password_reset("ada@example.com").unwrap();
        let second = notifier.last_token().unwrap();
        assert_ne!(first, second);

        // Only the latest token redeems.
        assert_eq!(
            lifecycle.complete_password_reset(&first, "new-pass"),
            Err(IdentityError::InvalidOrExpiredToken)
        );
        assert!(lifecycle.complete_password_reset(&second, "new-pass").is_ok());
    }

    #[test]
    fn forgot_password_refuses_blocked_accounts() {
        let (lifecycle, _, _) = lifecycle();
        let user = lifecycle.create_user(new_user("ada@example.com")).unwrap();
        lifecycle.block(&user.id).unwrap();

        assert_eq!(
            lifecycle.request_password_reset("ada@example.com"),
            Err(IdentityError::UserBlocked)
        );
    }

    #[test]
    fn blocking_revokes_an_outstanding_reset_token() {
        let (lifecycle, store, notifier) = lifecycle();
        let user = lifecycle.create_user(new_user("ada@example.com")).unwrap();

        lifecycle.request_password_reset("ada@example.com").unwrap();
        let token = notifier.last_token().unwrap();
        lifecycle.block(&user.id).unwrap();

        // The token issued before the block must not redeem, and must
        // never lift the block.
        assert_eq!(
            lifecycle.complete_password_reset(&token, "sneaky-pass"),
            Err(IdentityError::InvalidOrExpiredToken)
        );
        let after = store.find_by_id(&user.id).unwrap();
        assert_eq!(after.status, UserStatus::Blocked);
        assert!(after.reset_password_token.is_none());
    }

    #[test]
    fn store_refuses_redemption_for_blocked_holders() {
        // Even a token that somehow survives into a blocked account
        // must not redeem at the store level.
        let store = InMemoryUserStore::new();
        let registry = RoleRegistry::builtin();
        let user = User {
            id: UserId::new(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password_hash: String::new(),
            role: registry.find_by_code(USER).unwrap().clone(),
            status: UserStatus::Blocked,
            reset_password_token: Some("stale-token".to_string()),
            has_access: true,
        };
        store.insert(user.clone()).unwrap();

        assert_eq!(
            store.consume_reset_token("stale-token", "new-hash".to_string()),
            Err(IdentityError::InvalidOrExpiredToken)
        );
        assert_eq!(
            store.find_by_id(&user.id).unwrap().status,
            UserStatus::Blocked
        );
    }

    #[test]
    fn block_and_unblock_round_trip() {
        let (lifecycle, _, _) = lifecycle();
        let user = lifecycle.create_user(new_user("ada@example.com")).unwrap();

        lifecycle.block(&user.id).unwrap();
        assert_eq!(
            lifecycle.authenticate("ada@example.com", "secret123"),
            Err(IdentityError::UserBlocked)
        );

        lifecycle.unblock(&user.id).unwrap();
        assert!(lifecycle.authenticate("ada@example.com", "secret123").is_ok());
    }

    #[test]
    fn switched_off_access_denies_login_after_valid_credentials() {
        let (lifecycle, _, _) = lifecycle();
        let mut input = new_user("ada@example.com");
        input.has_access = false;
        lifecycle.create_user(input).unwrap();

        assert_eq!(
            lifecycle.authenticate("ada@example.com", "secret123"),
            Err(IdentityError::UserInactive)
        );
    }

    #[test]
    fn duplicate_email_is_rejected_case_insensitively() {
        let (lifecycle, _, _) = lifecycle();
        lifecycle.create_user(new_user("ada@example.com")).unwrap();

        assert_eq!(
            lifecycle.create_user(new_user("ADA@example.com")).unwrap_err(),
            IdentityError::DuplicateEmail
        );
    }

    #[test]
    fn update_cannot_touch_status_but_can_change_role() {
        let (lifecycle, store, _) = lifecycle();
        let user = lifecycle.create_user(new_user("ada@example.com")).unwrap();

        let err = lifecycle
            .update_user(&user.id, &json!({ "status": "BLOCKED" }), false)
            .unwrap_err();
        assert_eq!(err, IdentityError::InvalidInput(vec!["status".to_string()]));
        assert_eq!(
            store.find_by_id(&user.id).unwrap().status,
            UserStatus::Registered
        );

        let updated = lifecycle
            .update_user(&user.id, &json!({ "role": ADMIN }), false)
            .unwrap();
        assert_eq!(updated.role.code, ADMIN);
    }

    #[test]
    fn full_replace_requires_every_mutable_field() {
        let (lifecycle, _, _) = lifecycle();
        let user = lifecycle.create_user(new_user("ada@example.com")).unwrap();

        let err = lifecycle
            .update_user(&user.id, &json!({ "email": "new@example.com" }), true)
            .unwrap_err();
        assert_eq!(
            err,
            IdentityError::InvalidInput(vec![
                "firstName".to_string(),
                "lastName".to_string(),
                "role".to_string(),
                "hasAccess".to_string(),
            ])
        );

        let replaced = lifecycle
            .update_user(
                &user.id,
                &json!({
                    "email": "new@example.com",
                    "firstName": "Grace",
                    "lastName": "Hopper",
                    "role": USER,
                    "hasAccess": false,
                }),
                true,
            )
            .unwrap();
        assert_eq!(replaced.email, "new@example.com");
        assert!(!replaced.has_access);
    }

    #[test]
    fn delete_refuses_self_before_touching_the_store() {
        let (lifecycle, store, _) = lifecycle();
        let user = lifecycle.create_user(new_user("ada@example.com")).unwrap();

        assert_eq!(
            lifecycle.delete_user(&user.id, &user.id),
            Err(IdentityError::CannotDeleteSelf)
        );
        assert!(store.find_by_id(&user.id).is_some());

        let other = lifecycle.create_user(new_user("grace@example.com")).unwrap();
        lifecycle.delete_user(&user.id, &other.id).unwrap();
        assert!(store.find_by_id(&other.id).is_none());
    }

    #[test]
    fn user_listing_defaults_to_email_order() {
        let (lifecycle, _, _) = lifecycle();
        lifecycle.create_user(new_user("charlie@example.com")).unwrap();
        lifecycle.create_user(new_user("alice@example.com")).unwrap();
        lifecycle.create_user(new_user("bob@example.com")).unwrap();

        let listing = lifecycle.list(&PageRequest::default());
        let emails: Vec<&str> = listing.data.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(
            emails,
            vec!["alice@example.com", "bob@example.com", "charlie@example.com"]
        );
        assert_eq!(listing.meta.total_count, 3);
    }

    // ── catalog ──────────────────────────────────────────────────────

    #[test]
    fn codes_require_an_existing_type() {
        let catalog = catalog();

        let err = catalog
            .create_code(
                "LANGUAGE",
                NewCode {
                    value: "EN".to_string(),
                    name: "English".to_string(),
                    description: None,
                },
            )
            .unwrap_err();
        assert_eq!(err, CatalogError::CodeTypeNotFound("LANGUAGE".to_string()));

        catalog.create_code_type("LANGUAGE").unwrap();
        let code = catalog
            .create_code(
                "language",
                NewCode {
                    value: "EN".to_string(),
                    name: "English".to_string(),
                    description: None,
                },
            )
            .unwrap();
        assert_eq!(code.value, "EN");
        assert!(!code.deprecated);
    }

    #[test]
    fn duplicate_value_within_a_type_is_rejected() {
        let catalog = catalog();
        catalog.create_code_type("LANGUAGE").unwrap();
        catalog.create_code_type("COUNTRY").unwrap();

        let new_en = || NewCode {
            value: "EN".to_string(),
            name: "English".to_string(),
            description: None,
        };

        catalog.create_code("LANGUAGE", new_en()).unwrap();
        assert_eq!(
            catalog.create_code("LANGUAGE", new_en()).unwrap_err(),
            CatalogError::DuplicateCodeValue("EN".to_string())
        );
        // Same value under a different type is fine.
        assert!(catalog.create_code("COUNTRY", new_en()).is_ok());
    }

    #[test]
    fn deprecation_hides_codes_from_the_default_listing() {
        let catalog = catalog();
        catalog.create_code_type("LANGUAGE").unwrap();
        for (value, name) in [("EN", "English"), ("NL", "Dutch"), ("FR", "French")] {
            catalog
                .create_code(
                    "LANGUAGE",
                    NewCode {
                        value: value.to_string(),
                        name: name.to_string(),
                        description: None,
                    },
                )
                .unwrap();
        }

        let all = catalog
            .list_by_type("LANGUAGE", &PageRequest::default(), false)
            .unwrap();
        let target = all.data.iter().find(|c| c.value == "NL").unwrap().id;

        catalog.set_deprecated(&target, true).unwrap();

        let visible = catalog
            .list_by_type("LANGUAGE", &PageRequest::default(), false)
            .unwrap();
        assert_eq!(visible.meta.total_count, 2);
        assert!(visible.data.iter().all(|c| c.value != "NL"));

        let everything = catalog
            .list_by_type("LANGUAGE", &PageRequest::default(), true)
            .unwrap();
        assert_eq!(everything.meta.total_count, 3);

        catalog.set_deprecated(&target, false).unwrap();
        let visible = catalog
            .list_by_type("LANGUAGE", &PageRequest::default(), false)
            .unwrap();
        assert_eq!(visible.meta.total_count, 3);
    }

    #[test]
    fn replace_clears_an_omitted_description_but_patch_keeps_it() {
        let catalog = catalog();
        catalog.create_code_type("LANGUAGE").unwrap();
        let code = catalog
            .create_code(
                "LANGUAGE",
                NewCode {
                    value: "EN".to_string(),
                    name: "English".to_string(),
                    description: Some("British English".to_string()),
                },
            )
            .unwrap();

        // Patch without a description leaves the stored one alone.
        let patched = catalog
            .patch_code(&code.id, &json!({ "name": "English (UK)" }))
            .unwrap();
        assert_eq!(patched.description.as_deref(), Some("British English"));

        // Replace is the whole code: omitting the description clears it.
        let replaced = catalog
            .replace_code(&code.id, &json!({ "value": "EN", "name": "English" }))
            .unwrap();
        assert_eq!(replaced.description, None);
    }

    #[test]
    fn replace_requires_value_and_name_but_patch_does_not() {
        let catalog = catalog();
        catalog.create_code_type("LANGUAGE").unwrap();
        let code = catalog
            .create_code(
                "LANGUAGE",
                NewCode {
                    value: "EN".to_string(),
                    name: "English".to_string(),
                    description: None,
                },
            )
            .unwrap();

        let err = catalog
            .replace_code(&code.id, &json!({ "name": "English (UK)" }))
            .unwrap_err();
        assert_eq!(err, CatalogError::InvalidInput(vec!["value".to_string()]));

        let patched = catalog
            .patch_code(&code.id, &json!({ "name": "English (UK)" }))
            .unwrap();
        assert_eq!(patched.name, "English (UK)");
        assert_eq!(patched.value, "EN");

        let err = catalog
            .patch_code(&code.id, &json!({ "deprecated": true }))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidInput(vec!["deprecated".to_string()])
        );
    }
}
