//! Role-level permission gate.
//!
//! The guard is purely structural: it compares role levels and knows
//! nothing about the resource being touched. Resource-specific rules
//! (e.g. "cannot delete your own account") are layered by the calling
//! operation, which keeps this reusable and trivial to test.

use crate::{AuthError, Role};

/// Pass iff `actual` dominates `required`.
///
/// - No IO
/// - No panics
/// - No business logic
pub fn guard(actual: &Role, required: &Role) -> Result<(), AuthError> {
    if actual.dominates(required) {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermission {
            actual: actual.code.clone(),
            required: required.code.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::RoleRegistry;

    #[test]
    fn equal_role_passes() {
        let registry = RoleRegistry::builtin();
        let admin = registry.find_by_code(crate::ADMIN).unwrap();
        assert!(guard(admin, admin).is_ok());
    }

    #[test]
    fn higher_role_passes_lower_requirement() {
        let registry = RoleRegistry::builtin();
        let superuser = registry.find_by_code(crate::SUPERUSER).unwrap();
        let user = registry.find_by_code(crate::USER).unwrap();
        assert!(guard(superuser, user).is_ok());
    }

    #[test]
    fn lower_role_is_denied_with_both_codes() {
        let registry = RoleRegistry::builtin();
        let user = registry.find_by_code(crate::USER).unwrap();
        let admin = registry.find_by_code(crate::ADMIN).unwrap();

        assert_eq!(
            guard(user, admin),
            Err(AuthError::InsufficientPermission {
                actual: "USER".to_string(),
                required: "ADMIN".to_string(),
            })
        );
    }

    proptest! {
        /// guard(a, b) passes exactly when level(a) >= level(b).
        #[test]
        fn dominance_matches_level_comparison(a in -100i32..100, b in -100i32..100) {
            let actual = Role::new("A", a);
            let required = Role::new("B", b);
            prop_assert_eq!(guard(&actual, &required).is_ok(), a >= b);
        }

        /// Reflexivity: every role grants access to itself.
        #[test]
        fn dominance_is_reflexive(level in -100i32..100) {
            let role = Role::new("R", level);
            prop_assert!(guard(&role, &role).is_ok());
        }
    }
}
