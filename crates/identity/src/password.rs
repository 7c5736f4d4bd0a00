//! Password hashing. The algorithm choice (bcrypt) is an
//! implementation detail; callers only see hash and verify.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::IdentityError;

pub fn hash_password(plain: &str) -> Result<String, IdentityError> {
    hash(plain, DEFAULT_COST).map_err(|_| IdentityError::Hash)
}

/// Constant result on malformed hashes: verification never errors,
/// it just fails.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}

/// Well-formed hash with no account behind it, used to keep the
/// unknown-email login path as expensive as a real verification.
const PADDING_HASH: &str = "$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// Run a full verification against [`PADDING_HASH`].
///
/// Called when no account matches the login email so that unknown
/// emails and wrong passwords cost the same; the result carries no
/// meaning and callers must ignore it.
pub fn verify_padding(plain: &str) -> bool {
    verify(plain, PADDING_HASH).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_its_own_input() {
        let hashed = hash_password("secret123").unwrap();
        assert!(verify_password("secret123", &hashed));
        assert!(!verify_password("secret124", &hashed));
    }

    #[test]
    fn malformed_hash_fails_closed() {
        assert!(!verify_password("secret123", "not-a-bcrypt-hash"));
    }

    #[test]
    fn padding_verification_runs_and_rejects() {
        assert!(!verify_padding("whatever-was-typed"));
    }
}
