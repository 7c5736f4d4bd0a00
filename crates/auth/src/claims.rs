use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AuthError;

/// Claims carried by a session token.
///
/// The token binds an identity and a role at issuance time. It is not
/// re-checked against the account's current status: a user blocked
/// after issuance keeps a working token until `exp`. That tradeoff is
/// deliberate — revocation is out of scope, and the status gate runs
/// on password login and on any operation that opts into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the authenticated user id.
    pub sub: Uuid,

    /// Role code granted for the session.
    pub role: String,

    /// Issued-at, seconds since the epoch.
    pub iat: i64,

    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl AccessClaims {
    pub fn new(sub: Uuid, role: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub,
            role: role.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}

/// Process-wide signing configuration.
///
/// Constructed once at startup and passed to whatever signs or
/// verifies tokens — never an ambient singleton.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Sign claims into a compact HS256 token.
    pub fn sign(&self, claims: &AccessClaims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|_| AuthError::InvalidCredential)
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// Expiry maps to [`AuthError::ExpiredCredential`]; every other
    /// decode failure maps to [`AuthError::InvalidCredential`] so the
    /// two stay distinguishable for diagnostics.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; no clock-skew allowance.
        validation.leeway = 0;

        decode::<AccessClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredCredential,
                _ => AuthError::InvalidCredential,
            })
    }
}
