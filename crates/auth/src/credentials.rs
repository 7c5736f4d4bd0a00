use crate::AuthError;

/// Pull the token out of an `Authorization: Bearer <token>` header.
///
/// Pure parsing: no IO, no verification. A missing header, any scheme
/// other than `Bearer`, or an empty token all collapse into
/// [`AuthError::MissingOrMalformedCredential`].
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingOrMalformedCredential)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingOrMalformedCredential)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingOrMalformedCredential);
    }

    Ok(token)
}
