//! JSON mapping helpers.

use serde_json::{Value, json};

use backoffice_core::Listing;
use backoffice_identity::User;

/// Client-facing user shape. The password hash and the reset token
/// never leave the process.
pub fn user_to_json(user: &User) -> Value {
    json!({
        "id": user.id,
        "email": user.email,
        "firstName": user.first_name,
        "lastName": user.last_name,
        "role": user.role.code,
        "status": user.status.code(),
        "hasAccess": user.has_access,
    })
}

pub fn user_listing_to_json(listing: &Listing<User>) -> Value {
    json!({
        "data": listing.data.iter().map(user_to_json).collect::<Vec<_>>(),
        "meta": listing.meta,
    })
}
