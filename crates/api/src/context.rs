use backoffice_auth::Role;
use backoffice_identity::UserId;

/// Authenticated identity for a request, derived from the session
/// token by the auth middleware. Present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    user_id: UserId,
    role: Role,
}

impl AuthContext {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> &Role {
        &self.role
    }
}
