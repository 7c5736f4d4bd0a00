//! The user lifecycle manager: creation, login gate, status
//! transitions, allow-listed updates, reset tokens, deletion.

use std::sync::Arc;

use rand::{Rng, distributions::Alphanumeric};

use backoffice_auth::RoleRegistry;
use backoffice_core::{Listing, PageRequest, list};

use crate::{
    IdentityError, NewUser, PasswordNoticeSender, User, UserId, UserStatus, UserStore, UserUpdate,
    password,
};

/// Length of a generated single-use reset token.
const RESET_TOKEN_LEN: usize = 40;

/// Gate for "may this account currently act".
///
/// Invoked at login and reusable by any operation that wants a live
/// status check. `Registered` is the only passing state.
pub fn check_status(user: &User) -> Result<(), IdentityError> {
    match user.status {
        UserStatus::CompleteRegistration => Err(IdentityError::UserUnconfirmed),
        UserStatus::Blocked => Err(IdentityError::UserBlocked),
        UserStatus::Registered => Ok(()),
    }
}

/// Owns every mutation of a user account.
///
/// Session token issuance is *not* here — the lifecycle authenticates
/// and the session authenticator signs, so stores and notifiers never
/// see signing material.
pub struct UserLifecycle {
    store: Arc<dyn UserStore>,
    notifier: Arc<dyn PasswordNoticeSender>,
    registry: RoleRegistry,
}

impl UserLifecycle {
    pub fn new(
        store: Arc<dyn UserStore>,
        notifier: Arc<dyn PasswordNoticeSender>,
        registry: RoleRegistry,
    ) -> Self {
        Self {
            store,
            notifier,
            registry,
        }
    }

    /// Create an account (administrative operation).
    ///
    /// With `change_password` set the account starts in
    /// `CompleteRegistration` holding a fresh reset token, and the
    /// notifier is told to deliver it. Notifier failures are logged
    /// and never roll back the creation.
    pub fn create_user(&self, input: NewUser) -> Result<User, IdentityError> {
        let email = normalize_email(&input.email)?;
        let first_name = required_field(&input.first_name, "firstName")?;
        let last_name = required_field(&input.last_name, "lastName")?;
        if input.password.is_empty() {
            return Err(IdentityError::InvalidInput(vec!["password".to_string()]));
        }

        let role = self
            .registry
            .find_by_code(&input.role)
            .map_err(|_| IdentityError::RoleNotFound(input.role.clone()))?
            .clone();

        let password_hash = password::hash_password(&input.password)?;
        let (status, reset_password_token) = if input.change_password {
            (
                UserStatus::CompleteRegistration,
                Some(generate_reset_token()),
            )
        } else {
            (UserStatus::Registered, None)
        };

        let user = self.store.insert(User {
            id: UserId::new(),
            email,
            first_name,
            last_name,
            password_hash,
            role,
            status,
            reset_password_token: reset_password_token.clone(),
            has_access: input.has_access,
        })?;

        if let Some(token) = reset_password_token {
            self.notify_password_setup(&user.email, &token);
        }

        Ok(user)
    }

    /// Password login.
    ///
    /// Unknown email and wrong password return the same error, and
    /// both pay a full bcrypt verification so neither the body nor
    /// the timing says which one fired. Only after the credential
    /// matches does the status gate run, then the access switch.
    pub fn authenticate(&self, username: &str, password_plain: &str) -> Result<User, IdentityError> {
        let email = username.trim().to_lowercase();
        let Some(user) = self.store.find_by_email(&email) else {
            password::verify_padding(password_plain);
            return Err(IdentityError::InvalidCredentials);
        };

        if !password::verify_password(password_plain, &user.password_hash) {
            return Err(IdentityError::InvalidCredentials);
        }

        check_status(&user)?;
        if !user.has_access {
            return Err(IdentityError::UserInactive);
        }

        Ok(user)
    }

    pub fn get(&self, id: &UserId) -> Result<User, IdentityError> {
        self.store.find_by_id(id).ok_or(IdentityError::UserNotFound)
    }

    pub fn list(&self, page: &PageRequest) -> Listing<User> {
        list(self.store.list(), page)
    }

    /// Block an account. Any outstanding reset token is revoked with
    /// it: leaving `Blocked` goes through `unblock`, never through
    /// token redemption.
    pub fn block(&self, id: &UserId) -> Result<User, IdentityError> {
        let mut user = self.get(id)?;
        user.status = UserStatus::Blocked;
        user.reset_password_token = None;
        self.store.update(user)
    }

    /// `Blocked -> Registered`; a no-op for accounts not blocked.
    pub fn unblock(&self, id: &UserId) -> Result<User, IdentityError> {
        let mut user = self.get(id)?;
        if user.status == UserStatus::Blocked {
            user.status = UserStatus::Registered;
        }
        self.store.update(user)
    }

    /// Apply an allow-listed update.
    ///
    /// The payload is validated against [`crate::MUTABLE_FIELDS`]
    /// before the account is even fetched; a payload naming `status`
    /// (or anything else off the list) mutates nothing. `require_all`
    /// distinguishes full replace from partial update.
    pub fn update_user(
        &self,
        id: &UserId,
        payload: &serde_json::Value,
        require_all: bool,
    ) -> Result<User, IdentityError> {
        let update = UserUpdate::from_value(payload)?;
        if require_all {
            let missing = update.missing_fields();
            if !missing.is_empty() {
                return Err(IdentityError::InvalidInput(missing));
            }
        }

        let mut user = self.get(id)?;
        if let Some(email) = update.email {
            user.email = normalize_email(&email)?;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = required_field(&first_name, "firstName")?;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = required_field(&last_name, "lastName")?;
        }
        if let Some(role_code) = update.role {
            user.role = self
                .registry
                .find_by_code(&role_code)
                .map_err(|_| IdentityError::RoleNotFound(role_code.clone()))?
                .clone();
        }
        if let Some(has_access) = update.has_access {
            user.has_access = has_access;
        }

        self.store.update(user)
    }

    /// Delete an account. The acting identity can never delete itself,
    /// whatever its role; the check runs before touching the store.
    pub fn delete_user(&self, actor: &UserId, target: &UserId) -> Result<(), IdentityError> {
        if actor == target {
            return Err(IdentityError::CannotDeleteSelf);
        }
        self.store.delete(target)
    }

    /// Issue a fresh reset token for an existing account and notify.
    ///
    /// Replaces any earlier token — only the latest one redeems.
    pub fn request_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        let email = email.trim().to_lowercase();
        let mut user = self
            .store
            .find_by_email(&email)
            .ok_or(IdentityError::UserNotFound)?;

        if user.status == UserStatus::Blocked {
            return Err(IdentityError::UserBlocked);
        }

        let token = generate_reset_token();
        user.reset_password_token = Some(token.clone());
        let user = self.store.update(user)?;

        self.notify_password_setup(&user.email, &token);
        Ok(())
    }

    /// Redeem a reset token and set the new password.
    ///
    /// Single-use: the store clears the token in the same step that
    /// installs the hash and moves the account to `Registered`, so a
    /// second redemption of the same token fails.
    pub fn complete_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<User, IdentityError> {
        if new_password.is_empty() {
            return Err(IdentityError::InvalidInput(vec!["password".to_string()]));
        }

        let password_hash = password::hash_password(new_password)?;
        self.store.consume_reset_token(token, password_hash)
    }

    fn notify_password_setup(&self, email: &str, token: &str) {
        if let Err(err) = self.notifier.send_password_setup(email, token) {
            tracing::warn!(email = %email, error = %err, "password setup notice failed");
        }
    }
}

fn normalize_email(raw: &str) -> Result<String, IdentityError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(IdentityError::InvalidInput(vec!["email".to_string()]));
    }
    Ok(email)
}

fn required_field(raw: &str, name: &str) -> Result<String, IdentityError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(IdentityError::InvalidInput(vec![name.to_string()]));
    }
    Ok(value.to_string())
}

fn generate_reset_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RESET_TOKEN_LEN)
        .map(char::from)
        .collect()
}
