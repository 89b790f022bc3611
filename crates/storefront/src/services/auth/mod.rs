//! Authentication service.
//!
//! Checks credentials against the user store and mints/revokes sessions
//! in the registry. Authorization (the admin check) happens per request in
//! the middleware extractors, not here.

pub mod password;

use thiserror::Error;

use kumawat_traders_core::SessionToken;

use crate::models::User;
use crate::store::{SessionRegistry, UserStore};

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. The two cases are deliberately
    /// indistinguishable to the caller.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: &'a UserStore,
    sessions: &'a SessionRegistry,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service over the shared stores.
    #[must_use]
    pub const fn new(users: &'a UserStore, sessions: &'a SessionRegistry) -> Self {
        Self { users, sessions }
    }

    /// Login with username and password.
    ///
    /// On success returns the user together with a freshly minted session
    /// token. Earlier sessions for the same user stay valid.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair doesn't match.
    pub fn login(&self, username: &str, pass: &str) -> Result<(User, SessionToken), AuthError> {
        let user = self
            .users
            .get_by_username(username)
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(pass, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .sessions
            .create(user.id, &user.username, user.is_admin);
        Ok((user, token))
    }

    /// Revoke a session token. Idempotent.
    pub fn logout(&self, token: &SessionToken) {
        self.sessions.revoke(token);
    }
}
