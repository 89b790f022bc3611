//! User store.
//!
//! Accounts exist only through seeding at process start; there is no
//! registration path.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::User;

/// In-memory user accounts, keyed by username (case-sensitive).
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user. An existing user with the same username is replaced.
    pub fn insert(&self, user: User) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.username.clone(), user);
    }

    /// Look up a user by exact username.
    #[must_use]
    pub fn get_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(username)
            .cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kumawat_traders_core::UserId;

    fn user(username: &str) -> User {
        User {
            id: UserId::generate(),
            username: username.to_string(),
            password_hash: "digest".to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let store = UserStore::new();
        store.insert(user("promax"));

        assert!(store.get_by_username("promax").is_some());
        assert!(store.get_by_username("Promax").is_none());
    }

    #[test]
    fn test_unknown_username_is_absent() {
        let store = UserStore::new();
        assert!(store.get_by_username("ghost").is_none());
    }
}
