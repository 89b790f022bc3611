//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::seed;
use crate::store::{ProductStore, SessionRegistry, UserStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The stores live here and nowhere else;
/// handlers reach them only through the accessors, so a fresh `AppState`
/// per test gives a fully isolated, freshly seeded store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    products: ProductStore,
    users: UserStore,
    sessions: SessionRegistry,
}

impl AppState {
    /// Create a new application state with freshly seeded stores.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let products = ProductStore::new();
        let users = UserStore::new();
        let sessions = SessionRegistry::new();

        seed::seed_products(&products);
        seed::seed_admin_user(&users, &config);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                users,
                sessions,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product store.
    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    /// Get a reference to the user store.
    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }

    /// Get a reference to the session registry.
    #[must_use]
    pub fn sessions(&self) -> &SessionRegistry {
        &self.inner.sessions
    }
}
