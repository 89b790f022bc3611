//! In-memory stores for the storefront.
//!
//! The store is transient: nothing survives a process restart. Each store
//! owns one shared mutable map behind an `RwLock`; other components reach
//! the data only through the store's operations, and the lock serializes
//! mutations so concurrent writers cannot corrupt each other's records.
//!
//! ## Stores
//!
//! - [`ProductStore`] - catalog records, CRUD plus category filtering
//! - [`UserStore`] - seeded login accounts, keyed by username
//! - [`SessionRegistry`] - login tokens and the identity they resolve to

mod products;
mod sessions;
mod users;

pub use products::ProductStore;
pub use sessions::SessionRegistry;
pub use users::UserStore;
