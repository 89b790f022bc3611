//! User domain type.

use kumawat_traders_core::UserId;

/// A storefront user.
///
/// Users exist only through seeding; there is no registration endpoint.
/// The password is held as a digest, never as plaintext.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name, unique and case-sensitive.
    pub username: String,
    /// Password digest (see `services::auth::password`).
    pub password_hash: String,
    /// Whether the user may perform admin operations.
    pub is_admin: bool,
}
