//! Session-related types.

use serde::{Deserialize, Serialize};

use kumawat_traders_core::UserId;

/// What a session token resolves to.
///
/// A snapshot of the user at login time, not a live link: role changes
/// after login are not reflected in existing sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The authenticated user's login name.
    pub username: String,
    /// Role flag captured at login.
    pub is_admin: bool,
}
