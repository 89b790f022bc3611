//! Session registry.
//!
//! Process-lifetime mapping from opaque tokens to the identity snapshot
//! taken at login. Deliberately volatile: a restart logs everyone out.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use rand::RngCore;

use kumawat_traders_core::{SessionToken, UserId};

use crate::models::SessionInfo;

/// Token length in bytes before hex encoding (256 bits).
const TOKEN_BYTES: usize = 32;

/// In-memory session registry.
///
/// Every login mints a brand-new token; logging in again elsewhere creates
/// an additional independent session rather than invalidating the first.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionToken, SessionInfo>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token for an authenticated user and remember the
    /// association.
    pub fn create(&self, user_id: UserId, username: &str, is_admin: bool) -> SessionToken {
        let token = generate_token();
        let info = SessionInfo {
            user_id,
            username: username.to_owned(),
            is_admin,
        };
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), info);
        token
    }

    /// Resolve a token to its session snapshot.
    #[must_use]
    pub fn lookup(&self, token: &SessionToken) -> Option<SessionInfo> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    /// Drop a token unconditionally. Revoking an unknown token is a no-op.
    pub fn revoke(&self, token: &SessionToken) {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }
}

/// 32 bytes from the OS-seeded CSPRNG, hex-encoded.
fn generate_token() -> SessionToken {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    SessionToken::new(hex::encode(bytes))
}
