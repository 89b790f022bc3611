//! Authentication extractors.
//!
//! Every authenticated request carries its session token in the
//! `x-session-id` header. The extractors resolve it against the session
//! registry on each request; authorization decisions are never cached
//! across requests.

use axum::{extract::FromRequestParts, http::request::Parts};

use kumawat_traders_core::SessionToken;

use crate::error::AppError;
use crate::models::SessionInfo;
use crate::state::AppState;

/// Header carrying the session token.
pub const SESSION_HEADER: &str = "x-session-id";

/// Extractor that requires a valid session.
///
/// Rejects with 401 when the header is absent or the token is unknown.
///
/// # Example
///
/// ```rust,ignore
/// async fn me(RequireSession(session): RequireSession) -> Json<SessionInfo> {
///     Json(session)
/// }
/// ```
pub struct RequireSession(pub SessionInfo);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let info = session_from_header(parts, state).ok_or(AppError::Unauthorized)?;
        Ok(Self(info))
    }
}

/// Extractor that requires a valid session with the admin role.
///
/// Rejects with 401 when there is no valid session, and with 403 when the
/// session's user is not an admin.
pub struct RequireAdmin(pub SessionInfo);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let info = session_from_header(parts, state).ok_or(AppError::Unauthorized)?;
        if !info.is_admin {
            return Err(AppError::Forbidden);
        }
        Ok(Self(info))
    }
}

/// Extractor that yields the raw token if one was sent, valid or not.
///
/// Used by logout, which is idempotent and must accept unknown tokens.
pub struct OptionalSession(pub Option<SessionToken>);

impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(header_token(parts)))
    }
}

fn header_token(parts: &Parts) -> Option<SessionToken> {
    parts
        .headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(SessionToken::from)
}

fn session_from_header(parts: &Parts, state: &AppState) -> Option<SessionInfo> {
    let token = header_token(parts)?;
    state.sessions().lookup(&token)
}
