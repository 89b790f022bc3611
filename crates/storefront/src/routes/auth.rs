//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use kumawat_traders_core::{SessionToken, UserId};

use crate::error::{AppError, FieldError, Result};
use crate::middleware::{OptionalSession, RequireSession};
use crate::models::SessionInfo;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Minimum username length accepted at login.
const MIN_USERNAME_LENGTH: usize = 3;
/// Minimum password length accepted at login.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Login request body.
///
/// Fields default to empty so that a missing field surfaces as a length
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Public view of a user, as returned from login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub is_admin: bool,
}

/// Login response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserView,
    pub session_id: SessionToken,
}

/// Simple acknowledgement body.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: String,
}

fn validate_login(req: &LoginRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if req.username.chars().count() < MIN_USERNAME_LENGTH {
        errors.push(FieldError::new(
            "username",
            format!("Username must be at least {MIN_USERNAME_LENGTH} characters"),
        ));
    }
    if req.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    errors
}

/// Handle a login attempt.
///
/// Mints a fresh session token on success; earlier sessions for the same
/// user remain valid.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let errors = validate_login(&req);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let auth = AuthService::new(state.users(), state.sessions());
    let (user, token) = auth.login(&req.username, &req.password)?;

    tracing::info!(username = %user.username, "login");

    Ok(Json(LoginResponse {
        user: UserView {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        },
        session_id: token,
    }))
}

/// Return the session info for the presented token.
pub async fn me(RequireSession(session): RequireSession) -> Json<SessionInfo> {
    Json(session)
}

/// Revoke the presented token, if any. Idempotent: unknown or missing
/// tokens still get a 200 acknowledgement.
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    OptionalSession(token): OptionalSession,
) -> Json<Ack> {
    if let Some(token) = token {
        AuthService::new(state.users(), state.sessions()).logout(&token);
    }
    Json(Ack {
        message: "Logged out successfully".to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_login_accepts_minimums() {
        assert!(validate_login(&request("abc", "secret")).is_empty());
    }

    #[test]
    fn test_validate_login_flags_each_field() {
        let errors = validate_login(&request("ab", "short"));
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "username"));
        assert!(errors.iter().any(|e| e.field == "password"));
    }
}
