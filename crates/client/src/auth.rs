//! Session store and client-side token decoding.
//!
//! The token payload is decoded, never verified; verification is the
//! backend's job. The store only exists so the UI can gate routes on
//! `is_authenticated` and the decoded role, and so the HTTP layer can attach
//! the bearer token and clear it on a 401.

use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use citaflow_core::errors::{BookingError, BookingResult};
use citaflow_core::models::business::Role;
use serde::Deserialize;

/// Claims carried in the backend's JWT payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// User id.
    pub sub: String,
    pub email: String,
    /// Business display name.
    pub name: String,
    #[serde(default)]
    pub role: Option<Role>,
    pub iat: i64,
    pub exp: i64,
}

/// Decoded session derived from a stored token.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

struct StoredSession {
    token: String,
    session: Session,
}

/// In-memory token store shared between the HTTP layer and the UI.
#[derive(Default)]
pub struct AuthStore {
    inner: Mutex<Option<StoredSession>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a token and the session decoded from it. An undecodable token
    /// clears the session instead of storing garbage.
    pub fn set_token(&self, token: &str) {
        match decode_claims(token) {
            Ok(claims) => {
                let session = Session {
                    user_id: claims.sub,
                    email: claims.email,
                    name: claims.name,
                    // Older tokens omit the role claim
                    role: claims.role.unwrap_or(Role::Owner),
                };
                let mut guard = self.lock();
                *guard = Some(StoredSession {
                    token: token.to_string(),
                    session,
                });
            }
            Err(err) => {
                tracing::warn!("Rejected invalid session token: {err}");
                self.logout();
            }
        }
    }

    pub fn logout(&self) {
        let mut guard = self.lock();
        *guard = None;
    }

    pub fn token(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.token.clone())
    }

    pub fn session(&self) -> Option<Session> {
        self.lock().as_ref().map(|s| s.session.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.lock().as_ref().map(|s| s.session.role)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<StoredSession>> {
        // A poisoned session lock only ever holds plain data
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Decodes the payload segment of a JWT without verifying its signature.
pub fn decode_claims(token: &str) -> BookingResult<TokenClaims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(BookingError::Authentication(
            "Token is not a three-segment JWT".to_string(),
        ));
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|_| {
        BookingError::Authentication("Token payload is not valid base64url".to_string())
    })?;

    serde_json::from_slice(&bytes).map_err(|err| {
        BookingError::Authentication(format!("Token payload is not valid JSON: {err}"))
    })
}

/// Where a failed route guard sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Dashboard,
}

impl Redirect {
    pub fn path(self) -> &'static str {
        match self {
            Redirect::Login => "/login",
            Redirect::Dashboard => "/dashboard",
        }
    }
}

/// Guard for owner-dashboard routes: any authenticated session passes.
pub fn guard_authenticated(auth: &AuthStore) -> Result<(), Redirect> {
    if auth.is_authenticated() {
        Ok(())
    } else {
        Err(Redirect::Login)
    }
}

/// Guard for super-admin routes: unauthenticated users go to login,
/// authenticated non-admins back to their dashboard.
pub fn guard_super_admin(auth: &AuthStore) -> Result<(), Redirect> {
    match auth.role() {
        Some(Role::SuperAdmin) => Ok(()),
        Some(_) => Err(Redirect::Dashboard),
        None => Err(Redirect::Login),
    }
}
