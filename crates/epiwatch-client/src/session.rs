//! Session and token handling.
//!
//! Logging in or signing up yields a [`Session`] holding the bearer
//! token the server issued. The session can stamp any [`ApiClient`]
//! into an authenticated one; authentication is an explicit step, never
//! implied by navigation.

use chrono::Utc;
use epiwatch_types::{LoginRequest, SessionToken};

use crate::error::ClientError;
use crate::http::ApiClient;

/// An authenticated session against the EpiWatch API.
#[derive(Debug, Clone)]
pub struct Session {
    /// The token the server issued.
    pub token: SessionToken,
}

impl Session {
    /// Log in with existing credentials.
    pub async fn login(api: &ApiClient, credentials: &LoginRequest) -> Result<Self, ClientError> {
        let token = api.post("/api/auth/login", credentials).await?;
        Ok(Self { token })
    }

    /// Create an account and log in.
    pub async fn signup(api: &ApiClient, credentials: &LoginRequest) -> Result<Self, ClientError> {
        let token = api.post("/api/auth/signup", credentials).await?;
        Ok(Self { token })
    }

    /// A client that sends this session's bearer token.
    #[must_use]
    pub fn authenticated(&self, api: &ApiClient) -> ApiClient {
        api.with_token(self.token.token.clone())
    }

    /// Whether the token's expiry has passed.
    pub fn is_expired(&self) -> bool {
        self.token.expires_at <= Utc::now()
    }

    /// Whether the session holder has administrator rights.
    pub const fn is_admin(&self) -> bool {
        self.token.is_admin
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn session(expires_in: Duration, is_admin: bool) -> Session {
        Session {
            token: SessionToken {
                token: "tok".to_owned(),
                email: "ops@epiwatch.or.ke".to_owned(),
                is_admin,
                expires_at: Utc::now().checked_add_signed(expires_in).unwrap(),
            },
        }
    }

    #[test]
    fn expiry_check() {
        assert!(!session(Duration::hours(1), false).is_expired());
        assert!(session(Duration::hours(-1), false).is_expired());
    }

    #[test]
    fn admin_flag_carries_through() {
        assert!(session(Duration::hours(1), true).is_admin());
        assert!(!session(Duration::hours(1), false).is_admin());
    }
}
