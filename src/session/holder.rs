//! Session holder
//!
//! One `Session` is built in `main` and handed by reference to every command
//! handler. It owns the only state shared across views: the persisted token
//! and the signed-in user. Both change only through the methods below.

use serde_json::json;
use tracing::{info, warn};

use crate::api::{envelope, ApiClient, AuthResponse};
use crate::error::{PfmError, PfmResult};
use crate::models::{ProfileUpdate, User};

/// Authentication state of the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No token, or the token was rejected
    Unauthenticated,
    /// A token is present and the identity check is in flight
    Verifying,
    /// Identity loaded
    Authenticated(User),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Holder of the signed-in user and its bearer token
#[derive(Debug)]
pub struct Session {
    api: ApiClient,
    state: SessionState,
    has_token: bool,
}

impl Session {
    /// Create a session over `api`, noting whether a token is already stored
    pub fn new(api: ApiClient) -> PfmResult<Self> {
        let has_token = api.tokens().load()?.is_some();
        Ok(Self {
            api,
            state: SessionState::Unauthenticated,
            has_token,
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether a token is persisted, verified or not
    pub fn has_token(&self) -> bool {
        self.has_token
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The signed-in user, or `Unauthenticated`
    pub fn require_user(&self) -> PfmResult<&User> {
        self.user().ok_or(PfmError::Unauthenticated)
    }

    /// Re-validate a persisted token against `/auth/me`
    ///
    /// Any failure logs the session out, so the token is cleared once and
    /// the holder ends up unauthenticated.
    pub async fn restore(&mut self) -> PfmResult<&SessionState> {
        if self.state.is_authenticated() || !self.has_token {
            return Ok(&self.state);
        }

        self.state = SessionState::Verifying;
        match self.fetch_identity().await {
            Ok(user) => {
                info!(user = %user.email, "session restored");
                self.state = SessionState::Authenticated(user);
            }
            Err(err) => {
                warn!(error = %err, "stored session rejected, signing out");
                self.logout()?;
            }
        }
        Ok(&self.state)
    }

    /// Restore the session and return the user, failing when signed out
    pub async fn ensure_authenticated(&mut self) -> PfmResult<&User> {
        self.restore().await?;
        self.require_user()
    }

    async fn fetch_identity(&self) -> PfmResult<User> {
        let body = self.api.get("/auth/me").await?;
        envelope::user(body)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> PfmResult<&User> {
        let body = self
            .api
            .post_public(
                "/auth/login",
                &json!({ "email": email.trim(), "password": password }),
            )
            .await?;
        self.accept(body)
    }

    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> PfmResult<&User> {
        let body = self
            .api
            .post_public(
                "/auth/register",
                &json!({ "name": name.trim(), "email": email.trim(), "password": password }),
            )
            .await?;
        self.accept(body)
    }

    fn accept(&mut self, body: serde_json::Value) -> PfmResult<&User> {
        let auth: AuthResponse = serde_json::from_value(body)?;
        if auth.token.is_empty() {
            return Err(PfmError::Api {
                status: 200,
                message: "Login response carried no token".into(),
            });
        }

        self.api.tokens().save(&auth.token)?;
        self.has_token = true;
        info!(user = %auth.user.email, "signed in");

        self.state = SessionState::Authenticated(auth.user);
        self.require_user()
    }

    /// Clear the token and the user
    ///
    /// Returns `false` when there was nothing to clear; in that case the
    /// token store is not touched.
    pub fn logout(&mut self) -> PfmResult<bool> {
        if !self.has_token && self.state == SessionState::Unauthenticated {
            return Ok(false);
        }

        self.api.tokens().clear()?;
        self.has_token = false;
        self.state = SessionState::Unauthenticated;
        info!("signed out");
        Ok(true)
    }

    /// Send a profile update and replace the in-memory user with the answer
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> PfmResult<&User> {
        self.require_user()?;
        update
            .validate()
            .map_err(|e| PfmError::Validation(e.to_string()))?;

        let body = self.api.put("/auth/profile", update).await?;
        let user = envelope::user(body)?;

        self.state = SessionState::Authenticated(user);
        self.require_user()
    }
}
