//! Password auth against the collaborator's `/auth/v1` surface.
//!
//! Covers sign-in, sign-up, sign-out, token refresh and the startup session
//! probe. Sessions persist in a JSON file so they survive between CLI
//! invocations (the browser original left this to its client library).
//! Every session change is broadcast so long-running views can follow.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use sh_core::session::{auth_channel, AuthEvent, AuthReceiver, AuthSender, Session, SignUpOutcome};
use tracing::{debug, warn};

use crate::client::{check_status, RemoteError, RemoteResult, RestClient};

/// Auth client with session persistence and change notifications.
pub struct AuthClient {
    rest: RestClient,
    session_path: PathBuf,
    events: AuthSender,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct UserDto {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    user: UserDto,
}

/// Sign-up responses come in two shapes: a full token grant when the
/// project auto-confirms, or a bare identity when email confirmation is
/// required first.
#[derive(Deserialize)]
struct SignUpResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<UserDto>,
    #[serde(default)]
    id: Option<String>,
}

impl From<TokenResponse> for Session {
    fn from(token: TokenResponse) -> Self {
        Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
            user_id: token.user.id,
            email: token.user.email,
        }
    }
}

impl AuthClient {
    /// Create an auth client using the default session file location,
    /// `~/.schoolhelper/session.json`.
    pub fn new(rest: RestClient) -> Self {
        let session_path = dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(".schoolhelper")
            .join("session.json");
        Self::with_session_path(rest, session_path)
    }

    /// Create an auth client with an explicit session file path.
    pub fn with_session_path(rest: RestClient, session_path: PathBuf) -> Self {
        Self {
            rest,
            session_path,
            events: auth_channel(),
        }
    }

    /// Subscribe to session-change notifications.
    pub fn subscribe(&self) -> AuthReceiver {
        self.events.subscribe()
    }

    /// The startup session probe: the persisted session if still valid,
    /// refreshed transparently when expired. `None` means anonymous.
    pub async fn current_session(&self) -> Option<Session> {
        let session = self.load_persisted()?;
        if !session.is_expired(Utc::now()) {
            return Some(session);
        }
        match self.refresh(&session).await {
            Ok(refreshed) => {
                let _ = self.events.send(AuthEvent::TokenRefreshed(refreshed.clone()));
                Some(refreshed)
            }
            Err(e) => {
                warn!(error = %e, "session refresh failed, treating as signed out");
                self.clear_persisted();
                None
            }
        }
    }

    /// Sign in with email and password. Persists the session and emits
    /// [`AuthEvent::SignedIn`] on success.
    pub async fn sign_in(&self, email: &str, password: &str) -> RemoteResult<Session> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.rest.base_url());
        let token = self.auth_request(&url, &Credentials { email, password }).await?;
        let session = Session::from(token);
        self.persist(&session)?;
        let _ = self.events.send(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    /// Sign up with email and password.
    ///
    /// A created identity without a session means the confirmation email is
    /// pending; that is a success variant, never an error, and the caller
    /// stays anonymous until the sign-in that follows confirmation.
    pub async fn sign_up(&self, email: &str, password: &str) -> RemoteResult<SignUpOutcome> {
        let url = format!("{}/auth/v1/signup", self.rest.base_url());
        let response = self
            .rest
            .http()
            .post(&url)
            .header("apikey", self.rest.api_key())
            .json(&Credentials { email, password })
            .send()
            .await?;
        let response = match check_status(response).await {
            Ok(r) => r,
            Err(RemoteError::Api { body, .. }) => {
                return Err(RemoteError::Auth(error_message(&body)));
            }
            Err(e) => return Err(e),
        };
        let parsed: SignUpResponse = response.json().await?;
        self.sign_up_outcome(parsed)
    }

    /// Request session termination, clear the persisted session and emit
    /// [`AuthEvent::SignedOut`]. A failed remote logout still signs out
    /// locally.
    pub async fn sign_out(&self) -> RemoteResult<()> {
        if let Some(session) = self.load_persisted() {
            let url = format!("{}/auth/v1/logout", self.rest.base_url());
            let result = self
                .rest
                .http()
                .post(&url)
                .header("apikey", self.rest.api_key())
                .bearer_auth(&session.access_token)
                .send()
                .await;
            if let Err(e) = result {
                warn!(error = %e, "remote logout failed, clearing local session anyway");
            }
        }
        self.clear_persisted();
        let _ = self.events.send(AuthEvent::SignedOut);
        Ok(())
    }

    async fn refresh(&self, session: &Session) -> RemoteResult<Session> {
        let url = format!(
            "{}/auth/v1/token?grant_type=refresh_token",
            self.rest.base_url()
        );
        let token = self
            .auth_request(&url, &RefreshRequest { refresh_token: &session.refresh_token })
            .await?;
        let refreshed = Session::from(token);
        self.persist(&refreshed)?;
        debug!(user = %refreshed.user_id, "session refreshed");
        Ok(refreshed)
    }

    async fn auth_request<B: Serialize>(&self, url: &str, body: &B) -> RemoteResult<TokenResponse> {
        let response = self
            .rest
            .http()
            .post(url)
            .header("apikey", self.rest.api_key())
            .json(body)
            .send()
            .await?;
        match check_status(response).await {
            Ok(r) => Ok(r.json().await?),
            Err(RemoteError::Api { body, .. }) => Err(RemoteError::Auth(error_message(&body))),
            Err(e) => Err(e),
        }
    }

    fn sign_up_outcome(&self, parsed: SignUpResponse) -> RemoteResult<SignUpOutcome> {
        match parsed {
            SignUpResponse {
                access_token: Some(access_token),
                refresh_token: Some(refresh_token),
                expires_in,
                user: Some(user),
                ..
            } => {
                let session = Session {
                    access_token,
                    refresh_token,
                    expires_at: Utc::now() + Duration::seconds(expires_in.unwrap_or(3600)),
                    user_id: user.id,
                    email: user.email,
                };
                self.persist(&session)?;
                let _ = self.events.send(AuthEvent::SignedIn(session.clone()));
                Ok(SignUpOutcome::SignedIn(session))
            }
            SignUpResponse { user: Some(_), .. } | SignUpResponse { id: Some(_), .. } => {
                Ok(SignUpOutcome::ConfirmationPending)
            }
            _ => Err(RemoteError::Auth(
                "unexpected sign-up response from the auth service".to_string(),
            )),
        }
    }

    fn persist(&self, session: &Session) -> RemoteResult<()> {
        if let Some(parent) = self.session_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.session_path, raw)?;
        Ok(())
    }

    fn load_persisted(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.session_path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "discarding unreadable session file");
                None
            }
        }
    }

    fn clear_persisted(&self) {
        let _ = std::fs::remove_file(&self.session_path);
    }
}

/// Pull a human-readable message out of an auth error body. The service
/// uses a few different keys depending on the endpoint.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.to_string()
}
