//! Session gate.
//!
//! Decides whether the visitor is authenticated. Starts unknown, resolves
//! once from the startup probe, then follows session-change events
//! (sign-in, sign-out, token refresh) for the lifetime of the process.
//! Session presence is the sole criterion for rendering the app shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// An authenticated session granted by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: String,
    pub email: Option<String>,
}

impl Session {
    /// Whether the access token has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Session-change notifications.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
    TokenRefreshed(Session),
}

/// Sender half of the session-change channel.
pub type AuthSender = broadcast::Sender<AuthEvent>;

/// Receiver half of the session-change channel.
pub type AuthReceiver = broadcast::Receiver<AuthEvent>;

/// Create a session-change broadcast channel.
pub fn auth_channel() -> AuthSender {
    let (tx, _rx) = broadcast::channel(16);
    tx
}

/// What the gate should render.
#[derive(Debug, Clone, PartialEq)]
pub enum GateState {
    /// Initial probe not yet resolved; show a loading indicator.
    Unknown,
    /// No session; show the login/signup surface.
    Anonymous,
    /// Active session; show the application shell.
    Authenticated(Session),
}

/// The session gate state machine.
#[derive(Debug)]
pub struct Gate {
    state: GateState,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

impl Gate {
    /// New gate in the unknown state.
    pub fn new() -> Self {
        Self {
            state: GateState::Unknown,
        }
    }

    /// Current state.
    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Resolve the startup probe.
    pub fn resolve_probe(&mut self, session: Option<Session>) {
        self.state = match session {
            Some(s) => GateState::Authenticated(s),
            None => GateState::Anonymous,
        };
    }

    /// Apply a session-change notification. May fire at any time after
    /// startup; no second probe is needed.
    pub fn apply(&mut self, event: AuthEvent) {
        self.state = match event {
            AuthEvent::SignedIn(s) | AuthEvent::TokenRefreshed(s) => GateState::Authenticated(s),
            AuthEvent::SignedOut => GateState::Anonymous,
        };
    }

    /// Whether the app shell should render.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, GateState::Authenticated(_))
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            GateState::Authenticated(s) => Some(s),
            _ => None,
        }
    }
}

/// Outcome of a sign-up request.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    /// Identity created and a session granted right away.
    SignedIn(Session),
    /// Identity created but no session: email confirmation is pending,
    /// out-of-band. This is a success variant, not a failure.
    ConfirmationPending,
}

/// Advisory shown for [`SignUpOutcome::ConfirmationPending`].
pub const CONFIRMATION_PENDING_MSG: &str =
    "Signed up successfully! Check your email and confirm via the link before logging in.";

/// The collaborator's bad-credentials error text.
pub const INVALID_CREDENTIALS: &str = "Invalid login credentials";

/// Map a sign-in failure to a user-facing message. Bad credentials get the
/// friendly wording; every other auth error surfaces the raw message.
pub fn sign_in_error_message(raw: &str) -> String {
    if raw == INVALID_CREDENTIALS {
        "Email or password is incorrect. If you just signed up, did you confirm your email?"
            .to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> Session {
        Session {
            access_token: token.to_string(),
            refresh_token: "refresh".into(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
            user_id: "user-1".into(),
            email: Some("student@example.com".into()),
        }
    }

    #[test]
    fn test_gate_starts_unknown() {
        let gate = Gate::new();
        assert_eq!(*gate.state(), GateState::Unknown);
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_probe_without_session_is_anonymous() {
        let mut gate = Gate::new();
        gate.resolve_probe(None);
        assert_eq!(*gate.state(), GateState::Anonymous);
    }

    #[test]
    fn test_probe_with_session_authenticates() {
        let mut gate = Gate::new();
        gate.resolve_probe(Some(session("t")));
        assert!(gate.is_authenticated());
        assert_eq!(gate.session().unwrap().access_token, "t");
    }

    #[test]
    fn test_sign_in_event_authenticates_without_second_probe() {
        let mut gate = Gate::new();
        gate.resolve_probe(None);
        gate.apply(AuthEvent::SignedIn(session("t")));
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_sign_out_event_returns_to_anonymous() {
        let mut gate = Gate::new();
        gate.resolve_probe(Some(session("t")));
        gate.apply(AuthEvent::SignedOut);
        assert_eq!(*gate.state(), GateState::Anonymous);
        assert!(gate.session().is_none());
    }

    #[test]
    fn test_token_refresh_swaps_session() {
        let mut gate = Gate::new();
        gate.resolve_probe(Some(session("old")));
        gate.apply(AuthEvent::TokenRefreshed(session("new")));
        assert_eq!(gate.session().unwrap().access_token, "new");
    }

    #[test]
    fn test_session_expiry() {
        let mut s = session("t");
        assert!(!s.is_expired(Utc::now()));
        s.expires_at = Utc::now() - chrono::Duration::seconds(1);
        assert!(s.is_expired(Utc::now()));
    }

    #[test]
    fn test_sign_in_error_mapping() {
        let friendly = sign_in_error_message(INVALID_CREDENTIALS);
        assert!(friendly.contains("incorrect"));
        assert_eq!(sign_in_error_message("Email rate limit"), "Email rate limit");
    }
}
