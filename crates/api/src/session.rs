// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The session store.
//!
//! Holds at most one authenticated identity and drives the login state
//! machine:
//!
//! ```text
//! LoadingInitial --restore--> Anonymous <--login/logout--> Authenticated
//! ```
//!
//! Transitions are broadcast as [`SessionEvent`]s so a presentation layer
//! can render a busy indicator while a login is in flight.

use std::sync::Arc;

use repair_desk_domain::Identity;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::credentials::CredentialVerifier;
use crate::error::AuthError;

/// Message shown when the verifier rejects a login.
pub const LOGIN_FAILURE_MESSAGE: &str =
    "Invalid credentials. Try: admin/password or tech1/password";

/// Message shown when either login field is blank.
pub const EMPTY_CREDENTIALS_MESSAGE: &str = "Please enter both username and password";

const EVENT_BUFFER_SIZE: usize = 16;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Startup, before the persisted-session check has resolved.
    LoadingInitial,
    /// No identity.
    Anonymous,
    /// An identity is current.
    Authenticated(Identity),
}

/// Whether a login attempt is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
}

/// Session transitions, broadcast to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A login attempt started waiting on the verifier.
    LoadingStarted,
    /// The login attempt finished, successfully or not.
    LoadingFinished,
    LoggedIn {
        username: String,
    },
    LoginRejected {
        username: String,
    },
    LoggedOut,
}

/// Owns the current identity.
pub struct SessionStore {
    state: SessionState,
    load_state: LoadState,
    verifier: Arc<dyn CredentialVerifier>,
    config: SessionConfig,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    /// Creates a store in the `LoadingInitial` state.
    #[must_use]
    pub fn new(verifier: Arc<dyn CredentialVerifier>, config: SessionConfig) -> Self {
        let (events, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self {
            state: SessionState::LoadingInitial,
            load_state: LoadState::Idle,
            verifier,
            config,
            events,
        }
    }

    /// Resolves the startup check for a persisted session.
    ///
    /// Sessions are never persisted, so this always lands in `Anonymous`.
    /// Calling it after startup has no effect.
    pub fn restore(&mut self) {
        if self.state == SessionState::LoadingInitial {
            debug!("No persisted session found");
            self.state = SessionState::Anonymous;
        }
    }

    /// Attempts to log in.
    ///
    /// Blank fields fail immediately, without consulting the verifier or
    /// entering the loading state. Otherwise the attempt waits out the
    /// simulated latency, asks the verifier, and on success makes the
    /// returned identity current. A rejected attempt leaves the session
    /// as it was.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            debug!("Login attempted with blank credentials");
            return false;
        }

        self.load_state = LoadState::Loading;
        self.publish(SessionEvent::LoadingStarted);

        tokio::time::sleep(self.config.simulated_latency()).await;
        let verified: Option<Identity> = self.verifier.verify(username, password);

        self.load_state = LoadState::Idle;
        self.publish(SessionEvent::LoadingFinished);

        match verified {
            Some(identity) => {
                info!(username = %identity.username, role = %identity.role, "Logged in");
                self.publish(SessionEvent::LoggedIn {
                    username: identity.username.clone(),
                });
                self.state = SessionState::Authenticated(identity);
                true
            }
            None => {
                warn!(username, "Login rejected");
                self.publish(SessionEvent::LoginRejected {
                    username: username.to_string(),
                });
                false
            }
        }
    }

    /// Clears the current identity, if any.
    pub fn logout(&mut self) {
        if let SessionState::Authenticated(identity) = &self.state {
            info!(username = %identity.username, "Logged out");
        }
        self.state = SessionState::Anonymous;
        self.publish(SessionEvent::LoggedOut);
    }

    /// The current identity, if authenticated.
    #[must_use]
    pub const fn current_identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Authenticated(identity) => Some(identity),
            SessionState::LoadingInitial | SessionState::Anonymous => None,
        }
    }

    /// The current identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` if there is none.
    pub fn require_identity(&self) -> Result<&Identity, AuthError> {
        self.current_identity().ok_or(AuthError::NotAuthenticated)
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Subscribes to session events.
    ///
    /// Events sent before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: SessionEvent) {
        match self.events.send(event) {
            Ok(count) => debug!(receivers = count, "Published session event"),
            Err(_) => debug!("No receivers for session event"),
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("load_state", &self.load_state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
