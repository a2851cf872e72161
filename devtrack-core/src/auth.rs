//! Login gate for the console session
//!
//! Credentials are compared as plain strings. This is a convenience gate for
//! a shared office machine, not a security boundary.

use std::collections::BTreeMap;
use thiserror::Error;

/// Number of credential submissions allowed before access is denied
pub const MAX_LOGIN_ATTEMPTS: u8 = 3;

/// Errors raised by the authenticator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("login session already finished")]
    SessionClosed,
}

/// Known username/secret pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStore {
    users: BTreeMap<String, String>,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::from_pairs([("admin", "1234"), ("jacqueline", "dev2025")])
    }
}

impl CredentialStore {
    /// Builds a store from `(username, secret)` pairs
    pub fn from_pairs<I, U, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (U, S)>,
        U: Into<String>,
        S: Into<String>,
    {
        Self {
            users: pairs
                .into_iter()
                .map(|(u, s)| (u.into(), s.into()))
                .collect(),
        }
    }

    /// Returns true if the pair matches exactly
    pub fn verify(&self, username: &str, secret: &str) -> bool {
        self.users.get(username).is_some_and(|known| known == secret)
    }

    /// Usernames in alphabetical order
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(|u| u.as_str())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl From<BTreeMap<String, String>> for CredentialStore {
    fn from(users: BTreeMap<String, String>) -> Self {
        Self { users }
    }
}

/// Where the login session currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    AwaitingCredentials { attempts_left: u8 },
    Authenticated(String),
    Denied,
}

impl AuthState {
    /// True once the session has either succeeded or been denied
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AuthState::AwaitingCredentials { .. })
    }
}

/// Outcome of a single submission, used to pick the message shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Granted { username: String },
    Retry { attempts_left: u8 },
    Denied,
}

/// Bounded-retry login state machine
#[derive(Debug)]
pub struct Authenticator {
    credentials: CredentialStore,
    state: AuthState,
}

impl Authenticator {
    pub fn new(credentials: CredentialStore) -> Self {
        Self {
            credentials,
            state: AuthState::AwaitingCredentials {
                attempts_left: MAX_LOGIN_ATTEMPTS,
            },
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// 1-based number of the attempt about to be made
    pub fn attempt_number(&self) -> u8 {
        match self.state {
            AuthState::AwaitingCredentials { attempts_left } => {
                MAX_LOGIN_ATTEMPTS - attempts_left + 1
            }
            _ => MAX_LOGIN_ATTEMPTS,
        }
    }

    /// Checks one credential pair and advances the state machine
    pub fn submit(&mut self, username: &str, secret: &str) -> Result<AuthEvent, AuthError> {
        let attempts_left = match self.state {
            AuthState::AwaitingCredentials { attempts_left } => attempts_left,
            _ => return Err(AuthError::SessionClosed),
        };

        if self.credentials.verify(username, secret) {
            log::info!("User '{}' authenticated", username);
            self.state = AuthState::Authenticated(username.to_string());
            return Ok(AuthEvent::Granted {
                username: username.to_string(),
            });
        }

        let remaining = attempts_left.saturating_sub(1);
        log::warn!(
            "Failed login for '{}' ({} attempt(s) left)",
            username,
            remaining
        );

        if remaining == 0 {
            self.state = AuthState::Denied;
            Ok(AuthEvent::Denied)
        } else {
            self.state = AuthState::AwaitingCredentials {
                attempts_left: remaining,
            };
            Ok(AuthEvent::Retry {
                attempts_left: remaining,
            })
        }
    }
}
