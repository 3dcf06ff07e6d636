//! Session states.

use common::ClientId;
use serde::{Deserialize, Serialize};

/// The state a client session was entered from, used to route logout
/// back to the correct caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientOrigin {
    /// The client logged in directly from the opening menu.
    Anonymous,

    /// A clerk switched into the client's session.
    Clerk,
}

/// The current role of the interactive session.
///
/// State transitions:
/// ```text
///              LoginClerk                  BecomeClient
/// Anonymous ──────────────► Clerk ──────────────────────► Client
///     │                      ▲  ▲                           │
///     │ LoginManager         │  └───────────────────────────┤
///     └────────► Manager ────┘            Logout            │
///                   BecomeClerk    (back to entry origin) ──┘
/// ```
/// Logging out of `Clerk` or `Manager` returns to `Anonymous`; logging
/// out of `Client` returns to whichever state it was entered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SessionState {
    /// Nobody is logged in. The initial state.
    #[default]
    Anonymous,

    /// A client session, acting as `id`.
    Client {
        /// The acting client.
        id: ClientId,
        /// Where the session was entered from.
        origin: ClientOrigin,
    },

    /// A clerk session.
    Clerk,

    /// A manager session.
    Manager,
}

impl SessionState {
    /// Returns the acting client's identifier, if this is a client
    /// session.
    pub fn active_client(&self) -> Option<ClientId> {
        match self {
            SessionState::Client { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Returns true if a login event is permitted in this state.
    pub fn can_login(&self) -> bool {
        matches!(self, SessionState::Anonymous)
    }

    /// Returns true if this state may switch into a client session.
    pub fn can_become_client(&self) -> bool {
        matches!(self, SessionState::Clerk)
    }

    /// Returns true if this state may step down to a clerk session.
    pub fn can_become_clerk(&self) -> bool {
        matches!(self, SessionState::Manager)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Anonymous => "Anonymous",
            SessionState::Client { .. } => "Client",
            SessionState::Clerk => "Clerk",
            SessionState::Manager => "Manager",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Client { id, .. } => write!(f, "Client({id})"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_anonymous() {
        assert_eq!(SessionState::default(), SessionState::Anonymous);
    }

    #[test]
    fn only_anonymous_can_login() {
        assert!(SessionState::Anonymous.can_login());
        assert!(!SessionState::Clerk.can_login());
        assert!(!SessionState::Manager.can_login());
        let client = SessionState::Client {
            id: ClientId::new(1),
            origin: ClientOrigin::Anonymous,
        };
        assert!(!client.can_login());
    }

    #[test]
    fn only_clerk_can_become_client() {
        assert!(SessionState::Clerk.can_become_client());
        assert!(!SessionState::Anonymous.can_become_client());
        assert!(!SessionState::Manager.can_become_client());
    }

    #[test]
    fn only_manager_can_become_clerk() {
        assert!(SessionState::Manager.can_become_clerk());
        assert!(!SessionState::Clerk.can_become_clerk());
    }

    #[test]
    fn active_client_is_carried_by_client_state() {
        let state = SessionState::Client {
            id: ClientId::new(7),
            origin: ClientOrigin::Clerk,
        };
        assert_eq!(state.active_client(), Some(ClientId::new(7)));
        assert_eq!(SessionState::Clerk.active_client(), None);
    }

    #[test]
    fn display_shows_acting_client() {
        let state = SessionState::Client {
            id: ClientId::new(3),
            origin: ClientOrigin::Anonymous,
        };
        assert_eq!(state.to_string(), "Client(C3)");
        assert_eq!(SessionState::Manager.to_string(), "Manager");
    }

    #[test]
    fn serialization_roundtrip() {
        let state = SessionState::Client {
            id: ClientId::new(2),
            origin: ClientOrigin::Clerk,
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
