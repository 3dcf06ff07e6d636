//! Session events.

use common::ClientId;
use serde::{Deserialize, Serialize};

/// An event driving the session state machine.
///
/// `LoginClient` and `BecomeClient` carry the target client identifier.
/// Resolving a human-entered name or ID to that identifier is the
/// caller's job, done *before* the event is emitted; the FSM assumes the
/// identifier is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Log in as the given client from the opening menu.
    LoginClient(ClientId),

    /// Log in as a clerk.
    LoginClerk,

    /// Log in as a manager.
    LoginManager,

    /// Switch a clerk session into the given client's session.
    BecomeClient(ClientId),

    /// Step a manager session down to a clerk session.
    BecomeClerk,

    /// Leave the current session.
    Logout,
}

impl SessionEvent {
    /// Returns the event name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEvent::LoginClient(_) => "LoginClient",
            SessionEvent::LoginClerk => "LoginClerk",
            SessionEvent::LoginManager => "LoginManager",
            SessionEvent::BecomeClient(_) => "BecomeClient",
            SessionEvent::BecomeClerk => "BecomeClerk",
            SessionEvent::Logout => "Logout",
        }
    }
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
