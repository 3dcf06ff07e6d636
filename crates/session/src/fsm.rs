//! The session state machine.

use common::ClientId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::SessionEvent;
use crate::state::{ClientOrigin, SessionState};

/// Errors that can occur when driving the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The event is not permitted from the current state. The session
    /// stays where it was; nothing else happens.
    #[error("invalid transition: cannot {event} from {state} state")]
    InvalidTransition {
        state: SessionState,
        event: SessionEvent,
    },
}

/// Holds the current role state and the acting client's identity.
///
/// Dispatching is a total function over (state, event): the permitted
/// pairs move the session to the next state, every other pair is
/// rejected and leaves the state untouched. Entry origin for client
/// sessions is recorded in the state itself, so logout always unwinds to
/// the correct caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionFsm {
    state: SessionState,
}

impl SessionFsm {
    /// Creates a session in the `Anonymous` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the acting client's identifier, if any.
    pub fn active_client(&self) -> Option<ClientId> {
        self.state.active_client()
    }

    /// Applies an event and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] if the event is not
    /// permitted from the current state; the session is unchanged.
    pub fn dispatch(&mut self, event: SessionEvent) -> Result<SessionState, SessionError> {
        let next = transition(self.state, event)?;
        tracing::debug!(from = %self.state, to = %next, %event, "session transition");
        self.state = next;
        Ok(next)
    }
}

/// The transition table, including the two context-dependent logout rows
/// for client sessions.
fn transition(state: SessionState, event: SessionEvent) -> Result<SessionState, SessionError> {
    use SessionEvent::*;
    use SessionState::*;

    let next = match (state, event) {
        (Anonymous, LoginClient(id)) => Client {
            id,
            origin: ClientOrigin::Anonymous,
        },
        (Anonymous, LoginClerk) => Clerk,
        (Anonymous, LoginManager) => Manager,
        (Clerk, BecomeClient(id)) => Client {
            id,
            origin: ClientOrigin::Clerk,
        },
        (Clerk, Logout) => Anonymous,
        (Manager, BecomeClerk) => Clerk,
        (Manager, Logout) => Anonymous,
        // logout unwinds to wherever the client session was entered from
        (
            Client {
                origin: ClientOrigin::Anonymous,
                ..
            },
            Logout,
        ) => Anonymous,
        (
            Client {
                origin: ClientOrigin::Clerk,
                ..
            },
            Logout,
        ) => Clerk,
        (state, event) => return Err(SessionError::InvalidTransition { state, event }),
    };
    Ok(next)
}
