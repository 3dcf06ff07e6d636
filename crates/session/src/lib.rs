//! Session state machine for the warehouse's role-gated interface.
//!
//! This crate tracks who is driving the session and which operations are
//! reachable:
//! - `SessionState` — the current role, carrying the acting client's
//!   identity and the state the client session was entered from
//! - `SessionEvent` — login, become, and logout events
//! - `SessionFsm` — the deterministic transition function
//!
//! The FSM never resolves identifiers itself; callers attach an
//! already-validated client ID to the events that need one.

pub mod events;
pub mod fsm;
pub mod state;

pub use events::SessionEvent;
pub use fsm::{SessionError, SessionFsm};
pub use state::{ClientOrigin, SessionState};
