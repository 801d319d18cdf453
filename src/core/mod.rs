//! Core state machine types.
//!
//! This module holds the pieces every machine shares regardless of what it
//! models:
//! - State definitions via the `State` trait
//! - Timestamped history of the transitions a machine has taken
//!
//! Nothing in here knows about doors, prizes or players.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
