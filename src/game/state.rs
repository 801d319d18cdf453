//! Game phases and modes.

use crate::builder::{cycle, BuildError, StateMachineBuilder};
use crate::error::GameError;
use crate::fsm::StateMachine;
use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The only action the game machine understands. Every door tap is a press.
pub const PRESS: &str = "press";

state_enum! {
    /// Phase of the current trial.
    ///
    /// `UserSelection -> HostReveal -> RevealWin -> UserSelection`, each step
    /// driven by [`PRESS`].
    #[derive(Copy, Eq, Hash)]
    pub enum GameState {
        /// Waiting for the player's first pick.
        UserSelection,
        /// A decoy is open; waiting for keep or switch.
        HostReveal,
        /// Outcome shown; the next tap starts a new trial.
        RevealWin,
    }
}

impl GameState {
    /// Build the three-phase game machine, starting in `UserSelection`.
    pub fn machine() -> Result<StateMachine<Self>, BuildError> {
        StateMachineBuilder::new()
            .initial(Self::UserSelection)
            .transitions(cycle(Self::ALL, PRESS))
            .build()
    }
}

/// Whether the engine is driven by a person or by the batch runner.
///
/// In `Simulate` mode door renders are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Play,
    Simulate,
}

impl Mode {
    pub fn renders_doors(self) -> bool {
        matches!(self, Self::Play)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Play => write!(f, "play"),
            Self::Simulate => write!(f, "simulate"),
        }
    }
}

impl FromStr for Mode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "play" => Ok(Self::Play),
            "simulate" => Ok(Self::Simulate),
            _ => Err(GameError::UnknownMode(s.to_string())),
        }
    }
}
