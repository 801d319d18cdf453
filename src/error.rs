//! Crate-level error type.

use crate::builder::BuildError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the game engine and the parsers around it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("Invalid game configuration: {}", join(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error("Failed to build game state machine: {0}")]
    Build(#[from] BuildError),

    #[error("Door {index} does not exist (this game has {door_count} doors)")]
    DoorOutOfRange { index: usize, door_count: usize },

    /// The engine asked the machine to advance and the machine refused. The
    /// engine and its transition table disagree, which is a defect.
    #[error("Wrong game state: '{state}' cannot advance")]
    WrongGameState { state: String },

    #[error("A batch needs at least one trial")]
    EmptyBatch,

    #[error("No unselected door left to switch to")]
    NoSwitchTarget,

    #[error("Unknown strategy '{0}' (expected 'keep' or 'switch')")]
    UnknownStrategy(String),

    #[error("Unknown mode '{0}' (expected 'play' or 'simulate')")]
    UnknownMode(String),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
