//! Game configuration and its validation.
//!
//! Validation uses Stillwater's `Validation` so that every problem with a
//! configuration is reported at once instead of one per attempt.

use crate::error::GameError;
use crate::game::Mode;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

pub const DEFAULT_DOOR_COUNT: usize = 3;
/// Fewer doors than this leave the host nothing to reveal.
pub const MIN_DOOR_COUNT: usize = 3;
pub const MAX_DOOR_COUNT: usize = 10;

/// A single problem found while validating a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("door count must be at least {min} (got {found})")]
    TooFewDoors { found: usize, min: usize },

    #[error("door count must be at most {max} (got {found})")]
    TooManyDoors { found: usize, max: usize },
}

/// Settings fixed for the lifetime of a game engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub door_count: usize,
    /// Seed for door placement and simulated picks. `None` draws one from entropy.
    pub seed: Option<u64>,
    pub mode: Mode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            door_count: DEFAULT_DOOR_COUNT,
            seed: None,
            mode: Mode::Play,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_doors(mut self, door_count: usize) -> Self {
        self.door_count = door_count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = vec![
            if self.door_count < MIN_DOOR_COUNT {
                Validation::fail(ConfigError::TooFewDoors {
                    found: self.door_count,
                    min: MIN_DOOR_COUNT,
                })
            } else {
                Validation::success(())
            },
            if self.door_count > MAX_DOOR_COUNT {
                Validation::fail(ConfigError::TooManyDoors {
                    found: self.door_count,
                    max: MAX_DOOR_COUNT,
                })
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and hand the configuration back, or fail with every violation.
    pub fn check(self) -> Result<Self, GameError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(errors) => Err(GameError::InvalidConfig(
                errors.iter().cloned().collect(),
            )),
        }
    }
}
