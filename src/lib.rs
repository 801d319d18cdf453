//! Monty Hall: a probability puzzle on top of a table-driven state machine.
//!
//! The crate has two layers. The lower one is a generic state machine that
//! knows nothing about games:
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Machine**: A transition table of `(from, action, to)` entries with
//!   dispatch by action name
//! - **History**: Timestamped record of the transitions taken
//!
//! The upper one, [`game`], is the Monty Hall engine: doors, the host's
//! reveal, win/lose outcomes, and batch simulation of the keep and switch
//! strategies.
//!
//! # Example
//!
//! ```rust
//! use monty_hall::config::GameConfig;
//! use monty_hall::game::{GameEngine, Strategy};
//!
//! let mut engine = GameEngine::headless(GameConfig::new().with_seed(42)).unwrap();
//! let report = engine.run_batch(1_000, Strategy::Switch).unwrap();
//!
//! assert_eq!(report.wins + report.losses, 1_000);
//! assert!(report.win_percent > 50);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod fsm;
pub mod game;

// Re-export commonly used types
pub use config::GameConfig;
pub use crate::core::{State, StateHistory, StateTransition};
pub use error::GameError;
pub use fsm::{Dispatch, StateMachine, Transition};
pub use game::{GameEngine, GameState, Presenter, Strategy};
