//! The Monty Hall game built on the generic machine.
//!
//! A trial runs through three phases:
//!
//! 1. The player picks a door; it is locked in.
//! 2. The host opens the first door that is neither the player's nor the prize.
//! 3. The player's next tap is the final pick: the same door to keep, another
//!    closed door to switch. The outcome is shown and any further tap restarts.
//!
//! [`GameEngine::run_batch`] plays many trials with a fixed [`Strategy`] and
//! reports how often it won.
//!
//! ```rust
//! use monty_hall::config::GameConfig;
//! use monty_hall::game::{GameEngine, GameState, Outcome, Selection};
//!
//! let mut engine = GameEngine::headless(GameConfig::new().with_seed(9)).unwrap();
//! engine.init_trial_with_prize(1).unwrap();
//!
//! let locked = engine.select_door(0).unwrap();
//! assert_eq!(locked, Selection::Locked { door: 0, revealed: Some(2) });
//! assert_eq!(engine.state(), GameState::HostReveal);
//!
//! let finished = engine.select_door(1).unwrap();
//! assert_eq!(finished, Selection::Finished { door: 1, outcome: Outcome::Win });
//! ```

mod boundary;
mod door;
mod engine;
mod rng;
mod simulation;
mod state;

pub use boundary::{Message, NullPresenter, Presenter};
pub use door::{Door, PrizeKind};
pub use engine::{GameEngine, Selection};
pub use rng::TrialRng;
pub use simulation::{percent, Outcome, SimulationReport, SimulationResult, Strategy};
pub use state::{GameState, Mode, PRESS};
