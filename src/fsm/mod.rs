//! Table-driven state machine.
//!
//! A machine is a current state plus a list of `(from, action, to)` entries.
//! Dispatching an action looks up the entry for the current state and moves
//! along it; an action with no entry is reported back and changes nothing.
//!
//! ```rust
//! use monty_hall::builder::StateMachineBuilder;
//! use monty_hall::fsm::Dispatch;
//! use monty_hall::state_enum;
//!
//! state_enum! {
//!     enum Light {
//!         Red,
//!         Green,
//!     }
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .initial(Light::Red)
//!     .on(Light::Red, "next", Light::Green)
//!     .on(Light::Green, "next", Light::Red)
//!     .build()
//!     .unwrap();
//!
//! assert!(machine.dispatch("next").is_transitioned());
//! assert_eq!(machine.current_state(), &Light::Green);
//! assert!(matches!(machine.dispatch("bogus"), Dispatch::Ignored { .. }));
//! assert_eq!(machine.current_state(), &Light::Green);
//! ```

mod machine;
mod transition;

pub use machine::{Dispatch, StateMachine};
pub use transition::Transition;
