//! Builder API for ergonomic state machine construction.
//!
//! Fluent builders, a couple of table helpers, and the [`state_enum!`](crate::state_enum)
//! macro for declaring state types without boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::State;
use crate::fsm::Transition;

/// Create a single `from --action--> to` entry.
///
/// # Example
///
/// ```
/// use monty_hall::builder::simple_transition;
/// use monty_hall::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let transition = simple_transition(MyState::Start, "finish", MyState::End);
/// assert!(transition.matches(&MyState::Start, "finish"));
/// ```
pub fn simple_transition<S: State>(from: S, action: &str, to: S) -> Transition<S> {
    Transition::new(from, action, to)
}

/// Create a closed cycle where `action` moves each state to the next one and
/// the last state back to the first.
///
/// # Example
///
/// ```
/// use monty_hall::builder::{cycle, StateMachineBuilder};
/// use monty_hall::state_enum;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// let mut machine = StateMachineBuilder::new()
///     .initial(Light::Red)
///     .transitions(cycle(Light::ALL, "next"))
///     .build()
///     .unwrap();
///
/// machine.dispatch("next");
/// machine.dispatch("next");
/// machine.dispatch("next");
/// assert_eq!(machine.current_state(), &Light::Red);
/// ```
pub fn cycle<S: State>(states: &[S], action: &str) -> Vec<Transition<S>> {
    states
        .iter()
        .zip(states.iter().cycle().skip(1))
        .map(|(from, to)| Transition::new(from.clone(), action, to.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Middle,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Middle => "Middle",
                Self::End => "End",
            }
        }
    }

    #[test]
    fn simple_transition_builds() {
        let transition = simple_transition(TestState::Start, "press", TestState::Middle);

        assert_eq!(transition.from, TestState::Start);
        assert_eq!(transition.to, TestState::Middle);
        assert!(transition.matches(&TestState::Start, "press"));
    }

    #[test]
    fn cycle_wraps_last_state_to_first() {
        let states = [TestState::Start, TestState::Middle, TestState::End];
        let transitions = cycle(&states, "press");

        assert_eq!(transitions.len(), 3);
        assert_eq!(transitions[0].to, TestState::Middle);
        assert_eq!(transitions[1].to, TestState::End);
        assert_eq!(transitions[2].from, TestState::End);
        assert_eq!(transitions[2].to, TestState::Start);
    }

    #[test]
    fn cycle_of_one_state_is_a_self_loop() {
        let transitions = cycle(&[TestState::Start], "press");

        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].from, transitions[0].to);
    }

    #[test]
    fn cycle_of_nothing_is_empty() {
        let transitions: Vec<Transition<TestState>> = cycle(&[], "press");
        assert!(transitions.is_empty());
    }
}
