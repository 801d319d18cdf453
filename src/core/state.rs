//! Core State trait for state machine states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are plain values describing where a machine currently is. The
/// machine compares them to find transition table entries, clones them into
/// its history, and logs them by name.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records
/// - `PartialEq`: Table lookup matches on the current state
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: History and reports can be exported
///
/// Most implementations come from the [`state_enum!`](crate::state_enum) macro.
///
/// # Example
///
/// ```rust
/// use monty_hall::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Turn {
///     Pick,
///     Reveal,
/// }
///
/// impl State for Turn {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pick => "Pick",
///             Self::Reveal => "Reveal",
///         }
///     }
/// }
///
/// assert_eq!(Turn::Reveal.name(), "Reveal");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Pick,
        Reveal,
        Outcome,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Pick => "Pick",
                Self::Reveal => "Reveal",
                Self::Outcome => "Outcome",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Pick.name(), "Pick");
        assert_eq!(TestState::Reveal.name(), "Reveal");
        assert_eq!(TestState::Outcome.name(), "Outcome");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Reveal;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Reveal, TestState::Reveal.clone());
        assert_ne!(TestState::Pick, TestState::Outcome);
    }
}
