//! Transition table entries.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// One row of a transition table: `action` moves the machine from `from` to `to`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    pub from: S,
    pub action: String,
    pub to: S,
}

impl<S: State> Transition<S> {
    pub fn new(from: S, action: impl Into<String>, to: S) -> Self {
        Self {
            from,
            action: action.into(),
            to,
        }
    }

    /// Check if this entry applies to `action` dispatched in `current`.
    pub fn matches(&self, current: &S, action: &str) -> bool {
        *current == self.from && self.action == action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Middle,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Middle => "Middle",
            }
        }
    }

    #[test]
    fn matches_requires_state_and_action() {
        let transition = Transition::new(TestState::Start, "press", TestState::Middle);

        assert!(transition.matches(&TestState::Start, "press"));
        assert!(!transition.matches(&TestState::Middle, "press"));
        assert!(!transition.matches(&TestState::Start, "hold"));
    }

    #[test]
    fn action_names_are_case_sensitive() {
        let transition = Transition::new(TestState::Start, "press", TestState::Middle);
        assert!(!transition.matches(&TestState::Start, "PRESS"));
    }
}
