//! State machine that dispatches named actions over a transition table.

use crate::core::{State, StateHistory, StateTransition};
use crate::fsm::transition::Transition;
use chrono::Utc;

/// Result of dispatching a single action
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch<S: State> {
    /// The table had an entry; the machine moved.
    Transitioned { from: S, to: S },

    /// No entry for this action in the current state. Nothing changed.
    Ignored { state: String, action: String },
}

impl<S: State> Dispatch<S> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// State machine over a fixed table of `(from, action, to)` entries.
///
/// The machine only knows states and action names. Whatever the states mean
/// belongs to the caller.
#[derive(Clone, Debug)]
pub struct StateMachine<S: State> {
    initial: S,
    current: S,
    transitions: Vec<Transition<S>>,
    history: StateHistory<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a new state machine in the initial state
    pub fn new(initial: S) -> Self {
        Self {
            current: initial.clone(),
            initial,
            transitions: Vec::new(),
            history: StateHistory::new(),
        }
    }

    /// Add a transition to the machine
    pub fn add_transition(&mut self, transition: Transition<S>) {
        self.transitions.push(transition);
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    /// Transitions taken since construction or the last [`reset`](Self::reset).
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Action names that have an entry for the current state, in table order.
    pub fn legal_actions(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .filter(|t| t.from == self.current)
            .map(|t| t.action.as_str())
            .collect()
    }

    /// Put the machine back in its initial state and forget its history.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.history = StateHistory::new();
    }

    /// Dispatch `action` from the current state.
    ///
    /// An action without a table entry is logged and returned as
    /// [`Dispatch::Ignored`]; the current state is left as it was.
    pub fn dispatch(&mut self, action: &str) -> Dispatch<S> {
        let Some(to) = self
            .transitions
            .iter()
            .find(|t| t.matches(&self.current, action))
            .map(|t| t.to.clone())
        else {
            log::warn!(
                "invalid action '{}' in state '{}'",
                action,
                self.current.name()
            );
            return Dispatch::Ignored {
                state: self.current.name().to_string(),
                action: action.to_string(),
            };
        };

        let from = std::mem::replace(&mut self.current, to.clone());
        self.history = self.history.record(StateTransition {
            from: from.clone(),
            to: to.clone(),
            action: action.to_string(),
            timestamp: Utc::now(),
        });

        Dispatch::Transitioned { from, to }
    }
}
