//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::State;
use crate::fsm::{StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<S: State> {
    initial: Option<S>,
    transitions: Vec<Transition<S>>,
}

impl<S: State> StateMachineBuilder<S> {
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a `from --action--> to` entry.
    pub fn on(mut self, from: S, action: impl Into<String>, to: S) -> Self {
        self.transitions.push(Transition::new(from, action, to));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    ///
    /// Fails when the initial state is missing, the table is empty, or two
    /// entries share the same `(from, action)` pair.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        for (i, transition) in self.transitions.iter().enumerate() {
            let duplicated = self.transitions[..i]
                .iter()
                .any(|earlier| earlier.matches(&transition.from, &transition.action));
            if duplicated {
                return Err(BuildError::DuplicateTransition {
                    state: transition.from.name().to_string(),
                    action: transition.action.clone(),
                });
            }
        }

        let mut machine = StateMachine::new(initial);
        for transition in self.transitions {
            machine.add_transition(transition);
        }

        Ok(machine)
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
