//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::fsm::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State> {
    from: Option<S>,
    action: Option<String>,
    to: Option<S>,
}

impl<S: State> TransitionBuilder<S> {
    pub fn new() -> Self {
        Self {
            from: None,
            action: None,
            to: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the action name that triggers the transition (required).
    pub fn on(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let action = self.action.ok_or(BuildError::MissingAction)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition { from, action, to })
    }
}

impl<S: State> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
