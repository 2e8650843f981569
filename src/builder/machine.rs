//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::runtime::StateMachine;

/// Builder for a [`StateMachine`] that starts in a known state.
pub struct MachineBuilder<S: State> {
    initial: Option<S>,
    record_history: bool,
}

impl<S: State> MachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            record_history: false,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Record applied transitions (off by default).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Build the state machine.
    /// Returns an error if no initial state was given.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = if self.record_history {
            StateMachine::with_history()
        } else {
            StateMachine::new()
        };
        machine.set_state(initial);

        Ok(machine)
    }
}

impl<S: State> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
