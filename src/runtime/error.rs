//! Errors reported when driving a machine.

use thiserror::Error;

/// Why a run did not end in an accepting state.
///
/// All of these are ordinary outcomes for malformed input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("No current state. Call set_state() before dispatching events")]
    UninitializedMachine,

    #[error("No events to process")]
    EmptyInput,

    #[error("Event at position {position} rejected in state '{state}'")]
    RejectedByGrammar { state: &'static str, position: usize },

    #[error("Input ended after {consumed} events in non-accepting state '{state}'")]
    IncompleteAtEndOfInput { state: &'static str, consumed: usize },
}
