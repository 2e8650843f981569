//! Email address validation on top of the state machine.
//!
//! The grammar is deliberately small. A user name of ASCII alphanumerics,
//! `_` and `-`, with single dots between runs, then `@`, then at least two
//! dot-separated domain labels of ASCII alphanumerics and inner hyphens.
//!
//! ```rust
//! use tagmachine::email;
//!
//! assert!(email::is_valid("a@b.co"));
//! assert!(email::is_valid("first.last@mail.example-host.org"));
//! assert!(!email::is_valid("a@b..co"));
//! ```

mod states;

pub use states::{
    DomainBegin, DomainHyphen, DomainLabel, EmailState, Label, LabelBegin, LabelHyphen, UserBegin,
    UserBody, UserDot,
};

use crate::core::StateHistory;
use crate::runtime::{Outcome, RunError, StateMachine};
use tracing::debug;

/// Shortest input worth running, as in `x@y.z`.
pub const MIN_LENGTH: usize = 5;

/// Configurable validator. Cheap to copy and share.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailValidator {
    min_length: usize,
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailValidator {
    pub fn new() -> Self {
        Self {
            min_length: MIN_LENGTH,
        }
    }

    /// Reject inputs with fewer characters than `min_length` before running
    /// the grammar.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Run the grammar over `text`.
    ///
    /// Inputs shorter than the minimum length are reported as
    /// [`RunError::EmptyInput`].
    pub fn validate(&self, text: &str) -> Result<Outcome<EmailState>, RunError> {
        self.check_length(text)?;
        StateMachine::<EmailState>::new().try_run(text.chars(), UserBegin)
    }

    pub fn is_valid(&self, text: &str) -> bool {
        self.validate(text).is_ok()
    }

    /// States visited while reading `text`, starting with
    /// [`EmailState::UserBegin`], whether or not the input is valid.
    ///
    /// Stops at the state that rejected the input, if any. Empty when the
    /// input is too short to run.
    pub fn path(&self, text: &str) -> Vec<EmailState> {
        if self.check_length(text).is_err() {
            return Vec::new();
        }

        let mut machine = StateMachine::<EmailState>::with_history();
        // Rejection is fine here, the path up to it is what we want.
        let _ = machine.try_run(text.chars(), UserBegin);

        match machine.history().map(StateHistory::get_path) {
            Some(path) if !path.is_empty() => path,
            _ => vec![EmailState::UserBegin],
        }
    }

    fn check_length(&self, text: &str) -> Result<(), RunError> {
        let len = text.chars().count();
        if len < self.min_length {
            debug!(
                len,
                min_length = self.min_length,
                "input shorter than minimum length"
            );
            return Err(RunError::EmptyInput);
        }
        Ok(())
    }
}

/// Validate `text` with the default settings.
pub fn validate(text: &str) -> Result<Outcome<EmailState>, RunError> {
    EmailValidator::new().validate(text)
}

/// True when `text` is a well-formed address under the default settings.
pub fn is_valid(text: &str) -> bool {
    EmailValidator::new().is_valid(text)
}

/// Name of the state that rejected `text`, if the grammar rejected it.
pub fn rejecting_state(text: &str) -> Option<&'static str> {
    match validate(text) {
        Err(RunError::RejectedByGrammar { state, .. }) => Some(state),
        Err(RunError::IncompleteAtEndOfInput { state, .. }) => Some(state),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_address() {
        let outcome = validate("a@b.co").unwrap();
        assert_eq!(outcome.final_state, EmailState::Label);
        assert_eq!(outcome.consumed, 6);
    }

    #[test]
    fn short_input_is_reported_as_empty() {
        assert_eq!(validate("a"), Err(RunError::EmptyInput));
        assert_eq!(validate(""), Err(RunError::EmptyInput));
        assert_eq!(validate("a@b."), Err(RunError::EmptyInput));
    }

    #[test]
    fn min_length_is_configurable() {
        let lenient = EmailValidator::new().min_length(0);
        assert_eq!(
            lenient.validate("a@"),
            Err(RunError::IncompleteAtEndOfInput {
                state: "DomainBegin",
                consumed: 2,
            })
        );
        assert_eq!(lenient.validate(""), Err(RunError::EmptyInput));

        let strict = EmailValidator::new().min_length(10);
        assert!(!strict.is_valid("a@b.co"));
        assert!(strict.is_valid("abcd@b.com"));
    }

    #[test]
    fn rejection_reports_state_and_position() {
        assert_eq!(
            validate("a@b..co"),
            Err(RunError::RejectedByGrammar {
                state: "LabelBegin",
                position: 4,
            })
        );
        assert_eq!(rejecting_state("@b.co"), Some("UserBegin"));
        assert_eq!(rejecting_state("a@b.co"), None);
    }

    #[test]
    fn path_follows_visited_states() {
        assert_eq!(
            EmailValidator::new().path("a.b@c.de"),
            vec![
                EmailState::UserBegin,
                EmailState::UserBody,
                EmailState::UserDot,
                EmailState::UserBody,
                EmailState::DomainBegin,
                EmailState::DomainLabel,
                EmailState::LabelBegin,
                EmailState::Label,
            ]
        );
    }

    #[test]
    fn path_stops_at_rejecting_state() {
        assert_eq!(
            EmailValidator::new().path("@b.co"),
            vec![EmailState::UserBegin]
        );
        assert!(EmailValidator::new().path("a").is_empty());
    }
}
