//! State transition history tracking.
//!
//! Records which transitions a machine applied during a run, and at which
//! event. Useful for diagnostics and for asserting on the path a grammar
//! took through its states.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use tagmachine::core::{Action, Context, StateTransition, Verdict};
/// use tagmachine::declare_states;
///
/// declare_states! {
///     enum Step for char {
///         First,
///         Second,
///     }
/// }
/// # impl Action<Step> for First {
/// #     fn handle(&self, _: &mut Context<Step>, _: &char) -> Verdict { Verdict::Error }
/// # }
/// # impl Action<Step> for Second {
/// #     fn handle(&self, _: &mut Context<Step>, _: &char) -> Verdict { Verdict::Error }
/// # }
///
/// let transition = StateTransition {
///     from: Step::First,
///     to: Step::Second,
///     position: 0,
/// };
/// assert_eq!(transition.position, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Index of the event whose handler requested the transition
    pub position: usize,
}

/// Ordered history of applied transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// The `from` state of the first transition, then the `to` state of
    /// each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Get all transitions in the order they were applied.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Context, Verdict};

    crate::declare_states! {
        enum TestState for char {
            Initial,
            Processing,
            Complete,
        }
    }

    impl Action<TestState> for Initial {
        fn handle(&self, _: &mut Context<TestState>, _: &char) -> Verdict {
            Verdict::Continue
        }
    }

    impl Action<TestState> for Processing {
        fn handle(&self, _: &mut Context<TestState>, _: &char) -> Verdict {
            Verdict::Continue
        }
    }

    impl Action<TestState> for Complete {
        fn handle(&self, _: &mut Context<TestState>, _: &char) -> Verdict {
            Verdict::Accept
        }
    }

    fn transition(from: TestState, to: TestState, position: usize) -> StateTransition<TestState> {
        StateTransition { from, to, position }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
    }

    #[test]
    fn record_adds_transition() {
        let history =
            StateHistory::new().record(transition(TestState::Initial, TestState::Processing, 0));

        assert_eq!(history.len(), 1);
        assert_eq!(history.transitions()[0].position, 0);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(TestState::Initial, TestState::Processing, 0))
            .record(transition(TestState::Processing, TestState::Complete, 4));

        assert_eq!(
            history.get_path(),
            vec![
                TestState::Initial,
                TestState::Processing,
                TestState::Complete
            ]
        );
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new()
            .record(transition(TestState::Initial, TestState::Processing, 0))
            .record(transition(TestState::Processing, TestState::Complete, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
