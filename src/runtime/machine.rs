//! State machine that drives events through the current state.

use crate::core::{Context, State, StateHistory, StateTransition, Verdict};
use crate::runtime::error::RunError;
use std::borrow::Borrow;
use tracing::{debug, trace};

/// Result of a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome<S: State> {
    /// State the machine was left in after the last event
    pub final_state: S,
    /// Number of events dispatched
    pub consumed: usize,
}

/// Holder of the current state.
///
/// The machine starts with no state. Dispatching before
/// [`set_state`](Self::set_state) fails closed with [`Verdict::Error`].
///
/// A machine is cheap to build. Create one per run rather than sharing one
/// across threads.
#[derive(Clone, Debug)]
pub struct StateMachine<S: State> {
    current: Option<S>,
    last: Option<Verdict>,
    position: usize,
    history: Option<StateHistory<S>>,
}

impl<S: State> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateMachine<S> {
    /// Create a machine with no current state and history disabled.
    pub fn new() -> Self {
        Self {
            current: None,
            last: None,
            position: 0,
            history: None,
        }
    }

    /// Create a machine that records every applied transition.
    pub fn with_history() -> Self {
        Self {
            history: Some(StateHistory::new()),
            ..Self::new()
        }
    }

    /// Make `state` current. Always succeeds.
    pub fn set_state(&mut self, state: impl Into<S>) {
        self.current = Some(state.into());
    }

    pub fn current_state(&self) -> Option<S> {
        self.current
    }

    /// Verdict returned by the most recent dispatch.
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last
    }

    /// Number of events dispatched since the last run or reset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True when the most recent dispatch returned [`Verdict::Accept`].
    pub fn is_accepting(&self) -> bool {
        self.last.is_some_and(Verdict::is_accept)
    }

    /// Recorded transitions, when history is enabled.
    pub fn history(&self) -> Option<&StateHistory<S>> {
        self.history.as_ref()
    }

    /// Forget the current state, last verdict, position and history.
    /// Whether history is recorded is kept.
    pub fn reset(&mut self) {
        self.current = None;
        self.restart();
    }

    fn restart(&mut self) {
        self.last = None;
        self.position = 0;
        if self.history.is_some() {
            self.history = Some(StateHistory::new());
        }
    }

    /// Dispatch `event` to the current state.
    ///
    /// Returns the handler's verdict verbatim, after applying any transition
    /// it requested. A transition requested together with
    /// [`Verdict::Error`] is not applied.
    pub fn step(&mut self, event: &S::Event) -> Result<Verdict, RunError> {
        let current = self.current.ok_or(RunError::UninitializedMachine)?;
        let position = self.position;

        let mut ctx = Context::new(current, position);
        let verdict = current.dispatch(&mut ctx, event);
        trace!(
            state = current.name(),
            position,
            ?event,
            ?verdict,
            "dispatched event"
        );

        self.position += 1;
        self.last = Some(verdict);

        if !verdict.is_error() {
            if let Some(next) = ctx.into_requested() {
                self.apply_transition(current, next, position);
            }
        }

        Ok(verdict)
    }

    /// Dispatch `event`, failing closed when no state is set.
    pub fn action(&mut self, event: &S::Event) -> Verdict {
        self.step(event).unwrap_or(Verdict::Error)
    }

    fn apply_transition(&mut self, from: S, to: S, position: usize) {
        self.current = Some(to);
        if from == to {
            return;
        }

        debug!(from = from.name(), to = to.name(), position, "state changed");
        if let Some(history) = self.history.take() {
            self.history = Some(history.record(StateTransition { from, to, position }));
        }
    }

    /// Drive `events` in order starting from `initial`.
    ///
    /// Stops at the first [`Verdict::Error`] without pulling further events.
    /// Succeeds only if the verdict for the last event was
    /// [`Verdict::Accept`].
    pub fn try_run<I, T>(&mut self, events: I, initial: impl Into<S>) -> Result<Outcome<S>, RunError>
    where
        I: IntoIterator<Item = T>,
        T: Borrow<S::Event>,
    {
        let mut events = events.into_iter().peekable();
        if events.peek().is_none() {
            debug!("rejected empty input");
            return Err(RunError::EmptyInput);
        }

        self.restart();
        self.set_state(initial);

        let mut verdict = Verdict::Continue;
        for event in events {
            let position = self.position;
            let state = self.current.ok_or(RunError::UninitializedMachine)?;

            verdict = self.step(event.borrow())?;
            if verdict.is_error() {
                debug!(state = state.name(), position, "input rejected");
                return Err(RunError::RejectedByGrammar {
                    state: state.name(),
                    position,
                });
            }
        }

        let final_state = self.current.ok_or(RunError::UninitializedMachine)?;
        if !verdict.is_accept() {
            debug!(
                state = final_state.name(),
                consumed = self.position,
                "input ended before an accepting state"
            );
            return Err(RunError::IncompleteAtEndOfInput {
                state: final_state.name(),
                consumed: self.position,
            });
        }

        debug!(
            state = final_state.name(),
            consumed = self.position,
            "input accepted"
        );
        Ok(Outcome {
            final_state,
            consumed: self.position,
        })
    }

    /// Like [`try_run`](Self::try_run), reduced to accepted or not.
    pub fn run<I, T>(&mut self, events: I, initial: impl Into<S>) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Borrow<S::Event>,
    {
        self.try_run(events, initial).is_ok()
    }
}
