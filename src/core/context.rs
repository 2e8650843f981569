//! Handle through which a handler requests its successor state.

use super::state::State;

/// View of the machine handed to [`Action::handle`](super::Action::handle).
///
/// A handler cannot reach the machine itself. It reads the state it is
/// running for and the index of the event, and may call
/// [`set_state`](Self::set_state). The machine applies the request once the
/// handler has returned, before `action` returns to the caller.
#[derive(Debug)]
pub struct Context<S: State> {
    current: S,
    position: usize,
    requested: Option<S>,
}

impl<S: State> Context<S> {
    /// Create a context for dispatching the event at `position` to `current`.
    pub fn new(current: S, position: usize) -> Self {
        Self {
            current,
            position,
            requested: None,
        }
    }

    /// Request a move to `next`. The last request wins.
    pub fn set_state(&mut self, next: impl Into<S>) {
        self.requested = Some(next.into());
    }

    /// State whose handler is running.
    pub fn current(&self) -> S {
        self.current
    }

    /// Zero-based index of the event being handled.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Successor requested so far, if any.
    pub fn requested(&self) -> Option<S> {
        self.requested
    }

    pub(crate) fn into_requested(self) -> Option<S> {
        self.requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Verdict};

    crate::declare_states! {
        enum Light for () {
            Red,
            Green,
            Amber,
        }
    }

    impl Action<Light> for Red {
        fn handle(&self, ctx: &mut Context<Light>, _: &()) -> Verdict {
            ctx.set_state(Green);
            Verdict::Continue
        }
    }

    impl Action<Light> for Green {
        fn handle(&self, ctx: &mut Context<Light>, _: &()) -> Verdict {
            ctx.set_state(Amber);
            Verdict::Continue
        }
    }

    impl Action<Light> for Amber {
        fn handle(&self, ctx: &mut Context<Light>, _: &()) -> Verdict {
            ctx.set_state(Red);
            Verdict::Accept
        }
    }

    #[test]
    fn new_context_has_no_request() {
        let ctx = Context::new(Light::Red, 3);
        assert_eq!(ctx.current(), Light::Red);
        assert_eq!(ctx.position(), 3);
        assert_eq!(ctx.requested(), None);
    }

    #[test]
    fn last_request_wins() {
        let mut ctx = Context::new(Light::Red, 0);
        ctx.set_state(Green);
        ctx.set_state(Light::Amber);
        assert_eq!(ctx.into_requested(), Some(Light::Amber));
    }

    #[test]
    fn set_state_does_not_change_current() {
        let mut ctx = Context::new(Light::Green, 0);
        ctx.set_state(Red);
        assert_eq!(ctx.current(), Light::Green);
    }
}
