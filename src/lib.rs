//! Tagmachine: a statically dispatched finite state machine library
//!
//! Every state is a zero-sized marker type with its own transition handler.
//! A machine holds whichever state is current and forwards events to it. The
//! handler inspects the event, may request the next state, and answers with a
//! [`Verdict`]. Dispatch is a single `match` over a closed enum, so a state
//! with no handler is a compile error rather than a runtime surprise.
//!
//! # Core Concepts
//!
//! - **State set**: closed enum of states via the [`State`] trait, usually
//!   generated by [`declare_states!`]
//! - **Action**: per-marker handler via the [`Action`] trait
//! - **Context**: handle a handler uses to request its successor
//! - **StateMachine**: holds the current state and drives events through it
//!
//! # Example
//!
//! ```rust
//! use tagmachine::core::{Action, Context, Verdict};
//! use tagmachine::declare_states;
//! use tagmachine::runtime::{RunError, StateMachine};
//!
//! declare_states! {
//!     enum Greeting for char {
//!         Start,
//!         SawH,
//!         SawI,
//!     }
//! }
//!
//! impl Action<Greeting> for Start {
//!     fn handle(&self, ctx: &mut Context<Greeting>, c: &char) -> Verdict {
//!         if *c == 'h' {
//!             ctx.set_state(SawH);
//!             Verdict::Continue
//!         } else {
//!             Verdict::Error
//!         }
//!     }
//! }
//!
//! impl Action<Greeting> for SawH {
//!     fn handle(&self, ctx: &mut Context<Greeting>, c: &char) -> Verdict {
//!         if *c == 'i' {
//!             ctx.set_state(SawI);
//!             Verdict::Accept
//!         } else {
//!             Verdict::Error
//!         }
//!     }
//! }
//!
//! impl Action<Greeting> for SawI {
//!     fn handle(&self, _: &mut Context<Greeting>, c: &char) -> Verdict {
//!         if *c == '!' {
//!             Verdict::Accept
//!         } else {
//!             Verdict::Error
//!         }
//!     }
//! }
//!
//! let mut machine = StateMachine::<Greeting>::new();
//! assert!(machine.run("hi".chars(), Start));
//! assert!(machine.run("hi!!".chars(), Start));
//! assert_eq!(
//!     machine.try_run("h".chars(), Start),
//!     Err(RunError::IncompleteAtEndOfInput { state: "SawH", consumed: 1 })
//! );
//! ```

pub mod builder;
pub mod core;
pub mod email;
pub mod runtime;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use self::core::{Action, Context, State, StateHistory, StateTransition, Verdict};
pub use runtime::{Outcome, RunError, StateMachine};
