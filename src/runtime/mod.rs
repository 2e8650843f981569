//! Driving events through a machine.
//!
//! [`StateMachine`] holds the current state and forwards each event to its
//! handler, applying whatever transition the handler requested through its
//! [`Context`](crate::core::Context). Events can be fed one at a time with
//! [`StateMachine::action`] or as a batch with [`StateMachine::run`].
//!
//! Dispatches are traced with `tracing` at `trace` level and transitions and
//! run outcomes at `debug` level. Nothing is emitted unless the application
//! installs a subscriber.

mod error;
mod machine;

pub use error::RunError;
pub use machine::{Outcome, StateMachine};
