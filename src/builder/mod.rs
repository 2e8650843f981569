//! Builder API for ergonomic state machine construction.
//!
//! [`declare_states!`](crate::declare_states) declares a state set and its
//! markers in one place; [`MachineBuilder`] configures a machine over it.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
