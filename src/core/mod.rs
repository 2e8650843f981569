//! Core state machine types.
//!
//! This module contains the pieces every machine is built from:
//! - The [`State`] trait for closed state sets and the per-marker [`Action`] trait
//! - The [`Context`] handle handlers use to request transitions
//! - The three-valued [`Verdict`]
//! - Transition history tracking
//!
//! Nothing in here drives events; see [`crate::runtime`] for that.

mod context;
mod history;
mod state;
mod verdict;

pub use context::Context;
pub use history::{StateHistory, StateTransition};
pub use state::{Action, State};
pub use verdict::Verdict;
