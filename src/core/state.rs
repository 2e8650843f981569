//! State set and per-state action traits.
//!
//! A machine is parameterised by a *state set*: a closed, `Copy` enum with
//! one variant per declared state. Each variant is backed by a zero-sized
//! marker type, and each marker carries its own [`Action`] implementation.
//! [`State::dispatch`] is the single `match` that routes an event from the
//! variant to its marker's handler, so no lookup happens at runtime and a
//! state without a handler does not compile.
//!
//! The [`declare_states!`](crate::declare_states) macro writes all of this
//! for you; implementing the traits by hand is possible but rarely useful.

use super::context::Context;
use super::verdict::Verdict;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Closed set of states a machine can be in.
///
/// # Required Traits
///
/// - `Copy`: states carry no data, the machine stores them by value
/// - `Eq` + `Hash`: states are compared when recording transitions
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: transition history is serializable
///
/// # Example
///
/// ```rust
/// use tagmachine::core::{Action, Context, State, Verdict};
/// use tagmachine::declare_states;
///
/// declare_states! {
///     enum Parity for u8 {
///         Even,
///         Odd,
///     }
/// }
///
/// impl Action<Parity> for Even {
///     fn handle(&self, ctx: &mut Context<Parity>, bit: &u8) -> Verdict {
///         match bit {
///             0 => Verdict::Accept,
///             1 => {
///                 ctx.set_state(Odd);
///                 Verdict::Continue
///             }
///             _ => Verdict::Error,
///         }
///     }
/// }
///
/// impl Action<Parity> for Odd {
///     fn handle(&self, ctx: &mut Context<Parity>, bit: &u8) -> Verdict {
///         match bit {
///             0 => Verdict::Continue,
///             1 => {
///                 ctx.set_state(Even);
///                 Verdict::Accept
///             }
///             _ => Verdict::Error,
///         }
///     }
/// }
///
/// assert_eq!(Parity::Even.name(), "Even");
/// assert_eq!(Parity::ALL, &[Parity::Even, Parity::Odd]);
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Unit of input consumed per dispatch.
    type Event: Debug;

    /// Name of the state for display/logging.
    fn name(&self) -> &'static str;

    /// Run the handler bound to this state against `event`.
    ///
    /// Implementations must route every variant to exactly one marker's
    /// [`Action::handle`]; they must not inspect the event themselves.
    fn dispatch(self, ctx: &mut Context<Self>, event: &Self::Event) -> Verdict;
}

/// Transition logic for one state marker.
///
/// `handle` is total: every event must map to a verdict, and anything the
/// state does not recognise maps to [`Verdict::Error`]. The only side effect
/// a handler may have is requesting the next state through
/// [`Context::set_state`]. A request made alongside `Error` is dropped.
pub trait Action<S: State> {
    fn handle(&self, ctx: &mut Context<S>, event: &S::Event) -> Verdict;
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::declare_states! {
        enum Toggle for bool {
            Off,
            On,
        }
    }

    impl Action<Toggle> for Off {
        fn handle(&self, ctx: &mut Context<Toggle>, event: &bool) -> Verdict {
            if *event {
                ctx.set_state(On);
                Verdict::Accept
            } else {
                Verdict::Continue
            }
        }
    }

    impl Action<Toggle> for On {
        fn handle(&self, ctx: &mut Context<Toggle>, event: &bool) -> Verdict {
            if *event {
                Verdict::Error
            } else {
                ctx.set_state(Off);
                Verdict::Continue
            }
        }
    }

    #[test]
    fn state_name_returns_declared_identifier() {
        assert_eq!(Toggle::Off.name(), "Off");
        assert_eq!(Toggle::On.name(), "On");
    }

    #[test]
    fn dispatch_routes_to_marker_handler() {
        let mut ctx = Context::new(Toggle::Off, 0);
        assert_eq!(Toggle::Off.dispatch(&mut ctx, &true), Verdict::Accept);
        assert_eq!(ctx.requested(), Some(Toggle::On));

        let mut ctx = Context::new(Toggle::On, 0);
        assert_eq!(Toggle::On.dispatch(&mut ctx, &true), Verdict::Error);
        assert_eq!(ctx.requested(), None);
    }

    #[test]
    fn markers_convert_into_state_set() {
        assert_eq!(Toggle::from(Off), Toggle::Off);
        assert_eq!(Toggle::from(On), Toggle::On);
    }

    #[test]
    fn markers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Off>(), 0);
        assert_eq!(std::mem::size_of::<On>(), 0);
    }

    #[test]
    fn all_lists_variants_in_declaration_order() {
        assert_eq!(Toggle::ALL, &[Toggle::Off, Toggle::On]);
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&Toggle::On).unwrap();
        let deserialized: Toggle = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Toggle::On);
    }
}
