//! Macros for declaring state sets.

/// Declare the states of a machine in one place.
///
/// For every listed state this generates a zero-sized marker struct of the
/// same name and a `From` conversion into the state set. It also generates
/// the state set enum itself, an `ALL` constant, and the
/// [`State`](crate::core::State) implementation whose `dispatch` routes each
/// variant to `<Marker as Action<Set>>::handle`.
///
/// Handlers are written as ordinary `impl Action<Set> for Marker` blocks.
/// Forgetting one is a compile error.
///
/// # Example
///
/// ```
/// use tagmachine::core::{Action, Context, Verdict};
/// use tagmachine::declare_states;
/// use tagmachine::runtime::StateMachine;
///
/// declare_states! {
///     pub enum Digits for char {
///         First,
///         More,
///     }
/// }
///
/// impl Action<Digits> for First {
///     fn handle(&self, ctx: &mut Context<Digits>, c: &char) -> Verdict {
///         if c.is_ascii_digit() {
///             ctx.set_state(More);
///             Verdict::Accept
///         } else {
///             Verdict::Error
///         }
///     }
/// }
///
/// impl Action<Digits> for More {
///     fn handle(&self, _: &mut Context<Digits>, c: &char) -> Verdict {
///         if c.is_ascii_digit() {
///             Verdict::Accept
///         } else {
///             Verdict::Error
///         }
///     }
/// }
///
/// let mut machine = StateMachine::<Digits>::new();
/// assert!(machine.run("2016".chars(), First));
/// assert!(!machine.run("20x6".chars(), First));
/// ```
#[macro_export]
macro_rules! declare_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $event:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(
            $(#[$variant_meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            $vis struct $variant;

            impl ::core::convert::From<$variant> for $name {
                fn from(_: $variant) -> Self {
                    $name::$variant
                }
            }
        )+

        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            /// Every declared state, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::core::State for $name {
            type Event = $event;

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            fn dispatch(
                self,
                ctx: &mut $crate::core::Context<Self>,
                event: &$event,
            ) -> $crate::core::Verdict {
                match self {
                    $(
                        Self::$variant => {
                            <$variant as $crate::core::Action<Self>>::handle(&$variant, ctx, event)
                        }
                    ),+
                }
            }
        }
    };
}
