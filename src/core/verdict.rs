//! Three-valued outcome of a single dispatch.

use serde::{Deserialize, Serialize};

/// Outcome of handing one event to the current state.
///
/// - `Continue`: the event was consumed, more input is expected.
/// - `Accept`: the event was consumed and the machine now sits on a valid
///   end point. Input may stop here, or continue.
/// - `Error`: the event is not acceptable in the current state. The run is
///   rejected and no further events are dispatched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Verdict {
    Continue,
    Accept,
    Error,
}

impl Verdict {
    /// True for `Accept`.
    pub fn is_accept(self) -> bool {
        matches!(self, Self::Accept)
    }

    /// True for `Error`.
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Pick `Accept` or `Continue` depending on whether the event just
    /// consumed leaves the machine on an accepting point.
    pub fn accept_if(accepting: bool) -> Self {
        if accepting {
            Self::Accept
        } else {
            Self::Continue
        }
    }
}
