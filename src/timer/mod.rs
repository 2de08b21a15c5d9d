//! Discrete-time scheduling: the caller countdown and the deferred reveal.
//!
//! The engine never reads a clock. The shell calls `tick()` once per time
//! unit and the session forwards it here. Everything scheduled carries the
//! [`Generation`] it was armed under; a tick from a newer generation drops
//! it without firing, so nothing armed before a reset can touch the
//! session that replaced it.

mod countdown;
mod deferred;

pub use countdown::{Countdown, TickOutcome};
pub use deferred::DeferredReveal;

use serde::{Deserialize, Serialize};

/// Session generation token.
///
/// Bumped on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}
