//! Cancellable countdown clock.

use tracing::debug;

use super::Generation;

/// Result of advancing a countdown by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not armed (never started, cancelled, already expired, or stale).
    Idle,
    /// Still counting; ticks left.
    Running(u32),
    /// Reached zero on this tick. Reported exactly once per start.
    Expired,
}

/// A countdown that fires once when it reaches zero.
///
/// At most one countdown is live: `start` while armed replaces the old
/// one without firing it.
///
/// ```
/// use promo_match::timer::{Countdown, Generation, TickOutcome};
///
/// let gen = Generation::default();
/// let mut countdown = Countdown::new();
/// countdown.start(2, gen);
///
/// assert_eq!(countdown.tick(gen), TickOutcome::Running(1));
/// assert_eq!(countdown.tick(gen), TickOutcome::Expired);
/// assert_eq!(countdown.tick(gen), TickOutcome::Idle);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    armed: Option<Armed>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Armed {
    remaining: u32,
    generation: Generation,
}

impl Countdown {
    /// Create a disarmed countdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for `ticks` ticks, replacing any live countdown.
    ///
    /// A zero-length countdown is treated as one tick.
    pub fn start(&mut self, ticks: u32, generation: Generation) {
        self.armed = Some(Armed {
            remaining: ticks.max(1),
            generation,
        });
    }

    /// Advance one tick.
    pub fn tick(&mut self, current: Generation) -> TickOutcome {
        let Some(armed) = self.armed.as_mut() else {
            return TickOutcome::Idle;
        };

        if armed.generation != current {
            debug!(armed = %armed.generation, %current, "dropping stale countdown");
            self.armed = None;
            return TickOutcome::Idle;
        }

        armed.remaining -= 1;
        if armed.remaining == 0 {
            self.armed = None;
            TickOutcome::Expired
        } else {
            TickOutcome::Running(armed.remaining)
        }
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// True while counting.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Ticks left, `None` when disarmed.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.armed.map(|a| a.remaining)
    }
}
