//! One-shot deferred delivery of an already-computed value.

use tracing::debug;

use super::Generation;

/// Holds a value until a fixed number of ticks have passed.
///
/// Used to surface a round result after a visible grace period. The value
/// is computed before scheduling; this only delays delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredReveal<T> {
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending<T> {
    payload: T,
    remaining: u32,
    generation: Generation,
}

impl<T> Default for DeferredReveal<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> DeferredReveal<T> {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` for delivery after `delay` ticks.
    ///
    /// A zero delay hands the payload straight back. Any previously pending
    /// payload is discarded.
    pub fn schedule(&mut self, payload: T, delay: u32, generation: Generation) -> Option<T> {
        if delay == 0 {
            self.pending = None;
            return Some(payload);
        }
        self.pending = Some(Pending {
            payload,
            remaining: delay,
            generation,
        });
        None
    }

    /// Advance one tick, returning the payload when it comes due.
    pub fn tick(&mut self, current: Generation) -> Option<T> {
        let pending = self.pending.as_mut()?;

        if pending.generation != current {
            debug!(armed = %pending.generation, %current, "discarding stale reveal");
            self.pending = None;
            return None;
        }

        pending.remaining -= 1;
        if pending.remaining > 0 {
            return None;
        }
        self.pending.take().map(|p| p.payload)
    }

    /// Drop the pending payload without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// True while a payload is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticks until delivery, `None` when nothing is pending.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.pending.as_ref().map(|p| p.remaining)
    }
}
