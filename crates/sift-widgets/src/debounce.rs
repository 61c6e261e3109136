//! Restartable one-shot delay used to coalesce search-term edits.
//!
//! `Debounce` only tracks *which* firing is current. The waiting itself is a
//! keyed [`After`] subscription returned from [`Debounce::subscription`];
//! every [`restart`](Debounce::restart) changes the key, so the runtime's
//! subscription diffing aborts the previous timer. A fire whose tag no longer
//! matches is rejected by [`fire`](Debounce::fire). Each debounce also owns
//! a process-unique scope, so two instances armed under the same name and
//! generation still run separate timers.

use sift_core::subscription::{subscribe, Subscription};
use sift_core::subscriptions::After;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Default delay between the last edit and the filter pass.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Scope 0 is left to unscoped [`After`] timers.
static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

/// Generation counter for a single pending delay.
#[derive(Debug)]
pub struct Debounce {
    name: &'static str,
    scope: u64,
    delay: Duration,
    generation: u64,
    pending: bool,
}

impl Debounce {
    /// Create an idle debounce. `name` keys its timer subscription.
    pub fn new(name: &'static str, delay: Duration) -> Self {
        Self {
            name,
            scope: NEXT_SCOPE.fetch_add(1, Ordering::Relaxed),
            delay,
            generation: 0,
            pending: false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Tag of the current (or most recent) firing.
    pub fn tag(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Cancel any pending firing and arm a new one. Returns the new tag.
    pub fn restart(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        self.generation
    }

    /// Drop the pending firing, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    /// Accept a firing carrying `tag`.
    ///
    /// Returns `true` only for the current tag while pending; the debounce is
    /// idle afterwards.
    pub fn fire(&mut self, tag: u64) -> bool {
        if !self.pending || tag != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    /// The timer subscription while a firing is pending.
    pub fn subscription<Msg: Send + 'static>(
        &self,
        map: impl Fn(u64) -> Msg + Send + Sync + 'static,
    ) -> Option<Subscription<Msg>> {
        if !self.pending {
            return None;
        }
        let tag = self.generation;
        Some(
            subscribe(After::keyed(self.delay, self.name, tag).scope(self.scope))
                .map(move |_: std::time::Instant| map(tag)),
        )
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new("debounce", DEFAULT_DELAY)
    }
}
