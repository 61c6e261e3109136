use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use std::time::{Duration, Instant};

/// A one-shot, restartable delay.
///
/// Emits a single [`Instant`] once `duration` has elapsed, then the stream
/// completes. The identity combines a name with a generation number: while a
/// model keeps returning the same `(name, generation)` the timer keeps
/// running; returning a new generation aborts the pending timer and starts a
/// fresh one, and returning nothing cancels it. Owners that share a name
/// give each timer a distinct [`scope`](After::scope).
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use sift_core::subscriptions::After;
/// use sift_core::subscription::subscribe;
///
/// // Re-armed every time `self.generation` changes.
/// let sub = subscribe(After::keyed(Duration::from_millis(300), "filter", self.generation))
///     .map(move |_| Msg::Elapsed(generation));
/// ```
pub struct After {
    /// How long to wait before firing.
    pub duration: Duration,
    name: &'static str,
    scope: u64,
    generation: u64,
}

impl After {
    /// Create an unnamed one-shot delay for the given duration.
    pub fn new(duration: Duration) -> Self {
        Self::keyed(duration, "after", 0)
    }

    /// Create a one-shot delay identified by `name` and `generation`.
    pub fn keyed(duration: Duration, name: &'static str, generation: u64) -> Self {
        Self {
            duration,
            name,
            scope: 0,
            generation,
        }
    }

    /// Separate this timer from others armed under the same name.
    pub fn scope(mut self, scope: u64) -> Self {
        self.scope = scope;
        self
    }

    /// The generation this timer was armed with.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl SubscriptionSource for After {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::scoped::<Self>(self.name, self.scope, self.generation)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let duration = self.duration;
        Box::pin(futures::stream::once(async move {
            tokio::time::sleep(duration).await;
            Instant::now()
        }))
    }
}
