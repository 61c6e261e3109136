use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// A long-lived event source managed by the runtime.
///
/// Subscriptions are declared in [`Model::subscriptions`](crate::Model::subscriptions)
/// and reconciled after every turn by [`SubscriptionId`]: an identity seen
/// for the first time is started, an identity that is no longer declared is
/// aborted, and a surviving identity keeps its running task untouched.
/// Changing the identity is therefore how a subscription is *restarted*; the
/// old task is cancelled before it can deliver anything further.
///
/// The stream is opened only when the runtime starts the subscription, so
/// declaring one on every turn is cheap.
pub struct Subscription<Msg: Send + 'static> {
    id: SubscriptionId,
    open: Box<dyn FnOnce() -> BoxStream<'static, Msg> + Send>,
}

/// Identity for diffing subscriptions between turns.
///
/// A Rust [`TypeId`] plus a numeric discriminant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    type_id: TypeId,
    discriminant: u64,
}

impl SubscriptionId {
    pub fn new<T: 'static>(discriminant: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant,
        }
    }

    /// The only subscription of type `T`.
    pub fn of<T: 'static>() -> Self {
        Self::new::<T>(0)
    }

    /// Identity from a name and a generation number.
    ///
    /// Same name with a different generation is a different identity, so
    /// bumping the generation replaces the running subscription.
    pub fn keyed<T: 'static>(name: &str, generation: u64) -> Self {
        Self::scoped::<T>(name, 0, generation)
    }

    /// Identity from a name, the scope of its owner and a generation number.
    ///
    /// Owners that pick the same name stay apart as long as their scopes
    /// differ.
    pub fn scoped<T: 'static>(name: &str, scope: u64, generation: u64) -> Self {
        let mut hasher = std::hash::DefaultHasher::new();
        name.hash(&mut hasher);
        scope.hash(&mut hasher);
        generation.hash(&mut hasher);
        Self::new::<T>(hasher.finish())
    }
}

/// A type that can be turned into a stream of values.
///
/// [`stream`](SubscriptionSource::stream) is called once, when the runtime
/// first starts the subscription; the stream is dropped when the
/// subscription is aborted.
pub trait SubscriptionSource: Send + 'static {
    type Output: Send + 'static;

    fn id(&self) -> SubscriptionId;

    fn stream(self) -> BoxStream<'static, Self::Output>;
}

/// Wrap a [`SubscriptionSource`] as a [`Subscription`].
pub fn subscribe<S: SubscriptionSource>(source: S) -> Subscription<S::Output> {
    let id = source.id();
    Subscription::new(id, move || source.stream())
}

impl<Msg: Send + 'static> Subscription<Msg> {
    /// A subscription whose stream is built by `open` when it starts.
    pub fn new(
        id: SubscriptionId,
        open: impl FnOnce() -> BoxStream<'static, Msg> + Send + 'static,
    ) -> Self {
        Subscription {
            id,
            open: Box::new(open),
        }
    }

    pub fn from_stream(id: SubscriptionId, stream: BoxStream<'static, Msg>) -> Self {
        Subscription::new(id, move || stream)
    }

    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    /// Transform the message type (for component composition).
    ///
    /// The identity is unchanged.
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + 'static,
    ) -> Subscription<NewMsg> {
        let open = self.open;
        Subscription {
            id: self.id,
            open: Box::new(move || open().map(f).boxed()),
        }
    }

    fn spawn(self, tx: mpsc::UnboundedSender<Msg>) -> AbortHandle {
        let open = self.open;
        tokio::spawn(async move {
            let mut stream = open();
            while let Some(msg) = stream.next().await {
                if tx.send(msg).is_err() {
                    break;
                }
            }
        })
        .abort_handle()
    }
}

/// Running subscription tasks, keyed by identity.
pub(crate) struct SubscriptionManager<Msg: Send + 'static> {
    running: HashMap<SubscriptionId, AbortHandle>,
    tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg: Send + 'static> SubscriptionManager<Msg> {
    pub fn new(tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            running: HashMap::new(),
            tx,
        }
    }

    /// Make the running set match `declared`.
    ///
    /// When an identity is declared twice, the first declaration wins.
    pub fn reconcile(&mut self, declared: Vec<Subscription<Msg>>) {
        let mut next = HashMap::with_capacity(declared.len());
        for sub in declared {
            if next.contains_key(&sub.id) {
                continue;
            }
            let id = sub.id.clone();
            let handle = match self.running.remove(&id) {
                Some(handle) => handle,
                None => {
                    tracing::trace!(?id, "starting subscription");
                    sub.spawn(self.tx.clone())
                }
            };
            next.insert(id, handle);
        }
        for (id, handle) in self.running.drain() {
            tracing::trace!(?id, "aborting subscription");
            handle.abort();
        }
        self.running = next;
    }

    pub fn shutdown(&mut self) {
        for (_, handle) in self.running.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn running_count(&self) -> usize {
        self.running.len()
    }
}
