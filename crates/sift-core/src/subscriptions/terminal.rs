use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId, SubscriptionSource};
use crossterm::event::{EventStream, KeyEvent, KeyEventKind};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::sync::Arc;

/// Subscription source for terminal events (keyboard, mouse, resize, focus, paste).
///
/// crossterm's `EventStream` opens `/dev/tty` itself when stdin is not a TTY,
/// so keyboard input keeps working when data is piped into the program.
pub struct TerminalEvents;

impl SubscriptionSource for TerminalEvents {
    type Output = TerminalEvent;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::of::<Self>()
    }

    fn stream(self) -> BoxStream<'static, TerminalEvent> {
        let stream = EventStream::new().filter_map(|result| async move {
            result.ok().map(TerminalEvent::from)
        });
        Box::pin(stream)
    }
}

/// Create a terminal events subscription that maps each event through a
/// user-provided function.
///
/// The `map` closure returns `Some(Msg)` to forward an event or `None` to
/// discard it.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::KeyPress(key)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    // Opening an EventStream touches crossterm's global reader, so it must
    // happen once, when the runtime starts the subscription.
    Subscription::new(SubscriptionId::of::<TerminalEvents>(), move || {
        let map = Arc::new(map);
        EventStream::new()
            .filter_map(move |result| {
                let map = map.clone();
                async move { result.ok().and_then(|event| map(TerminalEvent::from(event))) }
            })
            .boxed()
    })
}

/// Terminal events subscription that only forwards key presses.
///
/// Release and repeat events (reported by some platforms) are dropped, so a
/// single physical key stroke produces exactly one message.
pub fn key_presses<Msg: Send + 'static>(
    map: impl Fn(KeyEvent) -> Msg + Send + Sync + 'static,
) -> Subscription<Msg> {
    terminal_events(move |event| match event {
        TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => Some(map(key)),
        _ => None,
    })
}
