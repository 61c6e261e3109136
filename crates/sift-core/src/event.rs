use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal events produced by the runtime's event loop.
///
/// Delivered through the [`terminal_events`](crate::subscriptions::terminal_events)
/// subscription; each variant wraps the corresponding
/// [`crossterm::event::Event`] payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        use crossterm::event::Event;
        match event {
            Event::Key(k) => TerminalEvent::Key(k),
            Event::Mouse(m) => TerminalEvent::Mouse(m),
            Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            Event::FocusGained => TerminalEvent::FocusGained,
            Event::FocusLost => TerminalEvent::FocusLost,
            Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}
