//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`], [`TerminalEvents`]) -- keyboard,
//!   mouse, resize, focus, and paste events from the terminal.
//! - **Timers** ([`After`]) -- keyed one-shot delays that restart when their
//!   generation changes.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
