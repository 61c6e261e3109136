//! Core runtime for **sift**, a searchable dropdown toolkit for ratatui.
//!
//! `sift-core` provides the traits, types, and runtime that drive the
//! widgets. The design follows the [Elm Architecture]: state changes happen
//! in a pure **init -> update -> view** cycle, and side effects (timers and
//! deferred focus requests) are pushed to the edges through
//! [`Command`]s and [`Subscription`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Ordered [`Effect`]s: immediate messages, [`Command::after_render`] messages, quit |
//! | [`Subscription`] | Long-lived event source, diffed by identity after every update |
//! | [`After`] | Keyed one-shot timer; a new generation cancels the previous one |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! # Scheduling
//!
//! Everything runs on one logical thread of control. The order within one
//! turn of the loop is: `update` → commands executed → subscriptions
//! reconciled → frame drawn → deferred messages released.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::{Command, Effect};
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{OutputTarget, Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{key_presses, terminal_events, After};

/// Run a sift application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
