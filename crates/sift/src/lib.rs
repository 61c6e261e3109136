//! **sift**: a searchable single-selection dropdown for [`ratatui`].
//!
//! This is the umbrella crate that re-exports the runtime and the widget from
//! a single dependency:
//!
//! ```toml
//! [dependencies]
//! sift = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`sift_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Program`],
//!   [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`sift_widgets`]
//!   ([`SearchableCombo`](widgets::SearchableCombo), the candidate store,
//!   the filter engine).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use sift::widgets::combo::{self, SearchableCombo};
//! use sift::{key_presses, Command, Component, Model, Subscription};
//!
//! struct Picker {
//!     fruit: SearchableCombo<String>,
//! }
//!
//! enum Msg {
//!     Fruit(combo::Message<String>),
//! }
//!
//! impl Model for Picker {
//!     type Message = Msg;
//!     type Flags = Vec<String>;
//!
//!     fn init(items: Vec<String>) -> (Self, Command<Msg>) {
//!         let mut fruit = SearchableCombo::new(items);
//!         let focus = fruit.set_focused(true).map(Msg::Fruit);
//!         (Picker { fruit }, focus)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Fruit(m) => self.fruit.update(m).map(Msg::Fruit),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut ratatui::Frame) {
//!         let area = frame.area();
//!         self.fruit.view(frame, area);
//!     }
//!
//!     fn subscriptions(&self) -> Vec<Subscription<Msg>> {
//!         let mut subs = vec![key_presses(|key| Msg::Fruit(combo::Message::KeyPress(key)))];
//!         subs.extend(self.fruit.subscriptions().into_iter().map(|s| s.map(Msg::Fruit)));
//!         subs
//!     }
//! }
//! ```

pub use sift_core::*;
pub mod widgets {
    pub use sift_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
