//! The searchable dropdown for **sift**.
//!
//! [`SearchableCombo`] implements [`sift_core::Component`], so it embeds in
//! any [`sift_core::Model`] and renders into any [`ratatui`] layout area.
//!
//! # Widget
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`combo`] | [`SearchableCombo`]: the selection state machine, its messages, options and view |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`item`] | [`Item`] trait: display text of a candidate |
//! | [`store`] | Candidate set plus optional comparator |
//! | [`filter`] | Case-insensitive substring projection over the store |
//! | [`debounce`] | Restartable keyed one-shot delay for filter passes |
//! | [`selectable`] | [`SelectableList`] capability and its default [`ListSelection`] |
//! | [`observable`] | Values that report whether a write changed them |
//! | [`highlight`] | Highlight cursor and scroll window over the projection |
//! | [`search_field`] | Single-line search term editor |
//! | [`key`] | Key bindings and navigation/escape classification |
//! | [`text`] | Display-width aware truncation |
//! | [`chrome`] | Overlay frame helpers |

pub mod chrome;
pub mod combo;
pub mod debounce;
pub mod filter;
pub mod highlight;
pub mod item;
pub mod key;
pub mod observable;
pub mod search_field;
pub mod selectable;
pub mod store;
pub mod text;

pub use combo::{
    CloseReason, ComboOptions, ComboStyle, DropdownState, Focus, SearchableCombo,
    SelectionError, Visibility,
};
pub use item::Item;
pub use selectable::{ListSelection, SelectableList, SelectionChange};
pub use store::{by_display_text, comparator, Comparator};
