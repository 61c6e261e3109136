//! The selectable-list capability the combo composes over.
//!
//! A results list behaves like a typical list control: it owns the rows it
//! shows and the row that is selected among them. Replacing the rows with a
//! set that no longer contains the selected row drops the selection and
//! reports a removal-only [`SelectionChange`]. The combo treats those reports
//! as filtering artifacts rather than user intent.

use crate::item::Item;

/// What changed in a list's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange<I> {
    pub added: Option<I>,
    pub removed: Option<I>,
}

impl<I> SelectionChange<I> {
    /// Whether the change only removed a selection without picking another.
    pub fn is_removal_only(&self) -> bool {
        self.added.is_none() && self.removed.is_some()
    }
}

/// A list of rows with at most one selected row.
pub trait SelectableList<I: Item>: Send + 'static {
    /// The rows currently shown.
    fn projection(&self) -> &[I];

    /// Replace the rows. Reports the change if the selected row disappeared.
    fn set_projection(&mut self, items: Vec<I>) -> Option<SelectionChange<I>>;

    fn selected(&self) -> Option<&I>;

    /// Select `item` (or nothing). Items not among the rows select nothing.
    fn set_selected(&mut self, item: Option<I>) -> Option<SelectionChange<I>>;
}

/// Default in-memory [`SelectableList`].
#[derive(Debug, Clone)]
pub struct ListSelection<I> {
    items: Vec<I>,
    selected: Option<I>,
}

impl<I> Default for ListSelection<I> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
        }
    }
}

impl<I: Item> ListSelection<I> {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign(&mut self, next: Option<I>) -> Option<SelectionChange<I>> {
        if self.selected == next {
            return None;
        }
        let removed = std::mem::replace(&mut self.selected, next.clone());
        Some(SelectionChange {
            added: next,
            removed,
        })
    }
}

impl<I: Item> SelectableList<I> for ListSelection<I> {
    fn projection(&self) -> &[I] {
        &self.items
    }

    fn set_projection(&mut self, items: Vec<I>) -> Option<SelectionChange<I>> {
        self.items = items;
        let keep = self
            .selected
            .as_ref()
            .is_some_and(|selected| self.items.contains(selected));
        if keep {
            None
        } else {
            self.assign(None)
        }
    }

    fn selected(&self) -> Option<&I> {
        self.selected.as_ref()
    }

    fn set_selected(&mut self, item: Option<I>) -> Option<SelectionChange<I>> {
        let next = item.filter(|item| self.items.contains(item));
        self.assign(next)
    }
}
