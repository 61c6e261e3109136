//! Filter engine: derives the visible projection from a [`CandidateStore`].
//!
//! The projection is a list of indices into the store's candidates, kept in
//! display order. Ordering is applied to the whole set first and cached per
//! store revision; filtering then keeps the candidates whose display text
//! contains the term, ignoring case.

use crate::item::Item;
use crate::store::CandidateStore;

/// Case-insensitive substring test.
///
/// `needle` must already be lowercased. An empty needle matches everything,
/// including items with empty display text.
pub fn matches(text: &str, needle: &str) -> bool {
    needle.is_empty() || text.to_lowercase().contains(needle)
}

/// The filtered, ordered view over a candidate store.
#[derive(Debug, Clone, Default)]
pub struct FilterView {
    ordered: Vec<usize>,
    seen_revision: Option<u64>,
    indices: Vec<usize>,
    term: String,
    revision: u64,
}

impl FilterView {
    /// An empty view. Call [`rebuild`](Self::rebuild) to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the projection for `term`.
    ///
    /// With `search_enabled` false the term is ignored and every candidate
    /// passes.
    pub fn rebuild<I: Item>(&mut self, store: &CandidateStore<I>, term: &str, search_enabled: bool) {
        if self.seen_revision != Some(store.revision()) || self.ordered.len() != store.len() {
            self.ordered = store.ordered_indices();
            self.seen_revision = Some(store.revision());
        }

        let needle = if search_enabled {
            term.to_lowercase()
        } else {
            String::new()
        };
        let items = store.items();
        self.indices = self
            .ordered
            .iter()
            .copied()
            .filter(|&i| {
                items
                    .get(i)
                    .is_some_and(|item| matches(item.display_text(), &needle))
            })
            .collect();
        self.term = needle;
        self.revision += 1;

        tracing::trace!(
            term = %self.term,
            visible = self.indices.len(),
            total = store.len(),
            "projection rebuilt"
        );
    }

    /// Store indices of the visible candidates, in display order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of visible candidates.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the last rebuild produced no candidates.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of rebuilds so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The lowercased term the projection was last built with.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The candidate shown at `row`.
    pub fn get<'a, I: Item>(&self, store: &'a CandidateStore<I>, row: usize) -> Option<&'a I> {
        self.indices.get(row).and_then(|&i| store.get(i))
    }

    /// Iterate the visible candidates in display order.
    pub fn items<'a, I: Item>(
        &'a self,
        store: &'a CandidateStore<I>,
    ) -> impl Iterator<Item = &'a I> + 'a {
        self.indices.iter().filter_map(move |&i| store.get(i))
    }

    /// Row of `item` in the projection.
    pub fn position_of<I: Item>(&self, store: &CandidateStore<I>, item: &I) -> Option<usize> {
        self.items(store).position(|candidate| candidate == item)
    }

    /// Whether `item` is currently visible.
    pub fn contains<I: Item>(&self, store: &CandidateStore<I>, item: &I) -> bool {
        self.position_of(store, item).is_some()
    }
}
