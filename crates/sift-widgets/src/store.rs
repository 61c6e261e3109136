//! Candidate store: the full, unfiltered set of selectable items.
//!
//! The store holds a shared handle to the host's candidate sequence plus an
//! optional ordering comparator. It never filters; every replacement bumps
//! [`CandidateStore::revision`], which is how the filter engine learns that
//! its cached ordering is stale.

use crate::item::Item;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Ordering applied to the whole candidate set before filtering.
pub type Comparator<I> = Arc<dyn Fn(&I, &I) -> Ordering + Send + Sync>;

/// Wrap a closure as a [`Comparator`].
///
/// ```ignore
/// let newest_first = sift_widgets::store::comparator(|a: &Release, b: &Release| b.date.cmp(&a.date));
/// ```
pub fn comparator<I>(f: impl Fn(&I, &I) -> Ordering + Send + Sync + 'static) -> Comparator<I> {
    Arc::new(f)
}

/// Comparator ordering items by display text, ignoring case.
pub fn by_display_text<I: Item>() -> Comparator<I> {
    comparator(|a: &I, b: &I| {
        a.display_text()
            .to_lowercase()
            .cmp(&b.display_text().to_lowercase())
    })
}

/// Holds the candidate sequence and its optional comparator.
pub struct CandidateStore<I: Item> {
    items: Arc<[I]>,
    comparator: Option<Comparator<I>>,
    revision: u64,
}

impl<I: Item> CandidateStore<I> {
    /// Create a store over the given candidates, in insertion order.
    pub fn new(items: impl Into<Arc<[I]>>) -> Self {
        Self {
            items: items.into(),
            comparator: None,
            revision: 0,
        }
    }

    /// Replace the candidate sequence and comparator.
    pub fn set_source(&mut self, items: impl Into<Arc<[I]>>, comparator: Option<Comparator<I>>) {
        self.items = items.into();
        self.comparator = comparator;
        self.revision += 1;
        tracing::debug!(
            len = self.items.len(),
            sorted = self.comparator.is_some(),
            "candidate source replaced"
        );
    }

    /// Replace only the comparator. `None` restores insertion order.
    pub fn set_comparator(&mut self, comparator: Option<Comparator<I>>) {
        self.comparator = comparator;
        self.revision += 1;
    }

    /// Counter bumped on every source or comparator change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The candidates in insertion order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// The candidate at `index` (insertion order).
    pub fn get(&self, index: usize) -> Option<&I> {
        self.items.get(index)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `item` is one of the candidates.
    pub fn contains(&self, item: &I) -> bool {
        self.items.iter().any(|candidate| candidate == item)
    }

    /// Whether a comparator is set.
    pub fn is_sorted(&self) -> bool {
        self.comparator.is_some()
    }

    /// Indices of all candidates in display order.
    ///
    /// Without a comparator this is `0..len`. With one, it is a stable sort,
    /// so equal items keep their insertion order.
    pub fn ordered_indices(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        if let Some(cmp) = &self.comparator {
            order.sort_by(|&a, &b| cmp(&self.items[a], &self.items[b]));
        }
        order
    }
}

impl<I: Item> Default for CandidateStore<I> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<I: Item + fmt::Debug> fmt::Debug for CandidateStore<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateStore")
            .field("items", &self.items)
            .field("sorted", &self.is_sorted())
            .field("revision", &self.revision)
            .finish()
    }
}
