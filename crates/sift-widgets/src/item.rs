//! The [`Item`] trait: what the dropdown needs to know about a candidate.

use std::sync::Arc;

/// A value that can be offered as a dropdown candidate.
///
/// The only thing the filter engine needs is the text shown for the item;
/// matching is a case-insensitive substring test against it. Selection
/// comparisons use the type's own [`PartialEq`].
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, PartialEq)]
/// struct Country {
///     code: &'static str,
///     name: String,
/// }
///
/// impl sift_widgets::Item for Country {
///     fn display_text(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait Item: Clone + PartialEq + Send + Sync + 'static {
    /// Text used for matching and as the rendered label.
    ///
    /// Items without a meaningful label return `""`; such items match only an
    /// empty search term.
    fn display_text(&self) -> &str;
}

impl Item for String {
    fn display_text(&self) -> &str {
        self
    }
}

impl Item for &'static str {
    fn display_text(&self) -> &str {
        self
    }
}

impl Item for Arc<str> {
    fn display_text(&self) -> &str {
        self
    }
}

/// An absent label behaves like an empty one.
impl<T: Item> Item for Option<T> {
    fn display_text(&self) -> &str {
        self.as_ref().map_or("", |item| item.display_text())
    }
}
