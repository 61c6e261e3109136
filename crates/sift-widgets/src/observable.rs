//! Observable fields: values that report whether an assignment changed them.
//!
//! The combo publishes a message to its parent only when an observable's
//! [`set`](Observable::set) returns `true`, so repeated writes of the same
//! value never turn into notification loops.

/// A value with change detection on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observable<T> {
    value: T,
}

impl<T: PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Assign `value`. Returns `true` if it differed from the current one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }
}

impl<T: Copy + PartialEq> Observable<T> {
    pub fn copied(&self) -> T {
        self.value
    }
}
