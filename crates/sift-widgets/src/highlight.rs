//! Highlight cursor over the results projection.
//!
//! The highlight is *not* the selection: arrow keys move it freely, and only
//! a pick (Enter or a click) turns the highlighted row into the selected item.

use std::ops::Range;

/// Highlighted row plus the first row of the scroll window.
///
/// `rows` is the projection length and `height` the number of rows drawn at
/// once. The cursor is `None` exactly when `rows` is zero.
#[derive(Debug, Clone, Default)]
pub struct HighlightState {
    cursor: Option<usize>,
    top: usize,
    rows: usize,
    height: usize,
}

impl HighlightState {
    pub fn new(rows: usize, height: usize) -> Self {
        Self {
            cursor: (rows > 0).then_some(0),
            top: 0,
            rows,
            height,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn visible(&self) -> usize {
        self.height
    }

    /// Rows inside the scroll window.
    pub fn window(&self) -> Range<usize> {
        let end = (self.top + self.height).min(self.rows);
        self.top.min(end)..end
    }

    /// The projection now has `rows` rows; keep the cursor on a real row.
    pub fn set_count(&mut self, rows: usize) {
        self.rows = rows;
        self.cursor = match (self.cursor, rows) {
            (_, 0) => None,
            (Some(row), _) => Some(row.min(rows - 1)),
            (None, _) => Some(0),
        };
        self.top = self.top.min(rows.saturating_sub(self.height.max(1)));
        self.scroll_to_cursor();
    }

    pub fn set_visible(&mut self, height: usize) {
        self.height = height;
        self.scroll_to_cursor();
    }

    /// Previous row, wrapping to the last.
    pub fn move_up(&mut self) {
        self.step(-1, true);
    }

    /// Next row, wrapping to the first.
    pub fn move_down(&mut self) {
        self.step(1, true);
    }

    pub fn page_up(&mut self) {
        self.step(-self.page(), false);
    }

    pub fn page_down(&mut self) {
        self.step(self.page(), false);
    }

    pub fn home(&mut self) {
        self.select(0);
    }

    pub fn end(&mut self) {
        self.select(usize::MAX);
    }

    /// Highlight `row`, clamped to the last row.
    pub fn select(&mut self, row: usize) {
        if self.rows == 0 {
            return;
        }
        self.cursor = Some(row.min(self.rows - 1));
        self.scroll_to_cursor();
    }

    fn page(&self) -> isize {
        isize::try_from(self.height.max(1)).unwrap_or(isize::MAX)
    }

    /// Move by `delta` rows. Single steps wrap around; pages stop at the ends.
    fn step(&mut self, delta: isize, wrap: bool) {
        let Some(row) = self.cursor else {
            return;
        };
        let last = self.rows - 1;
        let next = match row.checked_add_signed(delta) {
            Some(next) if next <= last => next,
            Some(_) if wrap => 0,
            Some(_) => last,
            None if wrap => last,
            None => 0,
        };
        self.select(next);
    }

    fn scroll_to_cursor(&mut self) {
        let Some(row) = self.cursor else {
            self.top = 0;
            return;
        };
        if self.height == 0 {
            return;
        }
        if row < self.top {
            self.top = row;
        } else if row >= self.top + self.height {
            self.top = row + 1 - self.height;
        }
    }
}
