//! Display-width helpers for fitting labels into cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns occupied by `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit `s` into `max_width` columns, appending `tail` when cut.
///
/// ```
/// use sift_widgets::text::truncate;
///
/// assert_eq!(truncate("AppleandBanana 12", 10, "…"), "AppleandB…");
/// assert_eq!(truncate("Kiwi", 10, "…"), "Kiwi");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let tail_width = display_width(tail);
    if tail_width >= max_width {
        return take_width(tail, max_width);
    }
    let mut out = take_width(s, max_width - tail_width);
    out.push_str(tail);
    out
}

/// Right-pad `s` with spaces to exactly `width` columns, truncating first.
pub fn pad_to(s: &str, width: usize, tail: &str) -> String {
    let mut out = truncate(s, width, tail);
    let used = display_width(&out);
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        out.push(c);
        width += cw;
    }
    out
}
