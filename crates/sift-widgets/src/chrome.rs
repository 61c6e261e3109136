//! Block helpers for the dropdown's trigger and overlay frames.

use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders};

/// The bordered frame around the open overlay.
///
/// With `bordered` false the block is drawn without borders, so an empty
/// result set shows only the search field and the not-found label.
pub fn dropdown_block(bordered: bool, border_style: Style) -> Block<'static> {
    if bordered {
        Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
    } else {
        Block::new()
    }
}

/// Rows taken by the frame's borders.
pub fn frame_height(bordered: bool) -> u16 {
    if bordered {
        2
    } else {
        0
    }
}
