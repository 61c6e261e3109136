//! Single-line search field editor.
//!
//! `SearchField` owns the search term while the dropdown is open. It edits a
//! character buffer with a char-indexed cursor and tells the caller whether a
//! key changed the text; the combo turns changes into
//! [`TermEdited`](crate::combo::Message::TermEdited) and restarts its
//! debounce. The field never filters anything itself.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Outcome of feeding a key to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The text changed.
    Changed,
    /// Only the cursor moved.
    Moved,
    /// The key is not an editing key.
    Ignored,
}

/// Styles used when drawing the field.
#[derive(Debug, Clone)]
pub struct SearchFieldStyle {
    pub prompt: Style,
    pub text: Style,
    pub cursor: Style,
}

impl Default for SearchFieldStyle {
    fn default() -> Self {
        use ratatui::style::{Color, Modifier};
        Self {
            prompt: Style::default().fg(Color::Yellow),
            text: Style::default(),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Editable search term.
#[derive(Debug, Clone, Default)]
pub struct SearchField {
    chars: Vec<char>,
    cursor: usize,
    focused: bool,
}

impl SearchField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    /// Replace the text and move the cursor to the end. Returns whether the
    /// text changed.
    pub fn set_value(&mut self, value: &str) -> bool {
        let next: Vec<char> = value.chars().collect();
        let changed = next != self.chars;
        self.chars = next;
        self.cursor = self.chars.len();
        changed
    }

    /// Empty the field. Returns whether there was anything to clear.
    pub fn clear(&mut self) -> bool {
        self.cursor = 0;
        if self.chars.is_empty() {
            return false;
        }
        self.chars.clear();
        true
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Cursor position as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Backspace.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    /// Delete the word before the cursor, along with trailing spaces.
    pub fn delete_word_back(&mut self) -> bool {
        let start = self.cursor;
        while self.cursor > 0 && self.chars[self.cursor - 1] == ' ' {
            self.cursor -= 1;
        }
        while self.cursor > 0 && self.chars[self.cursor - 1] != ' ' {
            self.cursor -= 1;
        }
        self.chars.drain(self.cursor..start);
        self.cursor != start
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn move_home(&mut self) -> bool {
        std::mem::replace(&mut self.cursor, 0) != 0
    }

    pub fn move_end(&mut self) -> bool {
        std::mem::replace(&mut self.cursor, self.chars.len()) != self.chars.len()
    }

    /// Apply an editing key.
    ///
    /// Left/Right, Home/End and Ctrl+A/Ctrl+E move the cursor. Backspace,
    /// Ctrl+H, Ctrl+D, Ctrl+W, Ctrl+U and printable characters edit the text.
    /// Delete is left to the owner; the combo binds it to clearing the
    /// selection, so Ctrl+D is the forward delete.
    pub fn handle_key(&mut self, key: KeyEvent) -> Edit {
        let changed = match (key.code, key.modifiers) {
            (KeyCode::Left, _) => return moved(self.move_left()),
            (KeyCode::Right, _) => return moved(self.move_right()),
            (KeyCode::Home, KeyModifiers::NONE) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                return moved(self.move_home())
            }
            (KeyCode::End, KeyModifiers::NONE) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                return moved(self.move_end())
            }
            (KeyCode::Backspace, _) | (KeyCode::Char('h'), KeyModifiers::CONTROL) => {
                self.delete_back()
            }
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => self.delete_forward(),
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => self.delete_word_back(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let had_text = self.cursor > 0;
                self.chars.drain(..self.cursor);
                self.cursor = 0;
                had_text
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.insert_char(c);
                true
            }
            _ => return Edit::Ignored,
        };
        if changed {
            Edit::Changed
        } else {
            Edit::Ignored
        }
    }

    /// Draw `prompt` followed by the text, with a block cursor when focused.
    pub fn view(&self, frame: &mut Frame, area: Rect, prompt: &str, style: &SearchFieldStyle) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut spans = vec![Span::styled(prompt.to_string(), style.prompt)];
        let before: String = self.chars[..self.cursor].iter().collect();
        if !before.is_empty() {
            spans.push(Span::styled(before, style.text));
        }
        match self.chars.get(self.cursor) {
            Some(&c) if self.focused => {
                spans.push(Span::styled(c.to_string(), style.cursor));
                let after: String = self.chars[self.cursor + 1..].iter().collect();
                if !after.is_empty() {
                    spans.push(Span::styled(after, style.text));
                }
            }
            Some(_) => {
                let after: String = self.chars[self.cursor..].iter().collect();
                spans.push(Span::styled(after, style.text));
            }
            None if self.focused => spans.push(Span::styled(" ", style.cursor)),
            None => {}
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn moved(did_move: bool) -> Edit {
    if did_move {
        Edit::Moved
    } else {
        Edit::Ignored
    }
}
