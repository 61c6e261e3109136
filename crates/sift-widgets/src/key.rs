//! Key bindings for the dropdown and the navigation/escape classification
//! that drives focus steering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One or more key combinations bound to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    pub keys: Vec<KeyCombination>,
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Binding {
    pub fn new(key: KeyCombination, description: impl Into<String>) -> Self {
        Self::with_keys(vec![key], description)
    }

    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` matches one of the combinations exactly.
    ///
    /// Shift is ignored so terminals that report it for uppercase letters
    /// or symbols still match.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        let held = event.modifiers.difference(KeyModifiers::SHIFT);
        self.keys
            .iter()
            .any(|k| k.code == event.code && held == k.modifiers.difference(KeyModifiers::SHIFT))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    pub fn new(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::CONTROL)
    }

    pub fn alt(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::ALT)
    }

    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

/// How a key pressed while the dropdown is open relates to focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Arrow-style movement through the results list.
    Navigation,
    /// Dismissal.
    Escape,
    /// Anything else; routed to the search field.
    Other,
}

/// Classify a key for focus steering.
///
/// The four arrows and the paging keys navigate, as do Ctrl+Home and
/// Ctrl+End. Esc dismisses. Every other key, plain Home and End included,
/// belongs to the search field.
pub fn classify(key: &KeyEvent) -> KeyClass {
    match key.code {
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::PageUp
        | KeyCode::PageDown => KeyClass::Navigation,
        KeyCode::Home | KeyCode::End if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyClass::Navigation
        }
        KeyCode::Esc => KeyClass::Escape,
        _ => KeyClass::Other,
    }
}

/// Bindings the combo consults in `KeyPress` handling.
#[derive(Debug, Clone)]
pub struct ComboKeyBindings {
    /// Opens a closed dropdown.
    pub open: Binding,
    /// Picks the highlighted row and closes.
    pub commit: Binding,
    /// Closes without picking.
    pub dismiss: Binding,
    pub up: Binding,
    pub down: Binding,
    pub page_up: Binding,
    pub page_down: Binding,
    pub home: Binding,
    pub end: Binding,
    /// Clears the selection when the combo is nullable.
    pub clear: Binding,
}

impl Default for ComboKeyBindings {
    fn default() -> Self {
        Self {
            open: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Enter),
                    KeyCombination::new(KeyCode::Char(' ')),
                    KeyCombination::new(KeyCode::Down),
                    KeyCombination::alt(KeyCode::Down),
                ],
                "open",
            ),
            commit: Binding::new(KeyCombination::new(KeyCode::Enter), "select"),
            dismiss: Binding::new(KeyCombination::new(KeyCode::Esc), "cancel"),
            up: Binding::new(KeyCombination::new(KeyCode::Up), "previous"),
            down: Binding::new(KeyCombination::new(KeyCode::Down), "next"),
            page_up: Binding::new(KeyCombination::new(KeyCode::PageUp), "page up"),
            page_down: Binding::new(KeyCombination::new(KeyCode::PageDown), "page down"),
            home: Binding::new(KeyCombination::ctrl(KeyCode::Home), "first"),
            end: Binding::new(KeyCombination::ctrl(KeyCode::End), "last"),
            clear: Binding::new(KeyCombination::new(KeyCode::Delete), "clear"),
        }
    }
}

impl ComboKeyBindings {
    /// Bindings worth showing in a one-line hint while open.
    pub fn short_help(&self) -> Vec<&Binding> {
        [&self.commit, &self.dismiss, &self.clear]
            .into_iter()
            .filter(|b| b.enabled)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn classify_keys() {
        assert_eq!(classify(&press(KeyCode::Up, KeyModifiers::NONE)), KeyClass::Navigation);
        assert_eq!(classify(&press(KeyCode::Left, KeyModifiers::NONE)), KeyClass::Navigation);
        assert_eq!(classify(&press(KeyCode::Right, KeyModifiers::NONE)), KeyClass::Navigation);
        assert_eq!(classify(&press(KeyCode::PageDown, KeyModifiers::NONE)), KeyClass::Navigation);
        assert_eq!(classify(&press(KeyCode::End, KeyModifiers::CONTROL)), KeyClass::Navigation);
        assert_eq!(classify(&press(KeyCode::Home, KeyModifiers::NONE)), KeyClass::Other);
        assert_eq!(classify(&press(KeyCode::End, KeyModifiers::NONE)), KeyClass::Other);
        assert_eq!(classify(&press(KeyCode::Esc, KeyModifiers::NONE)), KeyClass::Escape);
        assert_eq!(classify(&press(KeyCode::Char('a'), KeyModifiers::NONE)), KeyClass::Other);
        assert_eq!(classify(&press(KeyCode::Backspace, KeyModifiers::NONE)), KeyClass::Other);
    }

    #[test]
    fn open_accepts_alt_down() {
        let keys = ComboKeyBindings::default();
        assert!(keys.open.matches(&press(KeyCode::Down, KeyModifiers::ALT)));
        assert!(keys.open.matches(&press(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(!keys.open.matches(&press(KeyCode::Up, KeyModifiers::NONE)));
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let keys = ComboKeyBindings::default();
        assert!(!keys.commit.matches(&press(KeyCode::Enter, KeyModifiers::CONTROL)));
        assert!(!keys.down.matches(&press(KeyCode::Down, KeyModifiers::ALT)));
        assert!(keys.down.matches(&press(KeyCode::Down, KeyModifiers::SHIFT)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let clear = Binding::new(KeyCombination::new(KeyCode::Delete), "clear").enabled(false);
        assert!(!clear.matches(&press(KeyCode::Delete, KeyModifiers::NONE)));
    }

    #[test]
    fn short_help_skips_disabled() {
        let mut keys = ComboKeyBindings::default();
        keys.clear.enabled = false;
        let labels: Vec<_> = keys.short_help().iter().map(|b| b.description.as_str()).collect();
        assert_eq!(labels, vec!["select", "cancel"]);
    }
}
