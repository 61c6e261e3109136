//! Searchable single-selection dropdown.
//!
//! [`SearchableCombo`] reconciles three things that drift apart while the
//! user types: the search term, the filtered projection, and the selected
//! item. The rules it keeps:
//!
//! - Filtering never runs on a keystroke. Edits restart a keyed one-shot
//!   timer ([`Debounce`]); only its current firing rebuilds the projection.
//!   Closing cancels the timer and rebuilds immediately with an empty term.
//! - The selection survives filtering. When the projection stops containing
//!   the selected item, the results list reports a removal-only change; the
//!   combo treats that as a filtering artifact and reverts to the last
//!   committed item instead of clearing.
//! - Opening snapshots the selection as *last committed*. A pick updates it;
//!   closing without a pick restores it if the selection went missing.
//! - Opening issues a deferred focus request for the search field, delivered
//!   after the next frame. Keys other than navigation and Escape pull focus
//!   back to the search field.
//!
//! # Example
//!
//! ```ignore
//! use sift_widgets::combo::{ComboOptions, SearchableCombo};
//!
//! let mut fruit = SearchableCombo::new(vec!["Apple".to_string(), "Banana".to_string()])
//!     .with_options(ComboOptions {
//!         placeholder: "Pick a fruit".into(),
//!         nullable: true,
//!         ..ComboOptions::default()
//!     });
//! fruit.set_focused(true);
//! ```

use crate::chrome;
use crate::debounce::{self, Debounce};
use crate::filter::FilterView;
use crate::highlight::HighlightState;
use crate::item::Item;
use crate::key::{classify, ComboKeyBindings, KeyClass};
use crate::observable::Observable;
use crate::search_field::{Edit, SearchField, SearchFieldStyle};
use crate::selectable::{ListSelection, SelectableList, SelectionChange};
use crate::store::{CandidateStore, Comparator};
use crate::text::{display_width, pad_to};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;
use sift_core::command::Command;
use sift_core::component::Component;
use sift_core::subscription::Subscription;
use std::sync::Arc;
use std::time::Duration;

/// Subscription key for the filter debounce timer.
const DEBOUNCE_KEY: &str = "sift-filter";

/// Why the dropdown closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Closed by picking a row.
    Commit,
    /// Closed without picking (Esc, focus loss).
    Dismiss,
}

/// Whether the overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Which part of the combo receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The closed trigger line.
    #[default]
    Trigger,
    SearchField,
    Results,
}

/// Derived visibility flags, republished after every rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// The "not found" label shows.
    pub empty_result: bool,
    /// The overlay border shows.
    pub border: bool,
    /// The trigger shows the placeholder instead of a selection.
    pub placeholder: bool,
}

/// Messages for [`SearchableCombo`].
///
/// The first group are inputs. The second group are notifications the combo
/// emits for its parent; feeding them back in is a no-op.
#[derive(Debug, Clone)]
pub enum Message<I> {
    Open,
    Close(CloseReason),
    /// The search term changed to the given text.
    TermEdited(String),
    KeyPress(KeyEvent),
    /// Pick the row at this position in the projection.
    Pick(usize),
    /// The results list changed its selection on its own.
    ListChanged(SelectionChange<I>),
    /// The debounce timer with this tag fired.
    DebounceElapsed(u64),
    /// Deferred focus request for the search field.
    FocusSearch,

    /// The selected item changed.
    SelectionChanged(Option<I>),
    VisibilityChanged(Visibility),
    /// Focus moved inside the open dropdown.
    FocusRequested(Focus),
    Opened,
    Closed(CloseReason),
}

/// Errors from host-side selection changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("item is not one of the dropdown's candidates")]
    NotACandidate,
}

/// Behavior knobs.
#[derive(Debug, Clone)]
pub struct ComboOptions {
    /// Quiet period between the last edit and the filter pass.
    pub debounce: Duration,
    /// Without search the term is ignored and no search field is shown.
    pub search_enabled: bool,
    /// Allow clearing the selection with Delete.
    pub nullable: bool,
    /// Trigger text while nothing is selected.
    pub placeholder: String,
    /// Label shown when no candidate matches.
    pub not_found: String,
    /// Rows visible before the results list scrolls.
    pub max_visible: usize,
    /// Prefix drawn before the search field.
    pub search_prompt: String,
}

impl Default for ComboOptions {
    fn default() -> Self {
        Self {
            debounce: debounce::DEFAULT_DELAY,
            search_enabled: true,
            nullable: false,
            placeholder: String::new(),
            not_found: "No results found".to_string(),
            max_visible: 8,
            search_prompt: "> ".to_string(),
        }
    }
}

/// Visual style for [`SearchableCombo`].
#[derive(Debug, Clone)]
pub struct ComboStyle {
    pub trigger: Style,
    pub trigger_focused: Style,
    pub placeholder: Style,
    pub arrow: Style,
    pub item: Style,
    pub highlighted: Style,
    /// Patched onto the row holding the selected item.
    pub selected: Style,
    pub border: Style,
    pub not_found: Style,
    pub search: SearchFieldStyle,
    pub highlight_symbol: String,
}

impl Default for ComboStyle {
    fn default() -> Self {
        Self {
            trigger: Style::default(),
            trigger_focused: Style::default().fg(Color::Cyan),
            placeholder: Style::default().fg(Color::DarkGray),
            arrow: Style::default().fg(Color::DarkGray),
            item: Style::default(),
            highlighted: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::UNDERLINED),
            border: Style::default().fg(Color::DarkGray),
            not_found: Style::default().fg(Color::Red),
            search: SearchFieldStyle::default(),
            highlight_symbol: "▸ ".to_string(),
        }
    }
}

/// A dropdown with a search field and a persistent single selection.
pub struct SearchableCombo<I: Item> {
    store: CandidateStore<I>,
    view: FilterView,
    list: Box<dyn SelectableList<I>>,
    selected: Observable<Option<I>>,
    last_committed: Option<I>,
    state: DropdownState,
    term: String,
    debounce: Debounce,
    highlight: HighlightState,
    search: Option<SearchField>,
    focus: Focus,
    has_focus: bool,
    empty_result_visible: Observable<bool>,
    border_visible: Observable<bool>,
    placeholder_visible: Observable<bool>,
    options: ComboOptions,
    style: ComboStyle,
    keys: ComboKeyBindings,
}

impl<I: Item> SearchableCombo<I> {
    /// Create a closed combo over `items`, in insertion order.
    pub fn new(items: impl Into<Arc<[I]>>) -> Self {
        let options = ComboOptions::default();
        let mut combo = Self {
            store: CandidateStore::new(items),
            view: FilterView::new(),
            list: Box::new(ListSelection::new()),
            selected: Observable::new(None),
            last_committed: None,
            state: DropdownState::Closed,
            term: String::new(),
            debounce: Debounce::new(DEBOUNCE_KEY, options.debounce),
            highlight: HighlightState::new(0, options.max_visible),
            search: Some(SearchField::new()),
            focus: Focus::Trigger,
            has_focus: false,
            empty_result_visible: Observable::new(false),
            border_visible: Observable::new(true),
            placeholder_visible: Observable::new(true),
            options,
            style: ComboStyle::default(),
            keys: ComboKeyBindings::default(),
        };
        // Nothing is listening yet, so the initial notifications are dropped.
        let _ = combo.rebuild();
        combo
    }

    pub fn with_options(mut self, options: ComboOptions) -> Self {
        self.debounce.set_delay(options.debounce);
        self.highlight.set_visible(options.max_visible.max(1));
        self.search = options.search_enabled.then(SearchField::new);
        self.options = options;
        let _ = self.rebuild();
        self
    }

    pub fn with_style(mut self, style: ComboStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_keys(mut self, keys: ComboKeyBindings) -> Self {
        self.keys = keys;
        self
    }

    /// Order candidates with `comparator` before filtering.
    pub fn with_comparator(mut self, comparator: Comparator<I>) -> Self {
        self.store.set_comparator(Some(comparator));
        let _ = self.rebuild();
        self
    }

    /// Use a custom results list instead of [`ListSelection`].
    pub fn with_list(mut self, list: Box<dyn SelectableList<I>>) -> Self {
        self.list = list;
        let _ = self.rebuild();
        self
    }

    /// Replace the candidates and comparator.
    ///
    /// The projection is rebuilt with the current term; the selection is
    /// kept even if the new candidates do not contain it.
    pub fn set_source(
        &mut self,
        items: impl Into<Arc<[I]>>,
        comparator: Option<Comparator<I>>,
    ) -> Command<Message<I>> {
        self.store.set_source(items, comparator);
        self.rebuild()
    }

    /// Replace only the comparator. `None` restores insertion order.
    pub fn set_comparator(&mut self, comparator: Option<Comparator<I>>) -> Command<Message<I>> {
        self.store.set_comparator(comparator);
        self.rebuild()
    }

    /// Select `item` on behalf of the host.
    pub fn set_selected(&mut self, item: I) -> Result<Command<Message<I>>, SelectionError> {
        if !self.store.contains(&item) {
            return Err(SelectionError::NotACandidate);
        }
        self.last_committed = Some(item.clone());
        Ok(self.assign_selected(Some(item)))
    }

    /// Clear the selection on behalf of the host.
    pub fn clear_selection(&mut self) -> Command<Message<I>> {
        self.last_committed = None;
        self.assign_selected(None)
    }

    /// Give or take keyboard focus. Losing focus dismisses an open dropdown.
    pub fn set_focused(&mut self, focused: bool) -> Command<Message<I>> {
        self.has_focus = focused;
        if !focused && self.is_open() {
            return self.close(CloseReason::Dismiss);
        }
        Command::none()
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn selected(&self) -> Option<&I> {
        self.selected.get().as_ref()
    }

    pub fn last_committed(&self) -> Option<&I> {
        self.last_committed.as_ref()
    }

    /// The search term as last edited, which may be ahead of the projection.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Visible candidates in display order.
    pub fn projection(&self) -> impl Iterator<Item = &I> + '_ {
        self.view.items(&self.store)
    }

    pub fn filter(&self) -> &FilterView {
        &self.view
    }

    pub fn store(&self) -> &CandidateStore<I> {
        &self.store
    }

    pub fn debounce(&self) -> &Debounce {
        &self.debounce
    }

    pub fn list(&self) -> &dyn SelectableList<I> {
        self.list.as_ref()
    }

    /// The candidate under the highlight cursor.
    pub fn highlighted(&self) -> Option<&I> {
        self.highlight
            .cursor()
            .and_then(|row| self.view.get(&self.store, row))
    }

    pub fn empty_result_visible(&self) -> bool {
        self.empty_result_visible.copied()
    }

    pub fn border_visible(&self) -> bool {
        self.border_visible.copied()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible.copied()
    }

    pub fn placeholder(&self) -> &str {
        &self.options.placeholder
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            empty_result: self.empty_result_visible(),
            border: self.border_visible(),
            placeholder: self.placeholder_visible(),
        }
    }

    pub fn options(&self) -> &ComboOptions {
        &self.options
    }

    pub fn keys(&self) -> &ComboKeyBindings {
        &self.keys
    }

    fn open(&mut self) -> Command<Message<I>> {
        if self.is_open() {
            return Command::none();
        }
        self.state = DropdownState::Open;
        self.last_committed = self.selected.get().clone();
        self.focus = Focus::Results;
        self.highlight_selected();
        tracing::debug!(
            selected = self.selected().map(|item| item.display_text()),
            "dropdown opened"
        );

        let focus = if self.search.is_some() {
            Command::after_render(Message::FocusSearch)
        } else {
            tracing::debug!("search disabled, focus steering skipped");
            Command::none()
        };
        Command::batch([Command::message(Message::Opened), focus])
    }

    fn close(&mut self, reason: CloseReason) -> Command<Message<I>> {
        if !self.is_open() {
            return Command::none();
        }
        self.state = DropdownState::Closed;
        self.focus = Focus::Trigger;
        if self.debounce.cancel() {
            tracing::trace!(tag = self.debounce.tag(), "pending filter cancelled");
        }
        self.term.clear();
        if let Some(field) = &mut self.search {
            field.clear();
            field.set_focused(false);
        }
        let rebuilt = self.rebuild();

        let missing = self.selected.get().is_none();
        let restore = match self.last_committed.clone() {
            Some(committed) if missing => {
                tracing::debug!(item = committed.display_text(), "selection restored on close");
                self.assign_selected(Some(committed))
            }
            _ => Command::none(),
        };
        tracing::debug!(?reason, "dropdown closed");
        Command::batch([rebuilt, restore, Command::message(Message::Closed(reason))])
    }

    fn edit_term(&mut self, term: String) -> Command<Message<I>> {
        if let Some(field) = &mut self.search {
            if field.value() != term {
                field.set_value(&term);
            }
        }
        self.term = term;
        let tag = self.debounce.restart();
        tracing::trace!(tag, term = %self.term, "filter debounce restarted");
        Command::none()
    }

    fn debounce_elapsed(&mut self, tag: u64) -> Command<Message<I>> {
        if !self.debounce.fire(tag) {
            tracing::trace!(tag, current = self.debounce.tag(), "stale filter timer ignored");
            return Command::none();
        }
        self.rebuild()
    }

    /// Rebuild the projection with the current term and republish.
    fn rebuild(&mut self) -> Command<Message<I>> {
        self.view
            .rebuild(&self.store, &self.term, self.options.search_enabled);
        self.highlight.set_count(self.view.len());
        self.highlight_selected();
        tracing::debug!(
            term = %self.view.term(),
            visible = self.view.len(),
            "filter applied"
        );

        let rows: Vec<I> = self.view.items(&self.store).cloned().collect();
        let artifact = self.list.set_projection(rows);
        self.list.set_selected(self.selected.get().clone());

        let visibility = self.publish_visibility();
        match artifact {
            Some(change) => Command::batch([
                visibility,
                Command::message(Message::ListChanged(change)),
            ]),
            None => visibility,
        }
    }

    fn highlight_selected(&mut self) {
        let row = self
            .selected
            .get()
            .as_ref()
            .and_then(|item| self.view.position_of(&self.store, item));
        match row {
            Some(row) => self.highlight.select(row),
            None => self.highlight.home(),
        }
    }

    fn pick(&mut self, row: usize) -> Command<Message<I>> {
        if !self.is_open() {
            tracing::trace!(row, "pick ignored while closed");
            return Command::none();
        }
        match self.view.get(&self.store, row).cloned() {
            Some(item) => {
                self.highlight.select(row);
                self.apply_list_change(SelectionChange {
                    added: Some(item),
                    removed: self.selected.get().clone(),
                })
            }
            None => {
                tracing::debug!(row, "pick outside projection reverted");
                self.revert()
            }
        }
    }

    fn apply_list_change(&mut self, change: SelectionChange<I>) -> Command<Message<I>> {
        if !self.is_open() {
            tracing::trace!("list selection change ignored while closed");
            return Command::none();
        }
        if change.is_removal_only() {
            tracing::debug!("filtering artifact reverted");
            return self.revert();
        }
        match change.added {
            Some(item) if self.view.contains(&self.store, &item) => {
                tracing::debug!(item = item.display_text(), "item picked");
                self.last_committed = Some(item.clone());
                self.assign_selected(Some(item))
            }
            Some(item) => {
                tracing::debug!(item = item.display_text(), "stale pick reverted");
                self.revert()
            }
            None => Command::none(),
        }
    }

    fn revert(&mut self) -> Command<Message<I>> {
        let committed = self.last_committed.clone();
        self.assign_selected(committed)
    }

    fn clear_by_user(&mut self) -> Command<Message<I>> {
        tracing::debug!("selection cleared");
        self.last_committed = None;
        self.assign_selected(None)
    }

    /// Set the selection, notifying only when it changed.
    fn assign_selected(&mut self, item: Option<I>) -> Command<Message<I>> {
        self.list.set_selected(item.clone());
        if !self.selected.set(item.clone()) {
            return Command::none();
        }
        Command::batch([
            Command::message(Message::SelectionChanged(item)),
            self.publish_visibility(),
        ])
    }

    fn publish_visibility(&mut self) -> Command<Message<I>> {
        let empty = self.view.is_empty();
        let placeholder = self
            .selected
            .get()
            .as_ref()
            .is_none_or(|item| item.display_text().is_empty());
        let mut changed = self.empty_result_visible.set(empty);
        changed |= self.border_visible.set(!empty);
        changed |= self.placeholder_visible.set(placeholder);
        if changed {
            Command::message(Message::VisibilityChanged(self.visibility()))
        } else {
            Command::none()
        }
    }

    fn focus_search(&mut self) -> Command<Message<I>> {
        if !self.is_open() {
            return Command::none();
        }
        let Some(field) = &mut self.search else {
            tracing::debug!("no search field, focus steering skipped");
            return Command::none();
        };
        field.set_focused(true);
        if self.focus == Focus::SearchField {
            return Command::none();
        }
        self.focus = Focus::SearchField;
        Command::message(Message::FocusRequested(Focus::SearchField))
    }

    fn focus_results(&mut self) -> Command<Message<I>> {
        if let Some(field) = &mut self.search {
            field.set_focused(false);
        }
        if self.focus == Focus::Results {
            return Command::none();
        }
        self.focus = Focus::Results;
        Command::message(Message::FocusRequested(Focus::Results))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message<I>> {
        if !self.is_open() {
            if self.has_focus && self.keys.open.matches(&key) {
                return self.open();
            }
            return Command::none();
        }

        match classify(&key) {
            KeyClass::Escape => {
                if self.keys.dismiss.matches(&key) {
                    self.close(CloseReason::Dismiss)
                } else {
                    Command::none()
                }
            }
            KeyClass::Navigation => {
                let focus = self.focus_results();
                if self.keys.up.matches(&key) {
                    self.highlight.move_up();
                } else if self.keys.down.matches(&key) {
                    self.highlight.move_down();
                } else if self.keys.page_up.matches(&key) {
                    self.highlight.page_up();
                } else if self.keys.page_down.matches(&key) {
                    self.highlight.page_down();
                } else if self.keys.home.matches(&key) {
                    self.highlight.home();
                } else if self.keys.end.matches(&key) {
                    self.highlight.end();
                }
                focus
            }
            KeyClass::Other => {
                if self.keys.commit.matches(&key) {
                    let picked = match self.highlight.cursor() {
                        Some(row) => self.pick(row),
                        None => Command::none(),
                    };
                    return Command::batch([picked, self.close(CloseReason::Commit)]);
                }
                if self.keys.clear.matches(&key) {
                    if self.options.nullable {
                        return self.clear_by_user();
                    }
                    return Command::none();
                }
                let focus = self.focus_search();
                let edited = match &mut self.search {
                    Some(field) => match field.handle_key(key) {
                        Edit::Changed => Some(field.value()),
                        Edit::Moved | Edit::Ignored => None,
                    },
                    None => None,
                };
                match edited {
                    Some(term) => Command::batch([focus, self.edit_term(term)]),
                    None => focus,
                }
            }
        }
    }

    fn view_trigger(&self, frame: &mut Frame, area: Rect) {
        let arrow = if self.is_open() { " ▾" } else { " ▸" };
        let width = (area.width as usize).saturating_sub(display_width(arrow));
        let label = match self.selected() {
            Some(item) if !self.placeholder_visible() => {
                let style = if self.has_focus {
                    self.style.trigger_focused
                } else {
                    self.style.trigger
                };
                Span::styled(pad_to(item.display_text(), width, "…"), style)
            }
            _ => Span::styled(pad_to(&self.options.placeholder, width, "…"), self.style.placeholder),
        };
        let line = Line::from(vec![label, Span::styled(arrow, self.style.arrow)]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn view_overlay(&self, frame: &mut Frame, anchor: Rect) {
        let bordered = self.border_visible();
        let search_rows = u16::from(self.search.is_some());
        let body_rows = if self.view.is_empty() {
            1
        } else {
            self.view.len().min(self.highlight.visible().max(1)) as u16
        };
        let height = search_rows + body_rows + chrome::frame_height(bordered);

        let bounds = frame.area();
        let below = bounds.bottom().saturating_sub(anchor.bottom());
        let above = anchor.y.saturating_sub(bounds.y);
        let overlay = if below >= height || below >= above {
            Rect::new(anchor.x, anchor.bottom(), anchor.width, height.min(below))
        } else {
            let h = height.min(above);
            Rect::new(anchor.x, anchor.y - h, anchor.width, h)
        };
        if overlay.height == 0 || overlay.width < 4 {
            return;
        }

        frame.render_widget(Clear, overlay);
        let block = chrome::dropdown_block(bordered, self.style.border);
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let mut y = inner.y;
        if let Some(field) = &self.search {
            let row = Rect { y, height: 1, ..inner };
            field.view(frame, row, &self.options.search_prompt, &self.style.search);
            y += 1;
        }
        if y >= inner.bottom() {
            return;
        }

        if self.empty_result_visible() {
            let row = Rect { y, height: 1, ..inner };
            let label = pad_to(&self.options.not_found, inner.width as usize, "…");
            frame.render_widget(
                Paragraph::new(Span::styled(label, self.style.not_found)),
                row,
            );
            return;
        }

        let symbol_width = display_width(&self.style.highlight_symbol);
        let blank = " ".repeat(symbol_width);
        let text_width = (inner.width as usize).saturating_sub(symbol_width);
        for (line, row) in self.highlight.window().enumerate() {
            let row_y = y + line as u16;
            if row_y >= inner.bottom() {
                break;
            }
            let Some(item) = self.view.get(&self.store, row) else {
                break;
            };
            let highlighted = self.highlight.cursor() == Some(row);
            let mut style = if highlighted {
                self.style.highlighted
            } else {
                self.style.item
            };
            if self.selected() == Some(item) {
                style = style.patch(self.style.selected);
            }
            let prefix = if highlighted {
                self.style.highlight_symbol.clone()
            } else {
                blank.clone()
            };
            let text = pad_to(item.display_text(), text_width, "…");
            let area = Rect {
                y: row_y,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(text, style),
                ])),
                area,
            );
        }
    }
}

impl<I: Item> Component for SearchableCombo<I> {
    type Message = Message<I>;

    fn update(&mut self, msg: Message<I>) -> Command<Message<I>> {
        match msg {
            Message::Open => self.open(),
            Message::Close(reason) => self.close(reason),
            Message::TermEdited(term) => self.edit_term(term),
            Message::KeyPress(key) => self.handle_key(key),
            Message::Pick(row) => self.pick(row),
            Message::ListChanged(change) => self.apply_list_change(change),
            Message::DebounceElapsed(tag) => self.debounce_elapsed(tag),
            Message::FocusSearch => self.focus_search(),
            Message::SelectionChanged(_)
            | Message::VisibilityChanged(_)
            | Message::FocusRequested(_)
            | Message::Opened
            | Message::Closed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let trigger = Rect { height: 1, ..area };
        self.view_trigger(frame, trigger);
        if self.is_open() {
            self.view_overlay(frame, trigger);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message<I>>> {
        self.debounce
            .subscription(Message::DebounceElapsed)
            .into_iter()
            .collect()
    }

    fn focused(&self) -> bool {
        self.has_focus || self.is_open()
    }
}
