//! End-to-end behavior of the searchable dropdown, driven through the
//! headless runtime with a host model that records every notification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use sift_core::testing::TestProgram;
use sift_core::{Command, Component, Model, Subscription};
use sift_widgets::combo::{self, CloseReason, ComboOptions, Focus, SearchableCombo, Visibility};
use sift_widgets::{
    by_display_text, ListSelection, SelectableList, SelectionChange, SelectionError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn dataset() -> Vec<String> {
    [
        "Item",
        "Apple",
        "Banana",
        "AppleandBanana",
        "Trees",
        "ATrees",
        "ABTrees",
    ]
    .iter()
    .flat_map(|group| (1..=20).map(move |i| format!("{group} {i}")))
    .collect()
}

struct Host {
    combo: SearchableCombo<String>,
    selections: Vec<Option<String>>,
    visibility: Vec<Visibility>,
    focus_moves: Vec<Focus>,
    closed: Vec<CloseReason>,
    last_error: Option<SelectionError>,
}

enum Msg {
    Combo(combo::Message<String>),
    SetSource(Vec<String>),
    Sort(bool),
    Select(String),
    ClearSelection,
}

impl Model for Host {
    type Message = Msg;
    type Flags = SearchableCombo<String>;

    fn init(combo: SearchableCombo<String>) -> (Self, Command<Msg>) {
        let mut combo = combo;
        let cmd = combo.set_focused(true).map(Msg::Combo);
        (
            Host {
                combo,
                selections: Vec::new(),
                visibility: Vec::new(),
                focus_moves: Vec::new(),
                closed: Vec::new(),
                last_error: None,
            },
            cmd,
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Combo(m) => {
                match &m {
                    combo::Message::SelectionChanged(item) => self.selections.push(item.clone()),
                    combo::Message::VisibilityChanged(v) => self.visibility.push(*v),
                    combo::Message::FocusRequested(f) => self.focus_moves.push(*f),
                    combo::Message::Closed(reason) => self.closed.push(*reason),
                    _ => {}
                }
                self.combo.update(m).map(Msg::Combo)
            }
            Msg::SetSource(items) => self.combo.set_source(items, None).map(Msg::Combo),
            Msg::Sort(on) => self
                .combo
                .set_comparator(on.then(by_display_text))
                .map(Msg::Combo),
            Msg::Select(item) => match self.combo.set_selected(item) {
                Ok(cmd) => cmd.map(Msg::Combo),
                Err(err) => {
                    self.last_error = Some(err);
                    Command::none()
                }
            },
            Msg::ClearSelection => self.combo.clear_selection().map(Msg::Combo),
        }
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        self.combo.view(frame, Rect { height: 1, ..area });
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        self.combo
            .subscriptions()
            .into_iter()
            .map(|sub| sub.map(Msg::Combo))
            .collect()
    }
}

fn program() -> TestProgram<Host> {
    program_with(SearchableCombo::new(dataset()))
}

fn program_with(combo: SearchableCombo<String>) -> TestProgram<Host> {
    let mut prog = TestProgram::<Host>::new(combo);
    prog.drain_messages();
    prog
}

fn send(prog: &mut TestProgram<Host>, msg: combo::Message<String>) {
    prog.send(Msg::Combo(msg));
    prog.drain_messages();
}

fn host(prog: &mut TestProgram<Host>, msg: Msg) {
    prog.send(msg);
    prog.drain_messages();
}

fn press(prog: &mut TestProgram<Host>, code: KeyCode) {
    send(
        prog,
        combo::Message::KeyPress(KeyEvent::new(code, KeyModifiers::NONE)),
    );
}

fn type_text(prog: &mut TestProgram<Host>, text: &str) {
    for c in text.chars() {
        press(prog, KeyCode::Char(c));
    }
}

/// Deliver the pending debounce timer, as the runtime would after the delay.
fn fire_debounce(prog: &mut TestProgram<Host>) {
    let tag = prog.model().combo.debounce().tag();
    send(prog, combo::Message::DebounceElapsed(tag));
}

fn projection(prog: &TestProgram<Host>) -> Vec<String> {
    prog.model().combo.projection().cloned().collect()
}

fn selected(prog: &TestProgram<Host>) -> Option<String> {
    prog.model().combo.selected().cloned()
}

fn group(name: &str) -> Vec<String> {
    (1..=20).map(|i| format!("{name} {i}")).collect()
}

#[test]
fn filtering_is_case_insensitive_substring_in_source_order() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    type_text(&mut prog, "aPPle");
    fire_debounce(&mut prog);

    let mut expected = group("Apple");
    expected.extend(group("AppleandBanana"));
    assert_eq!(projection(&prog), expected);
}

#[test]
fn empty_term_shows_everything_in_comparator_order() {
    let mut prog = program();
    assert_eq!(projection(&prog), dataset());

    host(&mut prog, Msg::Sort(true));
    let shown = projection(&prog);
    assert_eq!(shown.len(), 140);
    assert_eq!(shown[0], "ABTrees 1");
    assert_eq!(shown[1], "ABTrees 10");

    host(&mut prog, Msg::Sort(false));
    assert_eq!(projection(&prog), dataset());
}

#[test]
fn comparator_change_keeps_the_term() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    type_text(&mut prog, "trees 1");
    fire_debounce(&mut prog);
    host(&mut prog, Msg::Sort(true));

    assert_eq!(prog.model().combo.term(), "trees 1");
    let shown = projection(&prog);
    assert!(shown.iter().all(|s| s.to_lowercase().contains("trees 1")));
    assert_eq!(shown.first().map(String::as_str), Some("ABTrees 1"));
}

#[test]
fn rebuilding_the_same_term_is_idempotent() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    send(&mut prog, combo::Message::TermEdited("Banana".into()));
    fire_debounce(&mut prog);
    let first = projection(&prog);

    send(&mut prog, combo::Message::TermEdited("Banana".into()));
    fire_debounce(&mut prog);
    assert_eq!(projection(&prog), first);
    assert_eq!(first.len(), 40);
}

#[test]
fn selection_survives_filtering_and_close() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    // "Apple 3" sits after the 20 "Item" rows.
    send(&mut prog, combo::Message::Pick(22));
    assert_eq!(selected(&prog).as_deref(), Some("Apple 3"));

    type_text(&mut prog, "Banana");
    fire_debounce(&mut prog);
    assert!(!projection(&prog).contains(&"Apple 3".to_string()));
    assert_eq!(selected(&prog).as_deref(), Some("Apple 3"));

    press(&mut prog, KeyCode::Esc);
    assert!(!prog.model().combo.is_open());
    assert_eq!(selected(&prog).as_deref(), Some("Apple 3"));
    assert_eq!(projection(&prog).len(), 140);
    assert_eq!(prog.model().combo.term(), "");
}

#[test]
fn typing_burst_coalesces_into_one_rebuild() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    let before = prog.model().combo.filter().revision();

    let mut tags = Vec::new();
    let mut ids = Vec::new();
    for term in ["A", "Ap", "App"] {
        send(&mut prog, combo::Message::TermEdited(term.into()));
        tags.push(prog.model().combo.debounce().tag());
        ids.push(prog.subscription_ids());
    }
    // One live timer at a time, re-keyed by every edit.
    assert!(ids.iter().all(|set| set.len() == 1));
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_eq!(prog.model().combo.filter().revision(), before);

    for stale in &tags[..2] {
        send(&mut prog, combo::Message::DebounceElapsed(*stale));
    }
    assert_eq!(prog.model().combo.filter().revision(), before);

    send(&mut prog, combo::Message::DebounceElapsed(tags[2]));
    assert_eq!(prog.model().combo.filter().revision(), before + 1);
    assert_eq!(prog.model().combo.filter().term(), "app");
    assert!(prog.subscription_ids().is_empty());
}

#[test]
fn no_match_shows_not_found_and_hides_border() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    type_text(&mut prog, "zzz");
    fire_debounce(&mut prog);

    let combo = &prog.model().combo;
    assert!(combo.filter().is_empty());
    assert!(combo.empty_result_visible());
    assert!(!combo.border_visible());
    assert_eq!(
        prog.model().visibility.last(),
        Some(&Visibility {
            empty_result: true,
            border: false,
            placeholder: true,
        })
    );

    let screen = prog.render_string(30, 6);
    assert!(screen.contains("No results found"));
    assert!(!screen.contains('╭'));

    press(&mut prog, KeyCode::Esc);
    assert!(!prog.model().combo.empty_result_visible());
    assert!(prog.model().combo.border_visible());
}

#[test]
fn filtering_artifact_reverts_to_last_committed() {
    let mut prog = program();
    host(&mut prog, Msg::Select("Apple 1".into()));
    assert_eq!(prog.model().selections, vec![Some("Apple 1".to_string())]);

    send(&mut prog, combo::Message::Open);
    send(&mut prog, combo::Message::TermEdited("Banana".into()));
    fire_debounce(&mut prog);

    assert_eq!(selected(&prog).as_deref(), Some("Apple 1"));
    // The list dropped its row, but no deselection reached the host.
    assert_eq!(prog.model().combo.list().selected(), None);
    assert_eq!(prog.model().selections.len(), 1);

    send(&mut prog, combo::Message::Close(CloseReason::Dismiss));
    assert_eq!(selected(&prog).as_deref(), Some("Apple 1"));
    assert_eq!(
        prog.model().combo.list().selected().map(String::as_str),
        Some("Apple 1")
    );
}

#[test]
fn dismissal_without_pick_restores_the_value_captured_at_open() {
    let mut prog = program();
    host(&mut prog, Msg::Select("Trees 5".into()));
    send(&mut prog, combo::Message::Open);
    assert_eq!(
        prog.model().combo.last_committed().map(String::as_str),
        Some("Trees 5")
    );

    type_text(&mut prog, "ABT");
    fire_debounce(&mut prog);
    press(&mut prog, KeyCode::Down);
    press(&mut prog, KeyCode::Down);
    press(&mut prog, KeyCode::Esc);

    assert_eq!(selected(&prog).as_deref(), Some("Trees 5"));
    assert_eq!(prog.model().closed, vec![CloseReason::Dismiss]);
}

#[test]
fn stale_pick_is_reverted() {
    let mut prog = program();
    host(&mut prog, Msg::Select("Banana 2".into()));
    send(&mut prog, combo::Message::Open);
    type_text(&mut prog, "Trees");
    fire_debounce(&mut prog);

    // A click that was aimed at the unfiltered list arrives late.
    send(
        &mut prog,
        combo::Message::ListChanged(SelectionChange {
            added: Some("Item 4".into()),
            removed: None,
        }),
    );
    assert_eq!(selected(&prog).as_deref(), Some("Banana 2"));
    send(&mut prog, combo::Message::Pick(500));
    assert_eq!(selected(&prog).as_deref(), Some("Banana 2"));
}

#[test]
fn enter_picks_the_highlighted_row_and_closes() {
    let mut prog = program();
    press(&mut prog, KeyCode::Enter);
    assert!(prog.model().combo.is_open());

    type_text(&mut prog, "atrees 1");
    fire_debounce(&mut prog);
    press(&mut prog, KeyCode::Down);
    press(&mut prog, KeyCode::Enter);

    assert!(!prog.model().combo.is_open());
    assert_eq!(selected(&prog).as_deref(), Some("ATrees 10"));
    assert_eq!(prog.model().closed, vec![CloseReason::Commit]);
    assert_eq!(
        prog.model().selections,
        vec![Some("ATrees 10".to_string())]
    );
}

#[test]
fn reopening_highlights_the_selected_row() {
    let mut prog = program();
    host(&mut prog, Msg::Select("Apple 5".into()));
    send(&mut prog, combo::Message::Open);
    assert_eq!(
        prog.model().combo.highlighted().map(String::as_str),
        Some("Apple 5")
    );
}

#[test]
fn open_moves_focus_to_search_after_render() {
    let mut prog = program();
    prog.send(Msg::Combo(combo::Message::Open));
    assert_eq!(prog.deferred_count(), 1);
    assert_eq!(prog.model().combo.focus(), Focus::Results);
    prog.drain_messages();
    assert_eq!(prog.model().combo.focus(), Focus::SearchField);
    assert_eq!(prog.model().focus_moves, vec![Focus::SearchField]);

    // The request is dropped if the dropdown closed before the frame.
    send(&mut prog, combo::Message::Close(CloseReason::Dismiss));
    prog.send(Msg::Combo(combo::Message::Open));
    prog.send(Msg::Combo(combo::Message::Close(CloseReason::Dismiss)));
    prog.drain_messages();
    assert_eq!(prog.model().combo.focus(), Focus::Trigger);
    assert_eq!(prog.model().focus_moves, vec![Focus::SearchField]);
}

#[test]
fn arrows_and_escape_skip_focus_steering() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    press(&mut prog, KeyCode::Down);
    assert_eq!(prog.model().combo.focus(), Focus::Results);

    press(&mut prog, KeyCode::Backspace);
    assert_eq!(prog.model().combo.focus(), Focus::SearchField);
    assert_eq!(
        prog.model().focus_moves,
        vec![Focus::SearchField, Focus::Results, Focus::SearchField]
    );
}

#[test]
fn home_and_end_stay_in_the_search_field_while_arrows_navigate() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    type_text(&mut prog, "an");
    let tag = prog.model().combo.debounce().tag();

    press(&mut prog, KeyCode::Home);
    assert_eq!(prog.model().combo.focus(), Focus::SearchField);
    assert_eq!(prog.model().combo.debounce().tag(), tag);
    press(&mut prog, KeyCode::Char('B'));
    press(&mut prog, KeyCode::End);
    press(&mut prog, KeyCode::Char('a'));
    assert_eq!(prog.model().combo.term(), "Bana");
    fire_debounce(&mut prog);

    let highlighted = prog.model().combo.highlighted().cloned();
    press(&mut prog, KeyCode::Left);
    assert_eq!(prog.model().combo.focus(), Focus::Results);
    assert_eq!(prog.model().combo.highlighted().cloned(), highlighted);

    send(
        &mut prog,
        combo::Message::KeyPress(KeyEvent::new(KeyCode::End, KeyModifiers::CONTROL)),
    );
    assert_eq!(
        prog.model().combo.highlighted().map(String::as_str),
        Some("AppleandBanana 20")
    );
}

#[test]
fn disabled_search_ignores_the_term_and_skips_focus() {
    let mut prog = program_with(SearchableCombo::new(dataset()).with_options(ComboOptions {
        search_enabled: false,
        ..ComboOptions::default()
    }));
    send(&mut prog, combo::Message::Open);
    assert_eq!(prog.model().combo.focus(), Focus::Results);
    assert!(prog.model().focus_moves.is_empty());

    send(&mut prog, combo::Message::TermEdited("Banana".into()));
    fire_debounce(&mut prog);
    assert_eq!(projection(&prog).len(), 140);
}

#[test]
fn close_cancels_the_pending_filter() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    type_text(&mut prog, "Ban");
    let tag = prog.model().combo.debounce().tag();
    press(&mut prog, KeyCode::Esc);
    let revision = prog.model().combo.filter().revision();

    send(&mut prog, combo::Message::DebounceElapsed(tag));
    assert_eq!(prog.model().combo.filter().revision(), revision);
    assert_eq!(projection(&prog).len(), 140);
}

#[test]
fn removal_while_closed_is_ignored() {
    let mut prog = program();
    host(&mut prog, Msg::Select("Item 2".into()));
    send(
        &mut prog,
        combo::Message::ListChanged(SelectionChange {
            added: None,
            removed: Some("Item 2".into()),
        }),
    );
    assert_eq!(selected(&prog).as_deref(), Some("Item 2"));
}

#[test]
fn nullable_delete_clears_without_restore() {
    let mut prog = program_with(SearchableCombo::new(dataset()).with_options(ComboOptions {
        nullable: true,
        ..ComboOptions::default()
    }));
    host(&mut prog, Msg::Select("Trees 1".into()));
    send(&mut prog, combo::Message::Open);
    press(&mut prog, KeyCode::Delete);
    assert_eq!(selected(&prog), None);
    press(&mut prog, KeyCode::Esc);
    assert_eq!(selected(&prog), None);
    assert!(prog.model().combo.placeholder_visible());
}

#[test]
fn host_can_clear_and_rejects_unknown_items() {
    let mut prog = program();
    host(&mut prog, Msg::Select("Durian".into()));
    assert_eq!(prog.model().last_error, Some(SelectionError::NotACandidate));
    assert_eq!(selected(&prog), None);

    host(&mut prog, Msg::Select("Banana 9".into()));
    send(&mut prog, combo::Message::Open);
    host(&mut prog, Msg::ClearSelection);
    send(&mut prog, combo::Message::Close(CloseReason::Dismiss));
    assert_eq!(selected(&prog), None);
    assert_eq!(
        prog.model().selections,
        vec![Some("Banana 9".to_string()), None]
    );
}

#[test]
fn new_source_is_filtered_with_the_current_term() {
    let mut prog = program();
    send(&mut prog, combo::Message::Open);
    type_text(&mut prog, "pie");
    fire_debounce(&mut prog);
    assert!(projection(&prog).is_empty());

    host(
        &mut prog,
        Msg::SetSource(vec!["Apple pie".into(), "Kiwi".into(), "Pieris".into()]),
    );
    assert_eq!(projection(&prog), vec!["Apple pie", "Pieris"]);
    assert!(!prog.model().combo.empty_result_visible());
}

#[test]
fn new_source_dropping_the_selection_while_open_keeps_it() {
    let mut prog = program();
    host(&mut prog, Msg::Select("Banana 3".into()));
    send(&mut prog, combo::Message::Open);
    type_text(&mut prog, "Banana");
    fire_debounce(&mut prog);
    assert!(prog.model().combo.list().selected().is_some());

    host(&mut prog, Msg::SetSource(vec!["Kiwi".into(), "Mango".into()]));
    assert!(prog.model().combo.is_open());
    assert_eq!(selected(&prog).as_deref(), Some("Banana 3"));
    assert!(prog.model().combo.filter().is_empty());
    assert!(prog.model().combo.empty_result_visible());
    assert_eq!(prog.model().selections, vec![Some("Banana 3".to_string())]);
}

#[test]
fn term_edited_while_closed_filters_after_the_delay() {
    let mut prog = program();
    send(&mut prog, combo::Message::TermEdited("trees".into()));
    assert!(!prog.model().combo.is_open());
    assert!(prog.model().combo.debounce().is_pending());
    assert_eq!(prog.subscription_ids().len(), 1);
    assert_eq!(projection(&prog).len(), 140);

    let revision = prog.model().combo.filter().revision();
    fire_debounce(&mut prog);
    assert_eq!(prog.model().combo.filter().revision(), revision + 1);
    assert!(prog.subscription_ids().is_empty());

    let mut expected = group("Trees");
    expected.extend(group("ATrees"));
    expected.extend(group("ABTrees"));
    assert_eq!(projection(&prog), expected);
}

#[test]
fn empty_candidate_set_shows_not_found_without_border() {
    let mut prog = program_with(SearchableCombo::new(Vec::<String>::new()));
    assert!(prog.model().combo.empty_result_visible());
    assert!(!prog.model().combo.border_visible());

    send(&mut prog, combo::Message::Open);
    assert!(projection(&prog).is_empty());
    assert!(prog.model().combo.empty_result_visible());
    assert!(!prog.model().combo.border_visible());
}

struct CountingList {
    inner: ListSelection<String>,
    rebuilds: Arc<AtomicUsize>,
}

impl SelectableList<String> for CountingList {
    fn projection(&self) -> &[String] {
        self.inner.projection()
    }

    fn set_projection(&mut self, items: Vec<String>) -> Option<SelectionChange<String>> {
        self.rebuilds.fetch_add(1, Ordering::SeqCst);
        self.inner.set_projection(items)
    }

    fn selected(&self) -> Option<&String> {
        self.inner.selected()
    }

    fn set_selected(&mut self, item: Option<String>) -> Option<SelectionChange<String>> {
        self.inner.set_selected(item)
    }
}

#[test]
fn custom_list_receives_every_projection() {
    let rebuilds = Arc::new(AtomicUsize::new(0));
    let list = CountingList {
        inner: ListSelection::new(),
        rebuilds: rebuilds.clone(),
    };
    let mut prog = program_with(SearchableCombo::new(dataset()).with_list(Box::new(list)));
    let start = rebuilds.load(Ordering::SeqCst);

    send(&mut prog, combo::Message::Open);
    type_text(&mut prog, "Trees");
    fire_debounce(&mut prog);
    assert_eq!(rebuilds.load(Ordering::SeqCst), start + 1);
    assert_eq!(prog.model().combo.list().projection().len(), 60);
}

#[test]
fn renders_placeholder_and_open_list() {
    let mut prog = program_with(SearchableCombo::new(dataset()).with_options(ComboOptions {
        placeholder: "Pick a fruit".into(),
        ..ComboOptions::default()
    }));
    let closed = prog.render_string(30, 12);
    assert!(closed.lines().next().is_some_and(|l| l.contains("Pick a fruit")));

    send(&mut prog, combo::Message::Open);
    let open = prog.render_string(30, 12);
    assert!(open.contains("▸ Item 1"));
    assert!(open.contains("Item 8"));
    assert!(!open.contains("Item 9"));
    assert!(open.contains('╭'));
}

/// Two dropdowns side by side, each with its own pending filter.
struct Pair {
    left: SearchableCombo<String>,
    right: SearchableCombo<String>,
}

enum PairMsg {
    Left(combo::Message<String>),
    Right(combo::Message<String>),
}

impl Model for Pair {
    type Message = PairMsg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<PairMsg>) {
        (
            Pair {
                left: SearchableCombo::new(group("Apple")),
                right: SearchableCombo::new(group("Banana")),
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: PairMsg) -> Command<PairMsg> {
        match msg {
            PairMsg::Left(m) => self.left.update(m).map(PairMsg::Left),
            PairMsg::Right(m) => self.right.update(m).map(PairMsg::Right),
        }
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        self.left.view(frame, Rect { height: 1, ..area });
    }

    fn subscriptions(&self) -> Vec<Subscription<PairMsg>> {
        let left = self.left.subscriptions().into_iter().map(|s| s.map(PairMsg::Left));
        let right = self.right.subscriptions().into_iter().map(|s| s.map(PairMsg::Right));
        left.chain(right).collect()
    }
}

#[test]
fn sibling_dropdowns_run_separate_filter_timers() {
    let mut prog = TestProgram::<Pair>::new(());
    prog.send(PairMsg::Left(combo::Message::TermEdited("1".into())));
    prog.send(PairMsg::Right(combo::Message::TermEdited("2".into())));
    prog.drain_messages();
    assert_eq!(
        prog.model().left.debounce().tag(),
        prog.model().right.debounce().tag()
    );

    let ids = prog.subscription_ids();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    let right_tag = prog.model().right.debounce().tag();
    prog.send(PairMsg::Right(combo::Message::DebounceElapsed(right_tag)));
    prog.drain_messages();
    assert_eq!(prog.subscription_ids(), vec![ids[0].clone()]);
    assert_eq!(prog.model().right.projection().count(), 3);
    assert_eq!(prog.model().left.projection().count(), 20);
}
