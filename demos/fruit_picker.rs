//! # Fruit Picker
//!
//! A searchable dropdown over 140 generated items. Open it with Enter, Space
//! or Down, type to filter (the list updates once typing pauses), and pick
//! with Enter. The selection survives any filter.
//!
//! Outside the dropdown: `s` toggles alphabetical order, `c` clears the
//! selection from the host side, Esc or Ctrl+C quits.
//!
//! Tracing output goes to `fruit_picker.log`; set `RUST_LOG=sift_widgets=trace`
//! to watch the debounce and reconciliation decisions.
//!
//! Run with: `cargo run --example fruit_picker`

use sift::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sift::ratatui::layout::{Constraint, Layout};
use sift::ratatui::style::{Color, Modifier, Style};
use sift::ratatui::text::{Line, Span};
use sift::ratatui::widgets::Paragraph;
use sift::ratatui::Frame;
use sift::widgets::combo::{self, ComboOptions, SearchableCombo};
use sift::widgets::{by_display_text, Item};
use sift::{key_presses, Command, Component, Model, Subscription};

const GROUPS: &[&str] = &[
    "Item",
    "Apple",
    "Banana",
    "AppleandBanana",
    "Trees",
    "ATrees",
    "ABTrees",
];

fn generate_items() -> Vec<String> {
    GROUPS
        .iter()
        .flat_map(|group| (1..=20).map(move |i| format!("{group} {i}")))
        .collect()
}

struct FruitPicker {
    fruit: SearchableCombo<String>,
    last_event: String,
}

#[derive(Debug)]
enum Msg {
    /// Every key press; routed in `update` against the current open state.
    Key(KeyEvent),
    Fruit(combo::Message<String>),
    ToggleSort,
    Clear,
    Quit,
}

impl Model for FruitPicker {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut fruit = SearchableCombo::new(generate_items()).with_options(ComboOptions {
            placeholder: "Pick something...".into(),
            nullable: true,
            max_visible: 10,
            ..ComboOptions::default()
        });
        let cmd = fruit.set_focused(true).map(Msg::Fruit);
        (
            FruitPicker {
                fruit,
                last_event: String::new(),
            },
            cmd,
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => self.route_key(key),
            Msg::Fruit(m) => {
                match &m {
                    combo::Message::SelectionChanged(item) => {
                        self.last_event = format!(
                            "selection changed to {}",
                            item.as_ref().map_or("nothing", |item| item.display_text())
                        );
                    }
                    combo::Message::Closed(reason) => {
                        self.last_event = format!("closed ({reason:?})");
                    }
                    _ => {}
                }
                self.fruit.update(m).map(Msg::Fruit)
            }
            Msg::ToggleSort => {
                let comparator = (!self.fruit.store().is_sorted()).then(by_display_text);
                self.fruit.set_comparator(comparator).map(Msg::Fruit)
            }
            Msg::Clear => self.fruit.clear_selection().map(Msg::Fruit),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let [title_area, combo_area, _overlay_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(14),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Fruit Picker",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        let [_, combo_area] =
            Layout::horizontal([Constraint::Length(2), Constraint::Max(40)]).areas(combo_area);
        self.fruit.view(frame, combo_area);

        let selected = self
            .fruit
            .selected()
            .map_or("none", |item| item.display_text());
        let order = if self.fruit.store().is_sorted() {
            "  (sorted)"
        } else {
            ""
        };
        let status = Paragraph::new(vec![
            Line::from(vec![
                Span::raw("Selected: "),
                Span::styled(
                    selected,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    order,
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(Span::styled(
                self.last_event.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(status, status_area);

        let help = if self.fruit.is_open() {
            Line::from(vec![
                Span::styled("Type", Style::default().fg(Color::DarkGray)),
                Span::raw(" to filter  "),
                Span::styled("Up/Down", Style::default().fg(Color::DarkGray)),
                Span::raw(" navigate  "),
                Span::styled("Enter", Style::default().fg(Color::DarkGray)),
                Span::raw(" select  "),
                Span::styled("Del", Style::default().fg(Color::DarkGray)),
                Span::raw(" clear  "),
                Span::styled("Esc", Style::default().fg(Color::DarkGray)),
                Span::raw(" cancel"),
            ])
        } else {
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::DarkGray)),
                Span::raw(" open  "),
                Span::styled("s", Style::default().fg(Color::DarkGray)),
                Span::raw(" sort  "),
                Span::styled("c", Style::default().fg(Color::DarkGray)),
                Span::raw(" clear  "),
                Span::styled("Esc", Style::default().fg(Color::DarkGray)),
                Span::raw(" quit"),
            ])
        };
        frame.render_widget(Paragraph::new(help), help_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![key_presses(Msg::Key)];
        subs.extend(
            self.fruit
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(Msg::Fruit)),
        );
        subs
    }
}

impl FruitPicker {
    /// Host shortcuts apply only while the dropdown is closed; an open
    /// dropdown gets every key except Ctrl+C.
    fn route_key(&mut self, key: KeyEvent) -> Command<Msg> {
        let open = self.fruit.is_open();
        let host = match (key.code, key.modifiers) {
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
            (KeyCode::Esc, _) if !open => Some(Msg::Quit),
            (KeyCode::Char('s'), KeyModifiers::NONE) if !open => Some(Msg::ToggleSort),
            (KeyCode::Char('c'), KeyModifiers::NONE) if !open => Some(Msg::Clear),
            _ => None,
        };
        match host {
            Some(msg) => self.update(msg),
            None => self.update(Msg::Fruit(combo::Message::KeyPress(key))),
        }
    }
}

#[sift::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log = std::fs::File::create("fruit_picker.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::sync::Mutex::new(log))
        .with_ansi(false)
        .init();

    let picker = sift::run::<FruitPicker>(()).await?;
    tracing::info!(
        selected = picker.fruit.selected().map(|item| item.display_text()),
        "picker closed"
    );
    Ok(())
}
