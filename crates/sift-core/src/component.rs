use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives the area to draw into, so a parent
/// decides where each child renders.
///
/// # Composition pattern
///
/// Wrap the child's message type in a parent variant and lift commands and
/// subscriptions with `map`:
///
/// ```rust,ignore
/// use sift_core::{Command, Component, Model, Subscription};
/// use sift_widgets::combo::{self, SearchableCombo};
///
/// struct App { fruit: SearchableCombo<String> }
///
/// enum Msg { Fruit(combo::Message<String>) }
///
/// impl Model for App {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         let fruit = SearchableCombo::new(vec!["Apple".to_string(), "Banana".to_string()]);
///         (App { fruit }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Fruit(m) => self.fruit.update(m).map(Msg::Fruit),
///         }
///     }
///
///     fn view(&self, frame: &mut ratatui::Frame) {
///         self.fruit.view(frame, frame.area());
///     }
///
///     fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///         self.fruit
///             .subscriptions()
///             .into_iter()
///             .map(|sub| sub.map(Msg::Fruit))
///             .collect()
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The parent should call [`.map()`](Command::map) to lift the returned
    /// command into its own message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area` of the [`Frame`].
    ///
    /// Overlays (such as an open dropdown) may draw outside `area`, below or
    /// above it, as long as they stay within the frame.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The parent collects these into its own
    /// [`Model::subscriptions`](crate::Model::subscriptions), mapping messages
    /// appropriately. Defaults to none.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently wants keyboard input.
    fn focused(&self) -> bool {
        false
    }
}
