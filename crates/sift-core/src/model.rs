use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early side effects.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. External events arrive as messages through [`Subscription`]s.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`].
/// 5. After each render, messages deferred with
///    [`Command::after_render`] are delivered.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`]. Use `()` when none is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    ///
    /// After `update` returns, the runtime re-renders and reconciles
    /// [`subscriptions`](Model::subscriptions).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Should be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions. Called after every update.
    ///
    /// The runtime diffs the returned list against the active set by
    /// [`SubscriptionId`](crate::SubscriptionId): new ones are started and
    /// missing ones are aborted.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
