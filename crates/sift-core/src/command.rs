/// A side effect returned from [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// A command is an ordered list of [`Effect`]s. The runtime delivers
/// [`Effect::Message`]s in order before anything is drawn, holds
/// [`Effect::AfterRender`]s until the next frame is on screen, and stops the
/// program on [`Effect::Quit`].
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Tell the parent something happened:
/// let cmd = Command::message(Msg::Opened);
///
/// // Move focus once the overlay has been drawn:
/// let cmd = Command::after_render(Msg::FocusSearch);
///
/// // Both, in that order:
/// let cmd = Command::batch([
///     Command::message(Msg::Opened),
///     Command::after_render(Msg::FocusSearch),
/// ]);
/// ```
#[must_use = "commands do nothing unless returned to the runtime"]
pub struct Command<Msg: Send + 'static> {
    effects: Vec<Effect<Msg>>,
}

/// One unit of work inside a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<Msg> {
    /// Deliver a message in the current turn.
    Message(Msg),
    /// Deliver a message after the frame that follows the current turn.
    AfterRender(Msg),
    /// Stop the program once the current turn is processed.
    Quit,
}

impl<Msg> Effect<Msg> {
    fn map<NewMsg>(self, f: &impl Fn(Msg) -> NewMsg) -> Effect<NewMsg> {
        match self {
            Effect::Message(msg) => Effect::Message(f(msg)),
            Effect::AfterRender(msg) => Effect::AfterRender(f(msg)),
            Effect::Quit => Effect::Quit,
        }
    }
}

impl<Msg: Send + 'static> Command<Msg> {
    pub fn none() -> Self {
        Command {
            effects: Vec::new(),
        }
    }

    /// Deliver `msg` in the current turn, before the next frame.
    pub fn message(msg: Msg) -> Self {
        Command {
            effects: vec![Effect::Message(msg)],
        }
    }

    /// Deliver `msg` at low priority, after the runtime has drawn the frame
    /// that follows the current update.
    ///
    /// Use this for requests that only make sense once the view reflects the
    /// new state, such as moving input focus into a freshly opened overlay.
    pub fn after_render(msg: Msg) -> Self {
        Command {
            effects: vec![Effect::AfterRender(msg)],
        }
    }

    pub fn quit() -> Self {
        Command {
            effects: vec![Effect::Quit],
        }
    }

    /// Concatenate commands, keeping the order of their effects.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        Command {
            effects: cmds.into_iter().flat_map(|cmd| cmd.effects).collect(),
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(self, f: impl Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        Command {
            effects: self.effects.into_iter().map(|e| e.map(&f)).collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn effects(&self) -> &[Effect<Msg>] {
        &self.effects
    }

    pub fn into_effects(self) -> Vec<Effect<Msg>> {
        self.effects
    }

    /// The immediate messages this command delivers, in order.
    ///
    /// Deferred messages and quit contribute nothing.
    pub fn into_messages(self) -> Vec<Msg> {
        self.effects
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::Message(msg) => Some(msg),
                Effect::AfterRender(_) | Effect::Quit => None,
            })
            .collect()
    }

    /// The messages held back until after the next frame, in order.
    pub fn into_deferred(self) -> Vec<Msg> {
        self.effects
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::AfterRender(msg) => Some(msg),
                Effect::Message(_) | Effect::Quit => None,
            })
            .collect()
    }
}

impl<Msg: Send + 'static> Default for Command<Msg> {
    fn default() -> Self {
        Command::none()
    }
}

impl<Msg: Send + 'static + std::fmt::Debug> std::fmt::Debug for Command<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.effects).finish()
    }
}
