use crate::command::{Command, Effect};
use crate::model::Model;
use crate::subscription::SubscriptionId;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::collections::VecDeque;

/// Drives a [`Model`] without a terminal, one turn at a time.
///
/// [`send`](TestProgram::send) runs a single `update` and queues the effects
/// it returns. [`drain_messages`](TestProgram::drain_messages) then plays
/// turns the way the runtime does: immediate messages first, then a
/// simulated frame releases the after-render messages. Timers never fire on
/// their own; deliver their messages with `send`.
///
/// # Example
///
/// ```rust,ignore
/// use sift_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Picker>::new(());
/// prog.send(PickerMsg::Open);
/// prog.drain_messages();
/// assert!(prog.model().combo.is_open());
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    immediate: VecDeque<M::Message>,
    after_render: Vec<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Build the model with [`Model::init`] and queue its command.
    pub fn new(flags: M::Flags) -> Self {
        let (model, cmd) = M::init(flags);
        let mut program = Self {
            model,
            immediate: VecDeque::new(),
            after_render: Vec::new(),
            quit: false,
        };
        program.enqueue(cmd);
        program
    }

    /// Run one `update` with `msg`. The returned effects are queued, not run.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.enqueue(cmd);
    }

    /// Play turns until both queues are empty.
    ///
    /// After-render messages produced during a turn wait for the simulated
    /// frame at the end of that turn, never for the one already in flight.
    pub fn drain_messages(&mut self) {
        loop {
            while let Some(msg) = self.immediate.pop_front() {
                self.send(msg);
            }
            if self.after_render.is_empty() {
                return;
            }
            for msg in std::mem::take(&mut self.after_render) {
                self.send(msg);
            }
        }
    }

    pub fn pending_count(&self) -> usize {
        self.immediate.len()
    }

    /// Messages waiting for the next simulated frame.
    pub fn deferred_count(&self) -> usize {
        self.after_render.len()
    }

    /// Whether any update so far returned [`Command::quit`].
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Identities the runtime would reconcile after the last update.
    ///
    /// Nothing is spawned.
    pub fn subscription_ids(&self) -> Vec<SubscriptionId> {
        self.model
            .subscriptions()
            .iter()
            .map(|sub| sub.id().clone())
            .collect()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Direct access for test setup that bypasses `update`.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Draw the model into a [`TestBackend`] of the given size.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Draw the model and return its cells as text, rows joined by `\n`.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn enqueue(&mut self, cmd: Command<M::Message>) {
        for effect in cmd.into_effects() {
            match effect {
                Effect::Message(msg) => self.immediate.push_back(msg),
                Effect::AfterRender(msg) => self.after_render.push(msg),
                Effect::Quit => self.quit = true,
            }
        }
    }
}
