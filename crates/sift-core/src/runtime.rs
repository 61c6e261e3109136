use crate::command::{Command, Effect};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{self, stderr, stdout, Stderr, Stdout, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Where the UI is drawn.
///
/// Switch to [`Stderr`](OutputTarget::Stderr) when stdout is piped, so the
/// picker draws on the terminal while the chosen value flows through the pipe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

enum Output {
    Stdout(Stdout),
    Stderr(Stderr),
}

impl Output {
    fn new(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout(stdout()),
            OutputTarget::Stderr => Output::Stderr(stderr()),
        }
    }

    fn inner(&mut self) -> &mut dyn Write {
        match self {
            Output::Stdout(w) => w,
            Output::Stderr(w) => w,
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner().flush()
    }
}

/// Errors from setting up, drawing to, or restoring the terminal.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Runtime settings for a [`Program`].
///
/// Override only what you need with struct update syntax:
///
/// ```rust,ignore
/// use sift_core::{OutputTarget, ProgramOptions};
///
/// let opts = ProgramOptions {
///     output: OutputTarget::Stderr,
///     alt_screen: false,
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Frame rate cap, clamped to 1..=120. Deferred messages are released
    /// once per drawn frame, so this also bounds focus-steering latency.
    pub fps: u32,
    /// Draw on the alternate screen.
    pub alt_screen: bool,
    /// Deliver pastes as one event instead of a burst of key presses.
    pub bracketed_paste: bool,
    /// Terminal window title.
    pub title: Option<String>,
    /// Restore the terminal before a panic message is printed.
    pub catch_panics: bool,
    /// End the program on SIGINT.
    pub handle_signals: bool,
    pub output: OutputTarget,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            bracketed_paste: true,
            title: None,
            catch_panics: true,
            handle_signals: true,
            output: OutputTarget::default(),
        }
    }
}

/// Runs a [`Model`] against a real terminal.
///
/// Work happens in turns. A turn starts with one message from a
/// subscription, runs `update` for it and for every immediate message that
/// cascades from it, then reconciles subscriptions once. The next frame tick
/// draws the view if any turn ran, and only then are the messages deferred
/// with [`Command::after_render`] released, each starting a turn of its own.
///
/// # Example
///
/// ```rust,ignore
/// use sift_core::{Program, ProgramError};
///
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let picker = Program::<Picker>::new(())?.run().await?;
///     println!("{:?}", picker.chosen());
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Output>>,
    inbox: mpsc::UnboundedReceiver<M::Message>,
    after_render: Vec<M::Message>,
    subscriptions: SubscriptionManager<M::Message>,
    options: ProgramOptions,
    dirty: bool,
    quitting: bool,
}

impl<M: Model> Program<M> {
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Fails if the terminal cannot be put into raw mode.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (tx, inbox) = mpsc::unbounded_channel();
        let (model, init) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            inbox,
            after_render: Vec::new(),
            subscriptions: SubscriptionManager::new(tx),
            options,
            dirty: true,
            quitting: false,
        };
        tracing::debug!(fps = program.options.fps, "program initialized");
        program.settle(init);
        Ok(program)
    }

    /// Run until a quit effect or SIGINT and hand back the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;

        tracing::debug!("shutting down");
        self.subscriptions.shutdown();
        restore_terminal(self.options.alt_screen, self.options.output)?;
        result.map(|()| self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.draw()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frames = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(fps)));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let handle_signals = self.options.handle_signals;

        while !self.quitting {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    tracing::debug!("interrupted");
                    break;
                }

                Some(msg) = self.inbox.recv() => self.turn(msg),

                _ = frames.tick() => {
                    if self.dirty {
                        self.draw()?;
                        for msg in std::mem::take(&mut self.after_render) {
                            self.turn(msg);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn turn(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.settle(cmd);
    }

    /// Apply `cmd`, run every immediate message it cascades into, then
    /// reconcile subscriptions against the settled model.
    fn settle(&mut self, cmd: Command<M::Message>) {
        let mut ready = VecDeque::new();
        self.apply(cmd, &mut ready);
        while let Some(msg) = ready.pop_front() {
            let cmd = self.model.update(msg);
            self.apply(cmd, &mut ready);
        }
        self.subscriptions.reconcile(self.model.subscriptions());
        self.dirty = true;
    }

    fn apply(&mut self, cmd: Command<M::Message>, ready: &mut VecDeque<M::Message>) {
        for effect in cmd.into_effects() {
            match effect {
                Effect::Message(msg) => ready.push_back(msg),
                Effect::AfterRender(msg) => self.after_render.push(msg),
                Effect::Quit => {
                    tracing::debug!("quit requested");
                    self.quitting = true;
                }
            }
        }
    }

    fn draw(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| self.model.view(frame))?;
        self.dirty = false;
        Ok(())
    }
}

fn init_terminal(
    options: &ProgramOptions,
) -> Result<Terminal<CrosstermBackend<Output>>, ProgramError> {
    if options.catch_panics {
        install_panic_hook(options.alt_screen, options.output);
    }

    enable_raw_mode()?;
    let mut out = Output::new(options.output);
    if options.alt_screen {
        execute!(out, EnterAlternateScreen)?;
    }
    if options.bracketed_paste {
        execute!(out, EnableBracketedPaste)?;
    }
    if let Some(title) = &options.title {
        execute!(out, SetTitle(title))?;
    }
    execute!(out, cursor::Hide)?;

    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

fn install_panic_hook(alt_screen: bool, output: OutputTarget) {
    static INSTALLED: std::sync::Once = std::sync::Once::new();
    INSTALLED.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal(alt_screen, output);
            previous(info);
        }));
    });
}

/// Undo [`init_terminal`]. Every step runs; only a raw-mode failure is
/// reported.
fn restore_terminal(alt_screen: bool, output: OutputTarget) -> Result<(), std::io::Error> {
    let raw = disable_raw_mode();
    let mut out = Output::new(output);
    execute!(out, DisableBracketedPaste).ok();
    execute!(out, cursor::Show).ok();
    if alt_screen {
        execute!(out, LeaveAlternateScreen).ok();
    }
    raw
}
