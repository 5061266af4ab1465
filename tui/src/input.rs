//! Input handling for the roller TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use roller_types::{LetterSource, Presenter, Visibility};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// What the landing screen does with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Visibility(Visibility),
    TogglePause,
    Redraw,
}

/// Result of draining the input queue for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOutcome {
    pub quit: bool,
    pub redraw: bool,
}

/// Maps a terminal event to an [`Action`].
///
/// Focus reporting stands in for page visibility: a terminal that lost focus
/// is treated as hidden.
#[must_use]
pub fn classify(ev: &Event) -> Option<Action> {
    match ev {
        Event::FocusLost => Some(Action::Visibility(Visibility::Hidden)),
        Event::FocusGained => Some(Action::Visibility(Visibility::Visible)),
        Event::Resize(..) => Some(Action::Redraw),
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        Event::Key(KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            kind: KeyEventKind::Press,
            ..
        }) => Some(Action::Quit),
        Event::Key(KeyEvent {
            code: KeyCode::Char('p' | ' '),
            kind: KeyEventKind::Press,
            ..
        }) => Some(Action::TogglePause),
        _ => None,
    }
}

/// Applies an action to the presenter. Returns whether the screen is stale.
pub fn apply<S: LetterSource>(presenter: &mut Presenter<S>, action: Action) -> bool {
    match action {
        Action::Quit => false,
        Action::Visibility(visibility) => {
            let changed = presenter.set_visibility(visibility);
            if changed {
                debug!(?visibility, index = presenter.index(), "Visibility changed");
            }
            changed
        }
        Action::TogglePause => {
            if presenter.is_running() {
                presenter.stop();
                debug!("Rotation paused");
            } else {
                presenter.start();
                debug!("Rotation resumed");
            }
            true
        }
        Action::Redraw => true,
    }
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    /// Spawns the blocking poll loop. Must be called inside a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drains pending terminal events into the presenter.
pub fn handle_events<S: LetterSource>(
    presenter: &mut Presenter<S>,
    input: &mut InputPump,
) -> Result<InputOutcome> {
    let mut outcome = InputOutcome::default();
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        let Some(action) = classify(&ev) else {
            continue;
        };
        if action == Action::Quit {
            outcome.quit = true;
            break;
        }
        outcome.redraw |= apply(presenter, action);
    }
    Ok(outcome)
}
