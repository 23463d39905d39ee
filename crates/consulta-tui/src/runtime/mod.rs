//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! Async account store calls are spawned onto tokio and send their result
//! back through an inbox channel that the runtime drains each frame, so the
//! reducer always runs on the loop thread over the single `AppState`.

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use consulta_core::accounts::FileAccountStore;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::features::auth::SubmitKind;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll duration when idle. Input wakes the loop immediately.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    pub state: AppState,
    /// The account store shared with spawned auth calls.
    store: Arc<FileAccountStore>,
    /// Inbox sender, cloned into spawned tasks.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    /// Inbox receiver, drained each frame.
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl TuiRuntime {
    /// Creates the runtime and takes over the terminal.
    pub fn new(store: Arc<FileAccountStore>) -> Result<Self> {
        // Panic hook must be in place before entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            state: AppState::new(),
            store,
            inbox_tx,
            inbox_rx,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Tick never changes state; everything else may.
                if !matches!(event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(frame, &self.state);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects terminal input and completed async work.
    ///
    /// Blocks on the terminal for up to the idle poll duration; async
    /// results wake the loop no later than the next poll.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Drain inbox first so store results are applied before new input.
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        let poll_duration = if events.is_empty() {
            IDLE_POLL_DURATION
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any buffered events without blocking.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if events.is_empty() {
            events.push(UiEvent::Tick);
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::SpawnRegister {
                generation,
                full_name,
                email,
                password,
            } => {
                let store = Arc::clone(&self.store);
                self.spawn_effect(async move {
                    let outcome = store.register(&full_name, &email, &password).await;
                    UiEvent::Auth(AuthUiEvent::Completed {
                        generation,
                        kind: SubmitKind::Register,
                        outcome,
                    })
                });
            }
            UiEffect::SpawnLogin {
                generation,
                email,
                password,
            } => {
                let store = Arc::clone(&self.store);
                self.spawn_effect(async move {
                    let outcome = store.login(&email, &password).await;
                    UiEvent::Auth(AuthUiEvent::Completed {
                        generation,
                        kind: SubmitKind::Login,
                        outcome,
                    })
                });
            }
        }
    }

    /// Spawns an async effect whose result event lands in the inbox.
    fn spawn_effect<Fut>(&self, fut: Fut)
    where
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let event = fut.await;
            // The runtime may have shut down; nothing to do then.
            let _ = tx.send(event);
        });
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
