use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use super::machine::{PanelMachine, PanelState};
use crate::error::PanelError;
use crate::resolver::{Resolution, TermResolver};

/// Delay between the last selection event and reading the selection.
pub const SELECTION_SETTLE_DELAY: Duration = Duration::from_millis(100);

const EVENT_BUFFER: usize = 32;

/// Host input to a panel session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// The selection changed to this text.
    Selection(String),
    /// The "Explain" button was pressed.
    Activate,
    /// The close control was pressed.
    Close,
    Escape,
    OutsideClick,
}

/// Runs a [`PanelMachine`] in a background task.
pub struct PanelSession {
    resolver: Arc<TermResolver>,
}

impl PanelSession {
    pub fn new(resolver: Arc<TermResolver>) -> Self {
        Self { resolver }
    }

    /// Start the session task. It runs until every [`PanelHandle`] sender
    /// is dropped.
    pub fn spawn(self) -> PanelHandle {
        let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
        let (state_tx, state_rx) = watch::channel(PanelState::Idle);
        let task = tokio::spawn(self.run(events_rx, state_tx));

        PanelHandle {
            events: events_tx,
            state: state_rx,
            task,
        }
    }

    async fn run(
        self,
        mut events_rx: mpsc::Receiver<PanelEvent>,
        state_tx: watch::Sender<PanelState>,
    ) {
        let mut machine = PanelMachine::new();
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(u64, Resolution)>();
        let mut pending_selection: Option<(String, Instant)> = None;

        loop {
            let settle_at = pending_selection
                .as_ref()
                .map(|(_, at)| *at)
                .unwrap_or_else(Instant::now);

            tokio::select! {
                event = events_rx.recv() => {
                    let Some(event) = event else {
                        debug!("Panel session shutting down");
                        break;
                    };
                    match event {
                        PanelEvent::Selection(text) => {
                            pending_selection = Some((text, Instant::now() + SELECTION_SETTLE_DELAY));
                        }
                        PanelEvent::Activate => {
                            if let Some(request) = machine.activate(Instant::now()) {
                                let resolver = self.resolver.clone();
                                let done_tx = done_tx.clone();
                                tokio::spawn(async move {
                                    let resolution = resolver.resolve(request.term.display()).await;
                                    let _ = done_tx.send((request.generation, resolution));
                                });
                            }
                        }
                        PanelEvent::Close => machine.close(),
                        PanelEvent::Escape => {
                            machine.escape();
                        }
                        PanelEvent::OutsideClick => {
                            machine.outside_click(Instant::now());
                        }
                    }
                }
                Some((generation, resolution)) = done_rx.recv() => {
                    if !machine.complete(generation, resolution) {
                        debug!(generation, "Discarding result for a closed panel");
                    }
                }
                _ = sleep_until(settle_at), if pending_selection.is_some() => {
                    if let Some((text, _)) = pending_selection.take() {
                        if let Err(e) = machine.on_selection(&text) {
                            debug!("Selection ignored: {}", e);
                        }
                    }
                }
            }

            state_tx.send_if_modified(|state| {
                if *state == *machine.state() {
                    false
                } else {
                    *state = machine.state().clone();
                    true
                }
            });
        }
    }
}

/// Host side of a running [`PanelSession`].
pub struct PanelHandle {
    events: mpsc::Sender<PanelEvent>,
    state: watch::Receiver<PanelState>,
    task: JoinHandle<()>,
}

impl PanelHandle {
    pub async fn send(&self, event: PanelEvent) -> Result<(), PanelError> {
        self.events
            .send(event)
            .await
            .map_err(|_| PanelError::SessionClosed)
    }

    /// Current state snapshot.
    pub fn state(&self) -> PanelState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<PanelState> {
        self.state.clone()
    }

    /// Wait until the state satisfies `predicate`.
    pub async fn wait_for<F>(&self, predicate: F) -> Result<PanelState, PanelError>
    where
        F: FnMut(&PanelState) -> bool,
    {
        let mut rx = self.state.clone();
        let state = rx
            .wait_for(predicate)
            .await
            .map_err(|_| PanelError::SessionClosed)?;
        Ok(state.clone())
    }

    /// Stop the session and wait for its task to finish. In-flight
    /// resolutions are left to complete on their own.
    pub async fn shutdown(self) {
        drop(self.events);
        let _ = self.task.await;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
