use std::time::Duration;

use tokio::time::Instant;

use princex_protocols::{Term, TermError};

use crate::resolver::Resolution;

/// Outside clicks within this window after opening a panel are ignored.
pub const OPEN_GUARD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Idle,
    /// The "Explain" affordance is offered for `term`.
    ButtonShown { term: Term },
    /// A resolution for `term` is in flight.
    PanelLoading {
        term: Term,
        generation: u64,
        opened_at: Instant,
    },
    PanelShown {
        resolution: Resolution,
        generation: u64,
        opened_at: Instant,
    },
}

impl PanelState {
    pub fn is_idle(&self) -> bool {
        matches!(self, PanelState::Idle)
    }

    /// Whether a panel (loading or shown) is open.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            PanelState::PanelLoading { .. } | PanelState::PanelShown { .. }
        )
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            PanelState::PanelLoading { generation, .. }
            | PanelState::PanelShown { generation, .. } => Some(*generation),
            _ => None,
        }
    }
}

/// Work the host must perform after activation: resolve `term` and hand the
/// result back with `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub generation: u64,
    pub term: Term,
}

/// Panel lifecycle owned by a single host.
#[derive(Debug, Default)]
pub struct PanelMachine {
    state: PanelState,
    next_generation: u64,
}

impl PanelMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// A selection settled. A valid one replaces whatever is showing with a
    /// fresh button; anything else tears down to idle.
    pub fn on_selection(&mut self, text: &str) -> Result<(), TermError> {
        match Term::from_selection(text) {
            Ok(term) => {
                self.state = PanelState::ButtonShown { term };
                Ok(())
            }
            Err(e) => {
                self.state = PanelState::Idle;
                Err(e)
            }
        }
    }

    /// The button was pressed. Opens a loading panel and returns the
    /// resolution to start; `None` unless a button is showing.
    pub fn activate(&mut self, now: Instant) -> Option<ResolveRequest> {
        let term = match &self.state {
            PanelState::ButtonShown { term } => term.clone(),
            _ => return None,
        };

        self.next_generation += 1;
        let generation = self.next_generation;
        self.state = PanelState::PanelLoading {
            term: term.clone(),
            generation,
            opened_at: now,
        };
        Some(ResolveRequest { generation, term })
    }

    /// A resolution finished. Returns `false` if it belongs to a panel that
    /// is no longer current.
    pub fn complete(&mut self, generation: u64, resolution: Resolution) -> bool {
        let opened_at = match &self.state {
            PanelState::PanelLoading {
                generation: current,
                opened_at,
                ..
            } if *current == generation => *opened_at,
            _ => return false,
        };

        self.state = PanelState::PanelShown {
            resolution,
            generation,
            opened_at,
        };
        true
    }

    pub fn close(&mut self) {
        self.state = PanelState::Idle;
    }

    /// Escape dismisses the button or panel. Returns whether anything was
    /// showing.
    pub fn escape(&mut self) -> bool {
        let was_showing = !self.state.is_idle();
        self.close();
        was_showing
    }

    /// A click landed outside the panel. Ignored while the panel is inside
    /// its open guard; returns whether the click dismissed something.
    pub fn outside_click(&mut self, now: Instant) -> bool {
        match &self.state {
            PanelState::Idle => false,
            PanelState::ButtonShown { .. } => {
                self.close();
                true
            }
            PanelState::PanelLoading { opened_at, .. }
            | PanelState::PanelShown { opened_at, .. } => {
                if now.saturating_duration_since(*opened_at) < OPEN_GUARD {
                    false
                } else {
                    self.close();
                    true
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod tests;
