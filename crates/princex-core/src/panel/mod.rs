//! Explain-panel lifecycle.
//!
//! [`PanelMachine`] holds the state transitions and is driven synchronously;
//! [`PanelSession`] wraps one in a task that applies the selection settle
//! delay and runs resolutions in the background.

mod machine;
mod session;

pub use machine::{PanelMachine, PanelState, ResolveRequest, OPEN_GUARD};
pub use session::{PanelEvent, PanelHandle, PanelSession, SELECTION_SETTLE_DELAY};
