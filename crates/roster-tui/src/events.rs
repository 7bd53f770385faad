//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the tick cadence, and results of async tasks delivered through the inbox.

use crossterm::event::Event;
use roster_core::network::NetworkStatus;
use roster_core::users::User;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Render cadence tick.
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
    /// User-list fetch outcome, tagged with the session that started it.
    UsersLoaded {
        session_key: u64,
        result: Result<Vec<User>, String>,
    },
    /// The fetch was cancelled before it finished.
    UsersCancelled { session_key: u64 },
    NetworkChecked(NetworkStatus),
}
