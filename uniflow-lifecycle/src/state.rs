//! The lifecycle state enumeration and its transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The states an application instance moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// Constructed, nothing started yet.
    Created,
    /// Warm-up in progress.
    Initializing,
    /// Warm-up finished, not yet running.
    Ready,
    /// Actively running.
    Running,
    /// Suspended, resumable.
    Paused,
    /// Warm-up or runtime failure; retryable via `initialize`.
    Error,
    /// Terminal. No transition leaves this state.
    Destroyed,
}

impl LifecycleState {
    /// Whether the table allows moving from `self` to `next`.
    ///
    /// `Destroyed` is reachable from everywhere and is terminal.
    #[must_use]
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        match self {
            Created => matches!(next, Initializing | Destroyed),
            Initializing => matches!(next, Ready | Error | Destroyed),
            Ready => matches!(next, Running | Destroyed),
            Running => matches!(next, Paused | Destroyed),
            Paused => matches!(next, Running | Destroyed),
            Error => matches!(next, Destroyed | Initializing),
            Destroyed => false,
        }
    }

    /// Ready or Running.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Ready | Self::Running)
    }

    /// Exactly the Error state.
    #[must_use]
    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    /// Exactly the Destroyed state.
    #[must_use]
    pub fn is_destroyed(self) -> bool {
        self == Self::Destroyed
    }

    /// All states, in declaration order. Useful for table-driven tests.
    #[must_use]
    pub const fn all() -> [LifecycleState; 7] {
        use LifecycleState::*;
        [Created, Initializing, Ready, Running, Paused, Error, Destroyed]
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "Created",
            Self::Initializing => "Initializing",
            Self::Ready => "Ready",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::Error => "Error",
            Self::Destroyed => "Destroyed",
        };
        f.write_str(name)
    }
}
