//! First-class action types for the time-travel reducer.
//!
//! Actions are domain events, not side effects. They represent the
//! user's intent and can be validated independently of execution.

use crate::Position;
use serde::{Deserialize, Serialize};

/// An action applied to a [`crate::Timeline`].
///
/// Actions are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next player's mark at a position on the current board.
    Play(Position),
    /// Move the history cursor to the given snapshot index.
    JumpTo(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(pos) => write!(f, "play {}", pos.label()),
            Action::JumpTo(index) => write!(f, "jump to move #{index}"),
        }
    }
}

/// Why a play was rejected.
///
/// Rejected plays are ignored rather than surfaced to callers; this type
/// exists so contract checks can name the reason in logs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The currently displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for PlayError {}
