//! Retroboard - tic-tac-toe game logic with time-travel move history
//!
//! This library provides the full logical model of a two-player 3x3 game:
//! immutable board snapshots, win and draw detection, and an ordered
//! history of snapshots that supports jumping to any prior move and
//! branching from it.
//!
//! # Architecture
//!
//! - **Timeline**: snapshot history plus the current-move cursor; owns
//!   the two transitions (`play`, `jump_to`) behind a single reducer
//! - **Rules**: pure win/draw evaluation over the 8 fixed lines
//! - **Contracts**: pre/postconditions guarding every play
//! - **Invariants**: first-class, independently testable history properties
//!
//! # Example
//!
//! ```
//! use retroboard::{Action, GameStatus, Player, Position, Timeline};
//!
//! let timeline = Timeline::new()
//!     .reduce(Action::Play(Position::TopLeft))
//!     .reduce(Action::Play(Position::Center));
//!
//! assert_eq!(timeline.len(), 3);
//! assert_eq!(timeline.next_player(), Player::X);
//!
//! // Time travel: jump back to move 1 and branch from there.
//! let branched = timeline
//!     .reduce(Action::JumpTo(1))
//!     .reduce(Action::Play(Position::BottomRight));
//!
//! assert_eq!(branched.len(), 3);
//! assert_eq!(branched.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod position;
mod timeline;
mod types;

// Public module declarations
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Actions
pub use action::{Action, PlayError};

// Crate-level exports - Board coordinates
pub use position::Position;

// Crate-level exports - Timeline
pub use timeline::Timeline;

// Crate-level exports - Domain types
pub use types::{Board, GameStatus, Player, Square};
