//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board snapshots
//! according to tic-tac-toe rules. Rules are separated from board
//! storage to enable composition into contract systems.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::{Board, GameStatus};

/// Evaluates a board into a [`GameStatus`].
///
/// Win takes precedence over draw; neither makes the game in progress.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
