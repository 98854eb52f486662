//! Time-travel history for tic-tac-toe.
//!
//! A [`Timeline`] owns the ordered sequence of board snapshots and a
//! cursor selecting the displayed one. Transitions are pure: they consume
//! the timeline and return the next value, so a UI can own a single
//! mutable binding and re-render whenever it changes.

use crate::action::Action;
use crate::contracts::{Contract, PlayContract};
use crate::{Board, GameStatus, Player, Position, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered history of board snapshots plus the current-move cursor.
///
/// Invariants maintained by the transitions (see [`crate::invariants`]):
/// - history is never empty, and `boards[0]` is the empty board
/// - adjacent snapshots differ by exactly one placement
/// - the cursor always indexes a snapshot
///
/// Playing from a non-latest cursor discards the snapshots after it
/// before appending ("history rewrite on branch"): the abandoned line of
/// play is not kept as a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Snapshots from game start to latest play.
    pub(crate) boards: Vec<Board>,
    /// Index of the displayed snapshot.
    pub(crate) current: usize,
}

impl Timeline {
    /// Creates a timeline holding a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current: 0,
        }
    }

    /// Applies an action, consuming the timeline and returning the next one.
    ///
    /// This is the single reducer a UI drives: `(State, Action) -> State`.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Play(pos) => self.play(pos),
            Action::JumpTo(index) => self.jump_to(index),
        }
    }

    /// Places the next player's mark at `pos` on the displayed board.
    ///
    /// Invalid plays are ignored: if the square is occupied or the
    /// displayed board already has a winner, the timeline is returned
    /// unchanged. On success the history after the cursor is discarded,
    /// the new snapshot is appended, and the cursor moves to it.
    #[instrument(skip(self), fields(player = %self.next_player(), move_number = self.current))]
    pub fn play(mut self, pos: Position) -> Self {
        // Precondition: Check contract
        if let Err(reason) = PlayContract::pre(&self, &pos) {
            debug!(%reason, "ignoring play");
            return self;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        // Apply: branch-truncate, then append the next snapshot
        let next = self
            .current_board()
            .with(pos, Square::Occupied(self.next_player()));
        self.boards.truncate(self.current + 1);
        self.boards.push(next);
        self.current = self.boards.len() - 1;

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        if let Err(violation) = PlayContract::post(&before, &self) {
            panic!("play postcondition violated: {violation}");
        }

        self
    }

    /// Moves the cursor to the given snapshot index. History is untouched.
    ///
    /// The index must satisfy `index < self.len()`; the UI boundary is
    /// responsible for guarding it.
    #[instrument(skip(self))]
    pub fn jump_to(mut self, index: usize) -> Self {
        debug_assert!(index < self.boards.len(), "jump index out of range");
        self.current = index;
        self
    }

    /// Folds a sequence of plays through the reducer from a fresh timeline.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Self {
        moves.iter().fold(Self::new(), |timeline, pos| {
            timeline.play(*pos)
        })
    }

    /// Returns the currently displayed board.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.current]
    }

    /// Returns the player who moves next from the displayed board.
    ///
    /// X when the cursor is even, O when odd.
    pub fn next_player(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the status of the displayed board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self.current_board())
    }

    /// Returns all snapshots from game start to the latest play.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the cursor: the index of the displayed snapshot.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of snapshots in history.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: history retains at least the empty root board.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
