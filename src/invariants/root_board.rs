//! Root board invariant: history always begins with the empty board.

use super::Invariant;
use crate::{Board, Timeline};

/// Invariant: The first snapshot in history is the all-empty board.
///
/// Jumping to move 0 must always land on a fresh game, and truncation
/// on branching never removes the root (the cursor is a valid index, so
/// the retained prefix always includes snapshot 0).
pub struct RootBoardEmptyInvariant;

impl Invariant<Timeline> for RootBoardEmptyInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.boards().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History begins with the empty board"
    }
}
