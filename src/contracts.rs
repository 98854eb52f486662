//! Contract-based validation for timeline transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::PlayError;
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::{Position, Timeline, rules};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlayError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), PlayError>;
}

/// Precondition: The square at the play's position must be empty
/// on the currently displayed board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the square on the current board.
    #[instrument(skip(timeline))]
    pub fn check(pos: Position, timeline: &Timeline) -> Result<(), PlayError> {
        if !timeline.current_board().is_empty(pos) {
            Err(PlayError::SquareOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The currently displayed board must not already have a winner.
///
/// Branching makes this board-local: a line of play that ended in a win
/// rejects further plays, but jumping to an earlier snapshot and playing
/// from there is allowed.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks for a winner on the current board.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), PlayError> {
        if rules::check_winner(timeline.current_board()).is_some() {
            Err(PlayError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A play is legal if the square is empty and
/// the displayed board has no winner.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(timeline))]
    pub fn check(pos: Position, timeline: &Timeline) -> Result<(), PlayError> {
        GameNotOver::check(timeline)?;
        SquareIsEmpty::check(pos, timeline)?;
        Ok(())
    }
}

/// Contract for play actions.
///
/// Preconditions:
/// - Displayed board has no winner
/// - Target square is empty
///
/// Postconditions:
/// - History still begins with the empty board
/// - Adjacent snapshots still differ by one parity-correct placement
/// - Cursor still indexes a snapshot
pub struct PlayContract;

impl Contract<Timeline, Position> for PlayContract {
    fn pre(timeline: &Timeline, pos: &Position) -> Result<(), PlayError> {
        LegalPlay::check(*pos, timeline)
    }

    fn post(_before: &Timeline, after: &Timeline) -> Result<(), PlayError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PlayError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
