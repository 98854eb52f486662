//! Cursor bounds invariant: the current move always indexes a snapshot.

use super::Invariant;
use crate::Timeline;

/// Invariant: History is non-empty and the cursor is a valid index.
///
/// `current < boards.len()` must hold after every transition, including
/// branching plays that truncate the future.
pub struct CursorInBoundsInvariant;

impl Invariant<Timeline> for CursorInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        !timeline.boards().is_empty() && timeline.current() < timeline.boards().len()
    }

    fn description() -> &'static str {
        "Cursor indexes a snapshot in non-empty history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_timeline_holds() {
        let timeline = Timeline::new();
        assert!(CursorInBoundsInvariant::holds(&timeline));
    }

    #[test]
    fn test_holds_after_truncating_play() {
        let timeline = Timeline::new()
            .play(Position::TopLeft)
            .play(Position::Center)
            .play(Position::TopRight)
            .play(Position::MiddleLeft)
            .jump_to(1)
            .play(Position::BottomRight);
        assert!(CursorInBoundsInvariant::holds(&timeline));
        assert_eq!(timeline.current(), timeline.len() - 1);
    }

    #[test]
    fn test_stale_cursor_violates() {
        let mut timeline = Timeline::new().play(Position::Center);
        timeline.current = 5;
        assert!(!CursorInBoundsInvariant::holds(&timeline));
    }
}
