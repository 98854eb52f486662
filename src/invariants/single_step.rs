//! Single-step invariant: adjacent snapshots differ by exactly one placement.

use super::Invariant;
use crate::{Player, Position, Square, Timeline};

/// Invariant: Each snapshot extends its predecessor by exactly one mark.
///
/// For every adjacent pair in history, exactly one square changes, it
/// changes from `Empty` to `Occupied`, and the mark belongs to the player
/// whose turn it was at that step (X on even step indices).
pub struct SingleStepInvariant;

impl Invariant<Timeline> for SingleStepInvariant {
    fn holds(timeline: &Timeline) -> bool {
        for (step, pair) in timeline.boards().windows(2).enumerate() {
            let (before, after) = (&pair[0], &pair[1]);
            let expected = if step % 2 == 0 { Player::X } else { Player::O };

            let mut changed = 0;
            for pos in Position::ALL {
                match (before.get(pos), after.get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(player)) if player == expected => {
                        changed += 1;
                    }
                    _ => return false,
                }
            }

            if changed != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by exactly one parity-correct placement"
    }
}
