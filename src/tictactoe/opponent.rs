//! Random computer opponent

use rand::{Rng, prelude::IndexedRandom};

use super::board::Board;

/// Computer opponent that picks uniformly among empty cells
///
/// Randomness is injected rather than drawn from a process-wide source, so
/// games are reproducible under a seeded generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOpponent;

impl RandomOpponent {
    pub fn new() -> Self {
        Self
    }

    /// Choose a move among the empty cells
    ///
    /// # Errors
    ///
    /// Returns `NoMovesAvailable` on a full board. Callers that check for a
    /// draw before asking for a move never hit this.
    pub fn choose_move<R: Rng>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<(usize, usize), crate::Error> {
        board
            .empty_cells()
            .choose(rng)
            .copied()
            .ok_or(crate::Error::NoMovesAvailable)
    }
}
