//! Terminal-state check - win and loss detection after each turn

use crate::core::grid::Grid;
use crate::core::region::has_region_of_size;
use crate::types::{TerminalState, Topology};

/// Loss rule per variant
///
/// The bubble shooter has no board-driven loss; its misses and ceiling
/// overflow are tracked by the host, outside this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossRule {
    None,
    /// Game over once no same-color region of the match threshold remains
    NoMovesLeft,
}

/// Classify the grid after a completed turn
///
/// An empty grid wins even though it trivially also has no moves, so the
/// win check runs first.
pub fn check(grid: &Grid, topology: Topology, loss: LossRule, min_size: usize) -> TerminalState {
    if grid.is_cleared() {
        return TerminalState::LevelComplete;
    }

    match loss {
        LossRule::None => TerminalState::Playing,
        LossRule::NoMovesLeft => {
            if has_region_of_size(grid, topology, min_size) {
                TerminalState::Playing
            } else {
                TerminalState::GameOver
            }
        }
    }
}
