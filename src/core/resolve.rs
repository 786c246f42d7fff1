//! Match resolution - decides whether a found region clears and scores it

use crate::core::grid::Grid;
use crate::core::scoring::{match_score, ScoreRules};
use crate::types::Coord;

/// Result of resolving a region against the match threshold
///
/// Most turns take the no-op path: `removed` is false and nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    pub removed: bool,
    pub score_delta: u32,
    /// Coordinates cleared by this match, empty when nothing was removed
    pub cleared: Vec<Coord>,
}

/// Clear a qualifying region and compute its score delta
///
/// Regions below `min_size` leave the grid untouched and score nothing;
/// that is the expected result of most clicks and shots, not an error.
/// A qualifying region is cleared in full before this returns, so callers
/// never observe a partially-removed match.
pub fn resolve(
    grid: &mut Grid,
    region: Vec<Coord>,
    min_size: usize,
    rules: ScoreRules,
    level: u32,
) -> MatchOutcome {
    if region.len() < min_size {
        return MatchOutcome::default();
    }

    for &coord in &region {
        grid.set(coord, None);
    }

    MatchOutcome {
        removed: true,
        score_delta: match_score(rules, region.len(), level),
        cleared: region,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::region::find_region;
    use crate::types::{Color, Topology};

    fn l_shaped_grid() -> Grid {
        let mut grid = Grid::new(4, 4);
        grid.set(Coord::new(0, 0), Some(Color::Red));
        grid.set(Coord::new(0, 1), Some(Color::Red));
        grid.set(Coord::new(1, 0), Some(Color::Red));
        grid
    }

    #[test]
    fn test_resolve_below_threshold_is_noop() {
        let mut grid = l_shaped_grid();
        let region = find_region(&grid, Topology::Square, Coord::new(0, 0));

        let outcome = resolve(&mut grid, region, 4, ScoreRules::per_cell(10), 1);
        assert!(!outcome.removed);
        assert_eq!(outcome.score_delta, 0);
        assert!(outcome.cleared.is_empty());
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn test_resolve_clears_qualifying_region() {
        let mut grid = l_shaped_grid();
        let region = find_region(&grid, Topology::Square, Coord::new(0, 0));

        let outcome = resolve(&mut grid, region, 2, ScoreRules::per_cell(10), 1);
        assert!(outcome.removed);
        assert_eq!(outcome.cleared.len(), 3);
        assert_eq!(outcome.score_delta, 30);
        assert!(grid.is_cleared());
    }

    #[test]
    fn test_resolve_empty_region() {
        let mut grid = l_shaped_grid();
        let outcome = resolve(&mut grid, Vec::new(), 2, ScoreRules::per_cell(10), 1);
        assert!(!outcome.removed);
        assert_eq!(grid.occupied_count(), 3);
    }
}
