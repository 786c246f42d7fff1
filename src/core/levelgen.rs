//! Level generation - seeds initial grids for both matching variants
//!
//! The session consumes grids as opaque input, so generation lives here as
//! its own collaborator. Everything is driven by [`SimpleRng`], making a
//! level fully reproducible from its seed.

use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::types::{Color, Coord, BUBBLE_COLOR_COUNT};

/// Base fill chance for blaster grids, in percent
const BLASTER_FILL_PCT: u32 = 70;

/// Fill chance for bubble grids, in percent
const BUBBLE_FILL_PCT: u32 = 80;

/// Difficulty stops scaling past this level
const MAX_DIFFICULTY: u32 = 20;

/// Bubble field starts at this many rows and grows with the level
const BUBBLE_BASE_ROWS: u32 = 8;
const BUBBLE_MAX_ROWS: u32 = 15;

/// Generate a blaster grid for the given level
///
/// Density and the size of the color pool both grow with difficulty, then a
/// few same-color 2x2 groups are stamped at random positions so the level
/// always opens with at least one legal move.
pub fn blaster_grid(rows: u16, cols: u16, level: u32, rng: &mut SimpleRng) -> Grid {
    let difficulty = level.min(MAX_DIFFICULTY);
    let fill_pct = BLASTER_FILL_PCT + difficulty;
    let color_count = (3 + difficulty / 5).min(Color::ALL.len() as u32);

    let mut grid = Grid::new(rows, cols);
    for coord in grid.coords().collect::<Vec<_>>() {
        if rng.chance(fill_pct) {
            let color = Color::ALL[rng.next_range(color_count) as usize];
            grid.set(coord, Some(color));
        }
    }

    stamp_guaranteed_groups(&mut grid, level, rng);
    grid
}

/// Stamp `max(2, level / 10)` same-color 2x2 groups at random interior
/// positions, the solvability heuristic of the blaster variant
fn stamp_guaranteed_groups(grid: &mut Grid, level: u32, rng: &mut SimpleRng) {
    let (rows, cols) = grid.dimensions();
    if rows < 2 || cols < 2 {
        return;
    }

    let groups = (level / 10).max(2);
    for _ in 0..groups {
        let row = rng.next_range(rows as u32 - 1) as i16;
        let col = rng.next_range(cols as u32 - 1) as i16;
        let color = Color::ALL[rng.next_range(3) as usize];

        grid.set(Coord::new(row, col), Some(color));
        grid.set(Coord::new(row, col + 1), Some(color));
        grid.set(Coord::new(row + 1, col), Some(color));
        grid.set(Coord::new(row + 1, col + 1), Some(color));
    }
}

/// Generate a bubble field for the given level
///
/// Rows grow from eight toward fifteen as levels advance. Odd rows hold one
/// bubble fewer than even rows, matching the staggered layout the offset
/// topology expects; the trailing cell of each odd row stays empty.
pub fn bubble_grid(cols: u16, level: u32, rng: &mut SimpleRng) -> Grid {
    let rows = (BUBBLE_BASE_ROWS + level / 5).min(BUBBLE_MAX_ROWS) as u16;

    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        let row_cols = cols - (row % 2);
        for col in 0..row_cols {
            if rng.chance(BUBBLE_FILL_PCT) {
                let color = Color::ALL[rng.next_range(BUBBLE_COLOR_COUNT as u32) as usize];
                grid.set(Coord::new(row as i16, col as i16), Some(color));
            }
        }
    }

    grid
}
