//! Gravity module - re-settles the grid after a match is removed
//!
//! Two settling modes exist. Rectangular grids drop cells straight down
//! within their column; the offset grid instead removes every cell no
//! longer connected to the ceiling. The blaster variant additionally
//! closes fully-empty columns so the play area keeps no dead gaps.

use crate::core::grid::Grid;
use crate::core::region::anchored_cells;
use crate::types::{Cell, Coord, Topology};

/// Settling rule applied after each resolved match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityRule {
    /// Cells fall to the bottom of their column; optionally shift empty
    /// columns closed afterwards
    DropToFloor { compact_columns: bool },
    /// Cells disconnected from the top row are removed (and scored as a
    /// bonus by the session)
    DropUnanchored,
}

/// Settle every column so its occupied cells sit contiguously on the floor
///
/// The relative top-to-bottom order of cells within a column never changes,
/// and running this twice in a row is a no-op the second time.
pub fn drop_to_floor(grid: &mut Grid) {
    let (rows, cols) = grid.dimensions();
    for col in 0..cols {
        // Collect occupied cells bottom-up, then rewrite the column from
        // the floor with the same ordering
        let mut stack: Vec<Cell> = Vec::with_capacity(rows as usize);
        for row in (0..rows).rev() {
            let cell = grid.get(Coord::new(row as i16, col as i16));
            if cell.is_some() {
                stack.push(cell);
            }
        }
        let mut settled = stack.into_iter();
        for row in (0..rows).rev() {
            let cell = settled.next().flatten();
            grid.set(Coord::new(row as i16, col as i16), cell);
        }
    }
}

/// Remove every occupied cell with no path to an occupied top-row cell
///
/// Uses the same adjacency machinery as region search, ignoring color.
/// Returns the removed coordinates so the session can award the per-cell
/// bonus and notify the renderer which cells fell.
pub fn drop_unanchored(grid: &mut Grid, topology: Topology) -> Vec<Coord> {
    let anchored = anchored_cells(grid, topology);
    let cols = grid.cols() as usize;
    let mut dropped = Vec::new();

    for coord in grid.coords() {
        if !grid.is_occupied(coord) {
            continue;
        }
        if !anchored[coord.row as usize * cols + coord.col as usize] {
            grid.set(coord, None);
            dropped.push(coord);
        }
    }

    dropped
}

/// Shift columns left over fully-empty ones, preserving column order
///
/// A single pass, not iterated: gravity has already settled each column,
/// so one sweep closes every gap. Returns the number of columns removed.
pub fn compact_columns(grid: &mut Grid) -> u16 {
    let (rows, cols) = grid.dimensions();
    let mut write_col: u16 = 0;

    for read_col in 0..cols {
        let occupied =
            (0..rows).any(|row| grid.is_occupied(Coord::new(row as i16, read_col as i16)));
        if !occupied {
            continue;
        }
        if write_col != read_col {
            for row in 0..rows {
                let cell = grid.get(Coord::new(row as i16, read_col as i16));
                grid.set(Coord::new(row as i16, write_col as i16), cell);
                grid.set(Coord::new(row as i16, read_col as i16), None);
            }
        }
        write_col += 1;
    }

    cols - write_col
}
