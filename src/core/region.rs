//! Region module - connected-region search over the grid
//!
//! All three searches here are iterative breadth-first traversals over the
//! shared adjacency rule in [`topology`](crate::core::topology). BFS keeps
//! memory use proportional to the search frontier instead of the recursion
//! depth, which matters on large sparse grids. The visited set is a flat
//! boolean vector keyed by the grid's row-major index.

use std::collections::VecDeque;

use crate::core::grid::Grid;
use crate::core::topology::neighbors;
use crate::types::{Coord, Topology};

#[inline]
fn flat(cols: usize, coord: Coord) -> usize {
    coord.row as usize * cols + coord.col as usize
}

/// Find the maximal connected region of same-colored cells containing `seed`
///
/// An empty or out-of-bounds seed yields an empty region. That is the common
/// no-op path (miss-shots, hover previews over gaps), not an error; callers
/// check the size before acting. The result is a set in traversal order:
/// re-running from any member of the same region yields the same set.
pub fn find_region(grid: &Grid, topology: Topology, seed: Coord) -> Vec<Coord> {
    let Some(color) = grid.get(seed) else {
        return Vec::new();
    };

    let cols = grid.cols() as usize;
    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    let mut region = Vec::new();

    visited[flat(cols, seed)] = true;
    queue.push_back(seed);
    region.push(seed);

    while let Some(at) = queue.pop_front() {
        for next in neighbors(topology, at) {
            // Covers out-of-bounds, empty, and color mismatch in one probe
            if grid.get(next) != Some(color) {
                continue;
            }
            let idx = flat(cols, next);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            queue.push_back(next);
            region.push(next);
        }
    }

    region
}

/// Mark every occupied cell transitively connected to an occupied top-row
/// cell, ignoring color
///
/// The returned mask is keyed by row-major index. Occupied cells left
/// unmarked are unsupported and fall during ceiling-disconnect gravity.
pub fn anchored_cells(grid: &Grid, topology: Topology) -> Vec<bool> {
    let cols = grid.cols() as usize;
    let mut anchored = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();

    for col in 0..grid.cols() {
        let coord = Coord::new(0, col as i16);
        if grid.is_occupied(coord) {
            anchored[flat(cols, coord)] = true;
            queue.push_back(coord);
        }
    }

    while let Some(at) = queue.pop_front() {
        for next in neighbors(topology, at) {
            if !grid.is_occupied(next) {
                continue;
            }
            let idx = flat(cols, next);
            if anchored[idx] {
                continue;
            }
            anchored[idx] = true;
            queue.push_back(next);
        }
    }

    anchored
}

/// Check whether any same-color region of at least `min` cells exists
///
/// Scans every occupied cell but shares one visited set across seeds, so
/// each cell is expanded at most once, and returns as soon as a qualifying
/// region is found.
pub fn has_region_of_size(grid: &Grid, topology: Topology, min: usize) -> bool {
    if min == 0 {
        return true;
    }

    let cols = grid.cols() as usize;
    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();

    for seed in grid.coords() {
        let Some(color) = grid.get(seed) else {
            continue;
        };
        let seed_idx = flat(cols, seed);
        if visited[seed_idx] {
            continue;
        }

        visited[seed_idx] = true;
        queue.clear();
        queue.push_back(seed);
        let mut size = 1usize;
        if size >= min {
            return true;
        }

        while let Some(at) = queue.pop_front() {
            for next in neighbors(topology, at) {
                if grid.get(next) != Some(color) {
                    continue;
                }
                let idx = flat(cols, next);
                if visited[idx] {
                    continue;
                }
                visited[idx] = true;
                queue.push_back(next);
                size += 1;
                if size >= min {
                    return true;
                }
            }
        }
    }

    false
}
