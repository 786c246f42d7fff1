//! Grid module - manages cell occupancy and color per coordinate
//!
//! Dimensions vary by level, so storage is a flat `Vec` in row-major order
//! rather than a fixed array. Row 0 is the top of the play area; the bubble
//! variant anchors to it and the blaster variants settle away from it.
//! Out-of-bounds reads return empty rather than failing, which keeps
//! neighbor probing at the edges free of special cases.

use crate::types::{Cell, Coord};

/// The play grid: `rows x cols` cells, each empty or holding a color
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid with the given dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    /// Build a grid from row slices; short rows pad with empty cells on the
    /// right (the staggered bubble layout stores one cell fewer on odd rows)
    pub fn from_rows(rows: &[Vec<Cell>]) -> Self {
        let row_count = rows.len() as u16;
        let col_count = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u16;
        let mut grid = Self::new(row_count, col_count);
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                grid.set(Coord::new(r as i16, c as i16), *cell);
            }
        }
        grid
    }

    /// Calculate flat index from a coordinate, `None` when out of bounds
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < 0
            || coord.col < 0
            || coord.row as u16 >= self.rows
            || coord.col as u16 >= self.cols
        {
            return None;
        }
        Some(coord.row as usize * self.cols as usize + coord.col as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Total number of cells, occupied or not
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Cell at the coordinate; empty for out-of-bounds reads
    pub fn get(&self, coord: Coord) -> Cell {
        self.index(coord).and_then(|idx| self.cells[idx])
    }

    /// Write a cell (occupancy and color change together)
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if the coordinate is within bounds and filled
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True once every cell is empty (the win condition)
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Iterate all coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let rows = self.rows;
        let cols = self.cols;
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r as i16, c as i16)))
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
