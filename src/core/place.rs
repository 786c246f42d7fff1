//! Placement variant - piece shapes, placement checks, and line clears
//!
//! The drag-placement game drops multi-cell pieces onto a fixed 10x10 grid.
//! Full rows and full columns both clear, pieces come in dealt rounds of
//! three, and the round is lost once no unused piece fits anywhere. Only
//! the grid logic lives here; dragging and previews are the host's concern.

use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{placement_line_score, placement_target};
use crate::types::{Color, Coord, TerminalState, PLACEMENT_SIZE, ROUND_PIECES};

/// Piece shapes as (row, col) offsets from the placement origin
///
/// Singles, lines up to length five, Ls, squares, Ts, and Zs.
const SHAPES: [&[(i8, i8)]; 27] = [
    // Single block
    &[(0, 0)],
    // Line pieces
    &[(0, 0), (0, 1)],
    &[(0, 0), (1, 0)],
    &[(0, 0), (0, 1), (0, 2)],
    &[(0, 0), (1, 0), (2, 0)],
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
    // L shapes
    &[(0, 0), (0, 1), (1, 0)],
    &[(0, 0), (1, 0), (1, 1)],
    &[(0, 0), (0, 1), (1, 1)],
    &[(0, 1), (1, 0), (1, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 0)],
    &[(0, 0), (1, 0), (1, 1), (1, 2)],
    &[(0, 2), (1, 0), (1, 1), (1, 2)],
    &[(0, 0), (0, 1), (0, 2), (1, 2)],
    // Squares
    &[(0, 0), (0, 1), (1, 0), (1, 1)],
    &[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ],
    // T shapes
    &[(0, 0), (0, 1), (0, 2), (1, 1)],
    &[(0, 1), (1, 0), (1, 1), (2, 1)],
    &[(0, 1), (1, 0), (1, 1), (1, 2)],
    &[(0, 0), (1, 0), (1, 1), (2, 0)],
    // Z shapes
    &[(0, 0), (0, 1), (1, 1), (1, 2)],
    &[(0, 1), (1, 0), (1, 1), (2, 0)],
    &[(0, 1), (0, 2), (1, 0), (1, 1)],
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
];

/// Number of distinct piece shapes
pub const SHAPE_COUNT: usize = SHAPES.len();

/// A piece shape from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape(usize);

impl PieceShape {
    /// Shape by catalog index, `None` past the catalog end
    pub fn new(index: usize) -> Option<Self> {
        (index < SHAPE_COUNT).then_some(Self(index))
    }

    /// Draw a random shape
    pub fn random(rng: &mut SimpleRng) -> Self {
        Self(rng.next_range(SHAPE_COUNT as u32) as usize)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// Cell offsets relative to the placement origin
    pub fn cells(&self) -> &'static [(i8, i8)] {
        SHAPES[self.0]
    }
}

/// Why a placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotPlayable,
    PieceUnavailable,
    OutOfBounds,
    Occupied,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::PieceUnavailable => "piece_unavailable",
            PlaceError::OutOfBounds | PlaceError::Occupied => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "game is not playable",
            PlaceError::PieceUnavailable => "piece index is unknown or already used",
            PlaceError::OutOfBounds => "piece would extend past the grid edge",
            PlaceError::Occupied => "piece overlaps an occupied cell",
        }
    }
}

/// Check that every cell of the shape lands in bounds on an empty cell
pub fn can_place(grid: &Grid, shape: PieceShape, origin: Coord) -> bool {
    shape.cells().iter().all(|&(dr, dc)| {
        let coord = Coord::new(origin.row + dr as i16, origin.col + dc as i16);
        grid.is_in_bounds(coord) && !grid.is_occupied(coord)
    })
}

/// Write the shape onto the grid, all cells or none
///
/// Validation happens before any write, so a rejected placement leaves the
/// grid exactly as it was.
pub fn place(
    grid: &mut Grid,
    shape: PieceShape,
    origin: Coord,
    color: Color,
) -> Result<(), PlaceError> {
    for &(dr, dc) in shape.cells() {
        let coord = Coord::new(origin.row + dr as i16, origin.col + dc as i16);
        if !grid.is_in_bounds(coord) {
            return Err(PlaceError::OutOfBounds);
        }
        if grid.is_occupied(coord) {
            return Err(PlaceError::Occupied);
        }
    }

    for &(dr, dc) in shape.cells() {
        let coord = Coord::new(origin.row + dr as i16, origin.col + dc as i16);
        grid.set(coord, Some(color));
    }

    Ok(())
}

/// True if the shape fits at any origin on the grid
pub fn can_place_anywhere(grid: &Grid, shape: PieceShape) -> bool {
    grid.coords().any(|origin| can_place(grid, shape, origin))
}

/// Rows and columns cleared by one placement
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearedLines {
    pub rows: Vec<u16>,
    pub cols: Vec<u16>,
}

impl ClearedLines {
    /// Number of cleared lines; a cell at a row/column crossing still
    /// counts each line once
    pub fn total(&self) -> usize {
        self.rows.len() + self.cols.len()
    }
}

/// Clear every full row and full column simultaneously
///
/// Both sets are detected before anything is cleared, so a placement that
/// completes a row and a column at once clears both.
pub fn clear_full_lines(grid: &mut Grid) -> ClearedLines {
    let (rows, cols) = grid.dimensions();

    let full_rows: Vec<u16> = (0..rows)
        .filter(|&row| (0..cols).all(|col| grid.is_occupied(Coord::new(row as i16, col as i16))))
        .collect();
    let full_cols: Vec<u16> = (0..cols)
        .filter(|&col| (0..rows).all(|row| grid.is_occupied(Coord::new(row as i16, col as i16))))
        .collect();

    for &row in &full_rows {
        for col in 0..cols {
            grid.set(Coord::new(row as i16, col as i16), None);
        }
    }
    for &col in &full_cols {
        for row in 0..rows {
            grid.set(Coord::new(row as i16, col as i16), None);
        }
    }

    ClearedLines {
        rows: full_rows,
        cols: full_cols,
    }
}

/// One dealt piece and whether it has been played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPiece {
    pub shape: PieceShape,
    pub color: Color,
    pub used: bool,
}

/// The three pieces dealt per round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRound {
    pieces: [RoundPiece; ROUND_PIECES],
}

impl PlacementRound {
    /// Deal a fresh round of random pieces
    pub fn deal(rng: &mut SimpleRng) -> Self {
        Self {
            pieces: std::array::from_fn(|_| RoundPiece {
                shape: PieceShape::random(rng),
                color: Color::ALL[rng.next_range(Color::ALL.len() as u32) as usize],
                used: false,
            }),
        }
    }

    pub fn piece(&self, index: usize) -> Option<&RoundPiece> {
        self.pieces.get(index)
    }

    pub fn pieces(&self) -> &[RoundPiece] {
        &self.pieces
    }

    /// Mark a piece played; false if the index is unknown or already used
    pub fn mark_used(&mut self, index: usize) -> bool {
        match self.pieces.get_mut(index) {
            Some(piece) if !piece.used => {
                piece.used = true;
                true
            }
            _ => false,
        }
    }

    pub fn all_used(&self) -> bool {
        self.pieces.iter().all(|piece| piece.used)
    }

    /// The round is stuck once every unused piece has no legal placement
    pub fn is_stuck(&self, grid: &Grid) -> bool {
        self.pieces
            .iter()
            .all(|piece| piece.used || !can_place_anywhere(grid, piece.shape))
    }
}

/// Outcome of one successful placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementTurn {
    pub cleared: ClearedLines,
    pub score_delta: u32,
    pub state: TerminalState,
}

/// Session state for the placement variant
///
/// The grid persists across levels; only the target score and the dealt
/// pieces change. Reaching the target completes the level, running out of
/// placements ends the game.
#[derive(Debug, Clone)]
pub struct PlacementGame {
    grid: Grid,
    round: PlacementRound,
    rng: SimpleRng,
    score: u32,
    best_score: u32,
    level: u32,
    state: TerminalState,
}

impl PlacementGame {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let round = PlacementRound::deal(&mut rng);
        Self {
            grid: Grid::new(PLACEMENT_SIZE, PLACEMENT_SIZE),
            round,
            rng,
            score: 0,
            best_score: 0,
            level: 1,
            state: TerminalState::Playing,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn round(&self) -> &PlacementRound {
        &self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn state(&self) -> TerminalState {
        self.state
    }

    /// Score that completes the current level
    pub fn target(&self) -> u32 {
        placement_target(self.level)
    }

    /// Place a dealt piece at `origin` and settle the turn
    pub fn play(&mut self, piece_index: usize, origin: Coord) -> Result<PlacementTurn, PlaceError> {
        if self.state != TerminalState::Playing {
            return Err(PlaceError::NotPlayable);
        }
        let piece = match self.round.piece(piece_index) {
            Some(piece) if !piece.used => *piece,
            _ => return Err(PlaceError::PieceUnavailable),
        };

        place(&mut self.grid, piece.shape, origin, piece.color)?;
        self.round.mark_used(piece_index);

        let cleared = clear_full_lines(&mut self.grid);
        let score_delta = placement_line_score(cleared.total(), self.level);
        self.score = self.score.saturating_add(score_delta);

        if self.round.all_used() {
            self.round = PlacementRound::deal(&mut self.rng);
        }

        self.state = if self.score >= self.target() {
            TerminalState::LevelComplete
        } else if self.round.is_stuck(&self.grid) {
            self.best_score = self.best_score.max(self.score);
            TerminalState::GameOver
        } else {
            TerminalState::Playing
        };

        Ok(PlacementTurn {
            cleared,
            score_delta,
            state: self.state,
        })
    }

    /// Start the next level after a completed one; the grid carries over
    /// Returns false unless the level was complete
    pub fn next_level(&mut self) -> bool {
        if self.state != TerminalState::LevelComplete {
            return false;
        }
        self.level += 1;
        self.round = PlacementRound::deal(&mut self.rng);
        self.state = if self.round.is_stuck(&self.grid) {
            self.best_score = self.best_score.max(self.score);
            TerminalState::GameOver
        } else {
            TerminalState::Playing
        };
        true
    }

    /// Reset to level one with an empty grid, keeping the best score
    pub fn reset(&mut self) {
        self.best_score = self.best_score.max(self.score);
        self.score = 0;
        self.level = 1;
        self.grid.clear();
        self.round = PlacementRound::deal(&mut self.rng);
        self.state = TerminalState::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(index: usize) -> PieceShape {
        PieceShape::new(index).unwrap()
    }

    #[test]
    fn test_shape_catalog() {
        assert_eq!(SHAPE_COUNT, 27);
        assert!(PieceShape::new(SHAPE_COUNT).is_none());
        // Every shape has between 1 and 9 cells
        for index in 0..SHAPE_COUNT {
            let count = shape(index).cells().len();
            assert!((1..=9).contains(&count), "shape {} has {} cells", index, count);
        }
    }

    #[test]
    fn test_can_place_respects_bounds_and_occupancy() {
        let mut grid = Grid::new(10, 10);
        let horizontal3 = shape(3);

        assert!(can_place(&grid, horizontal3, Coord::new(0, 0)));
        // Would extend past the right edge
        assert!(!can_place(&grid, horizontal3, Coord::new(0, 8)));

        grid.set(Coord::new(0, 1), Some(Color::Red));
        assert!(!can_place(&grid, horizontal3, Coord::new(0, 0)));
    }

    #[test]
    fn test_place_is_all_or_nothing() {
        let mut grid = Grid::new(10, 10);
        grid.set(Coord::new(0, 2), Some(Color::Blue));

        let err = place(&mut grid, shape(3), Coord::new(0, 0), Color::Red).unwrap_err();
        assert_eq!(err, PlaceError::Occupied);
        // Nothing was written before the collision was found
        assert_eq!(grid.occupied_count(), 1);

        place(&mut grid, shape(3), Coord::new(1, 0), Color::Red).unwrap();
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn test_clear_full_lines_row_and_column_together() {
        let mut grid = Grid::new(10, 10);
        // Fill row 0 and column 0 completely
        for i in 0..10 {
            grid.set(Coord::new(0, i), Some(Color::Red));
            grid.set(Coord::new(i, 0), Some(Color::Blue));
        }
        // A bystander cell that is in neither line
        grid.set(Coord::new(5, 5), Some(Color::Green));

        let cleared = clear_full_lines(&mut grid);
        assert_eq!(cleared.rows, vec![0]);
        assert_eq!(cleared.cols, vec![0]);
        assert_eq!(cleared.total(), 2);

        // Both lines are gone, the bystander stays
        assert_eq!(grid.occupied_count(), 1);
        assert!(grid.is_occupied(Coord::new(5, 5)));
    }

    #[test]
    fn test_can_place_anywhere() {
        let mut grid = Grid::new(10, 10);
        let single = shape(0);
        assert!(can_place_anywhere(&grid, single));

        for coord in grid.coords().collect::<Vec<_>>() {
            grid.set(coord, Some(Color::Red));
        }
        assert!(!can_place_anywhere(&grid, single));

        grid.set(Coord::new(4, 4), None);
        assert!(can_place_anywhere(&grid, single));
        // A 2x2 square still has nowhere to go
        assert!(!can_place_anywhere(&grid, shape(17)));
    }

    #[test]
    fn test_round_deal_and_usage() {
        let mut rng = SimpleRng::new(11);
        let mut round = PlacementRound::deal(&mut rng);
        assert_eq!(round.pieces().len(), ROUND_PIECES);
        assert!(!round.all_used());

        assert!(round.mark_used(0));
        // A piece can only be used once
        assert!(!round.mark_used(0));
        assert!(!round.mark_used(9));

        assert!(round.mark_used(1));
        assert!(round.mark_used(2));
        assert!(round.all_used());
    }

    #[test]
    fn test_round_is_stuck() {
        let mut rng = SimpleRng::new(11);
        let mut round = PlacementRound::deal(&mut rng);

        let empty = Grid::new(10, 10);
        assert!(!round.is_stuck(&empty));

        let mut full = Grid::new(10, 10);
        for coord in full.coords().collect::<Vec<_>>() {
            full.set(coord, Some(Color::Red));
        }
        assert!(round.is_stuck(&full));

        // Used pieces do not count against a stuck round
        round.mark_used(0);
        round.mark_used(1);
        round.mark_used(2);
        assert!(round.is_stuck(&empty));
    }

    #[test]
    fn test_game_play_and_scoring() {
        let mut game = PlacementGame::new(42);
        assert_eq!(game.state(), TerminalState::Playing);
        assert_eq!(game.target(), 1000);

        // Rejections leave the game untouched
        assert_eq!(
            game.play(7, Coord::new(0, 0)).unwrap_err(),
            PlaceError::PieceUnavailable
        );
        let err = game.play(0, Coord::new(-1, 0)).unwrap_err();
        assert_eq!(err, PlaceError::OutOfBounds);
        assert_eq!(game.score(), 0);

        // A legal placement of the first dealt piece
        let turn = game.play(0, Coord::new(0, 0)).unwrap();
        assert_eq!(turn.state, TerminalState::Playing);
        assert!(game.grid().occupied_count() > 0);
    }

    #[test]
    fn test_game_refills_round_when_all_used() {
        let mut game = PlacementGame::new(1);

        // Place the three pieces far apart so they cannot collide
        game.play(0, Coord::new(0, 0)).unwrap();
        game.play(1, Coord::new(0, 5)).unwrap();
        game.play(2, Coord::new(5, 0)).unwrap();

        // A fresh round was dealt
        assert!(!game.round().all_used());
    }

    #[test]
    fn test_game_reset_folds_best_score() {
        let mut game = PlacementGame::new(42);
        game.score = 700;
        game.reset();
        assert_eq!(game.score(), 0);
        assert_eq!(game.best_score(), 700);
        assert_eq!(game.level(), 1);
        assert!(game.grid().is_cleared());
    }
}
