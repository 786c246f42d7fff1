//! Snapshot module - the render-ready view handed to UI collaborators
//!
//! Snapshots serialize one way only. Sessions are rebuilt from fresh grids,
//! never from snapshots, so there is deliberately no `Deserialize` here.

use serde::Serialize;

use crate::core::game_state::GameState;
use crate::core::grid::Grid;
use crate::types::Coord;

/// Point-in-time view of a matching session
///
/// The board encodes each cell as 0 for empty or the color's palette index
/// plus one. Field names are part of the UI contract and are locked by a
/// schema test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rows: u16,
    pub cols: u16,
    pub board: Vec<Vec<u8>>,
    pub score: u32,
    pub best_score: u32,
    pub level: u32,
    pub cells_left: usize,
    pub state: &'static str,
}

impl GameSnapshot {
    /// Capture the session as it stands
    pub fn capture(session: &GameState) -> Self {
        let grid = session.grid();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            board: encode_board(grid),
            score: session.score(),
            best_score: session.best_score(),
            level: session.level(),
            cells_left: grid.occupied_count(),
            state: session.state().as_str(),
        }
    }
}

fn encode_board(grid: &Grid) -> Vec<Vec<u8>> {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    grid.get(Coord::new(row as i16, col as i16))
                        .map_or(0, |color| color.as_index() as u8 + 1)
                })
                .collect()
        })
        .collect()
}
