//! Game state module - session orchestration for the matching variants
//!
//! Ties the pure components together: each turn runs find, resolve,
//! compact, and the terminal check in strict sequence over the session's
//! grid. The grid is a single exclusively-owned resource; `&mut self`
//! methods serialize turns by construction, so one turn always completes
//! before the next can start. Level generation stays outside: sessions
//! consume grids, they never build them.

use crate::core::gravity::{self, GravityRule};
use crate::core::grid::Grid;
use crate::core::region::find_region;
use crate::core::resolve::{resolve, MatchOutcome};
use crate::core::scoring::{drop_bonus, ScoreRules};
use crate::core::terminal::{self, LossRule};
use crate::types::{
    Coord, TerminalState, Topology, BLASTER_MATCH_FACTOR, BLOCK_MIN_MATCH, BUBBLE_MIN_MATCH,
    BUBBLE_POP_POINTS, MAX_LEVEL,
};

/// Per-variant configuration for a matching session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub topology: Topology,
    pub min_match: usize,
    pub scoring: ScoreRules,
    pub gravity: GravityRule,
    pub loss: LossRule,
}

impl GameRules {
    /// The offset-grid bubble shooter: match three, flat points per bubble,
    /// unsupported bubbles fall for a bonus, loss tracked by the host
    pub fn bubble_shooter() -> Self {
        Self {
            topology: Topology::Offset,
            min_match: BUBBLE_MIN_MATCH,
            scoring: ScoreRules::per_cell(BUBBLE_POP_POINTS),
            gravity: GravityRule::DropUnanchored,
            loss: LossRule::None,
        }
    }

    /// The rectangular click-to-blast matcher: match two, quadratic scoring
    /// by level, floor gravity with column compaction, loss when no move
    /// remains
    pub fn block_blaster() -> Self {
        Self {
            topology: Topology::Square,
            min_match: BLOCK_MIN_MATCH,
            scoring: ScoreRules::squared_per_level(BLASTER_MATCH_FACTOR),
            gravity: GravityRule::DropToFloor {
                compact_columns: true,
            },
            loss: LossRule::NoMovesLeft,
        }
    }
}

/// Everything one turn produced, for the host to render and narrate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    pub outcome: MatchOutcome,
    /// Cells removed by ceiling-disconnect gravity, empty for floor gravity
    pub dropped: Vec<Coord>,
    pub state: TerminalState,
}

/// Complete session state for one matching game
#[derive(Debug, Clone)]
pub struct GameState {
    rules: GameRules,
    grid: Grid,
    score: u32,
    best_score: u32,
    level: u32,
    state: TerminalState,
}

impl GameState {
    /// Start a session at level one over an externally generated grid
    ///
    /// The initial grid is classified immediately: an empty seed is already
    /// complete and an unplayable one is already over.
    pub fn new(rules: GameRules, grid: Grid) -> Self {
        let state = terminal::check(&grid, rules.topology, rules.loss, rules.min_match);
        Self {
            rules,
            grid,
            score: 0,
            best_score: 0,
            level: 1,
            state,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
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

    /// True once the level counter has reached the last level
    pub fn final_level_reached(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Run one full turn from a seed coordinate
    ///
    /// find -> resolve -> compact -> check, in that order, to completion.
    /// Seeds on empty cells or regions below the threshold are well-defined
    /// no-ops. Once the session is terminal, further turns do nothing until
    /// `advance_level` or `reset`.
    pub fn play(&mut self, seed: Coord) -> TurnOutcome {
        if self.state != TerminalState::Playing {
            return TurnOutcome {
                state: self.state,
                ..TurnOutcome::default()
            };
        }

        let region = find_region(&self.grid, self.rules.topology, seed);
        let outcome = resolve(
            &mut self.grid,
            region,
            self.rules.min_match,
            self.rules.scoring,
            self.level,
        );

        if !outcome.removed {
            return TurnOutcome {
                outcome,
                dropped: Vec::new(),
                state: self.state,
            };
        }

        self.score = self.score.saturating_add(outcome.score_delta);

        let dropped = match self.rules.gravity {
            GravityRule::DropUnanchored => {
                let dropped = gravity::drop_unanchored(&mut self.grid, self.rules.topology);
                self.score = self.score.saturating_add(drop_bonus(dropped.len()));
                dropped
            }
            GravityRule::DropToFloor { compact_columns } => {
                gravity::drop_to_floor(&mut self.grid);
                if compact_columns {
                    gravity::compact_columns(&mut self.grid);
                }
                Vec::new()
            }
        };

        self.state = terminal::check(
            &self.grid,
            self.rules.topology,
            self.rules.loss,
            self.rules.min_match,
        );
        if self.state == TerminalState::GameOver {
            self.best_score = self.best_score.max(self.score);
        }

        TurnOutcome {
            outcome,
            dropped,
            state: self.state,
        }
    }

    /// Move to the next level over a fresh grid; score carries over
    /// Returns false unless the current level was complete
    pub fn advance_level(&mut self, grid: Grid) -> bool {
        if self.state != TerminalState::LevelComplete {
            return false;
        }
        self.level += 1;
        self.grid = grid;
        self.state = terminal::check(
            &self.grid,
            self.rules.topology,
            self.rules.loss,
            self.rules.min_match,
        );
        true
    }

    /// Start over at level one, folding the ended run into the best score
    pub fn reset(&mut self, grid: Grid) {
        self.best_score = self.best_score.max(self.score);
        self.score = 0;
        self.level = 1;
        self.grid = grid;
        self.state = terminal::check(
            &self.grid,
            self.rules.topology,
            self.rules.loss,
            self.rules.min_match,
        );
    }
}
