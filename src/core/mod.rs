//! Core module - pure game logic with no external I/O
//!
//! This module contains all grid rules, match resolution, gravity, and
//! session state management. It has zero dependencies on UI or audio.

pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod levelgen;
pub mod place;
pub mod region;
pub mod resolve;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod terminal;
pub mod topology;

// Re-export commonly used types
pub use game_state::{GameRules, GameState, TurnOutcome};
pub use gravity::GravityRule;
pub use grid::Grid;
pub use place::{PlaceError, PlacementGame, PlacementRound};
pub use resolve::MatchOutcome;
pub use rng::SimpleRng;
pub use scoring::ScoreRules;
pub use snapshot::GameSnapshot;
pub use terminal::LossRule;
