//! Scoring module - per-variant score formulas
//!
//! The two matching variants award points differently: the bubble shooter
//! pays a flat rate per popped bubble, while the blaster pays quadratically
//! in region size scaled by the level. Which formula applies is session
//! configuration, not a crate constant. Both are monotone in region size at
//! a fixed level, which is the property the session layer relies on.

use crate::types::{BUBBLE_DROP_BONUS, PLACEMENT_LINE_POINTS, PLACEMENT_TARGET_STEP};

/// Score formula selector for the matching variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRules {
    /// Flat `points` per cleared cell, level-independent (bubble shooter)
    PerCell { points: u32 },
    /// `size * size * factor * level` (block blaster)
    SquaredPerLevel { factor: u32 },
}

impl ScoreRules {
    pub fn per_cell(points: u32) -> Self {
        ScoreRules::PerCell { points }
    }

    pub fn squared_per_level(factor: u32) -> Self {
        ScoreRules::SquaredPerLevel { factor }
    }
}

/// Score delta for clearing a region of `size` cells at `level`
pub fn match_score(rules: ScoreRules, size: usize, level: u32) -> u32 {
    let size = size as u32;
    match rules {
        ScoreRules::PerCell { points } => size.saturating_mul(points),
        ScoreRules::SquaredPerLevel { factor } => size
            .saturating_mul(size)
            .saturating_mul(factor)
            .saturating_mul(level),
    }
}

/// Bonus for cells removed by ceiling-disconnect gravity
pub fn drop_bonus(count: usize) -> u32 {
    (count as u32).saturating_mul(BUBBLE_DROP_BONUS)
}

/// Score for clearing `lines` full rows/columns in the placement variant
pub fn placement_line_score(lines: usize, level: u32) -> u32 {
    (lines as u32)
        .saturating_mul(PLACEMENT_LINE_POINTS)
        .saturating_mul(level)
}

/// Target score that completes a placement level
pub fn placement_target(level: u32) -> u32 {
    level.saturating_mul(PLACEMENT_TARGET_STEP)
}
