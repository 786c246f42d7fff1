//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

/// Default board dimensions per game variant
pub const DEFAULT_BLASTER_ROWS: u16 = 12;
pub const DEFAULT_BLASTER_COLS: u16 = 10;
pub const DEFAULT_BUBBLE_COLS: u16 = 20;
pub const PLACEMENT_SIZE: u16 = 10;

/// Match-size thresholds
pub const BUBBLE_MIN_MATCH: usize = 3;
pub const BLOCK_MIN_MATCH: usize = 2;

/// Scoring constants
pub const BUBBLE_POP_POINTS: u32 = 10;
pub const BUBBLE_DROP_BONUS: u32 = 5;
pub const BLASTER_MATCH_FACTOR: u32 = 10;
pub const PLACEMENT_LINE_POINTS: u32 = 100;
pub const PLACEMENT_TARGET_STEP: u32 = 1000;

/// Level progression cap shared by all variants
pub const MAX_LEVEL: u32 = 50;

/// Pieces dealt per placement round
pub const ROUND_PIECES: usize = 3;

/// Grid coordinate as (row, col)
///
/// Signed so that neighbor probing at the edges produces ordinary
/// out-of-bounds coordinates instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i16,
    pub col: i16,
}

impl Coord {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }
}

/// Cell colors across all variants
///
/// The bubble variant draws from the first four only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

/// Number of colors available to the bubble variant
pub const BUBBLE_COLOR_COUNT: usize = 4;

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    /// Color for a palette index, `None` past the palette end
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Palette index of this color
    pub fn as_index(&self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Purple => 4,
            Color::Orange => 5,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }
}

/// Cell on the grid (None = empty, Some = filled with a color)
pub type Cell = Option<Color>;

/// Adjacency rule set for a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Rectangular 4-neighbor adjacency
    Square,
    /// Staggered 6-neighbor adjacency; the neighbor offsets depend on row
    /// parity, realizing hex-like adjacency on a rectangular array
    Offset,
}

/// Where a game session stands after a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminalState {
    #[default]
    Playing,
    LevelComplete,
    GameOver,
}

impl TerminalState {
    /// Convert to string (snapshot/UI vocabulary)
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalState::Playing => "playing",
            TerminalState::LevelComplete => "level_complete",
            TerminalState::GameOver => "game_over",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalState::Playing)
    }
}
