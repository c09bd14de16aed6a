//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// A single board cell: 0 for empty, otherwise a power-of-two tile value >= 2.
pub type Tile = u32;

/// Smallest playable board edge.
pub const MIN_GRID_SIZE: usize = 2;

/// Tile value that wins the game while endless mode is off.
pub const WINNING_TILE: Tile = 2048;

/// Tile values reported to the notification layer the first time they appear.
pub const MILESTONE_TILES: [Tile; 4] = [256, 512, 1024, 2048];

/// The four move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// Selectable board sizes (4x4, 5x5, 6x6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    FourByFour,
    FiveByFive,
    SixBySix,
}

impl GridSize {
    /// Board edge length in cells.
    pub fn cells(&self) -> usize {
        match self {
            GridSize::FourByFour => 4,
            GridSize::FiveByFive => 5,
            GridSize::SixBySix => 6,
        }
    }

    /// Parse an edge length back into a grid size.
    pub fn from_cells(cells: usize) -> Option<Self> {
        match cells {
            4 => Some(GridSize::FourByFour),
            5 => Some(GridSize::FiveByFive),
            6 => Some(GridSize::SixBySix),
            _ => None,
        }
    }

    /// Display form, e.g. "4x4".
    pub fn as_str(&self) -> &'static str {
        match self {
            GridSize::FourByFour => "4x4",
            GridSize::FiveByFive => "5x5",
            GridSize::SixBySix => "6x6",
        }
    }

    /// Records key for this size's best score, e.g. "highScore4x4".
    pub fn high_score_key(&self) -> String {
        format!("highScore{}", self.as_str())
    }
}

/// Game actions raised by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    NewGame,
    ContinueEndless,
}
