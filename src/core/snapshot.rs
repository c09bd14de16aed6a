//! Read-only state snapshot consumed by rendering and persistence.

use serde::{Deserialize, Serialize};

use crate::types::Tile;

/// Everything a caller needs to render or persist a game, with no access
/// to the live board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: usize,
    /// Board contents as rows, top to bottom.
    pub board: Vec<Vec<Tile>>,
    pub score: u32,
    pub move_count: u32,
    pub game_over: bool,
    pub game_won: bool,
    pub endless_mode: bool,
    pub seed: u64,
}

impl GameSnapshot {
    /// Highest tile on the board (0 when empty).
    pub fn highest_tile(&self) -> Tile {
        self.board
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::GameState;

    #[test]
    fn test_snapshot_reflects_state() {
        let state = GameState::new(5, 17).unwrap();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.size, 5);
        assert_eq!(snapshot.board.len(), 5);
        assert_eq!(snapshot.board, state.board().rows());
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.seed, 17);
        assert!(snapshot.highest_tile() == 2 || snapshot.highest_tile() == 4);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let snapshot = GameState::new(4, 23).unwrap().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
