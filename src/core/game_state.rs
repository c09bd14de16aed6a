//! Game state module - the grid engine
//!
//! Ties together board, move application, and tile spawning. A move is a
//! single atomic transformation of the board; the only randomness is the
//! choice of spawn cell and spawn value, drawn from an RNG seeded at
//! construction so whole games replay deterministically.

use std::fmt;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::board::Board;
use crate::core::moves;
use crate::core::rng::spawn_tile;
use crate::core::snapshot::GameSnapshot;
use crate::types::{Direction, Tile, MIN_GRID_SIZE, WINNING_TILE};

/// Errors raised at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Requested board edge below the playable minimum.
    SizeTooSmall { size: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::SizeTooSmall { size } => {
                write!(f, "board size {size} is below the minimum of {MIN_GRID_SIZE}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Outcome of a single move, reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the move changed at least one cell.
    pub effective: bool,
    /// Score gained this move (sum of merge results).
    pub score_delta: u32,
    /// Resulting value of every merge, for notification purposes.
    pub merges: Vec<Tile>,
    /// Terminal flags after the move.
    pub game_over: bool,
    pub game_won: bool,
}

impl MoveOutcome {
    fn unchanged(state: &GameState) -> Self {
        Self {
            effective: false,
            score_delta: 0,
            merges: Vec::new(),
            game_over: state.game_over,
            game_won: state.game_won,
        }
    }
}

/// Complete game state.
///
/// Owns the board exclusively; all mutation goes through [`apply_move`]
/// and [`new_game`].
///
/// [`apply_move`]: GameState::apply_move
/// [`new_game`]: GameState::new_game
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    move_count: u32,
    game_over: bool,
    game_won: bool,
    endless_mode: bool,
    winning_tile: Tile,
    seed: u64,
    rng: SmallRng,
}

impl GameState {
    /// Create an engine with the default 2048 winning threshold.
    ///
    /// The board is seeded with two random tiles.
    pub fn new(size: usize, seed: u64) -> Result<Self, GameError> {
        Self::with_winning_tile(size, seed, WINNING_TILE)
    }

    /// Create an engine with a custom winning threshold.
    pub fn with_winning_tile(
        size: usize,
        seed: u64,
        winning_tile: Tile,
    ) -> Result<Self, GameError> {
        if size < MIN_GRID_SIZE {
            return Err(GameError::SizeTooSmall { size });
        }

        let mut state = Self {
            board: Board::new(size),
            score: 0,
            move_count: 0,
            game_over: false,
            game_won: false,
            endless_mode: false,
            winning_tile,
            seed,
            rng: SmallRng::seed_from_u64(seed),
        };
        state.seed_tiles();
        Ok(state)
    }

    /// Reset to an empty board and spawn the two starting tiles.
    ///
    /// Score, move count, terminal flags, and endless mode all reset;
    /// the RNG stream continues where the previous game left off.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.score = 0;
        self.move_count = 0;
        self.game_over = false;
        self.game_won = false;
        self.endless_mode = false;
        self.seed_tiles();
    }

    fn seed_tiles(&mut self) {
        for _ in 0..2 {
            spawn_tile(&mut self.board, &mut self.rng);
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn game_won(&self) -> bool {
        self.game_won
    }

    pub fn endless_mode(&self) -> bool {
        self.endless_mode
    }

    pub fn winning_tile(&self) -> Tile {
        self.winning_tile
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Enable or disable endless mode.
    ///
    /// Enabling clears the won flag and suppresses win detection for the
    /// rest of the session, so the win notification never fires twice.
    pub fn set_endless_mode(&mut self, enabled: bool) {
        self.endless_mode = enabled;
        if enabled {
            self.game_won = false;
        }
    }

    /// True iff any cell is empty or any adjacent equal pair exists.
    pub fn is_move_possible(&self) -> bool {
        !self.board.is_full() || self.board.has_adjacent_pair()
    }

    /// Apply a directional move.
    ///
    /// If no line changes, the board, score, and move count stay untouched
    /// and no tile spawns. Otherwise the score grows by the merge results,
    /// exactly one tile spawns, and the terminal flags are re-evaluated.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let result = moves::apply_move(&mut self.board, direction);
        if !result.changed {
            return MoveOutcome::unchanged(self);
        }

        let score_delta: u32 = result.merges.iter().sum();
        self.score += score_delta;
        self.move_count += 1;
        spawn_tile(&mut self.board, &mut self.rng);

        if !self.endless_mode && self.board.max_tile() >= self.winning_tile {
            self.game_won = true;
        }
        self.game_over = !self.is_move_possible();

        MoveOutcome {
            effective: true,
            score_delta,
            merges: result.merges,
            game_over: self.game_over,
            game_won: self.game_won,
        }
    }

    /// Read-only snapshot for rendering and caller-side persistence.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            board: self.board.rows(),
            score: self.score,
            move_count: self.move_count,
            game_over: self.game_over,
            game_won: self.game_won,
            endless_mode: self.endless_mode,
            seed: self.seed,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}
