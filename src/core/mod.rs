//! Core module - pure game logic with no terminal or I/O dependencies
//!
//! This module contains the grid engine: board storage, the move
//! algorithm, tile spawning, and the game-state wrapper around them.

pub mod board;
pub mod game_state;
pub mod moves;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameError, GameState, MoveOutcome};
pub use snapshot::GameSnapshot;
