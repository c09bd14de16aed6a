//! Tile spawning - the engine's only source of randomness
//!
//! Spawn picks a uniformly random empty cell and writes a 2 or a 4 with
//! equal probability. The even 2/4 split matches the shipped game; the
//! conventional 90/10 weighting is not used here.

use rand::Rng;

use crate::core::board::Board;
use crate::types::Tile;

/// Insert one random tile into an empty cell, using the provided RNG.
///
/// Returns the spawn position and value, or None when the board is full.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<(usize, usize, Tile)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (x, y) = empty[rng.gen_range(0..empty.len())];
    let value = rng.gen_range(1..=2u32) * 2;
    board.set(x, y, value);
    Some((x, y, value))
}
