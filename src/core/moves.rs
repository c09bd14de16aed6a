//! Move application - one compaction/merge routine for all four directions
//!
//! A line (row or column) is read leading-edge-first, so sliding and merging
//! always work toward index 0. Compaction preserves tile order; the merge
//! scan runs once from the leading edge, and a tile produced by a merge
//! never merges again within the same move.

use crate::core::board::Board;
use crate::types::{Direction, Tile};

/// Result of collapsing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    /// The line after compaction, merging, and zero padding.
    pub cells: Vec<Tile>,
    /// Resulting value of each merge, in scan order.
    pub merges: Vec<Tile>,
    /// Whether the line differs from its input.
    pub changed: bool,
}

/// Result of applying a move to the whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether any line changed.
    pub changed: bool,
    /// Merge results across all lines.
    pub merges: Vec<Tile>,
}

/// Collapse one line toward index 0.
pub fn collapse_line(line: &[Tile]) -> LineResult {
    let mut cells: Vec<Tile> = line.iter().copied().filter(|&tile| tile != 0).collect();
    let mut merges = Vec::new();

    let mut i = 0;
    while i + 1 < cells.len() {
        if cells[i] == cells[i + 1] {
            cells[i] *= 2;
            merges.push(cells[i]);
            cells.remove(i + 1);
        }
        i += 1;
    }

    cells.resize(line.len(), 0);
    let changed = cells.as_slice() != line;
    LineResult {
        cells,
        merges,
        changed,
    }
}

/// Coordinates of line `i`, ordered from the edge the tiles move toward.
fn line_coords(direction: Direction, i: usize, size: usize) -> Vec<(usize, usize)> {
    match direction {
        Direction::Left => (0..size).map(|x| (x, i)).collect(),
        Direction::Right => (0..size).rev().map(|x| (x, i)).collect(),
        Direction::Up => (0..size).map(|y| (i, y)).collect(),
        Direction::Down => (0..size).rev().map(|y| (i, y)).collect(),
    }
}

/// Slide and merge every line of the board in the given direction.
///
/// Does not spawn tiles or touch score; that is the caller's job once it
/// knows whether the move was effective.
pub fn apply_move(board: &mut Board, direction: Direction) -> MoveResult {
    let size = board.size();
    let mut merges = Vec::new();
    let mut changed = false;

    for i in 0..size {
        let coords = line_coords(direction, i, size);
        let line: Vec<Tile> = coords
            .iter()
            .map(|&(x, y)| board.get(x, y).unwrap_or(0))
            .collect();

        let result = collapse_line(&line);
        if result.changed {
            changed = true;
            for (k, &(x, y)) in coords.iter().enumerate() {
                board.set(x, y, result.cells[k]);
            }
        }
        merges.extend(result.merges);
    }

    MoveResult { changed, merges }
}
