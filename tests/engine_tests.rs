//! Grid engine tests - move semantics, invariants, and terminal detection

use tui_2048::core::moves::{apply_move, collapse_line};
use tui_2048::core::{Board, GameError, GameState};
use tui_2048::types::{Direction, Tile};

fn is_power_of_two(value: Tile) -> bool {
    value >= 2 && value & (value - 1) == 0
}

#[test]
fn test_left_merge_scores_four() {
    let mut board = Board::from_rows(&[
        vec![2, 2, 0, 0],
        vec![0; 4],
        vec![0; 4],
        vec![0; 4],
    ]);
    let result = apply_move(&mut board, Direction::Left);

    assert!(result.changed);
    assert_eq!(result.merges, vec![4]);
    assert_eq!(result.merges.iter().sum::<u32>(), 4);
    assert_eq!(board.rows()[0], vec![4, 0, 0, 0]);
}

#[test]
fn test_first_pair_merges_without_cascade() {
    let result = collapse_line(&[0, 2, 2, 2]);
    assert_eq!(result.cells, vec![4, 2, 0, 0]);
    assert_eq!(result.merges, vec![4]);
    assert!(result.changed);
}

#[test]
fn test_checkerboard_rejects_every_direction() {
    let rows = vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ];
    let mut board = Board::from_rows(&rows);
    for direction in Direction::all() {
        let result = apply_move(&mut board, direction);
        assert!(!result.changed, "{direction:?} must not change a stalled board");
        assert_eq!(board.rows(), rows);
    }
    assert!(board.is_full());
    assert!(!board.has_adjacent_pair());
}

#[test]
fn test_construction_validates_size() {
    assert!(matches!(
        GameState::new(0, 1),
        Err(GameError::SizeTooSmall { size: 0 })
    ));
    assert!(matches!(
        GameState::new(1, 1),
        Err(GameError::SizeTooSmall { size: 1 })
    ));
    for size in 2..=6 {
        assert!(GameState::new(size, 1).is_ok(), "size {size} should be accepted");
    }
}

#[test]
fn test_new_board_has_two_starting_tiles() {
    for seed in 0..20 {
        let state = GameState::new(4, seed).unwrap();
        let tiles: Vec<Tile> = state
            .snapshot()
            .board
            .into_iter()
            .flatten()
            .filter(|&tile| tile != 0)
            .collect();
        assert_eq!(tiles.len(), 2, "seed {seed}");
        assert!(tiles.iter().all(|&tile| tile == 2 || tile == 4));
    }
}

#[test]
fn test_playout_preserves_invariants() {
    for seed in 0..10 {
        let mut state = GameState::new(4, seed).unwrap();
        let mut directions = Direction::all().into_iter().cycle();

        for _ in 0..400 {
            if state.game_over() {
                break;
            }
            let before = state.snapshot();
            let outcome = state.apply_move(directions.next().unwrap());
            let after = state.snapshot();

            // Every non-empty cell stays a power of two >= 2.
            for &tile in after.board.iter().flatten() {
                assert!(tile == 0 || is_power_of_two(tile), "bad tile {tile}");
            }

            let sum_before: u64 = before.board.iter().flatten().map(|&t| u64::from(t)).sum();
            let sum_after: u64 = after.board.iter().flatten().map(|&t| u64::from(t)).sum();

            if outcome.effective {
                // Merges conserve the sum; the spawn adds 2 or 4.
                let spawned = sum_after - sum_before;
                assert!(spawned == 2 || spawned == 4, "spawned {spawned}");
                assert_eq!(after.score, before.score + outcome.score_delta);
                assert_eq!(after.move_count, before.move_count + 1);
                assert_eq!(
                    u64::from(outcome.score_delta),
                    outcome.merges.iter().map(|&m| u64::from(m)).sum::<u64>()
                );
            } else {
                // Nothing may change, down to the last cell.
                assert_eq!(after, before);
                assert_eq!(outcome.score_delta, 0);
                assert!(outcome.merges.is_empty());
            }
        }
    }
}

#[test]
fn test_noneffective_move_is_idempotent() {
    // Tall column against the top edge: Up is a no-op, twice in a row.
    for seed in 0..20 {
        let mut state = GameState::new(4, seed).unwrap();
        // Find a direction that does nothing, if the opening position has one.
        for direction in Direction::all() {
            let before = state.snapshot();
            let first = state.apply_move(direction);
            if first.effective {
                continue;
            }
            assert_eq!(state.snapshot(), before);
            let second = state.apply_move(direction);
            assert!(!second.effective);
            assert_eq!(state.snapshot(), before);
        }
    }
}

#[test]
fn test_game_over_is_terminal() {
    // 2x2 games stall quickly; once dead, no direction ever works again.
    let mut finished = 0;
    for seed in 0..30 {
        let mut state = GameState::new(2, seed).unwrap();

        'game: for _ in 0..10_000 {
            let mut any_effective = false;
            for direction in Direction::all() {
                if state.apply_move(direction).effective {
                    any_effective = true;
                }
                if state.game_over() {
                    break 'game;
                }
            }
            assert!(
                any_effective,
                "a live board must accept at least one direction"
            );
        }

        assert!(state.game_over(), "seed {seed} never finished");
        assert!(!state.is_move_possible());
        let dead = state.snapshot();
        for direction in Direction::all() {
            assert!(!state.apply_move(direction).effective);
            assert_eq!(state.snapshot(), dead);
        }
        finished += 1;
    }
    assert_eq!(finished, 30);
}

#[test]
fn test_score_is_monotonic() {
    let mut state = GameState::new(4, 77).unwrap();
    let mut directions = Direction::all().into_iter().cycle();
    let mut last_score = 0;
    for _ in 0..300 {
        if state.game_over() {
            break;
        }
        state.apply_move(directions.next().unwrap());
        assert!(state.score() >= last_score);
        last_score = state.score();
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let mut a = GameState::new(5, 4242).unwrap();
    let mut b = GameState::new(5, 4242).unwrap();
    let mut directions = Direction::all().into_iter().cycle();
    for _ in 0..200 {
        let direction = directions.next().unwrap();
        assert_eq!(a.apply_move(direction), b.apply_move(direction));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
