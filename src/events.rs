//! Notification events derived from engine outcomes
//!
//! The engine performs no I/O. This tracker turns successive move outcomes
//! into the events a caller forwards to whatever records or achievement
//! system it owns: game started, game over, game won, and the first time a
//! milestone tile value appears.

use arrayvec::ArrayVec;

use crate::core::MoveOutcome;
use crate::types::{Tile, MILESTONE_TILES};

/// An event the caller may forward to an external reporting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Over,
    Won,
    TileReached(Tile),
}

/// Derives transition events from a stream of move outcomes.
///
/// One tracker per game session; [`start`] resets the per-game memory so
/// over/won/milestone events fire at most once per game.
///
/// [`start`]: EventTracker::start
#[derive(Debug, Clone, Default)]
pub struct EventTracker {
    reported_over: bool,
    reported_won: bool,
    best_milestone: Tile,
}

/// Upper bound on events per move: every milestone plus over plus won.
pub const MAX_EVENTS_PER_MOVE: usize = MILESTONE_TILES.len() + 2;

impl EventTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-game memory and report the start of a game.
    pub fn start(&mut self) -> GameEvent {
        *self = Self::default();
        GameEvent::Started
    }

    /// Events raised by one move outcome.
    ///
    /// `highest_tile` is the board maximum after the move, used for
    /// milestone detection.
    pub fn after_move(
        &mut self,
        outcome: &MoveOutcome,
        highest_tile: Tile,
    ) -> ArrayVec<GameEvent, MAX_EVENTS_PER_MOVE> {
        let mut events = ArrayVec::new();

        for &milestone in MILESTONE_TILES.iter() {
            if highest_tile >= milestone && self.best_milestone < milestone {
                self.best_milestone = milestone;
                events.push(GameEvent::TileReached(milestone));
            }
        }

        if outcome.game_won && !self.reported_won {
            self.reported_won = true;
            events.push(GameEvent::Won);
        }
        if outcome.game_over && !self.reported_over {
            self.reported_over = true;
            events.push(GameEvent::Over);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(game_over: bool, game_won: bool) -> MoveOutcome {
        MoveOutcome {
            effective: true,
            score_delta: 0,
            merges: Vec::new(),
            game_over,
            game_won,
        }
    }

    #[test]
    fn test_milestones_fire_once_in_order() {
        let mut tracker = EventTracker::new();
        tracker.start();

        let events = tracker.after_move(&outcome(false, false), 512);
        assert_eq!(
            events.as_slice(),
            [GameEvent::TileReached(256), GameEvent::TileReached(512)]
        );

        // Same maximum again: nothing new.
        assert!(tracker.after_move(&outcome(false, false), 512).is_empty());

        let events = tracker.after_move(&outcome(false, false), 1024);
        assert_eq!(events.as_slice(), [GameEvent::TileReached(1024)]);
    }

    #[test]
    fn test_won_and_over_fire_once() {
        let mut tracker = EventTracker::new();
        tracker.start();

        let events = tracker.after_move(&outcome(false, true), 2048);
        assert!(events.contains(&GameEvent::Won));
        assert!(events.contains(&GameEvent::TileReached(2048)));

        assert!(tracker.after_move(&outcome(false, true), 2048).is_empty());

        let events = tracker.after_move(&outcome(true, true), 2048);
        assert_eq!(events.as_slice(), [GameEvent::Over]);
        assert!(tracker.after_move(&outcome(true, true), 2048).is_empty());
    }

    #[test]
    fn test_start_resets_memory() {
        let mut tracker = EventTracker::new();
        tracker.start();
        tracker.after_move(&outcome(true, true), 2048);

        assert_eq!(tracker.start(), GameEvent::Started);
        let events = tracker.after_move(&outcome(false, false), 256);
        assert_eq!(events.as_slice(), [GameEvent::TileReached(256)]);
    }

    #[test]
    fn test_small_tiles_raise_nothing() {
        let mut tracker = EventTracker::new();
        tracker.start();
        assert!(tracker.after_move(&outcome(false, false), 128).is_empty());
    }
}
