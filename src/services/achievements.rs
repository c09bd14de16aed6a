//! Achievement catalog and the rules that unlock entries
//!
//! Pure mapping from game events and accumulated play time to achievement
//! ids. Deduplication lives in [`RecordsStore::unlock`]; reporting to any
//! external leaderboard service is the embedding application's concern.
//!
//! [`RecordsStore::unlock`]: crate::services::RecordsStore::unlock

use arrayvec::ArrayVec;

use crate::events::GameEvent;
use crate::types::Tile;

pub const START_FIRST_GAME: &str = "startFirstGame";
pub const FINISH_FIRST_GAME: &str = "finishFirstGame";
pub const WON_FIRST_GAME: &str = "wonFirstGame";

/// Play-time tiers: hours required and the id unlocked.
const PLAYTIME_TIERS: [(u64, &str); 6] = [
    (1, "hour1Playtime"),
    (10, "hour10Playtime"),
    (25, "hour25Playtime"),
    (50, "hour50Playtime"),
    (75, "hour75Playtime"),
    (100, "hour100Playtime"),
];

/// Achievement unlocked directly by an event, if any.
pub fn for_event(event: GameEvent) -> Option<&'static str> {
    match event {
        GameEvent::Started => Some(START_FIRST_GAME),
        GameEvent::Over => Some(FINISH_FIRST_GAME),
        GameEvent::Won => Some(WON_FIRST_GAME),
        GameEvent::TileReached(value) => tile_achievement(value),
    }
}

fn tile_achievement(value: Tile) -> Option<&'static str> {
    match value {
        256 => Some("tile256"),
        512 => Some("tile512"),
        1024 => Some("tile1024"),
        2048 => Some("tile2048"),
        _ => None,
    }
}

/// All play-time achievements earned at the given total.
pub fn for_play_time(total_secs: u64) -> ArrayVec<&'static str, 6> {
    PLAYTIME_TIERS
        .iter()
        .filter(|&&(hours, _)| total_secs >= hours * 3600)
        .map(|&(_, id)| id)
        .collect()
}
