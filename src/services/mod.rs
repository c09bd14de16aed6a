//! Caller-side records: high scores, play time, achievements
//!
//! The engine exposes events and snapshots; everything in this module is
//! the caller's responsibility and never feeds back into game state.
//! Persistence failures are reported through `Result` values and must be
//! tolerated by the caller.

pub mod achievements;
pub mod records;

pub use records::{Records, RecordsStore};
