//! Terminal 2048.
//!
//! The deterministic grid engine lives in [`core`] and has no terminal or
//! I/O dependencies. Everything else is the caller side: key input
//! mapping, notification events, persistent player records, and the
//! crossterm front end.

pub mod core;
pub mod events;
pub mod input;
pub mod services;
pub mod term;
pub mod types;
