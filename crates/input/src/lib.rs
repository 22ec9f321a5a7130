//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::GameEvent`]. Everything the
//! game does not understand maps to `None` and is dropped before it reaches
//! the game state.

pub mod map;

pub use typefall_types as types;

pub use map::{map_event, map_key};
