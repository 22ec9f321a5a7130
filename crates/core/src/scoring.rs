//! Scoring module - points, levels and spawn pressure
//!
//! All the tunable policy lives here as pure functions:
//! - A typed word is worth `letters * (level + 1)`.
//! - Every `WORDS_PER_LEVEL` typed words raise the level by one.
//! - The playfield always holds at least `1 + level / 3` words; beyond that an
//!   extra word appears with a chance that grows linearly with the level.

use std::time::Duration;

use crate::types::{
    BASE_SPAWN_CHANCE, GRID_WIDTH, LEVELS_PER_MIN_WORD, SPAWN_CHANCE_PER_LEVEL, WORDS_PER_LEVEL,
};

/// Points for typing a word of `len` letters at `level`.
pub fn hit_score(len: usize, level: u32) -> u32 {
    (len as u32).saturating_mul(level.saturating_add(1))
}

/// Whether reaching `words_typed` successful words earns a level.
pub fn is_level_up(words_typed: u32) -> bool {
    words_typed > 0 && words_typed % WORDS_PER_LEVEL == 0
}

/// Words that must be falling at `level` before spawning becomes random.
pub fn min_live_words(level: u32) -> usize {
    1 + (level / LEVELS_PER_MIN_WORD) as usize
}

/// Chance of an extra spawn on a tick once the minimum is met.
pub fn spawn_probability(level: u32) -> f64 {
    BASE_SPAWN_CHANCE + f64::from(level) * SPAWN_CHANCE_PER_LEVEL
}

/// Largest spawn column for a word of `len` letters (inclusive).
///
/// Keeps one spare column at the right edge; 0 when the word is wider than that.
pub fn spawn_column_bound(len: usize) -> u16 {
    (GRID_WIDTH as usize).saturating_sub(len + 1) as u16
}

/// Words per minute over `elapsed`; 0 before any time has passed.
pub fn words_per_minute(words_typed: u32, elapsed: Duration) -> u32 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0;
    }
    (f64::from(words_typed) * 60.0 / secs) as u32
}
