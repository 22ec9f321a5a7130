//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation of the typing game: the word
//! list, falling words, the typing matcher, scoring and level policy, and the
//! particle bursts shown when a word is destroyed. It does no terminal I/O,
//! which makes it:
//!
//! - **Deterministic**: the same seed and the same event sequence produce the same game
//! - **Testable**: every rule is exercised by unit and property tests
//! - **Portable**: any front end can drive it through [`GameState::handle_event`]
//!
//! # Module Structure
//!
//! - [`dictionary`]: word list parsing, filtering and sampling
//! - [`word`]: falling words and their typed progress
//! - [`effect`]: particle bursts for destroyed words
//! - [`scoring`]: points, level-ups, spawn pressure, words per minute
//! - [`game_state`]: the tick simulation, typing matcher and lifecycle
//! - [`rng`]: seeded randomness
//! - [`snapshot`]: read-only per-frame copy for renderers
//!
//! # Game Rules
//!
//! - Every tick each word drops one row; a word reaching the floor costs a life
//! - Typing letters narrows onto the first word (in spawn order) starting with the input
//! - A typo discards the input; a finished word scores `letters * (level + 1)`
//! - Every 15 words raise the level, which raises spawn pressure
//! - Three lives; the game ends when the last one is lost
//!
//! # Example
//!
//! ```
//! use typefall_core::{Dictionary, GameState, MatchOutcome};
//!
//! let dict = Dictionary::from_words(["cat", "dog", "fish"], 12).unwrap();
//! let mut game = GameState::new(dict, 12345);
//!
//! let id = game.insert_word("cat", 10, 0).unwrap();
//! game.type_letter('c');
//! game.type_letter('a');
//! assert_eq!(game.type_letter('t'), MatchOutcome::Hit { id, points: 6 });
//! assert_eq!(game.score(), 6);
//! ```

pub mod dictionary;
pub mod effect;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod word;

pub use typefall_types as types;

// Re-export commonly used types for convenience
pub use dictionary::{Dictionary, DictionaryError};
pub use effect::{Effect, Particle};
pub use game_state::{GameState, MatchOutcome};
pub use rng::GameRng;
pub use scoring::{hit_score, words_per_minute};
pub use snapshot::GameSnapshot;
pub use word::{Word, WordId, WordText};
