//! Core types module - shared constants, events and lifecycle phase
//!
//! This crate defines the vocabulary shared by the simulation, the key mapping
//! and the terminal view. Everything here is plain data with no dependencies.
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed character grid:
//!
//! - **Width**: 80 columns (indexed 0-79)
//! - **Height**: 23 rows, of which the bottom 2 belong to the status area
//! - **Playable height**: 21 rows; a word reaching row 21 is lost
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Default fixed timestep (one row of descent) |
//! | `MAX_WORDS` | 8 | Spawn cap for simultaneously falling words |
//! | `START_LIVES` | 3 | Lives at the start of a game |
//! | `START_LEVEL` | 1 | Level at the start of a game |
//! | `WORDS_PER_LEVEL` | 15 | Successful words per level-up |
//! | `BASE_SPAWN_CHANCE` | 0.08 | Extra-spawn probability at level 0 |
//! | `SPAWN_CHANCE_PER_LEVEL` | 0.01 | Probability added per level |
//!
//! # Examples
//!
//! ```
//! use typefall_types::{GameEvent, Phase, GRID_HEIGHT, PLAYABLE_HEIGHT, STATUS_HEIGHT};
//!
//! assert_eq!(PLAYABLE_HEIGHT, GRID_HEIGHT - STATUS_HEIGHT);
//! assert!(GameEvent::Letter('a').is_keystroke());
//! assert!(!GameEvent::Tick.is_keystroke());
//! assert_eq!(Phase::default(), Phase::Playing);
//! ```

/// Grid width in columns (80)
pub const GRID_WIDTH: u16 = 80;

/// Full grid height in rows, status area included (23)
pub const GRID_HEIGHT: u16 = 23;

/// Rows reserved below the playfield for the status area (2)
pub const STATUS_HEIGHT: u16 = 2;

/// Rows words can occupy; reaching this row costs a life (21)
pub const PLAYABLE_HEIGHT: u16 = GRID_HEIGHT - STATUS_HEIGHT;

/// Default fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 1000;

/// Longest word the game accepts (and the input buffer capacity)
pub const MAX_WORD_LEN: usize = 12;

/// Maximum length for the short-word variant of the dictionary filter
pub const SHORT_WORD_LEN: usize = 3;

/// Spawn cap: no new words while this many are falling
pub const MAX_WORDS: usize = 8;

/// Lives at the start of a game
pub const START_LIVES: u32 = 3;

/// Level at the start of a game
pub const START_LEVEL: u32 = 1;

/// Successful words between level-ups
pub const WORDS_PER_LEVEL: u32 = 15;

/// Levels per additional guaranteed word on screen
pub const LEVELS_PER_MIN_WORD: u32 = 3;

/// Probability of an extra spawn at level 0
pub const BASE_SPAWN_CHANCE: f64 = 0.08;

/// Probability added to the extra-spawn chance per level
pub const SPAWN_CHANCE_PER_LEVEL: f64 = 0.01;

/// Base particle count of a destruction burst
pub const BURST_BASE_PARTICLES: usize = 8;

/// Extra particles per letter of the destroyed word
pub const BURST_PARTICLES_PER_LETTER: usize = 2;

/// Particle speed range (cells per tick), lower bound inclusive
pub const PARTICLE_SPEED_MIN: f32 = 0.5;

/// Particle speed range (cells per tick), upper bound exclusive
pub const PARTICLE_SPEED_MAX: f32 = 2.0;

/// Shortest particle lifetime in ticks
pub const PARTICLE_LIFETIME_MIN: u8 = 3;

/// Longest particle lifetime in ticks
pub const PARTICLE_LIFETIME_MAX: u8 = 5;

/// Glyphs a particle can be drawn with
pub const PARTICLE_GLYPHS: [char; 8] = ['*', '+', '#', 'o', '.', '~', '^', 'x'];

/// Default dictionary location
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Lifecycle phase of a game
///
/// - **Playing**: ticks and keystrokes are processed
/// - **Paused**: ticks, letters and backspace are ignored until unpaused
/// - **GameOver**: terminal; only quitting (and repainting) is possible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    /// Lowercase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }
}

/// Everything that can happen to a running game
///
/// Timer ticks and keyboard input are serialized into one stream of these
/// before they reach the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Fixed timestep elapsed
    Tick,
    /// A lowercase letter `a`-`z` was typed
    Letter(char),
    /// Delete the last typed letter
    Backspace,
    /// Pause or resume
    PauseToggle,
    /// The terminal changed size
    Resize(u16, u16),
    /// Repaint the whole screen
    Redraw,
    /// Leave the game
    Quit,
}

impl GameEvent {
    /// True for events that edit the input buffer
    pub fn is_keystroke(&self) -> bool {
        matches!(self, GameEvent::Letter(_) | GameEvent::Backspace)
    }
}

/// What the hosting loop should do after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running; draw the next frame as usual
    Continue,
    /// Keep running; force a full repaint
    Redraw,
    /// Keep running; the viewport is now `width` x `height`
    Resize { width: u16, height: u16 },
    /// Stop the loop
    Quit,
}
