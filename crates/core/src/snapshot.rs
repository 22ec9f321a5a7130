use std::time::Duration;

use arrayvec::ArrayVec;

use crate::effect::Particle;
use crate::scoring::words_per_minute;
use crate::types::{Phase, MAX_WORDS};
use crate::word::{Word, WordId, WordText};

/// Read-only copy of everything the view needs for one frame.
///
/// Reuse one snapshot across frames with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into); after the
/// first frame no allocation happens unless the particle count grows.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Falling words in spawn order
    pub words: ArrayVec<Word, MAX_WORDS>,
    /// Word the input buffer is matched against
    pub current: Option<WordId>,
    /// Particles of every live effect, flattened
    pub particles: Vec<Particle>,
    pub input: WordText,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub words_typed: u32,
    pub phase: Phase,
    pub elapsed: Duration,
}

impl GameSnapshot {
    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn current_word(&self) -> Option<&Word> {
        let id = self.current?;
        self.words.iter().find(|w| w.id == id)
    }

    pub fn wpm(&self) -> u32 {
        words_per_minute(self.words_typed, self.elapsed)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            words: ArrayVec::new(),
            current: None,
            particles: Vec::new(),
            input: WordText::new(),
            score: 0,
            level: 0,
            lives: 0,
            words_typed: 0,
            phase: Phase::Playing,
            elapsed: Duration::ZERO,
        }
    }
}
