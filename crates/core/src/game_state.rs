//! Game state module - manages the complete game state
//!
//! This module ties together the dictionary, falling words, particle effects
//! and scoring. It owns the per-tick simulation (descent, effect decay,
//! spawning), the typing matcher, and the Playing/Paused/GameOver lifecycle.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::dictionary::Dictionary;
use crate::effect::Effect;
use crate::rng::GameRng;
use crate::scoring::{
    hit_score, is_level_up, min_live_words, spawn_column_bound, spawn_probability,
    words_per_minute,
};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::word::{Word, WordId, WordText};

/// Result of feeding one letter to the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Not a lowercase letter, or the game is not running
    Ignored,
    /// The buffer is a prefix of this word
    Progress { id: WordId, matched: usize },
    /// The word was typed in full and destroyed
    Hit { id: WordId, points: u32 },
    /// No word starts with the buffer; the buffer was discarded
    Miss,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    dictionary: Dictionary,
    rng: GameRng,
    /// Falling words in spawn order.
    words: ArrayVec<Word, MAX_WORDS>,
    effects: Vec<Effect>,
    /// Id handed to the next spawned word.
    next_word_id: u32,
    /// Word the input buffer currently matches.
    current: Option<WordId>,
    input: WordText,
    score: u32,
    level: u32,
    lives: u32,
    words_typed: u32,
    phase: Phase,
    /// Ticks actually simulated (paused and game-over ticks excluded).
    ticks: u64,
    started_at: Instant,
    finished_at: Option<Instant>,
}

impl GameState {
    /// Create a new game drawing words from `dictionary` with the given RNG seed
    pub fn new(dictionary: Dictionary, seed: u64) -> Self {
        Self {
            dictionary,
            rng: GameRng::new(seed),
            words: ArrayVec::new(),
            effects: Vec::new(),
            next_word_id: 0,
            current: None,
            input: WordText::new(),
            score: 0,
            level: START_LEVEL,
            lives: START_LIVES,
            words_typed: 0,
            phase: Phase::Playing,
            ticks: 0,
            started_at: Instant::now(),
            finished_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn words_typed(&self) -> u32 {
        self.words_typed
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn current_id(&self) -> Option<WordId> {
        self.current
    }

    pub fn current(&self) -> Option<&Word> {
        let id = self.current?;
        self.words.iter().find(|w| w.id == id)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Time since the game started; frozen once the game is over
    pub fn elapsed(&self) -> Duration {
        match self.finished_at {
            Some(end) => end.duration_since(self.started_at),
            None => self.started_at.elapsed(),
        }
    }

    pub fn wpm(&self) -> u32 {
        words_per_minute(self.words_typed, self.elapsed())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.words.clear();
        out.words.extend(self.words.iter().copied());
        out.current = self.current;
        out.particles.clear();
        out.particles
            .extend(self.effects.iter().flat_map(|e| e.particles().iter().copied()));
        out.input = self.input;
        out.score = self.score;
        out.level = self.level;
        out.lives = self.lives;
        out.words_typed = self.words_typed;
        out.phase = self.phase;
        out.elapsed = self.elapsed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Place a word directly, bypassing the spawn policy.
    ///
    /// Returns `None` when the playfield is at capacity, the text is not
    /// 1..=`MAX_WORD_LEN` lowercase letters, or the word would not fit at
    /// `(x, y)`.
    pub fn insert_word(&mut self, text: &str, x: u16, y: u16) -> Option<WordId> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return None;
        }
        let text = WordText::from(text).ok()?;
        if y >= PLAYABLE_HEIGHT || x as usize + text.len() > GRID_WIDTH as usize {
            return None;
        }
        self.push_word(text, x, y)
    }

    fn push_word(&mut self, text: WordText, x: u16, y: u16) -> Option<WordId> {
        let id = WordId(self.next_word_id);
        self.words.try_push(Word::new(id, text, x, y)).ok()?;
        self.next_word_id = self.next_word_id.wrapping_add(1);
        Some(id)
    }

    /// Main game tick: descent, effect decay, then spawning.
    ///
    /// Returns false when nothing was simulated (paused or game over).
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.ticks = self.ticks.wrapping_add(1);

        self.descend();
        if self.phase == Phase::GameOver {
            return true;
        }

        self.step_effects();
        self.maybe_spawn();
        true
    }

    /// Move every word down one row and charge a life for each one that fell out.
    fn descend(&mut self) {
        let current = self.current;
        let mut lost: u32 = 0;
        let mut current_lost = false;

        self.words.retain(|w| {
            if w.advance() {
                lost += 1;
                current_lost |= Some(w.id) == current;
                false
            } else {
                true
            }
        });

        if lost == 0 {
            return;
        }
        self.lives = self.lives.saturating_sub(lost);
        log::debug!("{} word(s) reached the floor, {} lives left", lost, self.lives);

        if current_lost {
            self.input.clear();
            self.current = None;
        }

        if self.lives == 0 {
            self.phase = Phase::GameOver;
            self.finished_at = Some(Instant::now());
            log::info!(
                "game over: score {}, level {}, {} words",
                self.score,
                self.level,
                self.words_typed
            );
        }
    }

    fn step_effects(&mut self) {
        for effect in &mut self.effects {
            effect.step();
        }
        self.effects.retain(|e| !e.is_finished());
    }

    /// Spawn policy: always keep the level's minimum on screen, then roll
    /// for one extra word per tick.
    fn maybe_spawn(&mut self) {
        let live = self.words.len();
        if live >= MAX_WORDS {
            return;
        }
        let spawn = live < min_live_words(self.level)
            || self.rng.chance(spawn_probability(self.level));
        if !spawn {
            return;
        }

        let text = *self.dictionary.sample(&mut self.rng);
        let x = self.rng.below(spawn_column_bound(text.len()) as usize + 1) as u16;
        self.push_word(text, x, 0);
    }

    /// Feed one typed letter to the matcher.
    pub fn type_letter(&mut self, ch: char) -> MatchOutcome {
        if self.phase != Phase::Playing || !ch.is_ascii_lowercase() {
            return MatchOutcome::Ignored;
        }
        if self.input.try_push(ch).is_err() {
            // Longer than any word can be.
            self.reset_input();
            return MatchOutcome::Miss;
        }

        let input = self.input;
        let Some(idx) = self.words.iter().position(|w| w.starts_with(&input)) else {
            self.reset_input();
            return MatchOutcome::Miss;
        };

        let id = self.words[idx].id;
        if self.current != Some(id) {
            self.clear_progress();
            self.current = Some(id);
        }

        let word = &mut self.words[idx];
        word.matched = input.len();
        if word.is_complete() {
            return self.destroy(idx);
        }
        MatchOutcome::Progress {
            id,
            matched: input.len(),
        }
    }

    /// Remove a fully typed word, score it and explode it.
    fn destroy(&mut self, idx: usize) -> MatchOutcome {
        let word = self.words.remove(idx);
        let points = hit_score(word.len(), self.level);
        self.score = self.score.saturating_add(points);
        self.words_typed = self.words_typed.saturating_add(1);
        self.effects
            .push(Effect::burst(word.x, word.y, word.len(), &mut self.rng));
        self.input.clear();
        self.current = None;

        if is_level_up(self.words_typed) {
            self.level += 1;
            log::info!("level {} after {} words", self.level, self.words_typed);
        }

        MatchOutcome::Hit {
            id: word.id,
            points,
        }
    }

    /// Delete the last typed letter. Matching restarts on the next letter.
    pub fn backspace(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let removed = self.input.pop().is_some();
        self.clear_progress();
        self.current = None;
        removed
    }

    /// Switch between Playing and Paused. No effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            Phase::GameOver => return false,
        };
        true
    }

    /// Apply one event and tell the host loop how to continue.
    pub fn handle_event(&mut self, event: GameEvent) -> Control {
        match event {
            GameEvent::Tick => {
                self.tick();
                Control::Continue
            }
            GameEvent::Letter(ch) => {
                self.type_letter(ch);
                Control::Continue
            }
            GameEvent::Backspace => {
                self.backspace();
                Control::Continue
            }
            GameEvent::PauseToggle => {
                self.toggle_pause();
                Control::Continue
            }
            GameEvent::Resize(width, height) => Control::Resize { width, height },
            GameEvent::Redraw => Control::Redraw,
            GameEvent::Quit => Control::Quit,
        }
    }

    fn reset_input(&mut self) {
        self.clear_progress();
        self.input.clear();
        self.current = None;
    }

    /// Forget the typed progress on the current word, if any.
    fn clear_progress(&mut self) {
        let Some(id) = self.current else {
            return;
        };
        if let Some(word) = self.words.iter_mut().find(|w| w.id == id) {
            word.matched = 0;
        }
    }
}
