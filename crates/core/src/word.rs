//! Falling words.

use arrayvec::ArrayString;

use crate::types::{GRID_WIDTH, MAX_WORD_LEN, PLAYABLE_HEIGHT};

/// Fixed-capacity storage for a word (and for the input buffer).
pub type WordText = ArrayString<MAX_WORD_LEN>;

/// Identifier of a spawned word, unique within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub u32);

/// A word falling down the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    pub id: WordId,
    pub text: WordText,
    /// Column of the first letter; fixed after spawn
    pub x: u16,
    /// Row, 0 at the top
    pub y: u16,
    /// Length of the prefix typed so far
    pub matched: usize,
}

impl Word {
    pub fn new(id: WordId, text: WordText, x: u16, y: u16) -> Self {
        Self {
            id,
            text,
            x,
            y,
            matched: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the word lies entirely inside the grid width
    pub fn fits(&self) -> bool {
        self.x as usize + self.len() <= GRID_WIDTH as usize
    }

    /// Move down one row. Returns true once the word has left the playfield.
    pub fn advance(&mut self) -> bool {
        self.y = self.y.saturating_add(1);
        self.y >= PLAYABLE_HEIGHT
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }

    /// Typed in full
    pub fn is_complete(&self) -> bool {
        self.matched == self.len()
    }

    /// The typed part and the rest, for highlighting
    pub fn split_matched(&self) -> (&str, &str) {
        self.text.split_at(self.matched.min(self.len()))
    }
}
