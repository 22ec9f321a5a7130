//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, relative to the frame origin:
//!
//! ```text
//! rows 0..21   playfield (80 columns)
//! row  21      separator
//! row  22      status line
//! row  24      pause banner (only while paused)
//! row  25      help line
//! ```

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GRID_HEIGHT, GRID_WIDTH, PLAYABLE_HEIGHT};

/// Total rows the view occupies.
pub const FRAME_HEIGHT: u16 = GRID_HEIGHT + 3;

const PAUSE_ROW: u16 = GRID_HEIGHT + 1;
const HELP_ROW: u16 = GRID_HEIGHT + 2;

const PAUSE_TEXT: &str = "[PAUSED - Press SPACE to resume]";
const HELP_TEXT: &str = "[ctrl+c: quit | SPACE: pause | ctrl+l: redraw]";

const CYAN: Rgb = Rgb::new(0, 255, 255);
const DARK_TURQUOISE: Rgb = Rgb::new(0, 206, 209);
const LIGHT_GREY: Rgb = Rgb::new(204, 204, 204);
const GREY: Rgb = Rgb::new(136, 136, 136);

const WORD: CellStyle = CellStyle::fg(DARK_TURQUOISE);
const MATCHED: CellStyle = CellStyle::fg(Rgb::BLACK).on(CYAN).bold();
const PARTICLE: CellStyle = CellStyle::fg(CYAN).bold();
const SEPARATOR: CellStyle = CellStyle::fg(DARK_TURQUOISE);
const STATUS: CellStyle = CellStyle::fg(LIGHT_GREY);
const BANNER: CellStyle = CellStyle::fg(CYAN).bold();
const HELP: CellStyle = CellStyle::fg(GREY);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal renderer for the typing game.
///
/// The 80-column frame is centred in the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Top-left corner of the frame inside `viewport`.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        (
            viewport.width.saturating_sub(GRID_WIDTH) / 2,
            viewport.height.saturating_sub(FRAME_HEIGHT) / 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let origin = self.origin(viewport);
        if snap.game_over() {
            self.draw_summary(fb, snap, origin);
            return;
        }

        self.draw_words(fb, snap, origin);
        self.draw_particles(fb, snap, origin);
        self.draw_status(fb, snap, origin);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_words(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, (ox, oy): (u16, u16)) {
        for word in &snap.words {
            if word.y >= PLAYABLE_HEIGHT {
                continue;
            }
            let (typed, rest) = if snap.current == Some(word.id) {
                word.split_matched()
            } else {
                ("", word.text.as_str())
            };
            let y = oy + word.y;
            let x = self.put_clipped(fb, ox, word.x, y, typed, MATCHED);
            let x = x.saturating_sub(ox);
            self.put_clipped(fb, ox, x, y, rest, WORD);
        }
    }

    /// Write `s` at grid column `x`, clipped to the playfield width.
    /// Returns the absolute column after the text.
    fn put_clipped(
        &self,
        fb: &mut FrameBuffer,
        ox: u16,
        x: u16,
        y: u16,
        s: &str,
        style: CellStyle,
    ) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= GRID_WIDTH {
                break;
            }
            fb.put_char(ox + cx, y, ch, style);
            cx += 1;
        }
        ox + cx
    }

    fn draw_particles(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, (ox, oy): (u16, u16)) {
        for p in &snap.particles {
            let (px, py) = (p.x.round(), p.y.round());
            if px < 0.0
                || py < 0.0
                || px >= f32::from(GRID_WIDTH)
                || py >= f32::from(PLAYABLE_HEIGHT)
            {
                continue;
            }
            fb.put_char(ox + px as u16, oy + py as u16, p.glyph, PARTICLE);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, (ox, oy): (u16, u16)) {
        fb.hline(ox, oy + PLAYABLE_HEIGHT, GRID_WIDTH, '─', SEPARATOR);

        let y = oy + PLAYABLE_HEIGHT + 1;
        let fields = [
            ("Score: ", snap.score),
            ("  Level: ", snap.level),
            ("  Lives: ", snap.lives),
            ("  Words: ", snap.words_typed),
            ("  WPM: ", snap.wpm()),
        ];
        let mut x = ox;
        for (label, value) in fields {
            x = fb.put_str(x, y, label, STATUS);
            x = fb.put_u32(x, y, value, STATUS);
        }
        x = fb.put_str(x, y, "  Input: ", STATUS);
        fb.put_str(x, y, &snap.input, STATUS);

        if snap.paused() {
            fb.put_str(ox, oy + PAUSE_ROW, PAUSE_TEXT, BANNER);
        }
        fb.put_str(ox, oy + HELP_ROW, HELP_TEXT, HELP);
    }

    fn draw_summary(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, (ox, oy): (u16, u16)) {
        let stats = [
            ("Final Score: ", snap.score),
            ("Level Reached: ", snap.level),
            ("Words Typed: ", snap.words_typed),
        ];

        let mut y = oy + 2;
        self.put_centered(fb, ox, y, "GAME OVER", BANNER);
        y += 2;
        for (label, value) in stats {
            let width = label.len() as u16 + digit_count(value);
            let x = ox + GRID_WIDTH.saturating_sub(width) / 2;
            let x = fb.put_str(x, y, label, STATUS);
            fb.put_u32(x, y, value, STATUS);
            y += 1;
        }
        y += 2;
        self.put_centered(fb, ox, y, "Press 'q' to quit", HELP);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, ox: u16, y: u16, s: &str, style: CellStyle) {
        let width = s.chars().count() as u16;
        fb.put_str(ox + GRID_WIDTH.saturating_sub(width) / 2, y, s, style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
