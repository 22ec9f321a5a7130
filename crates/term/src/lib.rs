//! Terminal front end for the typing game.
//!
//! Rendering is split in two stages:
//!
//! - [`GameView`] draws a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] flushes framebuffers to the terminal, sending only changed cells
//!
//! No widget toolkit is involved; every frame is a grid of styled cells.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use typefall_core as core;
pub use typefall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, FRAME_HEIGHT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
