//! Terminal "game renderer" module.
//!
//! Rasterizes the core's drawing primitives into a framebuffer of half-block
//! glyphs (two pixels per cell) and flushes it to the terminal with crossterm.
//! Everything except [`TerminalRenderer`] is pure and unit-testable.

pub mod fb;
pub mod game_view;
pub mod raster;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use raster::{PixelCanvas, HALF_BLOCK};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
