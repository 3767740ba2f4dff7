//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The world is scaled uniformly to fit the viewport (minus the HUD row),
//! drawn through [`PixelCanvas`] and centred. Whatever the world does not
//! cover stays black.

use crate::core::{GameState, Phase};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::raster::PixelCanvas;
use crate::types::World;

const SKY: Rgb = Rgb::new(112, 197, 206);
const LETTERBOX: Rgb = Rgb::BLACK;
const HUD_ROWS: u16 = 1;

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

/// Pixel size and scale that fit `world` inside `avail_w` x `avail_h` pixels.
fn fit(world: &World, avail_w: u16, avail_h: u16) -> (u16, u16, f64) {
    if world.width <= 0 || world.height <= 0 {
        return (0, 0, 0.0);
    }
    let scale = (avail_w as f64 / world.width as f64).min(avail_h as f64 / world.height as f64);
    // Epsilon absorbs rounding when the scale is exactly avail / world.
    let w = ((world.width as f64 * scale + 1e-9).floor() as u16).min(avail_w);
    let h = ((world.height as f64 * scale + 1e-9).floor() as u16).min(avail_h);
    (w, h, scale)
}

/// A lightweight terminal renderer for the game.
///
/// Holds a reusable pixel canvas so steady-state frames do not allocate.
pub struct GameView {
    canvas: PixelCanvas,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            canvas: PixelCanvas::new(0, 0, 1.0),
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&mut self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(LETTERBOX, LETTERBOX),
        });
        if viewport.width == 0 || viewport.height <= HUD_ROWS {
            return;
        }

        let play_rows = viewport.height - HUD_ROWS;
        let (px_w, px_h, scale) = fit(game.world(), viewport.width, play_rows.saturating_mul(2));

        self.canvas.resize(px_w, px_h, scale);
        self.canvas.clear(SKY);
        game.draw(&mut self.canvas);

        let rows = px_h.div_ceil(2);
        let start_x = (viewport.width - px_w) / 2;
        let start_y = (play_rows - rows) / 2;
        self.canvas.blit_into(fb, start_x, start_y, LETTERBOX);

        let hud_y = (start_y + rows).min(viewport.height - 1);
        self.draw_hud(fb, game, start_x, hud_y);

        let mid_y = start_y + rows / 2;
        match game.phase() {
            Phase::Ready => {
                draw_centered(fb, viewport.width, mid_y, "PRESS SPACE TO FLAP");
                draw_centered(
                    fb,
                    viewport.width,
                    mid_y.saturating_add(1),
                    "G POWER-UP  P PAUSE  Q QUIT",
                );
            }
            Phase::Paused => draw_centered(fb, viewport.width, mid_y, "PAUSED"),
            Phase::GameOver => {
                draw_centered(fb, viewport.width, mid_y, "GAME OVER");
                draw_centered(
                    fb,
                    viewport.width,
                    mid_y.saturating_add(1),
                    "PRESS R TO RESTART",
                );
            }
            Phase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, game: &GameState, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), LETTERBOX).bold();
        let value = CellStyle::new(Rgb::new(255, 235, 59), LETTERBOX);

        let mut cx = fb.put_str(x, y, "SCORE ", label);
        cx = fb.put_u32(cx, y, game.score(), value);
        cx = fb.put_str(cx, y, "  BEST ", label);
        cx = fb.put_u32(cx, y, game.best_score().max(game.score()), value);
        cx = fb.put_str(cx, y, "  POWER ", label);
        cx = fb.put_u32(cx, y, game.power_ups(), value);

        let bird = game.bird();
        if bird.no_gravity() {
            let frozen = CellStyle::new(Rgb::new(120, 210, 255), LETTERBOX).bold();
            cx = fb.put_str(cx, y, "  FROZEN ", frozen);
            fb.put_u32(cx, y, bird.frozen_inputs_remaining().max(0) as u32, frozen);
        }
    }
}

fn draw_centered(fb: &mut FrameBuffer, width: u16, y: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = width.saturating_sub(text_w) / 2;
    let style = CellStyle::new(Rgb::WHITE, LETTERBOX).bold();
    fb.put_str(x, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_keeps_aspect_ratio() {
        let world = World::new(1080, 566);
        let (w, h, scale) = fit(&world, 80, 46);
        assert_eq!(w, 80);
        assert_eq!(h, 41);
        assert!((scale - 80.0 / 1080.0).abs() < 1e-12);
    }

    #[test]
    fn fit_is_height_bound_on_wide_viewports() {
        let world = World::new(100, 50);
        let (w, h, _) = fit(&world, 400, 50);
        assert_eq!((w, h), (100, 50));
    }

    #[test]
    fn tiny_viewport_renders_nothing() {
        let mut view = GameView::new();
        let fb = view.render(&GameState::new(1), Viewport::new(10, 1));
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }
}
