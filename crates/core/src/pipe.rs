//! Pipe module - scrolling obstacle with a recycling gap
//!
//! A pipe is a top and bottom segment separated by a vertical gap. It scrolls
//! left every tick and, once fully off the left edge, recycles in place at the
//! right edge with fresh random geometry instead of being reallocated.
//!
//! Gap policy (per instance, one-way):
//!
//! | pass_count | gap |
//! |------------|-----|
//! | 0..=3 | `WIDE_GAP` (300) |
//! | 4+ | `NARROW_GAP` (180) |

use tracing::debug;

use crate::bird::Bird;
use crate::canvas::Canvas;
use crate::rng::PipeRng;
use crate::types::*;

const PIPE_GREEN: Rgb = Rgb::new(115, 190, 46);
const PIPE_DARK: Rgb = Rgb::new(83, 128, 34);
const PIPE_LIGHT: Rgb = Rgb::new(173, 230, 110);
const PIPE_BORDER: Rgb = Rgb::new(25, 18, 20);

const LIP_OVERHANG: i32 = 8;
const LIP_HEIGHT: i32 = 35;

/// Gap size for a given recycle count
///
/// # Examples
///
/// ```
/// use tui_flappy_core::pipe::gap_for_pass_count;
///
/// assert_eq!(gap_for_pass_count(0), 300);
/// assert_eq!(gap_for_pass_count(3), 300);
/// assert_eq!(gap_for_pass_count(4), 180);
/// ```
pub fn gap_for_pass_count(pass_count: u32) -> i32 {
    if pass_count <= WIDE_GAP_RECYCLES {
        WIDE_GAP
    } else {
        NARROW_GAP
    }
}

/// Which side of the gap a segment is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Top,
    Bottom,
}

/// Scrolling pipe obstacle
#[derive(Debug, Clone)]
pub struct Pipe {
    pub x: i32,
    pub width: i32,
    /// Set by scoring once the bird has cleared this pipe; cleared on recycle.
    pub is_passed: bool,
    gap: i32,
    top_height: i32,
    pass_count: u32,
    rng: PipeRng,
}

impl Pipe {
    /// Create a pipe at the right edge with an entropy-seeded generator
    pub fn new(world: &World) -> Self {
        Self::with_rng(world, PipeRng::from_entropy())
    }

    /// Create a pipe at the right edge with a reproducible generator
    pub fn with_seed(world: &World, seed: u64) -> Self {
        Self::with_rng(world, PipeRng::from_seed(seed))
    }

    pub fn with_rng(world: &World, mut rng: PipeRng) -> Self {
        let top_height = rng.top_height();
        Self {
            x: world.width,
            width: PIPE_WIDTH,
            is_passed: false,
            gap: gap_for_pass_count(0),
            top_height,
            pass_count: 0,
            rng,
        }
    }

    pub fn gap(&self) -> i32 {
        self.gap
    }

    pub fn top_height(&self) -> i32 {
        self.top_height
    }

    pub fn pass_count(&self) -> u32 {
        self.pass_count
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Advance one tick
    ///
    /// Returns `true` if the pipe recycled this tick.
    pub fn update(&mut self, world: &World) -> bool {
        self.x -= PIPE_SCROLL_SPEED;

        if self.right() >= 0 {
            return false;
        }

        self.x = world.width;
        self.pass_count += 1;

        let gap = gap_for_pass_count(self.pass_count);
        if gap != self.gap {
            debug!(pass_count = self.pass_count, gap, "pipe gap narrowed");
        }
        self.gap = gap;
        self.top_height = self.rng.top_height();
        self.is_passed = false;

        debug!(
            pass_count = self.pass_count,
            top_height = self.top_height,
            "pipe recycled"
        );
        true
    }

    /// Upper obstacle rectangle for the current frame
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0, self.width, self.top_height)
    }

    /// Lower obstacle rectangle for the current frame
    ///
    /// Its height is the full world height, so it always reaches past the
    /// bottom edge.
    pub fn bottom_rect(&self, world: &World) -> Rect {
        Rect::new(self.x, self.top_height + self.gap, self.width, world.height)
    }

    /// Check whether the bird's hitbox touches either segment
    pub fn collides(&self, bird: &Bird, world: &World) -> bool {
        let hitbox = bird.bounds();
        hitbox.intersects(&self.top_rect()) || hitbox.intersects(&self.bottom_rect(world))
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, world: &World) {
        let bottom_y = self.top_height + self.gap;
        self.draw_segment(canvas, 0, self.top_height, Segment::Top);
        self.draw_segment(canvas, bottom_y, world.height - bottom_y, Segment::Bottom);
    }

    fn draw_segment<C: Canvas + ?Sized>(&self, canvas: &mut C, y: i32, h: i32, segment: Segment) {
        if h <= 0 {
            return;
        }

        let (x, y, w, h) = (self.x as f64, y as f64, self.width as f64, h as f64);

        // Body with highlight and shadow stripes.
        canvas.set_color(PIPE_GREEN);
        canvas.fill_rect(x, y, w, h);
        canvas.set_color(PIPE_LIGHT);
        canvas.fill_rect(x + 8.0, y, 15.0, h);
        canvas.set_color(PIPE_DARK);
        canvas.fill_rect(x + w - 23.0, y, 15.0, h);

        // Lip at the gap-facing end.
        let lip_w = w + 2.0 * LIP_OVERHANG as f64;
        let lip_h = LIP_HEIGHT as f64;
        let lip_x = x - LIP_OVERHANG as f64;
        let lip_y = match segment {
            Segment::Top => y + h - lip_h,
            Segment::Bottom => y,
        };

        canvas.set_color(PIPE_BORDER);
        canvas.set_stroke_width(4.0);
        canvas.stroke_rect(lip_x, lip_y, lip_w, lip_h);
        canvas.set_color(PIPE_GREEN);
        canvas.fill_rect(lip_x + 2.0, lip_y + 2.0, lip_w - 4.0, lip_h - 4.0);
        canvas.set_color(PIPE_LIGHT);
        canvas.fill_rect(lip_x + 10.0, lip_y + 4.0, 15.0, lip_h - 8.0);

        canvas.set_color(PIPE_BORDER);
        canvas.stroke_rect(x, y, w, h);
    }
}
