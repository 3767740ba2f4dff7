//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # World Dimensions
//!
//! The playfield is measured in world units; renderers scale it to whatever
//! surface they draw on:
//!
//! - **Width**: 1080 units
//! - **Height**: 566 units
//! - **Bird spawn**: (150, 200)
//!
//! # Physics Constants
//!
//! All physics is expressed per tick:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.5 | Downward acceleration added every tick |
//! | `TERMINAL_VELOCITY` | 12.0 | Fall speed cap (no cap when rising) |
//! | `JUMP_VELOCITY` | -9.0 | Velocity set (not added) by a flap |
//! | `PIPE_SCROLL_SPEED` | 6 | Leftward pipe movement per tick |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{Rect, World};
//!
//! let world = World::default();
//! assert_eq!(world.width, 1080);
//! assert_eq!(world.height, 566);
//!
//! let a = Rect::new(0, 0, 10, 10);
//! assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
//! assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
//! ```

/// Default world width in world units
pub const WORLD_WIDTH: i32 = 1080;

/// Default world height in world units
pub const WORLD_HEIGHT: i32 = 566;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Bird spawn x (top-left of the sprite box)
pub const BIRD_SPAWN_X: f64 = 150.0;

/// Bird spawn y (top-left of the sprite box)
pub const BIRD_SPAWN_Y: f64 = 200.0;

/// Bird sprite width
pub const BIRD_WIDTH: i32 = 60;

/// Bird sprite height
pub const BIRD_HEIGHT: i32 = 45;

/// Hitbox inset applied on every side of the bird sprite
pub const BIRD_HITBOX_PADDING: i32 = 6;

/// Downward acceleration per tick
pub const GRAVITY: f64 = 0.5;

/// Maximum downward velocity
pub const TERMINAL_VELOCITY: f64 = 12.0;

/// Velocity assigned by a flap
pub const JUMP_VELOCITY: f64 = -9.0;

/// Number of jump inputs the no-gravity power-up lasts
pub const NO_GRAVITY_INPUTS: i32 = 3;

/// Tilt in degrees per unit of velocity
pub const TILT_DEGREES_PER_VELOCITY: f64 = 3.0;

/// Maximum nose-down tilt in degrees
pub const TILT_MAX_DEGREES: f64 = 30.0;

/// Maximum nose-up tilt in degrees (negative = up)
pub const TILT_MIN_DEGREES: f64 = -20.0;

/// Pipe width
pub const PIPE_WIDTH: i32 = 90;

/// Leftward pipe movement per tick
pub const PIPE_SCROLL_SPEED: i32 = 6;

/// Gap used while a pipe has recycled at most `WIDE_GAP_RECYCLES` times
pub const WIDE_GAP: i32 = 300;

/// Gap used once a pipe has recycled more than `WIDE_GAP_RECYCLES` times
pub const NARROW_GAP: i32 = 180;

/// Recycles that still use the wide gap
pub const WIDE_GAP_RECYCLES: u32 = 3;

/// Smallest top-segment height (inclusive)
pub const TOP_HEIGHT_MIN: i32 = 50;

/// Largest top-segment height (exclusive)
pub const TOP_HEIGHT_MAX: i32 = 330;

/// Number of pipes the game keeps in flight
pub const PIPE_COUNT: usize = 3;

/// Points needed to earn one no-gravity power-up charge
pub const POWER_UP_SCORE_INTERVAL: u32 = 5;

/// Explicit world-size configuration.
///
/// Passed into pipe construction, update, collision and draw calls instead of
/// being read from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct World {
    pub width: i32,
    pub height: i32,
}

impl World {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT)
    }
}

/// Integer axis-aligned rectangle (top-left origin, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check whether two rectangles share interior area
    ///
    /// Empty rectangles never intersect anything, and rectangles that only
    /// touch along an edge do not intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flappy_types::Rect;
    ///
    /// let r = Rect::new(0, 0, 4, 4);
    /// assert!(r.intersects(&Rect::new(3, 3, 4, 4)));
    /// assert!(!r.intersects(&Rect::new(0, 4, 4, 4)));
    /// assert!(!r.intersects(&Rect::new(1, 1, 0, 2)));
    /// ```
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// Player-facing game actions
///
/// Produced by terminal input mapping and consumed by the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flap (jump); also starts a run from the ready screen
    Flap,
    /// Spend a power-up charge to freeze the bird in place
    PowerUp,
    /// Toggle pause state
    Pause,
    /// Restart the game (when game over or at any time)
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physics_defaults() {
        assert_eq!(GRAVITY, 0.5);
        assert_eq!(TERMINAL_VELOCITY, 12.0);
        assert_eq!(JUMP_VELOCITY, -9.0);
        assert_eq!(NO_GRAVITY_INPUTS, 3);
        assert_eq!(PIPE_SCROLL_SPEED, 6);
        assert!(NARROW_GAP < WIDE_GAP);
        assert!(TOP_HEIGHT_MIN < TOP_HEIGHT_MAX);
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(10, 10, 20, 20);
        assert!(a.intersects(&Rect::new(0, 0, 11, 11)));
        assert!(a.intersects(&Rect::new(15, 15, 2, 2)));
        assert!(Rect::new(15, 15, 2, 2).intersects(&a));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(10, 10, 20, 20);
        assert!(!a.intersects(&Rect::new(30, 10, 5, 5)));
        assert!(!a.intersects(&Rect::new(10, 30, 5, 5)));
        assert!(!a.intersects(&Rect::new(0, 0, 10, 10)));
    }

    #[test]
    fn empty_rects_never_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        assert!(!a.intersects(&Rect::new(10, 10, 0, 10)));
        assert!(!a.intersects(&Rect::new(10, 10, 10, -5)));
        assert!(!Rect::new(10, 10, -1, 10).intersects(&a));
    }
}
