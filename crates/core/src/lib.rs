//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the bird physics, the scrolling pipes and the per-tick
//! driver that ties them together. It has **no dependencies** on the terminal,
//! input devices or any graphics library, making it:
//!
//! - **Deterministic**: Same seed produces identical pipe layouts
//! - **Testable**: Drawing goes through the [`Canvas`] trait and can be recorded
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`bird`]: Gravity, flap impulse, hitbox and the no-gravity power-up
//! - [`pipe`]: Scrolling obstacle that recycles in place with a narrowing gap
//! - [`rng`]: Per-pipe random generator for gap placement
//! - [`canvas`]: Drawing-primitives interface and a recording implementation
//! - [`game_state`]: Tick driver, collision policy and scoring
//!
//! # Game Rules
//!
//! - **Gravity**: +0.5 velocity per tick, capped at 12.0 falling speed
//! - **Flap**: Sets velocity to -9.0 (not additive)
//! - **Pipes**: Scroll 6 units per tick; the gap is 300 for a pipe's first
//!   three recycles and 180 forever after
//! - **Power-up**: Freezes the bird in place for 3 flap inputs; the third
//!   input ends the freeze without flapping. One charge every 5 points.
//! - **Game over**: Touching a pipe (unless frozen) or leaving the world
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::GameState;
//! use tui_flappy_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! // The first flap starts the run.
//! game.apply_action(GameAction::Flap);
//! game.tick();
//!
//! assert!(game.bird().velocity() < 0.0);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! All physics is per tick. Call [`GameState::tick`](game_state::GameState::tick)
//! once every `TICK_MS` (16ms).

pub mod bird;
pub mod canvas;
pub mod game_state;
pub mod pipe;
pub mod rng;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use game_state::{GameState, Phase};
pub use pipe::{gap_for_pass_count, Pipe};
pub use rng::PipeRng;
