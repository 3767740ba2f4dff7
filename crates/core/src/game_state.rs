//! Game state module - the per-tick driver around the bird and the pipes
//!
//! This module owns one bird and a fixed pool of pipes, advances them in a
//! deterministic order every tick (bird first, then each pipe), applies the
//! collision / out-of-bounds game-over policy, and keeps the score.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::bird::Bird;
use crate::canvas::Canvas;
use crate::pipe::Pipe;
use crate::types::*;

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the first flap; nothing moves
    Ready,
    Playing,
    Paused,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    world: World,
    bird: Bird,
    pipes: ArrayVec<Pipe, PIPE_COUNT>,
    seed: u64,
    phase: Phase,
    score: u32,
    best_score: u32,
    power_ups: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Ticks advanced while playing in the current episode.
    ticks: u64,
}

/// Horizontal distance a pipe covers between two recycles.
fn scroll_period(world: &World) -> i32 {
    ((world.width + PIPE_WIDTH) / PIPE_SCROLL_SPEED + 1) * PIPE_SCROLL_SPEED
}

/// Derive the seed of pipe `index` from the session seed.
fn pipe_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Advance a session seed (64-bit LCG step, Knuth MMIX constants).
fn next_seed(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

impl GameState {
    /// Create a new game in the default world with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_world(World::default(), seed)
    }

    /// Create a new game in a custom world
    ///
    /// Pipes are staggered evenly across one scroll period, starting at the
    /// right edge, so their spacing stays constant as they recycle.
    pub fn with_world(world: World, seed: u64) -> Self {
        let steps = scroll_period(&world) / PIPE_SCROLL_SPEED;
        let spacing = (steps / PIPE_COUNT as i32) * PIPE_SCROLL_SPEED;

        let mut pipes = ArrayVec::new();
        for i in 0..PIPE_COUNT {
            let mut pipe = Pipe::with_seed(&world, pipe_seed(seed, i));
            pipe.x += spacing * i as i32;
            pipes.push(pipe);
        }

        Self {
            world,
            bird: Bird::new(),
            pipes,
            seed,
            phase: Phase::Ready,
            score: 0,
            best_score: 0,
            power_ups: 0,
            episode_id: 0,
            ticks: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn pipes_mut(&mut self) -> &mut [Pipe] {
        &mut self.pipes
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Unspent no-gravity power-up charges
    pub fn power_ups(&self) -> u32 {
        self.power_ups
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Grant a power-up charge from an external trigger
    pub fn grant_power_up(&mut self) {
        self.power_ups += 1;
    }

    /// Leave the ready screen and start moving
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Playing;
        info!(seed = self.seed, episode = self.episode_id, "run started");
    }

    /// Whether the bird has left the world vertically
    pub fn bird_out_of_bounds(&self) -> bool {
        let bottom = self.bird.y + self.bird.height as f64;
        bottom > self.world.height as f64 || bottom < 0.0
    }

    /// Main game tick
    ///
    /// Returns `true` if the simulation advanced.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.ticks += 1;

        self.bird.update();

        // The frozen bird is also invulnerable to pipes.
        let invulnerable = self.bird.no_gravity();
        let bird_x = self.bird.x as i32;
        let mut hit = false;
        let mut cleared = 0u32;

        for pipe in self.pipes.iter_mut() {
            pipe.update(&self.world);

            if !invulnerable && pipe.collides(&self.bird, &self.world) {
                hit = true;
            }

            if !pipe.is_passed && pipe.right() < bird_x {
                pipe.is_passed = true;
                cleared += 1;
            }
        }

        for _ in 0..cleared {
            self.add_point();
        }

        if hit || self.bird_out_of_bounds() {
            self.end_run(hit);
        }

        true
    }

    fn add_point(&mut self) {
        self.score += 1;
        if self.score % POWER_UP_SCORE_INTERVAL == 0 {
            self.power_ups += 1;
            debug!(score = self.score, charges = self.power_ups, "power-up awarded");
        }
    }

    fn end_run(&mut self, hit_pipe: bool) {
        self.phase = Phase::GameOver;
        self.best_score = self.best_score.max(self.score);
        let cause = if hit_pipe { "pipe" } else { "bounds" };
        info!(
            score = self.score,
            best = self.best_score,
            ticks = self.ticks,
            cause,
            "game over"
        );
    }

    /// Apply a game action
    ///
    /// Returns `true` if the action had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flap => match self.phase {
                Phase::Ready => {
                    self.start();
                    self.bird.jump();
                    true
                }
                Phase::Playing => {
                    self.bird.jump();
                    true
                }
                Phase::Paused | Phase::GameOver => false,
            },
            GameAction::PowerUp => {
                if self.phase != Phase::Playing || self.power_ups == 0 {
                    return false;
                }
                self.power_ups -= 1;
                self.bird.activate_no_gravity();
                true
            }
            GameAction::Pause => match self.phase {
                Phase::Playing => {
                    self.phase = Phase::Paused;
                    true
                }
                Phase::Paused => {
                    self.phase = Phase::Playing;
                    true
                }
                Phase::Ready | Phase::GameOver => false,
            },
            GameAction::Restart => {
                let best = self.best_score.max(self.score);
                let next_episode = self.episode_id.wrapping_add(1);
                *self = Self::with_world(self.world, next_seed(self.seed));
                self.best_score = best;
                self.episode_id = next_episode;
                true
            }
        }
    }

    /// Render pipes, then the bird
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for pipe in &self.pipes {
            pipe.draw(canvas, &self.world);
        }
        self.bird.draw(canvas);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
