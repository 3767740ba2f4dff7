//! Bird module - player physics and the no-gravity power-up
//!
//! The bird falls under constant gravity with a terminal-velocity cap and
//! flaps by having its velocity set to a fixed upward impulse.
//!
//! The no-gravity power-up pins the bird at the height it had when activated.
//! It lasts a fixed number of *jump inputs*, not ticks: each flap while frozen
//! spends one input, and the flap that spends the last one ends the freeze
//! without jumping.

use tracing::debug;

use crate::canvas::Canvas;
use crate::types::*;

const OUTLINE: Rgb = Rgb::new(84, 56, 71);
const BODY: Rgb = Rgb::new(255, 235, 59);
const BEAK: Rgb = Rgb::new(255, 111, 0);
const FROZEN_AURA: Rgb = Rgb::new(120, 210, 255);

/// Player-controlled bird
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub width: i32,
    pub height: i32,
    velocity: f64,
    no_gravity: bool,
    frozen_y: f64,
    frozen_inputs_remaining: i32,
}

impl Bird {
    /// Create a bird at the spawn position, at rest
    pub fn new() -> Self {
        Self::at(BIRD_SPAWN_X, BIRD_SPAWN_Y)
    }

    /// Create a bird at an arbitrary position, at rest
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            velocity: 0.0,
            no_gravity: false,
            frozen_y: 0.0,
            frozen_inputs_remaining: 0,
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    pub fn no_gravity(&self) -> bool {
        self.no_gravity
    }

    pub fn frozen_y(&self) -> f64 {
        self.frozen_y
    }

    pub fn frozen_inputs_remaining(&self) -> i32 {
        self.frozen_inputs_remaining
    }

    /// Advance one tick
    pub fn update(&mut self) {
        if self.no_gravity {
            self.velocity = 0.0;
            self.y = self.frozen_y;
            return;
        }

        self.velocity += GRAVITY;
        if self.velocity > TERMINAL_VELOCITY {
            self.velocity = TERMINAL_VELOCITY;
        }
        self.y += self.velocity;
    }

    /// Process one flap input
    ///
    /// Returns `true` if the jump impulse was applied.
    pub fn jump(&mut self) -> bool {
        if self.no_gravity {
            self.frozen_inputs_remaining -= 1;
            if self.frozen_inputs_remaining <= 0 {
                self.no_gravity = false;
                debug!(y = self.y, "no-gravity power-up expired");
            }
            return false;
        }

        self.velocity = JUMP_VELOCITY;
        true
    }

    /// Enter (or restart) the no-gravity power-up at the current height
    pub fn activate_no_gravity(&mut self) {
        self.no_gravity = true;
        self.frozen_y = self.y;
        self.frozen_inputs_remaining = NO_GRAVITY_INPUTS;
        debug!(
            frozen_y = self.frozen_y,
            inputs = self.frozen_inputs_remaining,
            "no-gravity power-up activated"
        );
    }

    /// Hitbox, inset from the sprite on every side
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x as i32 + BIRD_HITBOX_PADDING,
            self.y as i32 + BIRD_HITBOX_PADDING,
            self.width - 2 * BIRD_HITBOX_PADDING,
            self.height - 2 * BIRD_HITBOX_PADDING,
        )
    }

    /// Tilt in radians for the current velocity, clamped to the tilt range
    pub fn tilt(&self) -> f64 {
        (self.velocity * TILT_DEGREES_PER_VELOCITY)
            .to_radians()
            .clamp(TILT_MIN_DEGREES.to_radians(), TILT_MAX_DEGREES.to_radians())
    }

    /// Vertical position of the wing: lowered on the upstroke.
    pub fn wing_y(&self) -> f64 {
        let y = self.y.trunc();
        if self.velocity < 0.0 {
            y + 18.0
        } else {
            y + 10.0
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let x = self.x.trunc();
        let y = self.y.trunc();
        let w = self.width as f64;
        let h = self.height as f64;

        canvas.save();
        canvas.rotate_about(self.tilt(), self.x + w / 2.0, self.y + h / 2.0);

        if self.no_gravity {
            canvas.set_color(FROZEN_AURA);
            canvas.set_stroke_width(3.0);
            canvas.stroke_ellipse(x - 6.0, y - 6.0, w + 12.0, h + 12.0);
        }

        // Body.
        canvas.set_color(OUTLINE);
        canvas.fill_ellipse(x, y, w, h);
        canvas.set_color(BODY);
        canvas.fill_ellipse(x + 3.0, y + 3.0, w - 6.0, h - 6.0);

        // Wing.
        let wing_y = self.wing_y();
        canvas.set_color(Rgb::WHITE);
        canvas.fill_ellipse(x + 8.0, wing_y, 25.0, 18.0);
        canvas.set_color(OUTLINE);
        canvas.set_stroke_width(3.0);
        canvas.stroke_ellipse(x + 8.0, wing_y, 25.0, 18.0);

        // Eye.
        canvas.set_color(Rgb::WHITE);
        canvas.fill_ellipse(x + 35.0, y + 6.0, 20.0, 20.0);
        canvas.set_color(Rgb::BLACK);
        canvas.fill_ellipse(x + 44.0, y + 12.0, 7.0, 7.0);

        // Beak.
        let beak = [
            (x + w - 10.0, y + 15.0),
            (x + w + 15.0, y + 25.0),
            (x + w - 10.0, y + 35.0),
        ];
        canvas.set_color(BEAK);
        canvas.fill_polygon(&beak);
        canvas.set_color(OUTLINE);
        canvas.stroke_polygon(&beak);

        canvas.restore();
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}
