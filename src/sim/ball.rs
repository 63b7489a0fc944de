//! The ball

use std::f32::consts::{FRAC_PI_4, PI, TAU};

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Radius of the translucent halo
    pub glow_radius: f32,
    /// Cosmetic pulse phase in [0, 2π); never affects physics
    pub pulse: f32,
}

impl Ball {
    /// Create a ball already served from the centre
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            glow_radius: BALL_RADIUS + BALL_GLOW_EXTRA,
            pulse: 0.0,
        };
        ball.reset(rng);
        ball
    }

    /// Re-serve from the arena centre at base speed.
    ///
    /// The direction angle is drawn from [45°, 135°] and flipped by 180° half
    /// of the time, so serves are never purely horizontal or purely vertical.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.pos = Vec2::new((ARENA_WIDTH / 2.0).floor(), (ARENA_HEIGHT / 2.0).floor());

        let mut angle = rng.random_range(FRAC_PI_4..=3.0 * FRAC_PI_4);
        if rng.random_bool(0.5) {
            angle += PI;
        }
        self.vel = Vec2::new(angle.cos(), angle.sin()) * BALL_BASE_SPEED;

        self.radius = BALL_RADIUS;
        self.glow_radius = self.radius + BALL_GLOW_EXTRA;
        self.pulse = 0.0;
    }

    /// Advance one tick
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.pulse = (self.pulse + BALL_PULSE_STEP) % TAU;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Glow radius including the pulse wobble
    pub fn pulse_glow_radius(&self) -> f32 {
        self.glow_radius + self.pulse.sin() * BALL_PULSE_AMPLITUDE
    }
}
