//! Parallax starfield behind the arena

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Leftward drift per tick, also drives brightness
    pub speed: f32,
}

impl Star {
    /// Grey level on a 0-255 scale
    pub fn brightness(&self) -> u8 {
        (100.0 * self.speed) as u8
    }
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(random_column(rng), random_row(rng)),
                speed: rng.random_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
            })
            .collect();
        Self { stars }
    }

    /// Drift every star left; stars leaving the arena re-enter on the right at a new height
    pub fn advance(&mut self, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.pos.x -= star.speed;
            if star.pos.x < 0.0 {
                star.pos.x = ARENA_WIDTH;
                star.pos.y = random_row(rng);
            }
        }
    }
}

fn random_column(rng: &mut impl Rng) -> f32 {
    rng.random_range(0..=ARENA_WIDTH as u32) as f32
}

fn random_row(rng: &mut impl Rng) -> f32 {
    rng.random_range(0..=ARENA_HEIGHT as u32) as f32
}
