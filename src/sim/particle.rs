//! Impact particles and the pool that owns them

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::Rgba;
use crate::consts::*;

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgba,
    /// Ticks remaining
    pub life: u32,
    /// Radius in pixels, shrinks every tick
    pub size: f32,
}

impl Particle {
    /// Spawn at `pos` flying in a random direction
    pub fn new(pos: Vec2, color: Rgba, rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            color,
            life: PARTICLE_LIFE,
            size: rng.random_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE) as f32,
        }
    }

    /// Advance one tick; returns false once the particle has expired
    pub fn update(&mut self) -> bool {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
        self.size = (self.size - PARTICLE_SHRINK).max(0.0);
        self.life > 0
    }

    /// Opacity derived from remaining life, reaching 0 when life does
    pub fn alpha(&self) -> u8 {
        (self.life * 8).min(255) as u8
    }
}

/// Owns every live particle
#[derive(Debug, Clone, Default)]
pub struct EffectPool {
    particles: Vec<Particle>,
    /// Maximum live particles; oldest are dropped first. `None` means unbounded.
    cap: Option<usize>,
}

impl EffectPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool that never holds more than `cap` particles (0 disables effects)
    pub fn with_cap(cap: usize) -> Self {
        Self {
            particles: Vec::with_capacity(cap.min(1024)),
            cap: Some(cap),
        }
    }

    /// Append a burst of `count` particles at `pos`
    pub fn spawn_burst(&mut self, pos: Vec2, color: Rgba, count: usize, rng: &mut impl Rng) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::new(pos, color, rng));
        }

        if let Some(cap) = self.cap {
            if self.particles.len() > cap {
                let excess = self.particles.len() - cap;
                self.particles.drain(..excess);
            }
        }
    }

    /// Update every particle and drop the expired ones in place
    pub fn advance(&mut self) {
        self.particles.retain_mut(Particle::update);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_particle_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..200 {
            let p = Particle::new(Vec2::ZERO, palette::PADDLE, &mut rng);
            let speed = p.vel.length();
            assert!((PARTICLE_MIN_SPEED - 1e-4..PARTICLE_MAX_SPEED + 1e-4).contains(&speed));
            assert!((2.0..=5.0).contains(&p.size));
            assert_eq!(p.size.fract(), 0.0);
            assert_eq!(p.life, PARTICLE_LIFE);
        }
    }

    #[test]
    fn test_particle_lives_exactly_thirty_ticks() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut p = Particle::new(Vec2::ZERO, palette::PADDLE, &mut rng);

        let mut alive_ticks = 0;
        let mut last_size = p.size;
        let mut last_alpha = p.alpha();
        while p.update() {
            alive_ticks += 1;
            assert!(p.size <= last_size);
            assert!(p.alpha() <= last_alpha);
            last_size = p.size;
            last_alpha = p.alpha();
        }
        assert_eq!(alive_ticks, PARTICLE_LIFE - 1);
        assert_eq!(p.life, 0);
        assert_eq!(p.alpha(), 0);
    }

    #[test]
    fn test_size_floors_at_zero() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut p = Particle::new(Vec2::ZERO, palette::PADDLE, &mut rng);
        p.size = 0.05;
        p.update();
        assert_eq!(p.size, 0.0);
    }

    #[test]
    fn test_pool_burst_then_drain() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut pool = EffectPool::new();

        pool.spawn_burst(Vec2::new(100.0, 100.0), palette::PADDLE, BURST_SIZE, &mut rng);
        assert_eq!(pool.len(), BURST_SIZE);
        assert!(pool.particles().iter().all(|p| p.color == palette::PADDLE));

        let mut previous = pool.len();
        for _ in 0..PARTICLE_LIFE {
            pool.advance();
            assert!(pool.len() <= previous);
            previous = pool.len();
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pool_cap_drops_oldest() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut pool = EffectPool::with_cap(20);

        pool.spawn_burst(Vec2::ZERO, palette::PADDLE, 15, &mut rng);
        pool.advance();
        pool.spawn_burst(Vec2::ZERO, palette::BALL, 15, &mut rng);

        assert_eq!(pool.len(), 20);
        // The 10 dropped particles were the oldest (paddle-coloured) ones
        let paddle_left = pool
            .particles()
            .iter()
            .filter(|p| p.color == palette::PADDLE)
            .count();
        assert_eq!(paddle_left, 5);
    }

    #[test]
    fn test_zero_cap_disables_bursts() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut pool = EffectPool::with_cap(0);
        pool.spawn_burst(Vec2::ZERO, palette::PADDLE, BURST_SIZE, &mut rng);
        assert!(pool.is_empty());
    }
}
