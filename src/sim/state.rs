//! Game state and core simulation types
//!
//! `GameWorld` is the single aggregate the frame driver owns and threads
//! through every tick. Nothing here touches the platform.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::paddle::{Paddle, Side};
use super::particle::{EffectPool, Particle};
use super::stars::{Star, Starfield};
use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Ball parked at centre while the 3-2-1 counts down
    Countdown,
    /// Active gameplay
    Playing,
    /// Short celebration after a goal, ball hidden
    GoalPause,
}

/// Something the simulation wants the outside world to know about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball bounced off a paddle at `at`
    PaddleHit { side: Side, at: Vec2 },
    /// Ball left the arena and `scorer` got a point
    Goal { scorer: Side },
}

/// Scores, phase and timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub score_left: u32,
    pub score_right: u32,
    pub phase: RoundPhase,
    /// Ticks left in the current Countdown or GoalPause
    pub timer: u32,
    /// Side that scored most recently
    pub last_scorer: Option<Side>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            score_left: 0,
            score_right: 0,
            phase: RoundPhase::Countdown,
            timer: COUNTDOWN_TICKS,
            last_scorer: None,
        }
    }
}

impl RoundState {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    /// Credit a goal to `scorer` and enter the goal pause
    pub fn record_goal(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.score_left += 1,
            Side::Right => self.score_right += 1,
        }
        self.phase = RoundPhase::GoalPause;
        self.timer = GOAL_PAUSE_TICKS;
        self.last_scorer = Some(scorer);
    }

    /// Seconds left on the countdown (3, 2, 1), or `None` outside Countdown.
    ///
    /// Capped so the full timer on countdown entry still reads 3.
    pub fn countdown_number(&self) -> Option<u32> {
        (self.phase == RoundPhase::Countdown)
            .then(|| (self.timer / TICKS_PER_SECOND + 1).min(COUNTDOWN_TICKS / TICKS_PER_SECOND))
    }

    /// The countdown digit blinks: on for the first half of each second
    pub fn countdown_visible(&self) -> bool {
        self.phase == RoundPhase::Countdown && self.timer % TICKS_PER_SECOND < COUNTDOWN_BLINK_ON
    }
}

/// Phase-specific text drawn over the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Countdown { number: u32, visible: bool },
    Goal { scorer: Side },
}

/// Borrowed view of everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub left: &'a Paddle,
    pub right: &'a Paddle,
    /// `None` while the ball is hidden
    pub ball: Option<&'a Ball>,
    pub particles: &'a [Particle],
    pub stars: &'a [Star],
    pub score_left: u32,
    pub score_right: u32,
    pub overlay: Option<Overlay>,
}

/// Knobs for building a world; defaults match the arcade game
#[derive(Debug, Clone, Copy)]
pub struct WorldOptions {
    /// Particle cap; `None` is unbounded and `Some(0)` disables bursts
    pub max_particles: Option<usize>,
    pub star_count: usize,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            max_particles: None,
            star_count: STAR_COUNT,
        }
    }
}

/// Complete game world
#[derive(Debug, Clone)]
pub struct GameWorld {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub effects: EffectPool,
    pub stars: Starfield,
    pub round: RoundState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised during the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameWorld {
    /// Create a fresh 0-0 world in Countdown with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_options(seed, WorldOptions::default())
    }

    pub fn with_options(seed: u64, options: WorldOptions) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&mut rng);
        let stars = Starfield::new(options.star_count, &mut rng);
        let effects = match options.max_particles {
            Some(cap) => EffectPool::with_cap(cap),
            None => EffectPool::new(),
        };

        Self {
            seed,
            rng,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball,
            effects,
            stars,
            round: RoundState::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    /// Everything the renderer draws this frame
    pub fn snapshot(&self) -> Snapshot<'_> {
        let overlay = match self.round.phase {
            RoundPhase::Countdown => {
                self.round.countdown_number().map(|number| Overlay::Countdown {
                    number,
                    visible: self.round.countdown_visible(),
                })
            }
            RoundPhase::GoalPause => self.round.last_scorer.map(|scorer| Overlay::Goal { scorer }),
            RoundPhase::Playing => None,
        };

        Snapshot {
            left: &self.left,
            right: &self.right,
            ball: (self.round.phase != RoundPhase::GoalPause).then_some(&self.ball),
            particles: self.effects.particles(),
            stars: &self.stars.stars,
            score_left: self.round.score_left,
            score_right: self.round.score_right,
            overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_starts_in_countdown() {
        let world = GameWorld::new(12345);
        assert_eq!(world.phase(), RoundPhase::Countdown);
        assert_eq!(world.round.timer, COUNTDOWN_TICKS);
        assert_eq!((world.round.score_left, world.round.score_right), (0, 0));
        assert_eq!(world.round.last_scorer, None);
        assert_eq!(world.stars.stars.len(), STAR_COUNT);
        assert!(world.effects.is_empty());
    }

    #[test]
    fn test_countdown_numbers_and_blink() {
        let mut round = RoundState::default();
        assert_eq!(round.timer, COUNTDOWN_TICKS);
        assert_eq!(round.countdown_number(), Some(3));
        assert!(round.countdown_visible());
        round.timer = 179;
        assert_eq!(round.countdown_number(), Some(3));
        assert!(!round.countdown_visible());
        round.timer = 150;
        assert!(!round.countdown_visible());
        round.timer = 149;
        assert!(round.countdown_visible());
        round.timer = 119;
        assert_eq!(round.countdown_number(), Some(2));
        round.timer = 1;
        assert_eq!(round.countdown_number(), Some(1));
        assert!(round.countdown_visible());

        round.phase = RoundPhase::Playing;
        assert_eq!(round.countdown_number(), None);
        assert!(!round.countdown_visible());
    }

    #[test]
    fn test_record_goal() {
        let mut round = RoundState {
            phase: RoundPhase::Playing,
            timer: 0,
            ..Default::default()
        };
        round.record_goal(Side::Right);
        assert_eq!(round.score(Side::Right), 1);
        assert_eq!(round.score(Side::Left), 0);
        assert_eq!(round.phase, RoundPhase::GoalPause);
        assert_eq!(round.timer, GOAL_PAUSE_TICKS);
        assert_eq!(round.last_scorer, Some(Side::Right));
    }

    #[test]
    fn test_snapshot_hides_ball_during_goal_pause() {
        let mut world = GameWorld::new(1);
        assert!(world.snapshot().ball.is_some());
        assert!(matches!(
            world.snapshot().overlay,
            Some(Overlay::Countdown { number: 3, .. })
        ));

        world.round.phase = RoundPhase::Playing;
        assert_eq!(world.snapshot().overlay, None);

        world.round.record_goal(Side::Left);
        let snapshot = world.snapshot();
        assert!(snapshot.ball.is_none());
        assert_eq!(snapshot.score_left, 1);
        assert_eq!(snapshot.overlay, Some(Overlay::Goal { scorer: Side::Left }));
    }

    #[test]
    fn test_options_disable_stars_and_particles() {
        let world = GameWorld::with_options(
            3,
            WorldOptions {
                max_particles: Some(0),
                star_count: 0,
            },
        );
        assert!(world.stars.stars.is_empty());
    }
}
