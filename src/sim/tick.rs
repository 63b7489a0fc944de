//! Fixed timestep simulation tick
//!
//! Advances the world by exactly one tick. There is no delta time: every
//! speed and timer in the game is expressed per tick.

use super::collision::{bounce_off_paddle, bounce_off_walls, detect_goal};
use super::paddle::Side;
use super::state::{GameEvent, GameWorld, RoundPhase};
use crate::color::palette;
use crate::consts::*;

/// Held movement keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// Advance the world by one tick: paddles, round state, effects, stars.
///
/// `world.events` is cleared first and then holds whatever happened during
/// this tick.
pub fn tick(world: &mut GameWorld, input: &TickInput) {
    world.events.clear();
    world.time_ticks += 1;

    if world.round.phase == RoundPhase::Playing {
        apply_input(world, input);
    }

    advance_round(world);
    world.effects.advance();
    world.stars.advance(&mut world.rng);
}

/// Move both paddles from held keys. Up and down held together cancel out
/// but still record two trail points, same as pressing them in sequence.
fn apply_input(world: &mut GameWorld, input: &TickInput) {
    let left_speed = world.left.speed;
    if input.left_up {
        world.left.move_by(-left_speed);
    }
    if input.left_down {
        world.left.move_by(left_speed);
    }

    let right_speed = world.right.speed;
    if input.right_up {
        world.right.move_by(-right_speed);
    }
    if input.right_down {
        world.right.move_by(right_speed);
    }
}

/// Step the round state machine
pub fn advance_round(world: &mut GameWorld) {
    match world.round.phase {
        RoundPhase::Countdown => {
            world.round.timer = world.round.timer.saturating_sub(1);
            if world.round.timer == 0 {
                world.round.phase = RoundPhase::Playing;
                log::debug!("Round live at tick {}", world.time_ticks);
            }
        }
        RoundPhase::GoalPause => {
            world.round.timer = world.round.timer.saturating_sub(1);
            if world.round.timer == 0 {
                world.round.phase = RoundPhase::Countdown;
                world.round.timer = COUNTDOWN_TICKS;
                world.ball.reset(&mut world.rng);
            }
        }
        RoundPhase::Playing => step_ball(world),
    }
}

/// Move the ball and resolve walls, paddles and goals
fn step_ball(world: &mut GameWorld) {
    world.ball.update();

    if bounce_off_walls(&mut world.ball) {
        world.events.push(GameEvent::WallHit);
    }

    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &world.left,
            Side::Right => &world.right,
        };
        if bounce_off_paddle(&mut world.ball, paddle) {
            let at = world.ball.pos;
            world
                .effects
                .spawn_burst(at, palette::PADDLE, BURST_SIZE, &mut world.rng);
            world.events.push(GameEvent::PaddleHit { side, at });
        }
    }

    if let Some(scorer) = detect_goal(&world.ball) {
        world.round.record_goal(scorer);
        world.events.push(GameEvent::Goal { scorer });
        log::info!(
            "Player {} scores ({} - {})",
            scorer.player_number(),
            world.round.score_left,
            world.round.score_right
        );
    }
}
