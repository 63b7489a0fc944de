//! Collision detection and response for the rectangular arena
//!
//! All checks work on the state after the ball has been integrated for the
//! tick. Each function mutates the ball only when it reports a hit.

use super::ball::Ball;
use super::paddle::{Paddle, Side};
use crate::consts::*;

/// Reflect off the top or bottom wall. Returns true on a bounce.
pub fn bounce_off_walls(ball: &mut Ball) -> bool {
    if ball.pos.y - ball.radius <= 0.0 || ball.pos.y + ball.radius >= ARENA_HEIGHT {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Reflect off `paddle` if the ball's near edge reaches it while heading towards it.
///
/// The outgoing horizontal speed is boosted and the vertical speed picks up
/// spin proportional to how far from the paddle centre the ball struck.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    let reached = match paddle.side {
        Side::Left => ball.pos.x - ball.radius <= paddle.right() && ball.vel.x < 0.0,
        Side::Right => ball.pos.x + ball.radius >= paddle.x && ball.vel.x > 0.0,
    };
    if !reached || !paddle.spans(ball.pos.y) {
        return false;
    }

    ball.vel.x = -ball.vel.x * PADDLE_BOOST;
    ball.vel.y += (ball.pos.y - paddle.center_y()) / SPIN_DIVISOR;
    true
}

/// Side that scores if the ball centre has left the arena horizontally.
///
/// The centre (not the leading edge) is tested, so the ball disappears
/// fully off-screen before a goal counts.
pub fn detect_goal(ball: &Ball) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > ARENA_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}
