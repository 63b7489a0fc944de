//! Player paddles

use std::collections::VecDeque;

use glam::Vec2;

use crate::consts::*;

/// Which half of the arena a paddle (or a scorer) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 1-based player number shown in banners
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// A vertical paddle pinned to one side of the arena
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    /// Left edge (fixed)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Distance moved per tick while a key is held
    pub speed: f32,
    /// Recent outer-edge midpoints, oldest first
    pub trail: VecDeque<Vec2>,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => ARENA_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            side,
            x,
            y: ARENA_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            trail: VecDeque::with_capacity(TRAIL_CAPACITY + 1),
        }
    }

    /// Shift vertically by `dy`, clamped to the arena, and record a trail point
    pub fn move_by(&mut self, dy: f32) {
        self.y = (self.y + dy).clamp(0.0, ARENA_HEIGHT - self.height);

        if self.trail.len() == TRAIL_CAPACITY {
            self.trail.pop_front();
        }
        self.trail.push_back(self.trail_anchor());
    }

    /// Vertical centre, using the integer-halved height
    pub fn center_y(&self) -> f32 {
        self.y + (self.height / 2.0).floor()
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether `y` lies within the paddle's vertical extent (inclusive)
    pub fn spans(&self, y: f32) -> bool {
        self.y <= y && y <= self.y + self.height
    }

    fn trail_anchor(&self) -> Vec2 {
        let x = match self.side {
            Side::Left => self.x,
            Side::Right => self.right(),
        };
        Vec2::new(x, self.y + (self.height / 2.0).floor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_paddles_start_centered_on_their_side() {
        let left = Paddle::new(Side::Left);
        let right = Paddle::new(Side::Right);
        assert_eq!(left.x, 50.0);
        assert_eq!(right.x, ARENA_WIDTH - 70.0);
        assert_eq!(left.y, 440.0);
        assert_eq!(left.center_y(), ARENA_HEIGHT / 2.0);
        assert!(left.trail.is_empty());
    }

    #[test]
    fn test_move_clamps_at_top_and_bottom() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.move_by(-10_000.0);
        assert_eq!(paddle.y, 0.0);
        paddle.move_by(10_000.0);
        assert_eq!(paddle.y, ARENA_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let mut paddle = Paddle::new(Side::Right);
        for _ in 0..25 {
            paddle.move_by(-PADDLE_SPEED);
        }
        assert_eq!(paddle.trail.len(), TRAIL_CAPACITY);

        let newest = *paddle.trail.back().unwrap();
        assert_eq!(newest, Vec2::new(paddle.right(), paddle.center_y()));

        // Oldest surviving point is the 15th move (25 - 11 + 1)
        let oldest = *paddle.trail.front().unwrap();
        let expected_y = 440.0 - 15.0 * PADDLE_SPEED + 100.0;
        assert_eq!(oldest.y, expected_y);
    }

    #[test]
    fn test_left_trail_anchors_on_left_edge() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.move_by(0.0);
        assert_eq!(paddle.trail[0].x, paddle.x);
    }

    proptest! {
        #[test]
        fn prop_move_stays_in_arena(
            start in -500.0f32..1500.0,
            moves in prop::collection::vec(-5000.0f32..5000.0, 1..40),
        ) {
            let mut paddle = Paddle::new(Side::Left);
            paddle.y = start.clamp(0.0, ARENA_HEIGHT - PADDLE_HEIGHT);
            for dy in moves {
                paddle.move_by(dy);
                prop_assert!(paddle.y >= 0.0);
                prop_assert!(paddle.y <= ARENA_HEIGHT - paddle.height);
                prop_assert!(paddle.trail.len() <= TRAIL_CAPACITY);
            }
        }
    }
}
