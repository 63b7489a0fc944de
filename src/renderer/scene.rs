//! Snapshot to draw-command composition
//!
//! Pure translation of a [`Snapshot`] into an ordered list of primitives,
//! back to front. No GPU types are involved, so this is fully testable.

use glam::Vec2;

use super::font::{self, TextSize};
use crate::Rgba;
use crate::color::palette;
use crate::consts::*;
use crate::sim::{Ball, Overlay, Paddle, Snapshot};

/// Control hint shown at the bottom of the screen
pub const CONTROL_HINT: &str = "W/S - Left | ↑/↓ - Right | ESC - Quit";

/// Outline thickness for paddles and ball
const OUTLINE: f32 = 2.0;
/// Centre line dashes
const DASH_LENGTH: f32 = 20.0;
const DASH_SPACING: f32 = 40.0;
const DASH_WIDTH: f32 = 3.0;
/// Text rows
const SCORE_Y: f32 = 50.0;
const BANNER_Y: f32 = ARENA_HEIGHT / 2.0 - 50.0;
const SUBTITLE_Y: f32 = ARENA_HEIGHT / 2.0 + 30.0;
const HINT_Y: f32 = ARENA_HEIGHT - 80.0;

/// A single drawing primitive in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned rectangle, optionally with rounded corners.
    /// `stroke: Some(w)` draws only a `w`-pixel outline.
    Rect {
        pos: Vec2,
        size: Vec2,
        corner_radius: f32,
        color: Rgba,
        stroke: Option<f32>,
    },
    /// Circle, filled or outlined
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        stroke: Option<f32>,
    },
    /// Single pixel
    Point { pos: Vec2, color: Rgba },
    /// Left-to-right text with its top-left corner at `pos`
    Text {
        text: String,
        pos: Vec2,
        size: TextSize,
        color: Rgba,
    },
}

/// Build the full frame for `snapshot`
pub fn compose(snapshot: &Snapshot<'_>) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(snapshot.stars.len() + snapshot.particles.len() + 96);

    for star in snapshot.stars {
        commands.push(DrawCommand::Point {
            pos: star.pos.floor(),
            color: Rgba::grey(star.brightness()),
        });
    }

    push_paddle(&mut commands, snapshot.left);
    push_paddle(&mut commands, snapshot.right);

    if let Some(ball) = snapshot.ball {
        push_ball(&mut commands, ball);
    }

    for particle in snapshot.particles {
        if particle.size <= 0.0 {
            continue;
        }
        commands.push(DrawCommand::Circle {
            center: particle.pos,
            radius: particle.size,
            color: particle.color.with_alpha(particle.alpha()),
            stroke: None,
        });
    }

    let mut y = 0.0;
    while y < ARENA_HEIGHT {
        commands.push(DrawCommand::Rect {
            pos: Vec2::new(ARENA_WIDTH / 2.0 - DASH_WIDTH / 2.0, y),
            size: Vec2::new(DASH_WIDTH, DASH_LENGTH),
            corner_radius: 0.0,
            color: palette::CENTER_LINE,
            stroke: None,
        });
        y += DASH_SPACING;
    }

    let score = format!("{}    {}", snapshot.score_left, snapshot.score_right);
    push_centered_text(&mut commands, score, SCORE_Y, TextSize::Large, palette::ACCENT);

    match snapshot.overlay {
        Some(Overlay::Countdown { number, visible }) => {
            if visible {
                push_centered_text(
                    &mut commands,
                    number.to_string(),
                    BANNER_Y,
                    TextSize::Medium,
                    palette::BALL,
                );
            }
        }
        Some(Overlay::Goal { scorer }) => {
            push_centered_text(
                &mut commands,
                "GOAL!".into(),
                BANNER_Y,
                TextSize::Medium,
                palette::BALL,
            );
            push_centered_text(
                &mut commands,
                format!("Player {} scores!", scorer.player_number()),
                SUBTITLE_Y,
                TextSize::Small,
                palette::PADDLE,
            );
        }
        None => {}
    }

    push_centered_text(&mut commands, CONTROL_HINT.into(), HINT_Y, TextSize::Small, palette::HINT);

    commands
}

fn push_paddle(commands: &mut Vec<DrawCommand>, paddle: &Paddle) {
    let pos = Vec2::new(paddle.x, paddle.y);
    let size = Vec2::new(paddle.width, paddle.height);
    commands.push(DrawCommand::Rect {
        pos,
        size,
        corner_radius: PADDLE_CORNER_RADIUS,
        color: palette::PADDLE,
        stroke: None,
    });
    commands.push(DrawCommand::Rect {
        pos,
        size,
        corner_radius: PADDLE_CORNER_RADIUS,
        color: palette::ACCENT,
        stroke: Some(OUTLINE),
    });

    // Trail fades in from oldest (transparent) to newest
    let len = paddle.trail.len() as f32;
    for (i, point) in paddle.trail.iter().enumerate() {
        let t = i as f32 / len;
        commands.push(DrawCommand::Circle {
            center: *point,
            radius: (10.0 * t).max(2.0),
            color: palette::PADDLE.with_alpha((255.0 * t) as u8),
            stroke: None,
        });
    }
}

fn push_ball(commands: &mut Vec<DrawCommand>, ball: &Ball) {
    commands.push(DrawCommand::Circle {
        center: ball.pos,
        radius: ball.pulse_glow_radius(),
        color: palette::BALL.with_alpha(palette::BALL_GLOW_ALPHA),
        stroke: None,
    });
    let center = ball.pos.floor();
    commands.push(DrawCommand::Circle {
        center,
        radius: ball.radius,
        color: palette::BALL,
        stroke: None,
    });
    commands.push(DrawCommand::Circle {
        center,
        radius: ball.radius,
        color: palette::ACCENT,
        stroke: Some(OUTLINE),
    });
}

fn push_centered_text(
    commands: &mut Vec<DrawCommand>,
    text: String,
    y: f32,
    size: TextSize,
    color: Rgba,
) {
    let x = (ARENA_WIDTH / 2.0 - font::text_width(&text, size) / 2.0).floor();
    commands.push(DrawCommand::Text {
        text,
        pos: Vec2::new(x, y),
        size,
        color,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameWorld, RoundPhase, Side, TickInput, tick};

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn ball_bodies(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|c| {
                matches!(c, DrawCommand::Circle { color, stroke: None, radius, .. }
                    if *color == palette::BALL && *radius == BALL_RADIUS)
            })
            .count()
    }

    #[test]
    fn test_countdown_frame() {
        let mut world = GameWorld::new(1);
        tick(&mut world, &TickInput::default());
        // Timer 179 is in the dark half of the first second
        let commands = compose(&world.snapshot());
        assert_eq!(texts(&commands), vec!["0    0", CONTROL_HINT]);
        assert_eq!(ball_bodies(&commands), 1);

        let stars = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Point { .. }))
            .count();
        assert_eq!(stars, STAR_COUNT);
    }

    #[test]
    fn test_countdown_digit_blinks() {
        let mut world = GameWorld::new(1);
        world.round.timer = 170;
        assert_eq!(texts(&compose(&world.snapshot())), vec!["0    0", CONTROL_HINT]);
        world.round.timer = 125;
        assert_eq!(texts(&compose(&world.snapshot())), vec!["0    0", "3", CONTROL_HINT]);
    }

    #[test]
    fn test_goal_frame_hides_ball_and_names_scorer() {
        let mut world = GameWorld::new(2);
        world.round.phase = RoundPhase::Playing;
        world.round.record_goal(Side::Right);

        let commands = compose(&world.snapshot());
        assert_eq!(ball_bodies(&commands), 0);
        assert_eq!(
            texts(&commands),
            vec!["0    1", "GOAL!", "Player 2 scores!", CONTROL_HINT]
        );
    }

    #[test]
    fn test_playing_frame_has_no_overlay() {
        let mut world = GameWorld::new(3);
        world.round.phase = RoundPhase::Playing;
        let commands = compose(&world.snapshot());
        assert_eq!(texts(&commands), vec!["0    0", CONTROL_HINT]);
        assert_eq!(ball_bodies(&commands), 1);
    }

    #[test]
    fn test_paddle_trail_fades_in() {
        let mut world = GameWorld::new(4);
        for _ in 0..4 {
            world.left.move_by(-5.0);
        }
        let commands = compose(&world.snapshot());
        let trail: Vec<u8> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { color, .. } if color.with_alpha(255) == palette::PADDLE => {
                    Some(color.a)
                }
                _ => None,
            })
            .collect();
        assert_eq!(trail, vec![0, 63, 127, 191]);
    }

    #[test]
    fn test_center_line_dashes() {
        let world = GameWorld::new(5);
        let dashes = compose(&world.snapshot())
            .iter()
            .filter(|c| {
                matches!(c, DrawCommand::Rect { color, .. } if *color == palette::CENTER_LINE)
            })
            .count();
        assert_eq!(dashes, 27);
    }
}
