//! Fixed-rate frame driver
//!
//! Owns the [`GameWorld`] and runs one tick per pacer interval:
//! quit check, simulation, cue forwarding, then presentation.

use rand::Rng;

use crate::audio::{Cue, CueSink};
use crate::error::PlatformError;
use crate::platform::{InputSource, Pacer, Renderer, tick_input};
use crate::settings::Settings;
use crate::sim::{self, GameWorld, Snapshot};

/// Whether the loop should keep going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Drives the simulation at a fixed rate
#[derive(Debug)]
pub struct FrameDriver {
    world: GameWorld,
}

impl FrameDriver {
    pub fn new(world: GameWorld) -> Self {
        Self { world }
    }

    /// Build a world from settings, seeding from entropy unless a seed is pinned
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        Self::new(GameWorld::with_options(seed, settings.world_options()))
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Run one tick against already-polled input.
    ///
    /// A pending quit ends the loop before the world is touched.
    pub fn tick(&mut self, input: &dyn InputSource, audio: Option<&dyn CueSink>) -> TickOutcome {
        if input.quit_requested() {
            log::info!("Quit requested");
            return TickOutcome::Quit;
        }

        sim::tick(&mut self.world, &tick_input(input));

        if let Some(sink) = audio {
            for event in &self.world.events {
                sink.play(Cue::for_event(event));
            }
        }

        TickOutcome::Continue
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.world.snapshot()
    }

    /// Blocking loop for platforms that let the game own the thread
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        pacer: &mut dyn Pacer,
        renderer: &mut dyn Renderer,
        audio: Option<&dyn CueSink>,
    ) -> Result<(), PlatformError> {
        loop {
            pacer.wait_for_next_tick();
            input.poll()?;
            if self.tick(input, audio) == TickOutcome::Quit {
                return Ok(());
            }
            renderer.present(&self.snapshot())?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use super::*;
    use crate::consts::*;
    use crate::platform::Control;
    use crate::sim::{GameEvent, Overlay, RoundPhase, Side};

    /// Scripted input: holds the given controls and quits after `quit_after` polls
    struct ScriptedInput {
        held: Vec<Control>,
        polls: u32,
        quit_after: Option<u32>,
    }

    impl ScriptedInput {
        fn idle() -> Self {
            Self {
                held: Vec::new(),
                polls: 0,
                quit_after: None,
            }
        }

        fn quitting_after(polls: u32) -> Self {
            Self {
                quit_after: Some(polls),
                ..Self::idle()
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> Result<(), PlatformError> {
            self.polls += 1;
            Ok(())
        }

        fn is_held(&self, control: Control) -> bool {
            self.held.contains(&control)
        }

        fn quit_requested(&self) -> bool {
            self.quit_after.is_some_and(|n| self.polls > n)
        }
    }

    struct InstantPacer {
        ticks: u32,
    }

    impl Pacer for InstantPacer {
        fn wait_for_next_tick(&mut self) -> Duration {
            self.ticks += 1;
            Duration::from_secs(1) / TICKS_PER_SECOND
        }
    }

    #[derive(Default)]
    struct CountingRenderer {
        frames: u32,
        last_overlay: Option<Overlay>,
    }

    impl Renderer for CountingRenderer {
        fn present(&mut self, snapshot: &Snapshot<'_>) -> Result<(), PlatformError> {
            self.frames += 1;
            self.last_overlay = snapshot.overlay;
            Ok(())
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn present(&mut self, _snapshot: &Snapshot<'_>) -> Result<(), PlatformError> {
            Err(PlatformError::NoSurfaceFormat)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        cues: RefCell<Vec<Cue>>,
    }

    impl CueSink for RecordingSink {
        fn play(&self, cue: Cue) {
            self.cues.borrow_mut().push(cue);
        }
    }

    #[test]
    fn test_quit_stops_before_simulating() {
        let mut driver = FrameDriver::new(GameWorld::new(1));
        let mut input = ScriptedInput::quitting_after(0);
        input.polls = 1;

        assert_eq!(driver.tick(&input, None), TickOutcome::Quit);
        assert_eq!(driver.world().time_ticks, 0);
    }

    #[test]
    fn test_run_ends_after_quit() {
        let mut driver = FrameDriver::new(GameWorld::new(2));
        let mut input = ScriptedInput::quitting_after(10);
        let mut pacer = InstantPacer { ticks: 0 };
        let mut renderer = CountingRenderer::default();

        driver
            .run(&mut input, &mut pacer, &mut renderer, None)
            .unwrap();

        assert_eq!(pacer.ticks, 11);
        assert_eq!(renderer.frames, 10);
        assert_eq!(driver.world().time_ticks, 10);
    }

    #[test]
    fn test_render_failure_propagates() {
        let mut driver = FrameDriver::new(GameWorld::new(3));
        let mut input = ScriptedInput::idle();
        let mut pacer = InstantPacer { ticks: 0 };

        let result = driver.run(&mut input, &mut pacer, &mut FailingRenderer, None);
        assert!(matches!(result, Err(PlatformError::NoSurfaceFormat)));
        assert_eq!(pacer.ticks, 1);
    }

    #[test]
    fn test_first_frame_shows_countdown() {
        let mut driver = FrameDriver::new(GameWorld::new(4));
        let mut input = ScriptedInput::quitting_after(1);
        let mut pacer = InstantPacer { ticks: 0 };
        let mut renderer = CountingRenderer::default();

        driver
            .run(&mut input, &mut pacer, &mut renderer, None)
            .unwrap();

        assert_eq!(renderer.frames, 1);
        assert!(matches!(
            renderer.last_overlay,
            Some(Overlay::Countdown { number: 3, .. })
        ));
    }

    #[test]
    fn test_countdown_goes_live_after_three_seconds() {
        let mut driver = FrameDriver::new(GameWorld::new(5));
        let input = ScriptedInput::idle();

        for _ in 0..COUNTDOWN_TICKS - 1 {
            driver.tick(&input, None);
            assert_eq!(driver.world().phase(), RoundPhase::Countdown);
        }
        driver.tick(&input, None);
        assert_eq!(driver.world().phase(), RoundPhase::Playing);
        assert_eq!(driver.snapshot().overlay, None);
    }

    #[test]
    fn test_held_keys_reach_paddles() {
        let mut driver = FrameDriver::new(GameWorld::new(6));
        driver.world_mut().round.phase = RoundPhase::Playing;
        let input = ScriptedInput {
            held: vec![Control::LeftUp, Control::RightDown],
            ..ScriptedInput::idle()
        };
        let left_y = driver.world().left.y;
        let right_y = driver.world().right.y;

        driver.tick(&input, None);

        assert_eq!(driver.world().left.y, left_y - PADDLE_SPEED);
        assert_eq!(driver.world().right.y, right_y + PADDLE_SPEED);
    }

    #[test]
    fn test_events_are_forwarded_as_cues() {
        let mut driver = FrameDriver::new(GameWorld::new(7));
        let world = driver.world_mut();
        world.round.phase = RoundPhase::Playing;
        // Heading off the right edge just above centre
        world.ball.pos = glam::Vec2::new(ARENA_WIDTH - 5.0, 300.0);
        world.ball.vel = glam::Vec2::new(10.0, 0.0);

        let sink = RecordingSink::default();
        driver.tick(&ScriptedInput::idle(), Some(&sink));

        assert_eq!(
            driver.world().events,
            vec![GameEvent::Goal { scorer: Side::Left }]
        );
        assert_eq!(*sink.cues.borrow(), vec![Cue::Score]);
    }

    #[test]
    fn test_missing_audio_is_silent() {
        let mut driver = FrameDriver::new(GameWorld::new(8));
        let world = driver.world_mut();
        world.round.phase = RoundPhase::Playing;
        world.ball.pos = glam::Vec2::new(500.0, BALL_RADIUS + 2.0);
        world.ball.vel = glam::Vec2::new(0.0, -10.0);

        driver.tick(&ScriptedInput::idle(), None);
        assert_eq!(driver.world().events, vec![GameEvent::WallHit]);
    }

    #[test]
    fn test_from_settings_uses_pinned_seed() {
        let settings = Settings {
            seed: Some(42),
            ..Settings::default()
        };
        let a = FrameDriver::from_settings(&settings);
        let b = FrameDriver::from_settings(&settings);
        assert_eq!(a.world().seed, 42);
        assert_eq!(a.world().ball.vel, b.world().ball.vel);
    }
}
