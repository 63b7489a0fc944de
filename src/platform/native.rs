//! Native front end: winit window, wgpu renderer, rodio audio

use std::sync::Arc;
use std::time::Instant;

use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Fullscreen, WindowBuilder};

use super::{Control, FramePacer, InputSource, KeyState, Renderer};
use crate::audio::{AudioManager, CueSink};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, TICKS_PER_SECOND};
use crate::driver::{FrameDriver, TickOutcome};
use crate::error::PlatformError;
use crate::renderer::RenderState;
use crate::settings::Settings;

const WINDOW_TITLE: &str = "Neon Pong";

/// Open the window and play until the user quits
pub fn run(settings: Settings) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new()?;

    let mut builder = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(ARENA_WIDTH as u32, ARENA_HEIGHT as u32));
    if settings.fullscreen {
        builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }
    let window = Arc::new(builder.build(&event_loop)?);

    let mut render_state = pollster::block_on(RenderState::new(window.clone(), &settings))?;
    let audio = AudioManager::new(&settings);
    let mut driver = FrameDriver::from_settings(&settings);
    let mut keys = KeyState::new();
    let mut pacer = FramePacer::new(TICKS_PER_SECOND);
    let mut failure: Option<PlatformError> = None;

    log::info!(
        "Starting Neon Pong (seed {}, quality {}, audio {})",
        driver.world().seed,
        settings.quality.as_str(),
        if audio.is_some() { "on" } else { "off" }
    );

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                keys.request_quit();
                elwt.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(control) = Control::from_key_code(code) {
                    keys.set(control, state == ElementState::Pressed);
                }
            }
            WindowEvent::Focused(false) => keys.release_all(),
            WindowEvent::Resized(size) => render_state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                if let Err(e) = render_state.present(&driver.snapshot()) {
                    failure = Some(e);
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            if pacer.is_due(now) {
                pacer.advance(now);
                if let Err(e) = keys.poll() {
                    failure = Some(e);
                    elwt.exit();
                    return;
                }
                let sink = audio.as_ref().map(|a| a as &dyn CueSink);
                match driver.tick(&keys, sink) {
                    TickOutcome::Quit => {
                        elwt.exit();
                        return;
                    }
                    TickOutcome::Continue => window.request_redraw(),
                }
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
        }
        _ => {}
    })?;

    log::info!(
        "Final score {} - {}",
        driver.world().round.score_left,
        driver.world().round.score_right
    );

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
