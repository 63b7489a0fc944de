//! Neon Pong entry point
//!
//! Loads settings and hands control to the native event loop.

use std::process::ExitCode;

use neon_pong::Settings;
use neon_pong::platform::native;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Neon Pong starting...");

    let settings = Settings::load();
    match native::run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Neon Pong failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
