//! Held-key tracking

use winit::keyboard::KeyCode;

use super::InputSource;
use crate::error::PlatformError;
use crate::sim::TickInput;

/// Logical controls, one pair per player plus quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Quit,
}

impl Control {
    const COUNT: usize = 5;

    /// W/S for the left player, arrows for the right, Escape quits
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(Control::LeftUp),
            KeyCode::KeyS => Some(Control::LeftDown),
            KeyCode::ArrowUp => Some(Control::RightUp),
            KeyCode::ArrowDown => Some(Control::RightDown),
            KeyCode::Escape => Some(Control::Quit),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Key state fed by window events
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: [bool; Control::COUNT],
    quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release. Pressing Quit latches the quit request.
    pub fn set(&mut self, control: Control, pressed: bool) {
        self.held[control.index()] = pressed;
        if control == Control::Quit && pressed {
            self.quit = true;
        }
    }

    /// Window close and similar requests
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Drop all held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held = [false; Control::COUNT];
    }
}

impl InputSource for KeyState {
    fn poll(&mut self) -> Result<(), PlatformError> {
        // Populated by the event loop as events arrive
        Ok(())
    }

    fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// Movement keys currently held on `input`
pub fn tick_input(input: &dyn InputSource) -> TickInput {
    TickInput {
        left_up: input.is_held(Control::LeftUp),
        left_down: input.is_held(Control::LeftDown),
        right_up: input.is_held(Control::RightUp),
        right_down: input.is_held(Control::RightDown),
    }
}
