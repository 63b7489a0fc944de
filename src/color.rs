//! RGBA colour value type and the game palette

/// 8-bit-per-channel colour with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Grey with all three channels set to `level`
    pub const fn grey(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Normalised channels for the GPU
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Colours for game elements
pub mod palette {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::rgb(8, 5, 20);
    /// Neon pink
    pub const PADDLE: Rgba = Rgba::rgb(255, 85, 120);
    /// Neon blue
    pub const BALL: Rgba = Rgba::rgb(100, 200, 255);
    pub const ACCENT: Rgba = Rgba::rgb(255, 255, 255);
    pub const CENTER_LINE: Rgba = Rgba::rgb(60, 60, 100);
    pub const HINT: Rgba = Rgba::rgb(100, 100, 150);
    pub const BALL_GLOW_ALPHA: u8 = 60;
}
