//! Built-in 5x7 bitmap font
//!
//! Text is drawn as solid pixel cells, so the game ships without font files.
//! Lowercase letters render as uppercase; unknown characters render as `?`.

use glam::Vec2;

/// Glyph grid
pub const GLYPH_COLS: u32 = 5;
pub const GLYPH_ROWS: u32 = 7;
/// Horizontal advance per character, in cells (glyph + one blank column)
const ADVANCE: u32 = GLYPH_COLS + 1;

/// Text size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Score
    Large,
    /// Countdown digit, goal banner
    Medium,
    /// Scorer line, control hint
    Small,
}

impl TextSize {
    /// Edge length of one font cell in canvas pixels
    pub fn cell(self) -> f32 {
        match self {
            TextSize::Large => 16.0,
            TextSize::Medium => 10.0,
            TextSize::Small => 5.0,
        }
    }

    pub fn line_height(self) -> f32 {
        GLYPH_ROWS as f32 * self.cell()
    }
}

/// Row bitmaps, top to bottom; bit 4 is the leftmost column
pub fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        ' ' => [0x00; 7],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '|' => [0x04; 7],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '↑' => [0x04, 0x0E, 0x15, 0x04, 0x04, 0x04, 0x04],
        '↓' => [0x04, 0x04, 0x04, 0x04, 0x15, 0x0E, 0x04],
        _ => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
    }
}

/// Width of `text` in canvas pixels (no trailing gap)
pub fn text_width(text: &str, size: TextSize) -> f32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0.0;
    }
    (chars * ADVANCE - 1) as f32 * size.cell()
}

/// Solid rectangles (top-left, size) covering every lit cell of `text`.
///
/// Consecutive lit cells in a glyph row are merged into one rectangle.
pub fn layout(text: &str, origin: Vec2, size: TextSize) -> Vec<(Vec2, Vec2)> {
    let cell = size.cell();
    let mut rects = Vec::new();

    for (index, c) in text.chars().enumerate() {
        let glyph_x = origin.x + (index as u32 * ADVANCE) as f32 * cell;
        for (row, bits) in glyph(c).iter().enumerate() {
            let y = origin.y + row as f32 * cell;
            let mut col = 0;
            while col < GLYPH_COLS {
                if bits & (0x10 >> col) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_COLS && bits & (0x10 >> col) != 0 {
                    col += 1;
                }
                rects.push((
                    Vec2::new(glyph_x + start as f32 * cell, y),
                    Vec2::new((col - start) as f32 * cell, cell),
                ));
            }
        }
    }

    rects
}
