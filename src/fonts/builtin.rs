//! Built-in 5x7 bitmap font, scaled by whole pixels

use image::{Rgb, RgbImage};

use crate::fonts::{Face, FontSource};
use crate::rendering::layout::TextBox;
use crate::rendering::paint::blend_pixel;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance of one cell, in unscaled pixels
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows top to bottom; bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_HEIGHT as usize];

/// Hollow box drawn for characters the font does not cover.
const MISSING: Glyph = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => [0; 7],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '+' => [0, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
        _ => MISSING,
    }
}

/// The always-available fallback font.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl FontSource for BuiltinFont {
    fn probe(&self, px: f32) -> Option<Box<dyn Face>> {
        Some(Box::new(BitmapFace::for_px(px)))
    }

    fn describe(&self) -> String {
        "builtin".into()
    }
}

/// The bitmap font with every glyph pixel drawn as a `scale` x `scale` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFace {
    scale: u32,
}

impl BitmapFace {
    /// Pick the largest whole-pixel scale whose glyph height fits in `px`.
    pub fn for_px(px: f32) -> Self {
        let scale = (px / GLYPH_HEIGHT as f32).floor().max(1.0) as u32;
        Self { scale }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Lit cells of `text` as (column, row) in unscaled font pixels.
    fn cells(text: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
        text.chars()
            .filter(|c| !c.is_control())
            .enumerate()
            .flat_map(|(i, c)| {
                let rows = glyph(c);
                (0..GLYPH_HEIGHT).flat_map(move |row| {
                    (0..GLYPH_WIDTH)
                        .filter(move |col| rows[row as usize] & (1 << (GLYPH_WIDTH - 1 - col)) != 0)
                        .map(move |col| (i as u32 * ADVANCE + col, row))
                })
            })
    }
}

impl Face for BitmapFace {
    fn text_bbox(&self, text: &str) -> TextBox {
        let s = self.scale as i32;
        Self::cells(text)
            .map(|(col, row)| {
                let (x, y) = (col as i32 * s, row as i32 * s);
                TextBox::new(x, y, x + s, y + s)
            })
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or_default()
    }

    fn draw_text(&self, canvas: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        let s = self.scale as i32;
        for (col, row) in Self::cells(text) {
            let x0 = origin.0 + col as i32 * s;
            let y0 = origin.1 + row as i32 * s;
            for dy in 0..s {
                for dx in 0..s {
                    blend_pixel(canvas, x0 + dx, y0 + dy, color, 1.0);
                }
            }
        }
    }

    fn describe(&self) -> String {
        format!("builtin 5x7 at scale {}", self.scale)
    }
}
