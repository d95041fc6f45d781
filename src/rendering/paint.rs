//! Paint command set for icon canvases

use crate::fonts::Face;
use image::{Rgb, RgbImage};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Fill the whole canvas
    Fill { rgb: [u8; 3] },
    Text {
        x: i32,
        y: i32,
        text: String,
        rgb: [u8; 3],
    },
}

/// Execute `commands` in order on `canvas`, drawing text with `face`.
pub fn paint(canvas: &mut RgbImage, commands: &[PaintCommand], face: &dyn Face) {
    for cmd in commands {
        match cmd {
            PaintCommand::Fill { rgb } => {
                for pixel in canvas.pixels_mut() {
                    *pixel = Rgb(*rgb);
                }
            }
            PaintCommand::Text { x, y, text, rgb } => {
                face.draw_text(canvas, (*x, *y), text, Rgb(*rgb));
            }
        }
    }
}

/// Blend `color` over the pixel at (x, y) by `coverage` in 0..=1.
/// Pixels outside the canvas are ignored.
pub(crate) fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = *dst as f32 + (src as f32 - *dst as f32) * coverage;
        *dst = mixed.round() as u8;
    }
}
