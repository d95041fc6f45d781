//! Canvas allocation, display-list execution and PNG encoding

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use crate::fonts::Face;
use crate::rendering::layout::center_origin;
use crate::rendering::paint::{paint, PaintCommand};
use crate::{Error, Palette, Result};

/// Build the display list for one icon: background fill, then centered text.
pub fn display_list(
    size: u32,
    text: &str,
    palette: &Palette,
    face: &dyn Face,
) -> Vec<PaintCommand> {
    let bbox = face.text_bbox(text);
    let (x, y) = center_origin(size, &bbox);
    vec![
        PaintCommand::Fill {
            rgb: palette.background,
        },
        PaintCommand::Text {
            x,
            y,
            text: text.to_string(),
            rgb: palette.foreground,
        },
    ]
}

/// Rasterize a `size` x `size` icon with `text` centered on the background.
pub fn rasterize(size: u32, text: &str, palette: &Palette, face: &dyn Face) -> Result<RgbImage> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }
    let commands = display_list(size, text, palette, face);
    let mut canvas = RgbImage::new(size, size);
    paint(&mut canvas, &commands, face);
    Ok(canvas)
}

/// Encode a canvas as an RGB8 PNG.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    canvas
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))?;
    Ok(buf.into_inner())
}
