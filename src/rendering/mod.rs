//! Rendering pipeline: layout, paint commands, rasterization

pub mod layout;
pub mod paint;
pub mod raster;

use image::RgbImage;
use sha2::{Digest, Sha256};

use crate::Result;

/// An encoded icon ready to be written to disk.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub size: u32,
    /// Face the text was drawn with
    pub font: String,
    pub png_data: Vec<u8>,
}

impl Rendered {
    pub fn from_canvas(canvas: &RgbImage, font: impl Into<String>) -> Result<Self> {
        Ok(Self {
            size: canvas.width(),
            font: font.into(),
            png_data: raster::encode_png(canvas)?,
        })
    }

    /// Hex SHA-256 of the PNG bytes
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}
