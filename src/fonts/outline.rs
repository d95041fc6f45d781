//! Outline (TrueType/OpenType) fonts loaded from disk via `ab_glyph`

use std::fs;
use std::path::PathBuf;

use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use log::debug;

use crate::fonts::{Face, FontSource};
use crate::rendering::layout::TextBox;
use crate::rendering::paint::blend_pixel;

/// A font file on disk, optionally a face inside a collection.
#[derive(Debug, Clone)]
pub struct FileFont {
    path: PathBuf,
    index: u32,
}

impl FileFont {
    pub fn new(path: impl Into<PathBuf>, index: u32) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }
}

impl FontSource for FileFont {
    fn probe(&self, px: f32) -> Option<Box<dyn Face>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) => {
                debug!("cannot read font {}: {}", self.path.display(), e);
                return None;
            }
        };
        match FontVec::try_from_vec_and_index(data, self.index) {
            Ok(font) => Some(Box::new(OutlineFace::new(font, px, self.describe()))),
            Err(e) => {
                debug!("cannot parse font {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn describe(&self) -> String {
        if self.index == 0 {
            self.path.display().to_string()
        } else {
            format!("{}#{}", self.path.display(), self.index)
        }
    }
}

/// An outline font at a fixed em size in pixels.
pub struct OutlineFace {
    font: FontVec,
    px: f32,
    scale: PxScale,
    name: String,
}

impl OutlineFace {
    pub fn new(font: FontVec, px: f32, name: String) -> Self {
        let scale = em_scale(&font, px);
        Self {
            font,
            px,
            scale,
            name,
        }
    }

    /// Position glyphs on a single line starting at `origin`, whose y is the
    /// top of the ascender.
    fn layout(&self, text: &str, origin: (f32, f32)) -> Vec<Glyph> {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = origin.1 + scaled.ascent();
        let mut caret = origin.0;
        let mut prev: Option<GlyphId> = None;
        let mut glyphs = Vec::new();

        for c in text.chars().filter(|c| !c.is_control()) {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(self.scale, point(caret, baseline)));
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        glyphs
    }
}

impl Face for OutlineFace {
    fn text_bbox(&self, text: &str) -> TextBox {
        self.layout(text, (0.0, 0.0))
            .into_iter()
            .filter_map(|g| self.font.outline_glyph(g))
            .map(|outlined| {
                let b = outlined.px_bounds();
                TextBox {
                    left: b.min.x as i32,
                    top: b.min.y as i32,
                    right: b.max.x as i32,
                    bottom: b.max.y as i32,
                }
            })
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or_default()
    }

    fn draw_text(&self, canvas: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        for glyph in self.layout(text, (origin.0 as f32, origin.1 as f32)) {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i32 + gx as i32;
                    let y = bounds.min.y as i32 + gy as i32;
                    blend_pixel(canvas, x, y, color, coverage);
                });
            }
        }
    }

    fn describe(&self) -> String {
        format!("{} at {}px", self.name, self.px)
    }
}

/// `PxScale` whose em square is `px` pixels tall.
///
/// `PxScale` measures ascent to descent, which is larger than the em for
/// most fonts.
fn em_scale(font: &FontVec, px: f32) -> PxScale {
    let height = font.height_unscaled();
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 && height > 0.0 => {
            PxScale::from(px * height / units_per_em)
        }
        _ => PxScale::from(px),
    }
}
