//! Font sizing and centering arithmetic for square icons

/// Ink bounding box of a piece of text, relative to the text origin.
///
/// The origin is the left edge of the first glyph's advance box on the
/// font's ascender line, so `left` and `top` are usually small positive
/// offsets. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Smallest box enclosing both `self` and `other`.
    pub fn union(&self, other: &TextBox) -> TextBox {
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Pixel size of the font for an icon of side `size`.
///
/// Truncates like an integer cast and never goes below one pixel.
pub fn font_px(size: u32, scale: f32) -> f32 {
    (size as f32 * scale).floor().max(1.0)
}

/// Draw origin that centers the ink box of `bbox` inside a `size` square.
///
/// Uses floor division so text wider than the canvas is still placed
/// symmetrically (rounded towards the top-left).
pub fn center_origin(size: u32, bbox: &TextBox) -> (i32, i32) {
    let size = size as i32;
    let x = (size - bbox.width()).div_euclid(2) - bbox.left;
    let y = (size - bbox.height()).div_euclid(2) - bbox.top;
    (x, y)
}
