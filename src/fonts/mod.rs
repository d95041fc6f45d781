//! Font resolution: ordered candidate sources with a built-in fallback
//!
//! Each candidate is probed for availability. Probing never fails loudly: an
//! unavailable font yields `None` and the chain moves on. The built-in bitmap
//! font is always available, so resolution always produces a face.

pub mod builtin;
pub mod outline;

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::rendering::layout::TextBox;

pub use builtin::{BitmapFace, BuiltinFont};
pub use outline::{FileFont, OutlineFace};

/// Font the chain tries first by default.
pub const DEFAULT_SYSTEM_FONT: &str = "/System/Library/Fonts/Helvetica.ttc";

/// A font loaded at a fixed pixel size, able to measure and draw text.
pub trait Face {
    /// Ink bounding box of `text` drawn at origin (0, 0).
    fn text_bbox(&self, text: &str) -> TextBox;

    /// Draw `text` with its origin at `origin`. Pixels outside the canvas are clipped.
    fn draw_text(&self, canvas: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>);

    /// Human-readable name of the face, for logs and reports
    fn describe(&self) -> String;
}

/// Something that may be able to provide a face at a given pixel size.
pub trait FontSource: std::fmt::Debug {
    /// Load the font at `px` pixels, or `None` if it is unavailable.
    fn probe(&self, px: f32) -> Option<Box<dyn Face>>;

    fn describe(&self) -> String;
}

/// Serializable description of one font chain entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontCandidate {
    /// A TrueType/OpenType file or collection on disk
    File {
        path: PathBuf,
        /// Face index inside a collection (`.ttc`)
        #[serde(default)]
        index: u32,
    },
    /// The always-available bitmap font
    Builtin,
}

impl FontCandidate {
    pub fn file(path: impl AsRef<Path>) -> Self {
        FontCandidate::File {
            path: path.as_ref().to_path_buf(),
            index: 0,
        }
    }

    fn to_source(&self) -> Box<dyn FontSource> {
        match self {
            FontCandidate::File { path, index } => Box::new(FileFont::new(path.clone(), *index)),
            FontCandidate::Builtin => Box::new(BuiltinFont),
        }
    }
}

/// Default chain: the system font, then the built-in font.
pub fn default_candidates() -> Vec<FontCandidate> {
    vec![FontCandidate::file(DEFAULT_SYSTEM_FONT), FontCandidate::Builtin]
}

/// Ordered list of font sources; the first available one wins.
#[derive(Debug)]
pub struct FontChain {
    sources: Vec<Box<dyn FontSource>>,
}

impl FontChain {
    pub fn new(sources: Vec<Box<dyn FontSource>>) -> Self {
        Self { sources }
    }

    pub fn from_candidates(candidates: &[FontCandidate]) -> Self {
        Self::new(candidates.iter().map(FontCandidate::to_source).collect())
    }

    pub fn sources(&self) -> &[Box<dyn FontSource>] {
        &self.sources
    }

    /// Resolve a face at `px` pixels.
    ///
    /// Falls back to the built-in font when no source is available, even if
    /// the chain does not list it.
    pub fn resolve(&self, px: f32) -> Box<dyn Face> {
        for source in &self.sources {
            match source.probe(px) {
                Some(face) => {
                    debug!("using font {} at {}px", face.describe(), px);
                    return face;
                }
                None => debug!("font {} unavailable, trying next candidate", source.describe()),
            }
        }
        debug!("no font candidate available, using built-in font at {}px", px);
        Box::new(BitmapFace::for_px(px))
    }
}

impl Default for FontChain {
    fn default() -> Self {
        Self::from_candidates(&default_candidates())
    }
}
