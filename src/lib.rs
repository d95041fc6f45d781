//! Extension icon renderer
//!
//! Renders the square PNG icons a browser extension ships with: a solid
//! background and a short centered label, at 16, 32, 48 and 128 pixels.
//!
//! # Features
//!
//! - **Font chain**: candidate fonts are probed in order and the first one
//!   available wins; a built-in bitmap font is always there as the fallback
//! - **Deterministic output**: the built-in font draws whole pixels, so
//!   repeated runs produce byte-identical files
//! - **Configurable**: every constant lives in `RenderConfig`, which can be
//!   loaded from JSON
//!
//! # Example
//!
//! ```no_run
//! use exticon::{IconRenderer, RenderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = IconRenderer::new(RenderConfig::default())?;
//! for report in renderer.render_all()? {
//!     println!("Created {} ({}x{})", report.path.display(), report.size, report.size);
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod fonts;
pub mod icons;
pub mod rendering;

pub use fonts::{FontCandidate, FontChain};
pub use icons::{default_icon_set, render_icon, IconRenderer, IconReport, IconSpec};

/// Orange badge color (#E8710A)
pub const BACKGROUND: [u8; 3] = [232, 113, 10];
pub const FOREGROUND: [u8; 3] = [255, 255, 255];

/// Background and text colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: [u8; 3],
    pub foreground: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            foreground: FOREGROUND,
        }
    }
}

/// Configuration for rendering an icon set
///
/// The defaults reproduce the extension's icons: white "TM" on orange, text
/// sized to 60% of the icon, written to `icons/icon{16,32,48,128}.png`.
/// Fields missing from a JSON config keep their default value.
///
/// # Examples
///
/// ```
/// let cfg = exticon::RenderConfig::default();
/// assert_eq!(cfg.text, "TM");
/// assert_eq!(cfg.icons.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Label drawn in the middle of every icon
    pub text: String,
    pub palette: Palette,
    /// Font pixel size as a fraction of the icon size
    pub font_scale: f32,
    /// Font candidates, tried in order
    pub fonts: Vec<FontCandidate>,
    /// Directory the icons are written to; must exist
    pub out_dir: PathBuf,
    pub icons: Vec<IconSpec>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text: "TM".to_string(),
            palette: Palette::default(),
            font_scale: 0.6,
            fonts: fonts::default_candidates(),
            out_dir: PathBuf::from("icons"),
            icons: default_icon_set(),
        }
    }
}

impl RenderConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: RenderConfig = serde_json::from_str(&raw)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.font_scale.is_finite() || self.font_scale <= 0.0 {
            return Err(Error::ConfigError(format!(
                "font_scale must be a positive number, got {}",
                self.font_scale
            )));
        }
        if let Some(spec) = self.icons.iter().find(|s| s.size == 0) {
            return Err(Error::InvalidSize(spec.size));
        }
        if let Some(spec) = self.icons.iter().find(|s| s.file_name.trim().is_empty()) {
            return Err(Error::ConfigError(format!(
                "icon of size {} has an empty file name",
                spec.size
            )));
        }
        Ok(())
    }
}
