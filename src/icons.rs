//! Icon table and the renderer that turns it into PNG files

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::fonts::FontChain;
use crate::rendering::layout::font_px;
use crate::rendering::raster::rasterize;
use crate::rendering::Rendered;
use crate::{Error, RenderConfig, Result};

/// One icon to produce: its side in pixels and its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: String,
}

impl IconSpec {
    pub fn new(size: u32, file_name: impl Into<String>) -> Self {
        Self {
            size,
            file_name: file_name.into(),
        }
    }

    /// Output path of this icon inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

/// The extension's icon sizes: 16, 32, 48 and 128 pixels.
pub fn default_icon_set() -> Vec<IconSpec> {
    [16, 32, 48, 128]
        .into_iter()
        .map(|size| IconSpec::new(size, format!("icon{}.png", size)))
        .collect()
}

/// Outcome of rendering one icon
#[derive(Debug, Clone)]
pub struct IconReport {
    pub size: u32,
    pub path: PathBuf,
    /// Face the text was drawn with
    pub font: String,
    /// Hex SHA-256 of the written PNG
    pub digest: String,
}

/// Renders icons according to a `RenderConfig`.
#[derive(Debug)]
pub struct IconRenderer {
    config: RenderConfig,
    fonts: FontChain,
}

impl IconRenderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let fonts = FontChain::from_candidates(&config.fonts);
        Ok(Self { config, fonts })
    }

    /// Use a custom font chain instead of the configured candidates.
    pub fn with_fonts(config: RenderConfig, fonts: FontChain) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, fonts })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a `size` x `size` icon in memory.
    pub fn render(&self, size: u32) -> Result<Rendered> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        let face = self.fonts.resolve(font_px(size, self.config.font_scale));
        let canvas = rasterize(size, &self.config.text, &self.config.palette, face.as_ref())?;
        Rendered::from_canvas(&canvas, face.describe())
    }

    /// Render a `size` x `size` icon and write it to `path`, overwriting any
    /// existing file. The parent directory must already exist.
    pub fn render_to(&self, size: u32, path: &Path) -> Result<IconReport> {
        let rendered = self.render(size)?;
        fs::write(path, &rendered.png_data).map_err(|e| Error::io(path, e))?;
        info!("wrote {} ({}x{}) using {}", path.display(), size, size, rendered.font);
        let digest = rendered.digest();
        Ok(IconReport {
            size,
            path: path.to_path_buf(),
            font: rendered.font,
            digest,
        })
    }

    /// Render one entry of the icon table into the output directory.
    pub fn render_icon(&self, spec: &IconSpec) -> Result<IconReport> {
        self.render_to(spec.size, &spec.path_in(&self.config.out_dir))
    }

    /// Render every configured icon, stopping at the first failure.
    pub fn render_all(&self) -> Result<Vec<IconReport>> {
        self.config.icons.iter().map(|spec| self.render_icon(spec)).collect()
    }
}

/// Render a single icon with `config`'s text, palette and fonts.
pub fn render_icon(
    size: u32,
    path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<IconReport> {
    IconRenderer::new(config.clone())?.render_to(size, path.as_ref())
}
