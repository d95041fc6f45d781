use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use exticon::{FontCandidate, IconRenderer, RenderConfig};

/// Render the extension's PNG icons.
///
/// With no arguments, writes icons/icon16.png, icon32.png, icon48.png and
/// icon128.png relative to the current directory.
#[derive(Parser, Debug)]
#[command(name = "exticon", version, about)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory to write the icons to (must exist)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Font file to try before the configured ones (repeatable)
    #[arg(long = "font", value_name = "FILE")]
    fonts: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(dir) = cli.out_dir {
        config.out_dir = dir;
    }
    if !cli.fonts.is_empty() {
        let mut fonts: Vec<FontCandidate> = cli.fonts.iter().map(FontCandidate::file).collect();
        fonts.append(&mut config.fonts);
        config.fonts = fonts;
    }

    let renderer = IconRenderer::new(config)?;
    for spec in &renderer.config().icons {
        let report = renderer
            .render_icon(spec)
            .with_context(|| format!("failed to create {}x{} icon", spec.size, spec.size))?;
        println!("Created {} ({}x{})", report.path.display(), report.size, report.size);
    }

    println!("\n✅ All icons created successfully!");
    println!("Update manifest.json with the icon paths.");
    Ok(())
}
