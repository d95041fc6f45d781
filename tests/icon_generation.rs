//! End-to-end tests for writing the icon set

use std::path::Path;
use std::process::Command;

use exticon::{Error, FontCandidate, IconRenderer, RenderConfig, BACKGROUND, FOREGROUND};
use image::{ColorType, RgbImage};

/// Config that only uses the built-in font (the system font path is missing).
fn fallback_config(out_dir: &Path) -> RenderConfig {
    RenderConfig {
        fonts: vec![
            FontCandidate::file("/nonexistent/System/Library/Fonts/Helvetica.ttc"),
            FontCandidate::Builtin,
        ],
        out_dir: out_dir.to_path_buf(),
        ..Default::default()
    }
}

fn corners(img: &RgbImage) -> [[u8; 3]; 4] {
    let (w, h) = img.dimensions();
    [
        img.get_pixel(0, 0).0,
        img.get_pixel(w - 1, 0).0,
        img.get_pixel(0, h - 1).0,
        img.get_pixel(w - 1, h - 1).0,
    ]
}

/// Bounding box (left, top, right, bottom) of pixels equal to `color`
fn ink_box(img: &RgbImage, color: [u8; 3]) -> Option<(u32, u32, u32, u32)> {
    img.enumerate_pixels()
        .filter(|(_, _, p)| p.0 == color)
        .fold(None, |acc, (x, y, _)| match acc {
            None => Some((x, y, x + 1, y + 1)),
            Some((l, t, r, b)) => Some((l.min(x), t.min(y), r.max(x + 1), b.max(y + 1))),
        })
}

#[test]
fn generates_all_four_icons_with_missing_font() {
    let dir = tempfile::tempdir().expect("tempdir");
    let renderer = IconRenderer::new(fallback_config(dir.path())).expect("renderer");
    let reports = renderer.render_all().expect("render all");
    assert_eq!(reports.len(), 4);

    for (report, size) in reports.iter().zip([16u32, 32, 48, 128]) {
        assert_eq!(report.size, size);
        assert_eq!(report.path, dir.path().join(format!("icon{}.png", size)));
        assert!(report.font.starts_with("builtin"), "{}", report.font);

        let img = image::open(&report.path).expect("decode icon");
        assert_eq!(img.width(), size);
        assert_eq!(img.height(), size);
        assert_eq!(img.color(), ColorType::Rgb8);
        assert_eq!(corners(&img.to_rgb8()), [BACKGROUND; 4]);
    }
}

#[test]
fn icon16_has_configured_background() {
    let dir = tempfile::tempdir().expect("tempdir");
    let renderer = IconRenderer::new(fallback_config(dir.path())).expect("renderer");
    let path = dir.path().join("icon16.png");
    renderer.render_to(16, &path).expect("render");

    let img = image::open(&path).expect("decode").to_rgb8();
    assert_eq!(img.dimensions(), (16, 16));
    assert_eq!(img.get_pixel(0, 0).0, [232, 113, 10]);
    assert_eq!(img.get_pixel(15, 15).0, [232, 113, 10]);
}

#[test]
fn icon128_draws_centered_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let renderer = IconRenderer::new(fallback_config(dir.path())).expect("renderer");
    let path = dir.path().join("icon128.png");
    renderer.render_to(128, &path).expect("render");

    let img = image::open(&path).expect("decode").to_rgb8();
    let central_ink = (32..96)
        .flat_map(|y| (32..96).map(move |x| (x, y)))
        .any(|(x, y)| img.get_pixel(x, y).0 == FOREGROUND);
    assert!(central_ink, "Expected text pixels in the central region");

    let (left, top, right, bottom) = ink_box(&img, FOREGROUND).expect("text drawn");
    let size = 128;
    // floor division puts any odd remainder on the right/bottom
    assert_eq!(left, (size - (right - left)) / 2);
    assert_eq!(top, (size - (bottom - top)) / 2);
}

#[test]
fn rendering_twice_is_identical() {
    let first = tempfile::tempdir().expect("tempdir");
    let second = tempfile::tempdir().expect("tempdir");
    let a = IconRenderer::new(fallback_config(first.path())).unwrap().render_all().unwrap();
    let b = IconRenderer::new(fallback_config(second.path())).unwrap().render_all().unwrap();
    for (a, b) in a.iter().zip(&b) {
        assert_eq!(a.digest, b.digest, "icon{} differs between runs", a.size);
    }
}

#[test]
fn rerun_overwrites_existing_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("icon48.png");
    std::fs::write(&path, b"stale").unwrap();

    let report = exticon::render_icon(48, &path, &fallback_config(dir.path())).expect("render");
    let img = image::open(&path).expect("decode");
    assert_eq!(img.width(), 48);
    assert_eq!(report.path, path);
}

#[test]
fn missing_output_directory_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("icons");
    let renderer = IconRenderer::new(fallback_config(&missing)).expect("renderer");

    let err = renderer.render_all().unwrap_err();
    match &err {
        Error::Io { path, .. } => assert_eq!(path, &missing.join("icon16.png")),
        other => panic!("unexpected error {:?}", other),
    }
    assert!(err.to_string().contains("icon16.png"));
}

#[test]
fn zero_size_fails_before_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("icon0.png");
    let err = exticon::render_icon(0, &path, &fallback_config(dir.path())).unwrap_err();
    assert!(matches!(err, Error::InvalidSize(0)));
    assert!(!path.exists());
}

#[test]
fn binary_writes_icon_set_and_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir(dir.path().join("icons")).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_exticon"))
        .current_dir(dir.path())
        .output()
        .expect("run exticon");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    for size in [16, 32, 48, 128] {
        let line = format!("Created icons/icon{size}.png ({size}x{size})");
        assert!(stdout.contains(&line), "missing {:?} in {}", line, stdout);
        let img = image::open(dir.path().join(format!("icons/icon{size}.png"))).expect("decode");
        assert_eq!(img.width(), size);
        assert_eq!(corners(&img.to_rgb8()), [BACKGROUND; 4]);
    }
    assert!(stdout.contains("\n\n✅ All icons created successfully!\n"), "{}", stdout);
    assert!(stdout.contains("Update manifest.json with the icon paths."));
}

#[test]
fn binary_fails_without_output_directory() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_exticon"))
        .current_dir(dir.path())
        .output()
        .expect("run exticon");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("icons/icon16.png"), "{}", stderr);
}
