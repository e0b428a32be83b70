// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end raster smoke test: scene -> PNG bytes/file, decoded and probed.

use chart_core::{Chart, Record};
use chart_render_skia::SkiaRenderer;

fn chart() -> Chart {
    Chart::new(vec![
        Record::new(1994, 4684.0, "Rider A", "ITA"),
        Record::new(1998, 4455.0, "Rider B", "ESP").with_doping("EPO"),
    ])
    .expect("chart")
}

#[test]
fn render_smoke_png() {
    let scene = chart().scene();
    let renderer = SkiaRenderer::new();

    let bytes = renderer.render_png_bytes(&scene).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&scene, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn dots_are_painted_in_their_colors() {
    let scene = chart().scene();
    let bytes = SkiaRenderer::new().render_png_bytes(&scene).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (1500, 800));

    // background
    assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 255]);
    // no allegation at (375, 700), allegation at (1475, 150)
    let [r, g, b, _] = img.get_pixel(375, 700).0;
    assert!(b > 200 && r < 60 && g < 60, "expected blue, got {:?}", (r, g, b));
    let [r, g, b, _] = img.get_pixel(1475, 150).0;
    assert!(r > 200 && g < 60 && b < 60, "expected red, got {:?}", (r, g, b));
}

#[test]
fn legend_swatches_fill_their_full_square() {
    let scene = chart().scene();
    let bytes = SkiaRenderer::new().render_png_bytes(&scene).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    // legend sits at (1475, 370); swatches are 20px squares stacked downwards
    assert_eq!(img.get_pixel(1476, 371).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1493, 388).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1476, 391).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(1493, 408).0, [0, 0, 255, 255]);
    // right of the swatch column is background
    assert_eq!(img.get_pixel(1497, 380).0, [255, 255, 255, 255]);
}

