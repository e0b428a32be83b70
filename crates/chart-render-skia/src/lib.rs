// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a chart scene using Skia CPU raster surfaces.

pub mod text;

use anyhow::Result;
use chart_core::geometry::Transform;
use chart_core::scene::{Label, Node, Scene};
use chart_core::Color;
use skia_safe as skia;

pub use text::TextShaper;

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Rasterize `scene` and return PNG-encoded bytes.
    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((scene.width as i32, scene.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", scene.width, scene.height))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(scene.background));
        for node in &scene.nodes {
            self.draw_node(canvas, node);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        tracing::debug!(bytes = data.as_bytes().len(), "encoded PNG");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_node(&self, canvas: &skia::Canvas, node: &Node) {
        match node {
            Node::Group(g) => {
                canvas.save();
                apply_transform(canvas, &g.transform);
                for child in &g.children {
                    self.draw_node(canvas, child);
                }
                canvas.restore();
            }
            Node::Text(label) => self.draw_label(canvas, label),
            Node::Dot(d) => {
                let center = (d.center.x as f32, d.center.y as f32);
                let mut fill = skia::Paint::default();
                fill.set_anti_alias(true);
                fill.set_color(to_skia(d.fill));
                canvas.draw_circle(center, d.radius as f32, &fill);

                let mut stroke = skia::Paint::default();
                stroke.set_anti_alias(true);
                stroke.set_style(skia::paint::Style::Stroke);
                stroke.set_stroke_width(1.0);
                stroke.set_color(to_skia(d.stroke));
                canvas.draw_circle(center, d.radius as f32, &stroke);
            }
            Node::Swatch(s) => {
                let mut paint = skia::Paint::default();
                paint.set_color(to_skia(s.fill));
                let r = &s.rect;
                let rect = skia::Rect::new(r.x as f32, r.y as f32, r.right() as f32, r.bottom() as f32);
                canvas.draw_rect(rect, &paint);
            }
            Node::Line(l) => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_stroke_width(l.width as f32);
                paint.set_color(to_skia(l.stroke));
                canvas.draw_line((l.from.x as f32, l.from.y as f32), (l.to.x as f32, l.to.y as f32), &paint);
            }
        }
    }

    fn draw_label(&self, canvas: &skia::Canvas, l: &Label) {
        canvas.save();
        apply_transform(canvas, &l.transform);
        let size = l.font_size as f32;
        let x = l.at.x as f32;
        let y = (l.at.y + l.dy_em * l.font_size) as f32;
        self.shaper.draw(canvas, &l.text, x, y, size, to_skia(l.color), l.anchor, l.baseline);
        canvas.restore();
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_transform(canvas: &skia::Canvas, t: &Transform) {
    match *t {
        Transform::Identity => {}
        Transform::Translate { x, y } => {
            canvas.translate((x as f32, y as f32));
        }
        Transform::RotateTranslate { degrees, x, y } => {
            canvas.rotate(degrees as f32, None);
            canvas.translate((x as f32, y as f32));
        }
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
