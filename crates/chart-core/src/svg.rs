// File: crates/chart-core/src/svg.rs
// Summary: SVG adapter; serializes a `Scene` into a standalone SVG document string.

use std::fmt::Write as _;

use crate::geometry::Transform;
use crate::scene::{Baseline, Group, Label, Node, Scene, TextAnchor};

/// Render a scene as an SVG document with root id `chart`.
///
/// Tooltips are page overlays rather than SVG content and are not emitted.
pub fn render_svg(scene: &Scene) -> String {
    let mut svg = String::with_capacity(256 + scene.dots().len() * 180);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="chart" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" style="background:{bg}">"#,
        w = scene.width,
        h = scene.height,
        bg = scene.background,
    );
    for node in &scene.nodes {
        write_node(&mut svg, node);
    }
    svg.push_str("</svg>");
    svg
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Group(g) => write_group(out, g),
        Node::Text(l) => write_label(out, l),
        Node::Dot(d) => {
            let _ = write!(
                out,
                r#"<circle class="dot" data-index="{}" data-xvalue="{}""#,
                d.index, d.year,
            );
            if let Some(t) = d.time_of_day {
                let _ = write!(out, r#" data-yvalue="{}""#, t.format("%Y-%m-%dT%H:%M:%S"));
            }
            let _ = write!(
                out,
                r#" r="{}" cx="{}" cy="{}" fill="{}" stroke="{}"/>"#,
                d.radius, d.center.x, d.center.y, d.fill, d.stroke,
            );
        }
        Node::Swatch(s) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                s.rect.x, s.rect.y, s.rect.w, s.rect.h, s.fill,
            );
        }
        Node::Line(l) => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                l.from.x, l.from.y, l.to.x, l.to.y, l.stroke, l.width,
            );
        }
    }
}

fn write_group(out: &mut String, g: &Group) {
    out.push_str("<g");
    if let Some(id) = &g.id {
        let _ = write!(out, r#" id="{}""#, escape_xml(id));
    }
    if let Some(class) = &g.class {
        let _ = write!(out, r#" class="{}""#, escape_xml(class));
    }
    write_transform(out, &g.transform);
    out.push('>');
    for child in &g.children {
        write_node(out, child);
    }
    out.push_str("</g>");
}

fn write_label(out: &mut String, l: &Label) {
    out.push_str("<text");
    if let Some(id) = &l.id {
        let _ = write!(out, r#" id="{}""#, escape_xml(id));
    }
    if l.at.x != 0.0 || l.at.y != 0.0 {
        let _ = write!(out, r#" x="{}" y="{}""#, l.at.x, l.at.y);
    }
    if l.dy_em != 0.0 {
        let _ = write!(out, r#" dy="{}em""#, l.dy_em);
    }
    write_transform(out, &l.transform);
    let anchor = match l.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let _ = write!(out, r#" font-size="{}px" text-anchor="{anchor}" fill="{}""#, l.font_size, l.color);
    if l.baseline == Baseline::Central {
        out.push_str(r#" dominant-baseline="central""#);
    }
    let _ = write!(out, ">{}</text>", escape_xml(&l.text));
}

fn write_transform(out: &mut String, t: &Transform) {
    match *t {
        Transform::Identity => {}
        Transform::Translate { x, y } => {
            let _ = write!(out, r#" transform="translate({x}, {y})""#);
        }
        Transform::RotateTranslate { degrees, x, y } => {
            let _ = write!(out, r#" transform="rotate({degrees}) translate({x}, {y})""#);
        }
    }
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
