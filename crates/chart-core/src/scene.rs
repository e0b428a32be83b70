// File: crates/chart-core/src/scene.rs
// Summary: Renderer-agnostic scene description (groups, text, dots, swatches, lines).
// Notes:
// - Adapters (SVG string, Skia raster, browser DOM) walk this tree; nothing in
//   here performs I/O.
// - Node ids and classes mirror the DOM ids external tooling queries for
//   (`x-axis`, `y-axis`, `legend`, `dot`, ...).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Transform};
use crate::interaction::{TooltipContent, TooltipPosition};
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Baseline {
    Alphabetic,
    Central,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<String>,
    pub class: Option<String>,
    pub transform: Transform,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), class: None, transform: Transform::Identity, children: Vec::new() }
    }

    pub fn with_class(class: impl Into<String>) -> Self {
        Self { id: None, class: Some(class.into()), transform: Transform::Identity, children: Vec::new() }
    }

    pub fn at(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }
}

/// A run of text. `at` is the local anchor point; `dy_em` shifts it down by a
/// multiple of the font size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: Option<String>,
    pub text: String,
    pub at: Point,
    pub dy_em: f64,
    pub transform: Transform,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    /// Font size in pixels.
    pub font_size: f64,
    pub color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>, font_size: f64, color: Color) -> Self {
        Self {
            id: None,
            text: text.into(),
            at: Point::default(),
            dy_em: 0.0,
            transform: Transform::Identity,
            anchor: TextAnchor::Start,
            baseline: Baseline::Alphabetic,
            font_size,
            color,
        }
    }
}

/// One plotted record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    /// Position of the source record in the chart's record list.
    pub index: usize,
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    /// Exposed as `data-xvalue`.
    pub year: i32,
    /// Exposed as `data-yvalue`.
    pub time_of_day: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub rect: Rect,
    pub fill: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub stroke: Color,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Group(Group),
    Text(Label),
    Dot(Dot),
    Swatch(Swatch),
    Line(Segment),
}

impl From<Group> for Node { fn from(g: Group) -> Self { Node::Group(g) } }
impl From<Label> for Node { fn from(l: Label) -> Self { Node::Text(l) } }
impl From<Dot> for Node { fn from(d: Dot) -> Self { Node::Dot(d) } }
impl From<Swatch> for Node { fn from(s: Swatch) -> Self { Node::Swatch(s) } }
impl From<Segment> for Node { fn from(s: Segment) -> Self { Node::Line(s) } }

/// A tooltip currently shown over the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TooltipNode {
    pub id: u64,
    pub content: TooltipContent,
    pub position: TooltipPosition,
}

/// Everything one render of the chart draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub nodes: Vec<Node>,
    /// Hover overlays; empty for a freshly built scene.
    #[serde(default)]
    pub tooltips: Vec<TooltipNode>,
    #[serde(skip)]
    pub(crate) next_tooltip: u64,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self { width, height, background, nodes: Vec::new(), tooltips: Vec::new(), next_tooltip: 0 }
    }

    /// All dots in document order.
    pub fn dots(&self) -> Vec<&Dot> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a Dot>) {
            for n in nodes {
                match n {
                    Node::Dot(d) => out.push(d),
                    Node::Group(g) => walk(&g.children, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }

    pub fn dot(&self, index: usize) -> Option<&Dot> {
        self.dots().into_iter().find(|d| d.index == index)
    }

    pub fn dot_mut(&mut self, index: usize) -> Option<&mut Dot> {
        fn walk(nodes: &mut [Node], index: usize) -> Option<&mut Dot> {
            for n in nodes {
                match n {
                    Node::Dot(d) if d.index == index => return Some(d),
                    Node::Group(g) => {
                        if let Some(d) = walk(&mut g.children, index) { return Some(d); }
                    }
                    _ => {}
                }
            }
            None
        }
        walk(&mut self.nodes, index)
    }

    /// Find a group by id anywhere in the tree.
    pub fn group(&self, id: &str) -> Option<&Group> {
        fn walk<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Group> {
            for n in nodes {
                if let Node::Group(g) = n {
                    if g.id.as_deref() == Some(id) { return Some(g); }
                    if let Some(found) = walk(&g.children, id) { return Some(found); }
                }
            }
            None
        }
        walk(&self.nodes, id)
    }

    /// Find a label by id anywhere in the tree.
    pub fn label(&self, id: &str) -> Option<&Label> {
        fn walk<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Label> {
            for n in nodes {
                match n {
                    Node::Text(l) if l.id.as_deref() == Some(id) => return Some(l),
                    Node::Group(g) => {
                        if let Some(found) = walk(&g.children, id) { return Some(found); }
                    }
                    _ => {}
                }
            }
            None
        }
        walk(&self.nodes, id)
    }
}
