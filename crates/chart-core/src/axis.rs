// File: crates/chart-core/src/axis.rs
// Summary: Axis model (bottom/left), tick formatting, and scene construction for axes.

use crate::geometry::{Point, Transform};
use crate::scale::{LinearScale, ScaleTransform};
use crate::scene::{Group, Label, Node, Segment, TextAnchor};
use crate::theme::Color;

/// Length of the outward tick marks, in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
const TICK_PADDING: f64 = 3.0;
const TICK_FONT_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// Converts a tick value to its label.
pub type TickFormat = fn(f64) -> String;

#[derive(Clone)]
pub struct Axis {
    pub id: String,
    pub orientation: Orientation,
    pub scale: LinearScale,
    pub tick_count: usize,
    pub format: TickFormat,
    /// Placement of the whole axis group on the canvas.
    pub transform: Transform,
}

impl Axis {
    pub fn new(id: impl Into<String>, orientation: Orientation, scale: LinearScale, format: TickFormat) -> Self {
        Self { id: id.into(), orientation, scale, tick_count: 10, format, transform: Transform::Identity }
    }

    pub fn at(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Tick values paired with their labels.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.scale.ticks(self.tick_count).into_iter().map(|v| (v, (self.format)(v))).collect()
    }

    /// Build the axis group: a domain line, then one `tick` group per value.
    pub fn to_node(&self, color: Color) -> Node {
        let mut g = Group::new(self.id.clone()).at(self.transform);
        let (r0, r1) = self.scale.range;
        let domain = match self.orientation {
            Orientation::Bottom => Segment { from: Point::new(r0, 0.0), to: Point::new(r1, 0.0), stroke: color, width: 1.0 },
            Orientation::Left => Segment { from: Point::new(0.0, r0), to: Point::new(0.0, r1), stroke: color, width: 1.0 },
        };
        g.push(domain);

        for (value, text) in self.tick_labels() {
            let offset = self.scale.to_px(value);
            let mut label = Label::new(text, TICK_FONT_PX, color);
            let (tick_at, mark_end) = match self.orientation {
                Orientation::Bottom => {
                    label.at = Point::new(0.0, TICK_SIZE + TICK_PADDING);
                    label.dy_em = 0.71;
                    label.anchor = TextAnchor::Middle;
                    (Transform::translate(offset, 0.0), Point::new(0.0, TICK_SIZE))
                }
                Orientation::Left => {
                    label.at = Point::new(-(TICK_SIZE + TICK_PADDING), 0.0);
                    label.dy_em = 0.32;
                    label.anchor = TextAnchor::End;
                    (Transform::translate(0.0, offset), Point::new(-TICK_SIZE, 0.0))
                }
            };
            let mut tick = Group::with_class("tick").at(tick_at);
            tick.push(Segment { from: Point::default(), to: mark_end, stroke: color, width: 1.0 });
            tick.push(label);
            g.push(tick);
        }
        g.into()
    }
}

/// Year tick label: whole years print without a fractional part.
pub fn format_year(v: f64) -> String {
    if v.fract() == 0.0 { format!("{}", v as i64) } else { format!("{v}") }
}

/// `m:ss` label for a value in seconds; minutes are not padded, seconds
/// always have two integer digits.
pub fn format_minutes_seconds(v: f64) -> String {
    let minutes = (v / 60.0).floor();
    let secs = v - minutes * 60.0;
    let pad = if secs < 10.0 { "0" } else { "" };
    if secs.fract() == 0.0 {
        format!("{}:{pad}{}", minutes as i64, secs as i64)
    } else {
        format!("{}:{pad}{secs}", minutes as i64)
    }
}
