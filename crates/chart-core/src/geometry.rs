// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and element transforms.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }
}

/// Placement of a group or text element relative to its parent.
///
/// `RotateTranslate` rotates first and then translates inside the rotated
/// frame, the same order as the SVG `rotate(a) translate(x, y)` list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    #[default]
    Identity,
    Translate { x: f64, y: f64 },
    RotateTranslate { degrees: f64, x: f64, y: f64 },
}

impl Transform {
    pub const fn translate(x: f64, y: f64) -> Self {
        Transform::Translate { x, y }
    }

    /// Map a local point into the parent frame.
    pub fn apply(&self, p: Point) -> Point {
        match *self {
            Transform::Identity => p,
            Transform::Translate { x, y } => Point::new(p.x + x, p.y + y),
            Transform::RotateTranslate { degrees, x, y } => {
                let (sin, cos) = degrees.to_radians().sin_cos();
                let (lx, ly) = (p.x + x, p.y + y);
                Point::new(lx * cos - ly * sin, lx * sin + ly * cos)
            }
        }
    }
}
