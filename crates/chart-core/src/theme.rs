// File: crates/chart-core/src/theme.rs
// Summary: Color themes for the doping scatter plot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color value (`#rrggbb`, or `rgba(..)` when translucent).
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, f64::from(self.a) / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Titles, axis labels and legend text.
    pub text: Color,
    /// Axis domain lines, tick marks and tick labels.
    pub axis: Color,
    /// Resting fill for riders with an allegation.
    pub doping: Color,
    /// Resting fill for riders without one.
    pub no_doping: Color,
    /// Fill while the pointer is over a point.
    pub highlight: Color,
    pub dot_stroke: Color,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::WHITE,
            text: Color::BLACK,
            axis: Color::BLACK,
            doping: Color::RED,
            no_doping: Color::BLUE,
            highlight: Color::GREEN,
            dot_stroke: Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            text: Color::from_argb(255, 235, 235, 245),
            axis: Color::from_argb(255, 180, 180, 190),
            doping: Color::from_argb(255, 220, 80, 80),
            no_doping: Color::from_argb(255, 64, 160, 255),
            highlight: Color::from_argb(255, 40, 200, 120),
            dot_stroke: Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::BLACK,
            text: Color::WHITE,
            axis: Color::WHITE,
            doping: Color::from_argb(255, 0xff, 0x00, 0x00),
            no_doping: Color::from_argb(255, 0x00, 0xff, 0xff),
            highlight: Color::from_argb(255, 0xff, 0xff, 0x00),
            dot_stroke: Color::WHITE,
        }
    }

    /// Resting fill for a point, by allegation status.
    pub fn point_fill(&self, has_allegation: bool) -> Color {
        if has_allegation { self.doping } else { self.no_doping }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}
