// File: crates/chart-core/src/types.rs
// Summary: Canvas size defaults and the margins framing the plot area.

/// Default canvas width in pixels.
pub const WIDTH: u32 = 1500;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 800;

/// Margins between the canvas edge and the plot area, in pixels.
/// The x axis sits on `bottom`, the y axis on `left`; the title lives in `top`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    pub const fn hsum(&self) -> u32 { self.left + self.right }
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// True when a `width` x `height` canvas leaves a non-empty plot area.
    pub const fn fits(&self, width: u32, height: u32) -> bool {
        width > self.hsum() && height > self.vsum()
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(100, 25, 150, 100)
    }
}
