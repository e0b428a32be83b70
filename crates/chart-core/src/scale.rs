// File: crates/chart-core/src/scale.rs
// Summary: Linear year (X) and race-time (Y) scales derived from the records.

use serde::{Deserialize, Serialize};

use crate::chart::RenderOptions;
use crate::error::DataLoadError;
use crate::grid::nice_ticks;
use crate::record::Record;

/// General scale transform operations.
pub trait ScaleTransform {
    fn to_px(&self, v: f64) -> f64;
    fn from_px(&self, px: f64) -> f64;
}

/// Affine map from a data domain `[d0, d1]` to a pixel range `[r0, r1]`.
///
/// Either interval may be reversed. A zero-width domain maps everything to the
/// middle of the range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Tick values inside the domain, in domain order.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleTransform for LinearScale {
    #[inline]
    fn to_px(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 != d0 { (v - d0) / (d1 - d0) } else { 0.5 };
        r0 + t * (r1 - r0)
    }

    #[inline]
    fn from_px(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if r1 != r0 { (px - r0) / (r1 - r0) } else { 0.5 };
        d0 + t * (d1 - d0)
    }
}

/// The two scales of the chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    /// Year to horizontal pixel.
    pub x: LinearScale,
    /// Seconds to vertical pixel; slower times sit lower.
    pub y: LinearScale,
}

/// Derive both scales from the data extents and the canvas layout.
///
/// The year domain starts one year before the earliest record so the first
/// column of points does not sit on the y axis.
pub fn compute_scales(records: &[Record], opts: &RenderOptions) -> Result<Scales, DataLoadError> {
    let first = records.first().ok_or(DataLoadError::Empty)?;

    let (mut min_year, mut max_year) = (first.year, first.year);
    let (mut min_s, mut max_s) = (first.seconds, first.seconds);
    for r in &records[1..] {
        min_year = min_year.min(r.year);
        max_year = max_year.max(r.year);
        min_s = min_s.min(r.seconds);
        max_s = max_s.max(r.seconds);
    }

    let w = opts.width as f64;
    let h = opts.height as f64;
    let pad = opts.insets;

    let x = LinearScale::new(
        (f64::from(min_year) - 1.0, f64::from(max_year)),
        (pad.left as f64, w - pad.right as f64),
    );
    let y = LinearScale::new(
        (max_s, min_s),
        (h - pad.bottom as f64, pad.top as f64),
    );
    tracing::debug!(x_domain = ?x.domain, y_domain = ?y.domain, "computed scales");
    Ok(Scales { x, y })
}
