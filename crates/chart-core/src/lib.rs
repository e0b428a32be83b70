// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for building and driving the doping chart.

pub mod chart;
pub mod record;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod scene;
pub mod theme;
pub mod interaction;
pub mod svg;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use record::{parse_records, Record};
pub use axis::{format_minutes_seconds, format_year, Axis};
pub use scale::{compute_scales, LinearScale, ScaleTransform, Scales};
pub use scene::{Dot, Node, Scene};
pub use theme::{Color, Theme};
pub use interaction::{
    ActiveTooltip, Hover, HoverSurface, HoverTracker, PointerEvent, TooltipContent, TooltipPosition,
};
pub use svg::render_svg;
pub use error::{ChartError, DataLoadError};

/// Published dataset of fastest Alpe d'Huez ascents.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";
