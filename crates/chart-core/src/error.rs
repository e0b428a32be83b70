// File: crates/chart-core/src/error.rs
// Summary: Error types for loading records and driving a rendered chart.

use thiserror::Error;

/// Failures turning a fetched payload into chart records.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("dataset contains no records")]
    Empty,

    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Data(#[from] DataLoadError),

    /// A hover event referenced a point that is not in the scene.
    #[error("no point with index {0}")]
    UnknownPoint(usize),

    /// A tooltip handle did not match any open tooltip.
    #[error("tooltip is not open")]
    UnknownTooltip,
}

pub type Result<T> = std::result::Result<T, ChartError>;
