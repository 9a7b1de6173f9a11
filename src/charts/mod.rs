// src/charts/mod.rs
//! # Chart models
//!
//! Pure functions from `(&Table, &options)` to a small chart model. No UI
//! types live here: the GUI paints these models with egui, the CLI prints
//! them as text, tests assert on them directly.
//!
//! Each builder:
//! - resolves the columns it needs (missing column → `ChartError::Data`),
//! - filters/aggregates through `data::RowView`,
//! - returns a model carrying its own title and labels.
//!
//! Conditions the original dashboard would crash on (zero denominators,
//! empty filters) come back as `ChartError` values that the caller shows
//! as a warning in place of the chart.

use std::{error::Error, fmt};

use crate::data::DataError;

pub mod color;
pub mod pie;
pub mod bar;
pub mod scatter;
pub mod sunburst;

#[derive(Clone, Debug, PartialEq)]
pub enum ChartError {
    Data(DataError),
    /// Percentages would divide by zero (e.g. nothing selected).
    ZeroDenominator(String),
    /// Nothing left to draw after filtering; carries the user-facing message.
    NoData(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Data(e) => write!(f, "{e}"),
            ChartError::ZeroDenominator(what) => {
                write!(f, "Cannot compute percentages: total {what} is zero for this selection.")
            }
            ChartError::NoData(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<DataError> for ChartError {
    fn from(e: DataError) -> Self { ChartError::Data(e) }
}
