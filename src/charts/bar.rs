// src/charts/bar.rs
//
// Towns with vs. without hotels. The source column is a "does not exist"
// flag, so key 0 means hotels exist and key 1 means they don't.

use super::{color::Rgb, ChartError};
use crate::{
    config::consts::COL_HOTELS_MISSING,
    config::options::{BarDisplay, BarOptions},
    data::Table,
};

pub const X_LABELS: [&str; 2] = ["Hotels Exist", "Hotels Do Not Exist"];
pub const X_TITLE: &str = "Existence of Hotels";

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: &'static str,
    pub bars: Vec<Bar>,
    pub show_grid: bool,
}

/// Raw counts for keys 0 and 1 (a key that never occurs counts 0).
/// Other values get no bar.
pub fn existence_counts(table: &Table) -> Result<[usize; 2], ChartError> {
    let c = col!(table, COL_HOTELS_MISSING);
    let mut out = [0usize; 2];
    for (key, n) in table.all().value_counts(c) {
        if key == 0.0 {
            out[0] = n;
        } else if key == 1.0 {
            out[1] = n;
        }
    }
    Ok(out)
}

/// Proportions are shares of every non-null row, so a stray key shrinks
/// both bars rather than being dropped from the denominator.
pub fn build(table: &Table, opts: &BarOptions) -> Result<BarChart, ChartError> {
    let counts = existence_counts(table)?;
    let c = col!(table, COL_HOTELS_MISSING);
    let total = table.all().values(c).len() as f64;
    if total == 0.0 {
        return Err(ChartError::NoData(format!(
            "No data available for '{}'.",
            COL_HOTELS_MISSING
        )));
    }

    let value = |n: usize| match opts.display {
        BarDisplay::Proportion => n as f64 / total * 100.0,
        BarDisplay::Absolute => n as f64,
    };
    let colors = [opts.exist_color, opts.missing_color];

    let bars = (0..2)
        .map(|i| Bar { label: X_LABELS[i], value: value(counts[i]), color: colors[i] })
        .collect();

    Ok(BarChart {
        title: format!("Distribution of Towns with/without Hotels ({})", opts.display.label()),
        y_label: opts.display.label(),
        bars,
        show_grid: opts.show_grid,
    })
}
