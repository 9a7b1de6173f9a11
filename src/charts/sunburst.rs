// src/charts/sunburst.rs
//
// Single-level sunburst: one ring segment per town, sized by the chosen
// metric and colored on the white→blue→red scale.

use super::{color::{metric_scale, Rgb}, ChartError};
use crate::{
    config::consts::COL_TOWN,
    config::options::Metric,
    data::Table,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub town: String,
    /// Sum of the metric over the town's rows.
    pub value: f64,
    /// Value-weighted mean of the metric; drives the color.
    pub color_value: f64,
    pub color: Rgb,
    /// Fraction of the full circle (all segments sum to 1).
    pub share: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SunburstChart {
    pub title: String,
    pub metric: Metric,
    pub total: f64,
    pub segments: Vec<Segment>,
}

pub fn empty_message(metric: Metric) -> String {
    format!(
        "No data available for '{}'. Please select another metric or adjust the filter.",
        metric.column()
    )
}

pub fn build(table: &Table, metric: Metric) -> Result<SunburstChart, ChartError> {
    let town_c = col!(table, COL_TOWN);
    let m_c = col!(table, metric.column());

    let positive = table.all().filter_positive(m_c);
    if positive.is_empty() {
        return Err(ChartError::NoData(empty_message(metric)));
    }

    let groups: Vec<(String, f64, f64)> = positive
        .group_by_text(town_c)
        .into_iter()
        .map(|(town, rows)| {
            let vals: Vec<f64> = rows.iter().filter_map(|&ix| table.num(ix, m_c)).collect();
            let sum: f64 = vals.iter().sum();
            let weighted = vals.iter().map(|v| v * v).sum::<f64>() / sum;
            (s!(town), sum, weighted)
        })
        .collect();

    let total: f64 = groups.iter().map(|(_, v, _)| v).sum();

    let segments = groups
        .into_iter()
        .map(|(town, value, color_value)| Segment {
            town,
            value,
            color_value,
            color: metric_scale(color_value),
            share: value / total,
        })
        .collect();

    Ok(SunburstChart {
        title: format!("{} Distribution Across Towns", metric.column()),
        metric,
        total,
        segments,
    })
}
