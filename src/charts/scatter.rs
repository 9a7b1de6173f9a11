// src/charts/scatter.rs
//
// Hotels vs. restaurants for towns sharing one tourism index value.

use super::{color::{palette, Rgb}, ChartError};
use crate::{
    config::consts::{COL_HOTELS, COL_RESTAURANTS, COL_TOURISM_INDEX, COL_TOWN},
    data::Table,
};

pub const X_LABEL: &str = COL_HOTELS;
pub const Y_LABEL: &str = COL_RESTAURANTS;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub town: String,
    pub color: Rgb,
    pub points: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub index: i64,
    pub series: Vec<Series>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
    pub fn is_empty(&self) -> bool { self.point_count() == 0 }
}

/// Slider bounds: observed min/max of the index, truncated to integers.
pub fn index_bounds(table: &Table) -> Result<(i64, i64), ChartError> {
    let c = col!(table, COL_TOURISM_INDEX);
    let all = table.all();
    match (all.min(c), all.max(c)) {
        (Some(lo), Some(hi)) => Ok((lo.trunc() as i64, hi.trunc() as i64)),
        _ => Err(ChartError::NoData(format!("No data available for '{}'.", COL_TOURISM_INDEX))),
    }
}

/// Points for rows whose index equals `index`, one series per town.
/// No matching rows is a valid, empty chart.
pub fn build(table: &Table, index: i64) -> Result<ScatterChart, ChartError> {
    let town_c = col!(table, COL_TOWN);
    let idx_c = col!(table, COL_TOURISM_INDEX);
    let x_c = col!(table, COL_HOTELS);
    let y_c = col!(table, COL_RESTAURANTS);

    let matching = table.all().filter_eq(idx_c, index as f64);

    let series: Vec<Series> = matching
        .group_by_text(town_c)
        .into_iter()
        .enumerate()
        .map(|(i, (town, rows))| Series {
            town: s!(town),
            color: palette(i),
            points: rows
                .iter()
                .filter_map(|&ix| Some([table.num(ix, x_c)?, table.num(ix, y_c)?]))
                .collect(),
        })
        .collect();

    Ok(ScatterChart {
        title: format!("Tourism Data for Index {index}"),
        index,
        series,
    })
}
