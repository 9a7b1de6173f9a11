// src/charts/pie.rs
//
// Guest house share: focus town vs. everyone else, as a donut.

use super::ChartError;
use crate::{
    config::consts::{COL_GUEST_HOUSES, COL_TOWN, DONUT_HOLE},
    config::options::{PercentMode, PieOptions},
    data::Table,
};

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieChart {
    pub title: String,
    /// Always two: the focus town first, then "the rest".
    pub slices: Vec<PieSlice>,
    pub hole: f32,
    pub show_percent: bool,
}

impl PieChart {
    /// Text drawn on a slice.
    pub fn slice_text(&self, slice: &PieSlice) -> String {
        if self.show_percent {
            format!("{}\n{:.1}%", slice.label, slice.percent)
        } else {
            slice.label.clone()
        }
    }

    /// "Percentage of guest houses in X: 12.34%" per slice.
    pub fn summary_lines(&self) -> Vec<String> {
        self.slices
            .iter()
            .map(|s| format!("Percentage of guest houses in {}: {:.2}%", s.label, s.percent))
            .collect()
    }
}

/// Panel heading for a focus town.
pub fn heading(focus: &str) -> String {
    format!("Guest House Distribution in {focus} and Other Towns")
}

pub fn build(table: &Table, opts: &PieOptions) -> Result<PieChart, ChartError> {
    let town_c = col!(table, COL_TOWN);
    let gh_c = col!(table, COL_GUEST_HOUSES);

    let all = table.all();
    let selected = all.filter_in(town_c, &opts.selected_towns);
    let focus = selected.filter_text_eq(town_c, &opts.focus_town).sum(gh_c);

    let (denominator, rest_label) = match opts.mode {
        PercentMode::OfAllTowns => (all.sum(gh_c), "All Other Towns"),
        PercentMode::OfSelectedTowns => (selected.sum(gh_c), "Other Selected Towns"),
    };

    if denominator == 0.0 {
        return Err(ChartError::ZeroDenominator(s!("guest houses")));
    }

    let slice = |label: &str, value: f64| PieSlice {
        label: s!(label),
        value,
        percent: value / denominator * 100.0,
    };
    let slices = vec![
        slice(opts.focus_town.as_str(), focus),
        slice(rest_label, denominator - focus),
    ];

    Ok(PieChart {
        title: format!(
            "Guest House Distribution in {} vs. {} ({})",
            opts.focus_town,
            rest_label,
            opts.mode.label()
        ),
        slices,
        hole: DONUT_HOLE,
        show_percent: opts.show_percent,
    })
}
