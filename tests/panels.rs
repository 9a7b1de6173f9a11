// tests/panels.rs
//
// Chart builders against the fixture: the four panels' numbers, plus the
// failure modes that must surface as warnings instead of faults.
mod common;

use tourism_dash::charts::{bar, color::Rgb, pie, scatter, sunburst, ChartError};
use tourism_dash::config::options::{BarDisplay, BarOptions, Metric, PercentMode, PieOptions};
use tourism_dash::data::Table;
use tourism_dash::log::log_path;

fn pie_opts(towns: &[&str], mode: PercentMode) -> PieOptions {
    PieOptions {
        selected_towns: common::towns(towns),
        mode,
        ..PieOptions::default()
    }
}

fn pct_sum(chart: &pie::PieChart) -> f64 {
    chart.slices.iter().map(|s| s.percent).sum()
}

#[test]
fn pie_default_is_batroun_against_all_towns() {
    let t = common::table();
    let chart = pie::build(&t, &PieOptions::default()).unwrap();

    assert_eq!(chart.slices[0].label, "Batroun");
    assert_eq!(chart.slices[0].value, 12.0);
    assert_eq!(chart.slices[1].label, "All Other Towns");
    assert_eq!(chart.slices[1].value, 13.0);
    assert!((chart.slices[0].percent - 48.0).abs() < 1e-9);
    assert!((pct_sum(&chart) - 100.0).abs() < 1e-9);
    assert_eq!(
        chart.title,
        "Guest House Distribution in Batroun vs. All Other Towns (Percentage of total guest houses in all towns)"
    );
    assert_eq!(chart.summary_lines()[0], "Percentage of guest houses in Batroun: 48.00%");
}

#[test]
fn pie_percentages_sum_to_100_in_both_modes() {
    let t = common::table();
    let selections: [&[&str]; 4] = [
        &["Batroun"],
        &["Batroun", "Byblos"],
        &["Tyre", "Zahle"],
        &["Batroun", "Byblos", "Tyre", "Deir el Qamar, Chouf", "Hermel"],
    ];
    for towns in selections {
        for mode in PercentMode::ALL {
            let chart = pie::build(&t, &pie_opts(towns, mode)).unwrap();
            assert!((pct_sum(&chart) - 100.0).abs() < 1e-9, "{towns:?} {mode:?}");
        }
    }
}

#[test]
fn pie_selected_mode_uses_local_denominator() {
    let t = common::table();
    let chart = pie::build(&t, &pie_opts(&["Batroun", "Byblos"], PercentMode::OfSelectedTowns)).unwrap();
    assert_eq!(chart.slices[1].label, "Other Selected Towns");
    assert_eq!(chart.slices[0].value + chart.slices[1].value, 18.0);
    assert!((chart.slices[0].percent - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn pie_focus_not_selected_counts_zero() {
    let t = common::table();
    let chart = pie::build(&t, &pie_opts(&["Tyre"], PercentMode::OfSelectedTowns)).unwrap();
    assert_eq!(chart.slices[0].value, 0.0);
    assert_eq!(chart.slices[1].percent, 100.0);
}

#[test]
fn pie_zero_denominator_is_an_error_not_a_panic() {
    let t = common::table();
    let none = pie::build(&t, &pie_opts(&[], PercentMode::OfSelectedTowns));
    assert!(matches!(none, Err(ChartError::ZeroDenominator(_))));

    // Zahle has zero guest houses
    let zahle = pie::build(&t, &pie_opts(&["Zahle"], PercentMode::OfSelectedTowns));
    assert!(matches!(zahle, Err(ChartError::ZeroDenominator(_))));

    // Global denominator is unaffected by an empty selection
    assert!(pie::build(&t, &pie_opts(&[], PercentMode::OfAllTowns)).is_ok());
}

#[test]
fn pie_slice_text_follows_toggle() {
    let t = common::table();
    let mut opts = PieOptions::default();
    let chart = pie::build(&t, &opts).unwrap();
    assert_eq!(chart.slice_text(&chart.slices[0]), "Batroun\n48.0%");

    opts.show_percent = false;
    let chart = pie::build(&t, &opts).unwrap();
    assert_eq!(chart.slice_text(&chart.slices[0]), "Batroun");
}

#[test]
fn bar_counts_and_proportions() {
    let t = common::table();

    let counts = bar::existence_counts(&t).unwrap();
    assert_eq!(counts, [4, 3]);
    assert_eq!(counts.iter().sum::<usize>(), t.row_count());

    let abs = bar::build(&t, &BarOptions { display: BarDisplay::Absolute, ..BarOptions::default() }).unwrap();
    assert_eq!(abs.bars.iter().map(|b| b.value).sum::<f64>(), 7.0);
    assert_eq!(abs.y_label, "Absolute Counts");

    let prop = bar::build(&t, &BarOptions::default()).unwrap();
    assert!((prop.bars.iter().map(|b| b.value).sum::<f64>() - 100.0).abs() < 1e-9);
    assert_eq!(prop.bars[0].label, "Hotels Exist");
    assert_eq!(prop.bars[0].color, Rgb::from_hex("#636EFA").unwrap());
    assert_eq!(prop.bars[1].color, Rgb::from_hex("#EF553B").unwrap());
    assert_eq!(prop.title, "Distribution of Towns with/without Hotels (Proportion (%))");
}

#[test]
fn bar_with_one_category_reports_zero_for_the_other() {
    let t = Table::from_csv(
        "Town,Existence of hotels - does not exist\nA,1\nB,1\n",
    )
    .unwrap();
    assert_eq!(bar::existence_counts(&t).unwrap(), [0, 2]);
}

#[test]
fn bar_proportions_divide_by_every_non_null_row() {
    let t = Table::from_csv(
        "Town,Existence of hotels - does not exist\nA,0\nB,1\nC,2\nD,\n",
    )
    .unwrap();
    assert_eq!(bar::existence_counts(&t).unwrap(), [1, 1]);

    let prop = bar::build(&t, &BarOptions::default()).unwrap();
    let third = 100.0 / 3.0;
    assert!((prop.bars[0].value - third).abs() < 1e-9);
    assert!((prop.bars[1].value - third).abs() < 1e-9);
}

#[test]
fn pie_heading_follows_focus_town() {
    assert_eq!(pie::heading("Batroun"), "Guest House Distribution in Batroun and Other Towns");
    assert_eq!(pie::heading("Tyre"), "Guest House Distribution in Tyre and Other Towns");
}

#[test]
fn scatter_at_min_and_max_index() {
    let t = common::table();
    let (lo, hi) = scatter::index_bounds(&t).unwrap();
    assert_eq!((lo, hi), (0, 8));

    let at_min = scatter::build(&t, lo).unwrap();
    assert_eq!(at_min.series.len(), 1);
    assert_eq!(at_min.series[0].town, "Hermel");

    let at_max = scatter::build(&t, hi).unwrap();
    assert_eq!(at_max.title, "Tourism Data for Index 8");
    let names: Vec<&str> = at_max.series.iter().map(|s| s.town.as_str()).collect();
    assert_eq!(names, vec!["Batroun", "Byblos"]);
    assert_eq!(at_max.series[0].points, vec![[5.0, 40.0]]);
    assert_ne!(at_max.series[0].color, at_max.series[1].color);
}

#[test]
fn scatter_unmatched_index_is_gracefully_empty() {
    let t = common::table();
    let chart = scatter::build(&t, 2).unwrap();
    assert!(chart.is_empty());
}

#[test]
fn sunburst_aggregates_per_town() {
    let t = common::table();
    let chart = sunburst::build(&t, Metric::Hotels).unwrap();

    assert_eq!(chart.title, "Total number of hotels Distribution Across Towns");
    let batroun = &chart.segments[0];
    assert_eq!(batroun.town, "Batroun");
    assert_eq!(batroun.value, 6.0);
    assert!((batroun.color_value - 26.0 / 6.0).abs() < 1e-9);
    assert_eq!(batroun.color, Rgb::WHITE);

    let shares: f64 = chart.segments.iter().map(|s| s.share).sum();
    assert!((shares - 1.0).abs() < 1e-9);
    // Zero-hotel towns are filtered out
    assert!(chart.segments.iter().all(|s| s.town != "Tyre"));
}

#[test]
fn sunburst_skips_null_and_zero_rows() {
    let t = common::table();
    let chart = sunburst::build(&t, Metric::Cafes).unwrap();
    let towns: Vec<&str> = chart.segments.iter().map(|s| s.town.as_str()).collect();
    assert_eq!(towns, vec!["Batroun", "Byblos", "Zahle"]);
    assert_eq!(chart.total, 43.0);
}

#[test]
fn sunburst_empty_metric_warns() {
    let t = Table::from_csv(
        "Town,Total number of cafes\nA,0\nB,\nC,-1\n",
    )
    .unwrap();
    let err = sunburst::build(&t, Metric::Cafes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No data available for 'Total number of cafes'. Please select another metric or adjust the filter."
    );
}

#[test]
fn missing_columns_surface_as_data_errors() {
    let t = Table::from_csv("Town\nA\n").unwrap();
    assert!(matches!(pie::build(&t, &PieOptions::default()), Err(ChartError::Data(_))));
    assert!(matches!(scatter::index_bounds(&t), Err(ChartError::Data(_))));
}

#[test]
fn rebuilding_charts_does_not_touch_the_log() {
    let t = common::table();
    let size = || std::fs::metadata(log_path()).map(|m| m.len()).unwrap_or(0);
    let before = size();

    for _ in 0..50 {
        pie::build(&t, &PieOptions::default()).unwrap();
        bar::build(&t, &BarOptions::default()).unwrap();
        scatter::build(&t, 8).unwrap();
        sunburst::build(&t, Metric::Cafes).unwrap();
        let _ = sunburst::build(&Table::from_csv("Town,Total number of cafes\nA,0\n").unwrap(), Metric::Cafes);
    }

    assert_eq!(size(), before);
}
