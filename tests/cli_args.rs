// tests/cli_args.rs
mod common;

use std::path::PathBuf;

use tourism_dash::charts::color::Rgb;
use tourism_dash::cli::{parse_args, render_report, Params};
use tourism_dash::config::options::{BarDisplay, Metric, PercentMode, Source};
use tourism_dash::csv::Delim;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_args_means_defaults() {
    let p = parse_args(Vec::new()).unwrap();
    assert_eq!(p, Params::default());
    assert_eq!(p.options.pie.selected_towns, vec!["Batroun".to_string()]);
}

#[test]
fn flags_fill_panel_options() {
    let p = parse_args(args(&[
        "--source", "data/tourism.csv",
        "--towns", "Batroun, Byblos,,Batroun",
        "--mode", "selected",
        "--counts",
        "--exist-color", "#00ff00",
        "--index", "5",
        "--metric", "guest-houses",
        "--raw",
        "--format", "tsv",
    ]))
    .unwrap();

    let o = &p.options;
    assert_eq!(o.source, Source::File(PathBuf::from("data/tourism.csv")));
    assert_eq!(o.pie.selected_towns, vec!["Batroun".to_string(), "Byblos".to_string()]);
    assert_eq!(o.pie.mode, PercentMode::OfSelectedTowns);
    assert_eq!(o.bar.display, BarDisplay::Absolute);
    assert_eq!(o.bar.exist_color, Rgb::new(0, 255, 0));
    assert_eq!(o.scatter.index, Some(5));
    assert_eq!(o.sunburst.metric, Metric::GuestHouses);
    assert!(p.raw);
    assert_eq!(p.format, Delim::Tsv);
}

#[test]
fn url_source_is_remote() {
    let p = parse_args(args(&["-s", "https://example.org/x.csv"])).unwrap();
    assert_eq!(p.options.source, Source::Remote("https://example.org/x.csv".into()));
}

#[test]
fn bad_input_is_rejected() {
    assert!(parse_args(args(&["--bogus"])).is_err());
    assert!(parse_args(args(&["--metric", "bars"])).is_err());
    assert!(parse_args(args(&["--mode"])).is_err());
    assert!(parse_args(args(&["--index", "high"])).is_err());
    assert!(parse_args(args(&["--exist-color", "blue"])).is_err());
}

#[test]
fn report_covers_all_four_panels() {
    let t = common::table();
    let p = parse_args(Vec::new()).unwrap();
    let out = render_report(&t, &p.options);

    assert!(out.contains("Percentage of guest houses in Batroun: 48.00%"));
    assert!(out.contains("Distribution of Towns with/without Hotels (Proportion (%))"));
    // No --index: defaults to the observed minimum
    assert!(out.contains("Tourism Data for Index 0"));
    assert!(out.contains("Total number of cafes Distribution Across Towns"));
}

#[test]
fn report_shows_warnings_inline() {
    let t = common::table();
    let p = parse_args(args(&["--towns", "Zahle", "--mode", "selected", "--index", "2"])).unwrap();
    let out = render_report(&t, &p.options);

    assert!(out.contains("Warning: Cannot compute percentages"));
    assert!(out.contains("(no towns with this index)"));
}
