// src/cli.rs
//
// Headless rendition of the dashboard: same options, same chart builders,
// results printed as text.

use std::{env, error::Error, fmt::Write as _};

use crate::{
    charts::{bar, color::Rgb, pie, scatter, sunburst},
    config::options::{AppOptions, BarDisplay, Metric, PercentMode, Source},
    csv::{rows_to_string, Delim},
    data::Table,
    dataset,
    progress::StderrProgress,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub options: AppOptions,
    /// Dump the whole table instead of the panel report.
    pub raw: bool,
    pub format: Delim,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            raw: false,
            format: Delim::Csv,
            help: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let loaded = dataset::load(&params.options.source, Some(&mut StderrProgress))?;
    logf!("CLI: loaded {:?}, raw={}", loaded.origin, params.raw);

    if params.raw {
        print!("{}", rows_to_string(loaded.table.headers(), loaded.table.rows(), params.format));
    } else {
        print!("{}", render_report(&loaded.table, &params.options));
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let opts = &mut params.options;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--source" | "-s" => opts.source = Source::from_arg(&value(&a)?),
            "--towns" | "-t" => opts.pie.selected_towns = parse_list(&value(&a)?),
            "--focus" => opts.pie.focus_town = value(&a)?.trim().to_string(),
            "--mode" => {
                let v = value(&a)?;
                opts.pie.mode = PercentMode::parse(&v).ok_or_else(|| format!("Unknown mode: {v}"))?;
            }
            "--no-percent" => opts.pie.show_percent = false,
            "--counts" => opts.bar.display = BarDisplay::Absolute,
            "--exist-color" => {
                let v = value(&a)?;
                opts.bar.exist_color = Rgb::from_hex(&v).ok_or_else(|| format!("Bad color: {v}"))?;
            }
            "--missing-color" => {
                let v = value(&a)?;
                opts.bar.missing_color = Rgb::from_hex(&v).ok_or_else(|| format!("Bad color: {v}"))?;
            }
            "--index" | "-i" => opts.scatter.index = Some(value(&a)?.trim().parse()?),
            "--metric" | "-m" => {
                let v = value(&a)?;
                opts.sunburst.metric = Metric::parse(&v).ok_or_else(|| format!("Unknown metric: {v}"))?;
            }
            "--raw" => params.raw = true,
            "--format" => {
                let v = value(&a)?;
                params.format = Delim::parse(&v).ok_or_else(|| format!("Unknown format: {v}"))?;
            }
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

fn parse_list(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if !part.is_empty() && !out.iter().any(|t| t == part) {
            out.push(s!(part));
        }
    }
    out
}

/// All four panels as plain text. Panel failures are reported inline,
/// the same way the GUI shows a warning in place of a chart.
pub fn render_report(table: &Table, opts: &AppOptions) -> String {
    let mut out = s!();

    // 1. Guest houses
    let _ = writeln!(out, "== Guest House Distribution ==");
    match pie::build(table, &opts.pie) {
        Ok(chart) => {
            let _ = writeln!(out, "{}", chart.title);
            for slice in &chart.slices {
                let _ = writeln!(out, "  {:<24} {:>8}", slice.label, slice.value);
            }
            for line in chart.summary_lines() {
                let _ = writeln!(out, "{line}");
            }
        }
        Err(e) => { let _ = writeln!(out, "Warning: {e}"); }
    }

    // 2. Hotel existence
    let _ = writeln!(out, "\n== Hotel Existence ==");
    match bar::build(table, &opts.bar) {
        Ok(chart) => {
            let _ = writeln!(out, "{}", chart.title);
            for b in &chart.bars {
                let _ = writeln!(out, "  {:<24} {:>8.2}  {}", b.label, b.value, b.color.to_hex());
            }
        }
        Err(e) => { let _ = writeln!(out, "Warning: {e}"); }
    }

    // 3. Tourism index
    let _ = writeln!(out, "\n== Tourism Index ==");
    let index = match opts.scatter.index {
        Some(i) => Ok(i),
        None => scatter::index_bounds(table).map(|(lo, _)| lo),
    };
    match index.and_then(|i| scatter::build(table, i)) {
        Ok(chart) => {
            let _ = writeln!(out, "{}", chart.title);
            if chart.is_empty() {
                let _ = writeln!(out, "  (no towns with this index)");
            }
            for s in &chart.series {
                for p in &s.points {
                    let _ = writeln!(out, "  {:<24} hotels={} restaurants={}", s.town, p[0], p[1]);
                }
            }
        }
        Err(e) => { let _ = writeln!(out, "Warning: {e}"); }
    }

    // 4. Metric proportions
    let _ = writeln!(out, "\n== Metric Proportions ==");
    match sunburst::build(table, opts.sunburst.metric) {
        Ok(chart) => {
            let _ = writeln!(out, "{}", chart.title);
            for seg in &chart.segments {
                let _ = writeln!(
                    out,
                    "  {:<24} {:>8} {:>6.2}%",
                    seg.town,
                    seg.value,
                    seg.share * 100.0
                );
            }
        }
        Err(e) => { let _ = writeln!(out, "Warning: {e}"); }
    }

    out
}
