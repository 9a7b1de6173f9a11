// src/config/options.rs
//
// User-facing knobs for every panel. The GUI mutates these directly;
// the CLI fills them from flags. Chart builders only ever read them.

use std::path::PathBuf;

use super::consts::*;
use crate::charts::color::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub source: Source,
    pub pie: PieOptions,
    pub bar: BarOptions,
    pub scatter: ScatterOptions,
    pub sunburst: SunburstOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            pie: PieOptions::default(),
            bar: BarOptions::default(),
            scatter: ScatterOptions::default(),
            sunburst: SunburstOptions::default(),
        }
    }
}

/// Where the table comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Remote(s!(DATASET_URL))
    }
}

impl Source {
    /// `http://` / `https://` → Remote, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        let lower = arg.trim().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Remote(s!(arg.trim()))
        } else {
            Source::File(PathBuf::from(arg.trim()))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Remote(url) => url.clone(),
            Source::File(p) => p.display().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    GuestHouses,
    Hotels,
    TourismIndex,
    Metrics,
}

/* ---------- Panel 1: guest house share ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PercentMode {
    OfAllTowns,
    OfSelectedTowns,
}

impl PercentMode {
    pub const ALL: [PercentMode; 2] = [PercentMode::OfAllTowns, PercentMode::OfSelectedTowns];

    pub fn label(&self) -> &'static str {
        match self {
            PercentMode::OfAllTowns => "Percentage of total guest houses in all towns",
            PercentMode::OfSelectedTowns => "Percentage of selected towns only",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "total" => Some(PercentMode::OfAllTowns),
            "selected" => Some(PercentMode::OfSelectedTowns),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieOptions {
    pub selected_towns: Vec<String>,
    pub focus_town: String,
    pub mode: PercentMode,
    pub show_percent: bool,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            selected_towns: vec![s!(DEFAULT_FOCUS_TOWN)],
            focus_town: s!(DEFAULT_FOCUS_TOWN),
            mode: PercentMode::OfAllTowns,
            show_percent: true,
        }
    }
}

/* ---------- Panel 2: hotel existence ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarDisplay {
    Proportion,
    Absolute,
}

impl BarDisplay {
    pub fn label(&self) -> &'static str {
        match self {
            BarDisplay::Proportion => "Proportion (%)",
            BarDisplay::Absolute => "Absolute Counts",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarOptions {
    pub display: BarDisplay,
    pub exist_color: Rgb,
    pub missing_color: Rgb,
    pub show_grid: bool,
    pub show_raw: bool,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            display: BarDisplay::Proportion,
            exist_color: Rgb::from_hex(DEFAULT_EXIST_COLOR).unwrap_or(Rgb::BLUE),
            missing_color: Rgb::from_hex(DEFAULT_MISSING_COLOR).unwrap_or(Rgb::RED),
            show_grid: true,
            show_raw: false,
        }
    }
}

/* ---------- Panel 3: tourism index ---------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScatterOptions {
    /// None until a table is loaded; then defaults to the observed minimum.
    pub index: Option<i64>,
}

/* ---------- Panel 4: metric proportions ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Cafes,
    GuestHouses,
    Restaurants,
    Hotels,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Cafes, Metric::GuestHouses, Metric::Restaurants, Metric::Hotels];

    /// Column header; doubles as the display label.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Cafes => COL_CAFES,
            Metric::GuestHouses => COL_GUEST_HOUSES,
            Metric::Restaurants => COL_RESTAURANTS,
            Metric::Hotels => COL_HOTELS,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "cafes" => Some(Metric::Cafes),
            "guest-houses" | "guesthouses" => Some(Metric::GuestHouses),
            "restaurants" => Some(Metric::Restaurants),
            "hotels" => Some(Metric::Hotels),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SunburstOptions {
    pub metric: Metric,
}

impl Default for SunburstOptions {
    fn default() -> Self {
        Self { metric: Metric::Cafes }
    }
}
