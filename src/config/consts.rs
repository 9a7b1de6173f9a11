// src/config/consts.rs

// Dataset
pub const DATASET_URL: &str =
    "https://linked.aub.edu.lb/pkgcube/data/df6527f0de0990b7237dbcef186a3d52_20240904_215117.csv";

// Columns (exact header text)
pub const COL_TOWN: &str = "Town";
pub const COL_GUEST_HOUSES: &str = "Total number of guest houses";
pub const COL_HOTELS: &str = "Total number of hotels";
pub const COL_RESTAURANTS: &str = "Total number of restaurants";
pub const COL_CAFES: &str = "Total number of cafes";
pub const COL_HOTELS_MISSING: &str = "Existence of hotels - does not exist";
pub const COL_TOURISM_INDEX: &str = "Tourism Index";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_TOWN,
    COL_GUEST_HOUSES,
    COL_HOTELS,
    COL_RESTAURANTS,
    COL_CAFES,
    COL_HOTELS_MISSING,
    COL_TOURISM_INDEX,
];

// Panel defaults
pub const DEFAULT_FOCUS_TOWN: &str = "Batroun";
pub const DEFAULT_EXIST_COLOR: &str = "#636EFA";
pub const DEFAULT_MISSING_COLOR: &str = "#EF553B";
pub const DONUT_HOLE: f32 = 0.3;

// Sunburst color range
pub const COLOR_RANGE: (f64, f64) = (0.0, 100.0);
pub const COLOR_WHITE_UNTIL: f64 = 0.1;
pub const COLORBAR_TICKS: &[f64] = &[0.0, 10.0, 50.0, 100.0];

// Net config
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const READ_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("tourism_dash/", env!("CARGO_PKG_VERSION"));

// Local cache + log
pub const STORE_DIR: &str = ".store";
pub const CACHE_FILE: &str = "tourism.csv";
pub const LOG_FILE: &str = "debug.log";
