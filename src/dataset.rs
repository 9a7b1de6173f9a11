// src/dataset.rs
//
// One-shot dataset load: fetch (or read) → parse → schema check → cache.
// A failed remote fetch falls back to the last cached copy when there is one.

use std::{error::Error, fs, path::Path};

use crate::{
    config::{consts::REQUIRED_COLUMNS, options::Source},
    core::net,
    data::{DataError, Table},
    progress::{NullProgress, Progress},
    store,
};

/// Where the loaded table actually came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Remote,
    File,
    Cache,
}

#[derive(Debug)]
pub struct Loaded {
    pub table: Table,
    pub origin: Origin,
}

/// Parse CSV text and check every column the panels read is present.
pub fn parse_validated(text: &str) -> Result<Table, DataError> {
    let table = Table::from_csv(text)?;
    table.require(REQUIRED_COLUMNS)?;
    Ok(table)
}

pub fn load(source: &Source, progress: Option<&mut dyn Progress>) -> Result<Loaded, Box<dyn Error>> {
    load_with_cache(source, &store::cache_path(), progress)
}

/// `load` with an explicit cache file for the remote case.
pub fn load_with_cache(
    source: &Source,
    cache: &Path,
    progress: Option<&mut dyn Progress>,
) -> Result<Loaded, Box<dyn Error>> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let desc = source.describe();
    progress.begin(&desc);
    logf!("Dataset: Load begin source={}", desc);

    let res = match source {
        Source::File(path) => load_file(path),
        Source::Remote(url) => load_remote(url, cache, progress),
    };

    match &res {
        Ok(l) => logf!(
            "Dataset: Loaded {} rows x {} cols ({:?})",
            l.table.row_count(),
            l.table.col_count(),
            l.origin
        ),
        Err(e) => loge!("Dataset: Load failed: {}", e),
    }
    progress.finish(res.is_ok());
    res
}

fn load_file(path: &Path) -> Result<Loaded, Box<dyn Error>> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let table = parse_validated(&text)?;
    Ok(Loaded { table, origin: Origin::File })
}

fn fetch_validated(url: &str) -> Result<(Table, String), Box<dyn Error>> {
    let text = net::http_get(url)?;
    let table = parse_validated(&text)?;
    Ok((table, text))
}

fn load_remote(url: &str, cache: &Path, progress: &mut dyn Progress) -> Result<Loaded, Box<dyn Error>> {
    progress.log("Fetching dataset…");

    match fetch_validated(url) {
        Ok((table, text)) => {
            match store::save_raw_at(cache, &text) {
                Ok(()) => logf!("Cache: Saved → {}", cache.display()),
                Err(e) => loge!("Cache: Save failed: {}", e),
            }
            Ok(Loaded { table, origin: Origin::Remote })
        }
        Err(fetch_err) => {
            logw!("Dataset: Remote failed ({}), trying cache", fetch_err);
            progress.log(&format!("Fetch failed ({fetch_err}); trying local cache…"));
            let Ok(text) = store::load_raw_at(cache) else {
                return Err(fetch_err);
            };
            let table = parse_validated(&text)?;
            Ok(Loaded { table, origin: Origin::Cache })
        }
    }
}
