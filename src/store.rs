// src/store.rs
//
// Local copy of the last successfully fetched dataset. Written only after
// the text parsed and passed schema checks, so the cache is always usable.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{CACHE_FILE, STORE_DIR};

pub fn cache_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(CACHE_FILE)
}

pub fn save_raw_at(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)
}

pub fn load_raw_at(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}
