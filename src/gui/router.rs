// src/gui/router.rs
use super::panels::{self, Panel};

/// Draw order, top to bottom.
pub static PANELS: &[&'static dyn Panel] = &[
    &panels::guest_houses::PANEL,
    &panels::hotels::PANEL,
    &panels::tourism_index::PANEL,
    &panels::metrics::PANEL,
];

pub fn all_panels() -> &'static [&'static dyn Panel] {
    PANELS
}

