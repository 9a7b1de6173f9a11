// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod charts;
pub mod cli;
pub mod csv;
pub mod data;
pub mod dataset;
pub mod gui;
pub mod progress;
pub mod store;
