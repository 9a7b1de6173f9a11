// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod paint;
pub mod panels;
pub mod progress;
pub mod router;

pub use app::run;
