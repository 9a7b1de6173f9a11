// src/gui/components/mod.rs
pub mod data_table;
pub mod top_bar;
pub mod town_panel;
