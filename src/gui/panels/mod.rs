// src/gui/panels/mod.rs
use eframe::egui;

use crate::{
    config::{options::PanelKind, state::AppState},
    data::Table,
};

pub mod guest_houses;
pub mod hotels;
pub mod tourism_index;
pub mod metrics;

/// One dashboard section: its widgets followed by its chart.
/// Everything is recomputed from the table on every frame.
pub trait Panel: Send + Sync + 'static {
    fn kind(&self) -> PanelKind;
    fn title(&self) -> &'static str;

    /// Heading shown above the panel; panels whose heading tracks an
    /// option override this.
    fn heading(&self, _state: &AppState) -> String {
        s!(self.title())
    }

    /// Draw the panel's widgets. Returns true if any option changed.
    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState, table: &Table) -> bool;

    /// Build the chart model from current options and paint it.
    fn draw_chart(&self, ui: &mut egui::Ui, state: &mut AppState, table: &Table);

    fn draw(&self, ui: &mut egui::Ui, state: &mut AppState, table: &Table) {
        ui.push_id(self.kind(), |ui| {
            ui.heading(self.heading(state));
            if self.draw_controls(ui, state, table) {
                logd!("UI: {:?} options changed", self.kind());
            }
            ui.add_space(6.0);
            self.draw_chart(ui, state, table);
        });
    }
}

/// Shown in place of a chart when it can't be built.
pub fn warn(ui: &mut egui::Ui, msg: impl std::fmt::Display) {
    let color = ui.visuals().warn_fg_color;
    ui.colored_label(color, format!("⚠ {msg}"));
}

pub fn chart_title(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).strong().size(15.0));
}
