// src/gui/components/top_bar.rs
//
// Title, reload button and the shared status line.

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Lebanon Tourism Dashboard");
        ui.separator();

        let loading = app.is_loading();
        if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
            logf!("UI: Reload clicked");
            app.reload(ui.ctx());
        }
        if loading {
            ui.add(egui::Spinner::new());
        }
        ui.label(format!("Status: {}", app.status_text()));
    });
    ui.label(
        RichText::new(format!("Source: {}", app.state.options.source.describe()))
            .small()
            .weak(),
    );
}
