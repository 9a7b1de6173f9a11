// src/gui/panels/guest_houses.rs
use eframe::egui;

use crate::{
    charts::pie,
    config::{options::{PanelKind, PercentMode}, state::AppState},
    data::Table,
    gui::paint,
};

use super::{chart_title, warn, Panel};

pub struct GuestHousesPanel;
pub static PANEL: GuestHousesPanel = GuestHousesPanel;

impl Panel for GuestHousesPanel {
    fn kind(&self) -> PanelKind { PanelKind::GuestHouses }
    fn title(&self) -> &'static str { "Guest House Distribution" }

    fn heading(&self, state: &AppState) -> String {
        pie::heading(&state.options.pie.focus_town)
    }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState, table: &Table) -> bool {
        let opts = &mut state.options.pie;
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Focus town:");
            egui::ComboBox::from_id_salt("pie_focus")
                .width(220.0)
                .selected_text(opts.focus_town.as_str())
                .show_ui(ui, |ui| {
                    // Only built while the list is open
                    for town in table.towns().unwrap_or_default() {
                        let label = town.clone();
                        if ui.selectable_value(&mut opts.focus_town, town, label).changed() {
                            logf!("UI: Pie: focus town → {}", opts.focus_town);
                            changed = true;
                        }
                    }
                });
        });

        ui.label(format!(
            "Select Towns for Comparison (including {}) in the list on the left:",
            opts.focus_town
        ));

        // Chips for the current selection; click to remove.
        ui.horizontal_wrapped(|ui| {
            if opts.selected_towns.is_empty() {
                ui.weak("(none selected)");
            }
            let mut remove = None;
            for (i, town) in opts.selected_towns.iter().enumerate() {
                if ui.small_button(format!("{town} ✕")).clicked() {
                    remove = Some(i);
                }
            }
            if let Some(i) = remove {
                let town = opts.selected_towns.remove(i);
                logf!("UI: Pie: removed town {}", town);
                changed = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label("Select how to calculate percentages:");
            egui::ComboBox::from_id_salt("pie_mode")
                .width(340.0)
                .selected_text(opts.mode.label())
                .show_ui(ui, |ui| {
                    for mode in PercentMode::ALL {
                        changed |= ui.selectable_value(&mut opts.mode, mode, mode.label()).changed();
                    }
                });
        });

        changed |= ui
            .checkbox(&mut opts.show_percent, "Show Percentages on the Pie Chart")
            .changed();
        changed
    }

    fn draw_chart(&self, ui: &mut egui::Ui, state: &mut AppState, table: &Table) {
        match pie::build(table, &state.options.pie) {
            Ok(chart) => {
                chart_title(ui, &chart.title);
                paint::donut(ui, &chart);
                for line in chart.summary_lines() {
                    ui.label(line);
                }
            }
            Err(e) => warn(ui, e),
        }
    }
}
