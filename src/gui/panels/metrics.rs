// src/gui/panels/metrics.rs
use eframe::egui;

use crate::{
    charts::sunburst,
    config::{options::{Metric, PanelKind}, state::AppState},
    data::Table,
    gui::paint,
};

use super::{chart_title, warn, Panel};

pub struct MetricsPanel;
pub static PANEL: MetricsPanel = MetricsPanel;

impl Panel for MetricsPanel {
    fn kind(&self) -> PanelKind { PanelKind::Metrics }
    fn title(&self) -> &'static str { "Sunburst Chart of Tourism Metrics by Town" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState, _table: &Table) -> bool {
        let metric = &mut state.options.sunburst.metric;
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Select Metric to Visualize");
            egui::ComboBox::from_id_salt("metric_selectbox")
                .width(260.0)
                .selected_text(metric.column())
                .show_ui(ui, |ui| {
                    for m in Metric::ALL {
                        changed |= ui.selectable_value(metric, m, m.column()).changed();
                    }
                });
        });
        changed
    }

    fn draw_chart(&self, ui: &mut egui::Ui, state: &mut AppState, table: &Table) {
        match sunburst::build(table, state.options.sunburst.metric) {
            Ok(chart) => {
                chart_title(ui, &chart.title);
                paint::sunburst(ui, &chart);
            }
            Err(e) => warn(ui, e),
        }
    }
}
