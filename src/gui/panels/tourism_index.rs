// src/gui/panels/tourism_index.rs
use eframe::egui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::{
    charts::scatter,
    config::{options::PanelKind, state::AppState},
    data::Table,
    gui::paint::color32,
};

use super::{chart_title, warn, Panel};

pub struct TourismIndexPanel;
pub static PANEL: TourismIndexPanel = TourismIndexPanel;

impl Panel for TourismIndexPanel {
    fn kind(&self) -> PanelKind { PanelKind::TourismIndex }
    fn title(&self) -> &'static str { "Interactive Tourism Data Plot" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState, table: &Table) -> bool {
        // Bounds errors are reported by draw_chart
        let Ok((lo, hi)) = scatter::index_bounds(table) else { return false };

        let idx = state.options.scatter.index.get_or_insert(lo);
        *idx = (*idx).clamp(lo, hi);

        ui.add(egui::Slider::new(idx, lo..=hi).text("Select Tourism Index"))
            .changed()
    }

    fn draw_chart(&self, ui: &mut egui::Ui, state: &mut AppState, table: &Table) {
        let index = match state.options.scatter.index {
            Some(i) => Ok(i),
            None => scatter::index_bounds(table).map(|(lo, _)| lo),
        };

        match index.and_then(|i| scatter::build(table, i)) {
            Ok(chart) => {
                chart_title(ui, &chart.title);
                if chart.is_empty() {
                    ui.weak(format!("No towns have tourism index {}.", chart.index));
                }

                Plot::new("tourism_scatter")
                    .height(320.0)
                    .legend(Legend::default())
                    .x_axis_label(scatter::X_LABEL)
                    .y_axis_label(scatter::Y_LABEL)
                    .include_x(0.0)
                    .include_y(0.0)
                    .show(ui, |plot_ui| {
                        for s in &chart.series {
                            plot_ui.points(
                                Points::new(s.town.as_str(), PlotPoints::from(s.points.clone()))
                                    .radius(4.0)
                                    .color(color32(s.color)),
                            );
                        }
                    });
            }
            Err(e) => warn(ui, e),
        }
    }
}
