// src/gui/panels/hotels.rs
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use crate::{
    charts::{bar, color::Rgb},
    config::{options::{BarDisplay, PanelKind}, state::AppState},
    data::Table,
    gui::{components::data_table, paint::color32},
};

use super::{chart_title, warn, Panel};

pub struct HotelsPanel;
pub static PANEL: HotelsPanel = HotelsPanel;

fn color_row(ui: &mut egui::Ui, color: &mut Rgb, label: &str) -> bool {
    ui.horizontal(|ui| {
        let mut rgb = color.to_array();
        let changed = ui.color_edit_button_srgb(&mut rgb).changed();
        if changed {
            *color = Rgb::from_array(rgb);
        }
        ui.label(label);
        changed
    })
    .inner
}

impl Panel for HotelsPanel {
    fn kind(&self) -> PanelKind { PanelKind::Hotels }
    fn title(&self) -> &'static str { "Proportion of Towns in Lebanon with/without Hotels" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState, _table: &Table) -> bool {
        let opts = &mut state.options.bar;
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Display as:");
            for d in [BarDisplay::Proportion, BarDisplay::Absolute] {
                changed |= ui.radio_value(&mut opts.display, d, d.label()).changed();
            }
        });

        changed |= color_row(ui, &mut opts.exist_color, "Pick a color for \"Hotels Exist\" bar");
        changed |= color_row(ui, &mut opts.missing_color, "Pick a color for \"Hotels Do Not Exist\" bar");
        changed |= ui.checkbox(&mut opts.show_grid, "Show Grid Lines").changed();
        changed
    }

    fn draw_chart(&self, ui: &mut egui::Ui, state: &mut AppState, table: &Table) {
        match bar::build(table, &state.options.bar) {
            Ok(chart) => {
                chart_title(ui, &chart.title);

                let bars: Vec<Bar> = chart
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(i, b)| {
                        Bar::new(i as f64, b.value)
                            .width(0.6)
                            .fill(color32(b.color))
                            .name(b.label)
                    })
                    .collect();

                Plot::new("hotels_bar")
                    .height(300.0)
                    .show_grid(chart.show_grid)
                    .x_axis_label(bar::X_TITLE)
                    .y_axis_label(chart.y_label)
                    .x_axis_formatter(|mark, _range| {
                        let i = mark.value.round();
                        if (mark.value - i).abs() < 1e-6 && (0.0..=1.0).contains(&i) {
                            s!(bar::X_LABELS[i as usize])
                        } else {
                            s!()
                        }
                    })
                    .include_x(-0.5)
                    .include_x(1.5)
                    .include_y(0.0)
                    .allow_zoom(false)
                    .allow_drag(false)
                    .allow_scroll(false)
                    .allow_boxed_zoom(false)
                    .show(ui, |plot_ui| {
                        plot_ui.bar_chart(BarChart::new("hotel_existence", bars));
                    });
            }
            Err(e) => warn(ui, e),
        }

        let raw = &mut state.options.bar.show_raw;
        if ui.checkbox(raw, "Show Raw Data").changed() {
            logf!("UI: Show raw data → {}", *raw);
        }
        if *raw {
            data_table::draw(ui, table);
        }
    }
}
