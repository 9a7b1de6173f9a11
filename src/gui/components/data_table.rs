// src/gui/components/data_table.rs
//
// Read-only view of the whole table ("Show Raw Data").

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::COL_TOWN,
    data::{parse_num, Table},
};

/// A column is numeric when its first non-empty cell parses as a number.
fn numeric_columns(table: &Table) -> Vec<bool> {
    (0..table.col_count())
        .map(|c| {
            (0..table.row_count())
                .map(|r| table.text(r, c))
                .find(|cell| !cell.is_empty())
                .map(|cell| parse_num(cell).is_some())
                .unwrap_or(false)
        })
        .collect()
}

pub fn draw(ui: &mut egui::Ui, table: &Table) {
    let cols = table.col_count();
    let numeric = numeric_columns(table);
    let town_col = table.column(COL_TOWN).ok();

    egui::ScrollArea::horizontal()
        .id_salt("raw_table_hscroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt("raw_table")
                .striped(true)
                .max_scroll_height(320.0);
            for c in 0..cols {
                let w = if Some(c) == town_col { 140.0 } else { 90.0 };
                builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
            }

            builder
                .header(24.0, |mut header| {
                    for h in table.headers() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                            ui.label(RichText::new(h).strong()).on_hover_text(h.as_str());
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, table.row_count(), |mut row| {
                        let ix = row.index();
                        for c in 0..cols {
                            let cell = table.text(ix, c);
                            row.col(|ui| {
                                if numeric[c] {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
