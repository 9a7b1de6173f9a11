// src/gui/components/town_panel.rs
//
// Left town list: the multiselect feeding the guest house panel.
// Click toggles a town, shift-click adds the visible range from the last
// clicked town, ctrl-click selects only that town.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Towns");

    if app.towns.is_empty() {
        ui.weak("No data loaded");
        return;
    }

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.options.pie.selected_towns = app.towns.clone();
            logf!("UI: Towns → all ({})", app.towns.len());
        }
        if ui.button("None").clicked() {
            app.state.options.pie.selected_towns.clear();
            logf!("UI: Towns → none");
        }
    });

    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.town_filter)
            .hint_text("Filter towns…"),
    );
    ui.weak(format!(
        "{} of {} selected",
        app.state.options.pie.selected_towns.len(),
        app.towns.len()
    ));

    ui.separator();

    let needle = app.state.gui.town_filter.trim().to_lowercase();
    let visible: Vec<usize> = (0..app.towns.len())
        .filter(|&i| needle.is_empty() || app.towns[i].to_lowercase().contains(&needle))
        .collect();

    egui::ScrollArea::vertical()
        .id_salt("towns_panel_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut changed = false;

            for (pos, &idx) in visible.iter().enumerate() {
                let town = &app.towns[idx];
                let sel = &mut app.state.options.pie.selected_towns;
                let is_selected = sel.contains(town);

                if !ui.selectable_label(is_selected, town.as_str()).clicked() {
                    continue;
                }
                let (ctrl, shift) = ui.input(|i| (i.modifiers.command, i.modifiers.shift));

                if shift {
                    // Anchor is a position in the visible list
                    let anchor = app.state.gui.last_clicked.unwrap_or(pos).min(visible.len() - 1);
                    let (lo, hi) = if anchor <= pos { (anchor, pos) } else { (pos, anchor) };
                    for &j in &visible[lo..=hi] {
                        let t = &app.towns[j];
                        if !sel.contains(t) { sel.push(t.clone()); }
                    }
                } else if ctrl {
                    sel.clear();
                    sel.push(town.clone());
                } else if is_selected {
                    sel.retain(|t| t != town);
                } else {
                    sel.push(town.clone());
                }
                app.state.gui.last_clicked = Some(pos);
                changed = true;
            }

            if changed {
                logf!(
                    "UI: Selection changed ({} towns) — {:?}",
                    app.state.options.pie.selected_towns.len(),
                    &app.state.options.pie.selected_towns
                );
            }
        });
}
