// src/gui/paint.rs
//
// Hand-painted proportion charts (egui_plot has no pie). Wedges start at
// twelve o'clock and run clockwise.

use std::f32::consts::{PI, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Mesh, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::{
    charts::{
        color::{metric_scale, palette, Rgb},
        pie::PieChart,
        sunburst::SunburstChart,
    },
    config::consts::{COLORBAR_TICKS, COLOR_RANGE},
};

const START_ANGLE: f32 = -PI / 2.0;
const WHEEL_SIZE: f32 = 320.0;
const MIN_LABEL_ANGLE: f32 = 0.25;

pub fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

struct Wedge {
    share: f32,
    fill: Color32,
    text: String,
    text_color: Color32,
    hover: String,
}

fn ring_segment(mesh: &mut Mesh, center: Pos2, r_in: f32, r_out: f32, a0: f32, a1: f32, color: Color32) {
    let steps = (((a1 - a0) / (TAU / 180.0)).ceil() as u32).max(1);
    let at = |r: f32, a: f32| center + r * Vec2::angled(a);

    for i in 0..steps {
        let t0 = a0 + (a1 - a0) * i as f32 / steps as f32;
        let t1 = a0 + (a1 - a0) * (i + 1) as f32 / steps as f32;
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(at(r_in, t0), color);
        mesh.colored_vertex(at(r_out, t0), color);
        mesh.colored_vertex(at(r_out, t1), color);
        mesh.colored_vertex(at(r_in, t1), color);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
}

/// Map a point to the wedge under it, if any.
fn hit(bounds: &[(f32, f32)], center: Pos2, r_in: f32, r_out: f32, pos: Pos2) -> Option<usize> {
    let d = pos - center;
    let dist = d.length();
    if dist < r_in || dist > r_out {
        return None;
    }
    let mut ang = d.y.atan2(d.x);
    while ang < START_ANGLE { ang += TAU; }
    while ang >= START_ANGLE + TAU { ang -= TAU; }
    bounds.iter().position(|&(a0, a1)| ang >= a0 && ang < a1)
}

fn wheel(ui: &mut egui::Ui, wedges: &[Wedge], hole: f32) -> egui::Response {
    let (mut response, painter) = ui.allocate_painter(Vec2::splat(WHEEL_SIZE), Sense::hover());
    let center = response.rect.center();
    let r_out = WHEEL_SIZE * 0.5 - 4.0;
    let r_in = r_out * hole;

    let mut mesh = Mesh::default();
    let mut bounds = Vec::with_capacity(wedges.len());
    let mut a = START_ANGLE;
    for w in wedges {
        let a1 = a + w.share.max(0.0) * TAU;
        if a1 > a {
            ring_segment(&mut mesh, center, r_in, r_out, a, a1, w.fill);
        }
        bounds.push((a, a1));
        a = a1;
    }
    painter.add(Shape::mesh(mesh));

    // Wedge borders
    if wedges.len() > 1 {
        let sep = Stroke::new(1.0, ui.visuals().panel_fill);
        for &(a0, a1) in &bounds {
            if a1 > a0 {
                painter.line_segment([center + r_in * Vec2::angled(a0), center + r_out * Vec2::angled(a0)], sep);
            }
        }
    }

    for (w, &(a0, a1)) in wedges.iter().zip(&bounds) {
        if a1 - a0 < MIN_LABEL_ANGLE || w.text.is_empty() {
            continue;
        }
        let mid = (a0 + a1) * 0.5;
        let pos = center + (r_in + r_out) * 0.5 * Vec2::angled(mid);
        painter.text(pos, Align2::CENTER_CENTER, &w.text, FontId::proportional(12.0), w.text_color);
    }

    if let Some(i) = response.hover_pos().and_then(|p| hit(&bounds, center, r_in, r_out, p)) {
        response = response.on_hover_text_at_pointer(wedges[i].hover.as_str());
    }
    response
}

fn legend(ui: &mut egui::Ui, items: &[(Color32, &str)]) {
    ui.horizontal_wrapped(|ui| {
        for (color, label) in items {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, *color);
            ui.label(*label);
            ui.add_space(8.0);
        }
    });
}

/// Donut with one wedge per slice and a legend underneath.
pub fn donut(ui: &mut egui::Ui, chart: &PieChart) {
    let wedges: Vec<Wedge> = chart
        .slices
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let fill = palette(i);
            Wedge {
                share: (s.percent / 100.0) as f32,
                fill: color32(fill),
                text: chart.slice_text(s),
                text_color: color32(fill.contrast_text()),
                hover: format!("{}\n{} guest houses ({:.2}%)", s.label, s.value, s.percent),
            }
        })
        .collect();

    wheel(ui, &wedges, chart.hole);

    let items: Vec<(Color32, &str)> = chart
        .slices
        .iter()
        .enumerate()
        .map(|(i, s)| (color32(palette(i)), s.label.as_str()))
        .collect();
    legend(ui, &items);
}

/// Single-level sunburst plus its colorbar.
pub fn sunburst(ui: &mut egui::Ui, chart: &SunburstChart) {
    let metric = chart.metric.column();
    let wedges: Vec<Wedge> = chart
        .segments
        .iter()
        .map(|seg| Wedge {
            share: seg.share as f32,
            fill: color32(seg.color),
            text: seg.town.clone(),
            text_color: color32(seg.color.contrast_text()),
            hover: format!("{}\n{}: {}", seg.town, metric, seg.value),
        })
        .collect();

    ui.horizontal(|ui| {
        wheel(ui, &wedges, 0.0);
        ui.add_space(16.0);
        colorbar(ui, metric);
    });
}

/// Vertical gradient over the metric color range with fixed ticks.
fn colorbar(ui: &mut egui::Ui, title: &str) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(title).small());

        let (resp, painter) = ui.allocate_painter(Vec2::new(70.0, WHEEL_SIZE - 30.0), Sense::hover());
        let bar = Rect::from_min_size(resp.rect.min, Vec2::new(18.0, resp.rect.height()));
        let (lo, hi) = COLOR_RANGE;

        let bands = 60;
        let mut mesh = Mesh::default();
        for i in 0..bands {
            let t0 = i as f32 / bands as f32;
            let t1 = (i + 1) as f32 / bands as f32;
            let v = lo + (hi - lo) * ((t0 + t1) * 0.5) as f64;
            let band = Rect::from_min_max(
                Pos2::new(bar.left(), bar.bottom() - t1 * bar.height()),
                Pos2::new(bar.right(), bar.bottom() - t0 * bar.height()),
            );
            mesh.add_colored_rect(band, color32(metric_scale(v)));
        }
        painter.add(Shape::mesh(mesh));

        let text_color = ui.visuals().text_color();
        let stroke = Stroke::new(1.0, text_color);
        painter.rect_stroke(bar, 0.0, Stroke::new(1.0, ui.visuals().weak_text_color()), egui::StrokeKind::Inside);
        for &tick in COLORBAR_TICKS {
            let t = ((tick - lo) / (hi - lo)) as f32;
            let y = bar.bottom() - t * bar.height();
            painter.line_segment([Pos2::new(bar.right(), y), Pos2::new(bar.right() + 5.0, y)], stroke);
            painter.text(
                Pos2::new(bar.right() + 8.0, y),
                Align2::LEFT_CENTER,
                format!("{tick}"),
                FontId::proportional(11.0),
                text_color,
            );
        }
    });
}
