//! Kinetics projection chart (UX-003).
//!
//! Painter-drawn line chart of the synthesized projection curve: background
//! rect, horizontal grid lines, polyline, point markers, and day tick
//! labels. The curve is display-only rescaling of the latest predicted
//! concentration (or the placeholder series); the heading says
//! "Theoretical" so nobody mistakes it for model output.

use bevy_egui::egui;

use prediction::projection::{synthesize, ProjectionPoint};
use prediction::wire::PredictionResult;

const CHART_HEIGHT: f32 = 220.0;
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

/// Render the chart section: heading plus the curve for the current inputs.
pub fn kinetics_section(ui: &mut egui::Ui, days_stagnant: i32, result: Option<&PredictionResult>) {
    ui.label(egui::RichText::new("Kinetics Projection (Theoretical)").strong());
    let points = synthesize(days_stagnant, result);
    draw_projection_curve(ui, &points);
}

fn draw_projection_curve(ui: &mut egui::Ui, points: &[ProjectionPoint]) {
    let width = ui.available_width().max(200.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(24));

    if points.len() < 2 {
        return;
    }

    let max_day = points[points.len() - 1].day.max(1) as f32;
    let max_ppm = points.iter().map(|p| p.ppm).fold(1.0_f64, f64::max) as f32;

    // Inset so markers and labels stay inside the frame
    let plot = rect.shrink2(egui::vec2(28.0, 18.0));

    // Horizontal grid lines
    for i in 0..=4 {
        let y = plot.min.y + (i as f32 / 4.0) * plot.height();
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            egui::Stroke::new(0.3, egui::Color32::from_gray(60)),
        );
    }

    let positions: Vec<egui::Pos2> = points
        .iter()
        .map(|p| {
            let x = plot.min.x + (p.day as f32 / max_day) * plot.width();
            let y = plot.max.y - (p.ppm as f32 / max_ppm) * plot.height();
            egui::pos2(x, y)
        })
        .collect();

    for window in positions.windows(2) {
        painter.line_segment([window[0], window[1]], egui::Stroke::new(2.5, LINE_COLOR));
    }

    // Point markers and day tick labels
    for (point, pos) in points.iter().zip(&positions) {
        painter.circle_filled(*pos, 3.5, LINE_COLOR);
        painter.text(
            egui::pos2(pos.x, rect.max.y - 4.0),
            egui::Align2::CENTER_BOTTOM,
            format!("d{}", point.day),
            egui::FontId::proportional(10.0),
            egui::Color32::from_gray(140),
        );
    }

    // Scale hint at the top-left corner
    painter.text(
        egui::pos2(rect.min.x + 4.0, rect.min.y + 4.0),
        egui::Align2::LEFT_TOP,
        format!("{max_ppm:.0} ppm"),
        egui::FontId::proportional(10.0),
        egui::Color32::from_gray(140),
    );
}
