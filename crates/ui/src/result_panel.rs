//! Prediction result display (UX-002).
//!
//! Central column: app header, the latest hazard estimate (concentration
//! readout, risk badge, advisory card) or an empty-state hint before the
//! first prediction, then the kinetics chart. Also owns the dismissible
//! service-failure notice window.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use prediction::client::{PredictionSlot, ServiceNotice};
use prediction::params::SimulationParameters;
use prediction::risk::RiskTier;
use prediction::wire::PredictionResult;

use crate::kinetics_chart;

/// Accent color for a risk tier: red / orange / emerald.
pub fn tier_color(tier: RiskTier) -> egui::Color32 {
    match tier {
        RiskTier::Critical => egui::Color32::from_rgb(239, 68, 68),
        RiskTier::High => egui::Color32::from_rgb(249, 115, 22),
        RiskTier::Low => egui::Color32::from_rgb(16, 185, 129),
    }
}

pub fn results_panel_ui(
    mut contexts: EguiContexts,
    params: Res<SimulationParameters>,
    slot: Res<PredictionSlot>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.heading(
                egui::RichText::new("Bio-Kinetic Gas Predictor")
                    .size(28.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(
                    "Simulate and predict hazardous H₂S and CH₄ generation in stagnant \
                     water systems using Random Forest models.",
                )
                .weak(),
            );
        });
        ui.add_space(12.0);

        match &slot.0 {
            Some(result) => result_card(ui, result),
            None => empty_state(ui),
        }

        ui.add_space(12.0);
        kinetics_chart::kinetics_section(ui, params.days_stagnant(), slot.0.as_ref());
    });
}

fn result_card(ui: &mut egui::Ui, result: &PredictionResult) {
    let tier = RiskTier::from_label(&result.risk_level);
    let accent = tier_color(tier);

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, accent))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("PREDICTED CONCENTRATION").small().weak());
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{}", result.predicted_ppm))
                                .size(42.0)
                                .strong()
                                .monospace(),
                        );
                        ui.label(egui::RichText::new("ppm").weak());
                    });
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    // Label shown verbatim; only the styling comes from the tier
                    ui.label(
                        egui::RichText::new(format!(" {} RISK ", result.risk_level))
                            .color(egui::Color32::WHITE)
                            .background_color(accent)
                            .strong(),
                    );
                });
            });

            if let Some(gas) = &result.gas_type {
                ui.label(egui::RichText::new(format!("Modeled species: {gas}")).weak());
            }

            ui.separator();
            ui.label(egui::RichText::new("Safety Recommendation").strong());
            ui.label(&result.health_advice);
        });
}

fn empty_state(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new("Awaiting simulation parameters...")
                        .size(16.0)
                        .weak(),
                );
                ui.add_space(24.0);
            });
        });
}

/// Blocking, dismissible notice shown when a prediction call fails.
pub fn service_notice_ui(mut contexts: EguiContexts, mut notice: ResMut<ServiceNotice>) {
    let Some(text) = notice.0.clone() else {
        return;
    };
    let mut dismissed = false;
    egui::Window::new("Connection Problem")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.label(text);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("Dismiss").clicked() {
                    dismissed = true;
                }
            });
        });
    if dismissed {
        notice.0 = None;
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
