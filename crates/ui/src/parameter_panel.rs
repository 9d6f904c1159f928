//! Simulation parameter input panel (UX-001).
//!
//! Left-hand panel with the three input controls and the run button:
//! - Source selector (Sewage / Rainwater, annotated with the modeled gas)
//! - Temperature slider (10..50 °C)
//! - Stagnation duration slider (1..30 days)
//! - Run button, disabled while a call is outstanding
//!
//! The sliders are range-bound to the service domain and the resource
//! setters clamp again underneath, so an out-of-domain value cannot reach
//! the wire.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use prediction::client::{InFlightPredictions, RunPrediction};
use prediction::params::{
    SimulationParameters, SourceType, DAYS_MAX, DAYS_MIN, TEMP_MAX, TEMP_MIN,
};

pub fn parameter_panel_ui(
    mut contexts: EguiContexts,
    mut params: ResMut<SimulationParameters>,
    in_flight: Res<InFlightPredictions>,
    mut runs: EventWriter<RunPrediction>,
) {
    egui::SidePanel::left("simulation_parameters")
        .resizable(false)
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 10.0;
            ui.add_space(8.0);
            ui.heading("Simulation Parameters");
            ui.separator();

            // --- Source selection ---
            ui.label("Water Source Type");
            ui.horizontal(|ui| {
                for source in [SourceType::Sewage, SourceType::Rainwater] {
                    let text = format!("{} ({})", source.label(), source.gas_species());
                    if ui
                        .selectable_label(params.source() == source, text)
                        .clicked()
                    {
                        params.set_source(source);
                    }
                }
            });

            ui.separator();

            // --- Temperature slider ---
            let mut temperature = params.temperature();
            let response = ui.add(
                egui::Slider::new(&mut temperature, TEMP_MIN..=TEMP_MAX)
                    .text("Temperature")
                    .suffix(" °C"),
            );
            if response.changed() {
                params.set_temperature(temperature);
            }

            // --- Stagnation duration slider ---
            let mut days = params.days_stagnant();
            let response = ui.add(
                egui::Slider::new(&mut days, DAYS_MIN..=DAYS_MAX)
                    .text("Stagnation Duration")
                    .suffix(" days"),
            );
            if response.changed() {
                params.set_days_stagnant(days);
            }

            ui.add_space(12.0);

            // --- Run button (gated while a call is outstanding) ---
            let busy = in_flight.in_flight();
            let label = if busy {
                "Processing AI Model..."
            } else {
                "Run Prediction Model"
            };
            let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 36.0));
            if ui.add_enabled(!busy, button).clicked() {
                runs.send(RunPrediction);
            }
        });
}
