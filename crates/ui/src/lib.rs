//! egui panels for the Bio-Kinetic Gas Predictor client.
//!
//! Presentation only: every decision (clamping, fencing, tier mapping,
//! curve synthesis) lives in the `prediction` crate; these systems read
//! and display it.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod kinetics_chart;
pub mod parameter_panel;
pub mod result_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_slate_theme)
            // Chained: egui side/central panels must be laid out in a
            // stable order within the frame.
            .add_systems(
                Update,
                (
                    parameter_panel::parameter_panel_ui,
                    result_panel::results_panel_ui,
                    result_panel::service_notice_ui,
                )
                    .chain(),
            );
    }
}
