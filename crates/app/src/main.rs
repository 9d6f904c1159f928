use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use prediction::client::PredictorEndpoint;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bio-Kinetic Gas Predictor".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Form-style app: redraw on input, idle cheaply otherwise
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(PredictorEndpoint::from_env())
    .add_plugins((prediction::PredictionPlugin, ui::UiPlugin))
    .add_systems(Startup, setup_camera);

    app.run();
}

/// egui renders through a camera's render graph; a bare 2D camera is all
/// this app needs.
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
