//! Domain and service-client crate for the Bio-Kinetic Gas Predictor.
//!
//! Owns everything that is not presentation: the simulation parameters the
//! user edits, the HTTP contract with the remote prediction service, the
//! in-flight call management, the risk-tier classification of the returned
//! label, and the synthesized kinetics projection curve the chart draws.
//!
//! The prediction model itself lives behind the HTTP endpoint; nothing in
//! this crate does any modeling.

use bevy::prelude::*;

pub mod client;
pub mod params;
pub mod projection;
pub mod risk;
pub mod wire;

#[cfg(test)]
mod integration_tests;

/// Plugin wiring the prediction client into the app.
///
/// Registers the parameter store, the result slot, the failure notice, the
/// in-flight call table, and the dispatch/collect system pair. Dispatch runs
/// before collect so a call issued this frame can, in principle, complete in
/// the same frame.
pub struct PredictionPlugin;

impl Plugin for PredictionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<params::SimulationParameters>()
            .init_resource::<client::PredictorEndpoint>()
            .init_resource::<client::PredictionSlot>()
            .init_resource::<client::ServiceNotice>()
            .init_resource::<client::InFlightPredictions>()
            .add_event::<client::RunPrediction>()
            .add_systems(
                Update,
                (client::dispatch_predictions, client::collect_predictions).chain(),
            );
    }
}
