//! Simulation input parameters (GAS-002).
//!
//! Holds the three user-controlled inputs sent to the prediction service:
//! water temperature, stagnation duration, and water source type. The
//! numeric setters clamp to the documented service domain, so the resource
//! can never hold an out-of-range value no matter who mutates it — the UI
//! sliders are range-bound on top of that.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest water temperature the service models, in °C.
pub const TEMP_MIN: i32 = 10;
/// Highest water temperature the service models, in °C.
pub const TEMP_MAX: i32 = 50;
/// Minimum stagnation duration, in days.
pub const DAYS_MIN: i32 = 1;
/// Maximum stagnation duration, in days.
pub const DAYS_MAX: i32 = 30;

// ---------------------------------------------------------------------------
// Source type
// ---------------------------------------------------------------------------

/// Which kind of stagnant water is being simulated.
///
/// The variant name goes over the wire verbatim and selects which gas
/// species the server-side model predicts (H₂S for sewage, CH₄ for
/// rainwater). The client does not enforce that mapping; it only uses it
/// for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceType {
    #[default]
    Sewage,
    Rainwater,
}

impl SourceType {
    /// Display name of the gas species the server models for this source.
    pub fn gas_species(self) -> &'static str {
        match self {
            SourceType::Sewage => "H₂S",
            SourceType::Rainwater => "CH₄",
        }
    }

    /// Human-readable label for UI controls.
    pub fn label(self) -> &'static str {
        match self {
            SourceType::Sewage => "Sewage",
            SourceType::Rainwater => "Rainwater",
        }
    }
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// Current simulation parameters, owned by the session.
///
/// Fields are private so every mutation goes through a clamping setter.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SimulationParameters {
    temperature: i32,
    days_stagnant: i32,
    source: SourceType,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            temperature: 30,
            days_stagnant: 10,
            source: SourceType::Sewage,
        }
    }
}

impl SimulationParameters {
    /// Water temperature in °C, always within [`TEMP_MIN`]..=[`TEMP_MAX`].
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Stagnation duration in days, always within [`DAYS_MIN`]..=[`DAYS_MAX`].
    pub fn days_stagnant(&self) -> i32 {
        self.days_stagnant
    }

    /// Selected water source.
    pub fn source(&self) -> SourceType {
        self.source
    }

    /// Set the water temperature; out-of-domain values are clamped to the
    /// nearest bound.
    pub fn set_temperature(&mut self, celsius: i32) {
        self.temperature = celsius.clamp(TEMP_MIN, TEMP_MAX);
    }

    /// Set the stagnation duration; out-of-domain values are clamped to the
    /// nearest bound.
    pub fn set_days_stagnant(&mut self, days: i32) {
        self.days_stagnant = days.clamp(DAYS_MIN, DAYS_MAX);
    }

    /// Set the water source type.
    pub fn set_source(&mut self, source: SourceType) {
        self.source = source;
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
