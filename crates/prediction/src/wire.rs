//! Wire types for the prediction service HTTP contract (GAS-003).
//!
//! Request and response bodies exchanged with the service's `POST /predict`
//! endpoint. Field names mirror the service's JSON schema exactly;
//! `gas_type` is optional because simpler response shapes omit it.

use serde::{Deserialize, Serialize};

use crate::params::{SimulationParameters, SourceType};

/// JSON body sent to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
    pub temperature: i32,
    pub days_stagnant: i32,
    pub source_type: SourceType,
}

impl PredictRequest {
    /// Snapshot the current parameters into a request body.
    ///
    /// The store's clamping invariant means no further validation happens
    /// here; whatever the store holds is in-domain by construction.
    pub fn from_params(params: &SimulationParameters) -> Self {
        Self {
            temperature: params.temperature(),
            days_stagnant: params.days_stagnant(),
            source_type: params.source(),
        }
    }
}

/// Successful response body: the service's hazard estimate.
///
/// Replaced wholesale on every successful call; the client never merges
/// fields across responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    /// Point-estimate gas concentration (ppm) at the requested stagnation day.
    pub predicted_ppm: f64,
    /// Opaque severity tag from the service; see [`crate::risk::RiskTier`]
    /// for how it maps to presentation.
    pub risk_level: String,
    /// Advisory text, displayed verbatim.
    pub health_advice: String,
    /// Name of the modeled species, when the service provides one.
    #[serde(default)]
    pub gas_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_snake_case_keys() {
        let mut params = SimulationParameters::default();
        params.set_temperature(30);
        params.set_days_stagnant(10);
        params.set_source(SourceType::Sewage);

        let request = PredictRequest::from_params(&params);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "temperature": 30,
                "days_stagnant": 10,
                "source_type": "Sewage",
            })
        );
    }

    #[test]
    fn test_request_serializes_rainwater_variant_name() {
        let mut params = SimulationParameters::default();
        params.set_source(SourceType::Rainwater);
        let json = serde_json::to_value(PredictRequest::from_params(&params)).unwrap();
        assert_eq!(json["source_type"], "Rainwater");
    }

    #[test]
    fn test_response_deserializes_full_shape() {
        let result: PredictionResult = serde_json::from_str(
            r#"{
                "predicted_ppm": 42.0,
                "risk_level": "CRITICAL",
                "health_advice": "Evacuate",
                "gas_type": "H2S"
            }"#,
        )
        .unwrap();
        assert!((result.predicted_ppm - 42.0).abs() < f64::EPSILON);
        assert_eq!(result.risk_level, "CRITICAL");
        assert_eq!(result.health_advice, "Evacuate");
        assert_eq!(result.gas_type.as_deref(), Some("H2S"));
    }

    #[test]
    fn test_response_deserializes_without_gas_type() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"predicted_ppm": 3.5, "risk_level": "Low", "health_advice": "Safe to use."}"#,
        )
        .unwrap();
        assert!(result.gas_type.is_none());
        assert_eq!(result.risk_level, "Low");
    }

    #[test]
    fn test_response_tolerates_unknown_fields() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"predicted_ppm": 1.0, "risk_level": "Low", "health_advice": "ok", "model_version": 7}"#,
        )
        .unwrap();
        assert!((result.predicted_ppm - 1.0).abs() < f64::EPSILON);
    }
}
