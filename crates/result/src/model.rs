use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or decoding result payloads.
#[derive(Debug, thiserror::Error)]
pub enum ResultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single normalized sample position in [0, 1] per axis.
///
/// Fluid particles and electromagnetic field-line samples share this shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A completed simulation result, tagged by the producer's `type` field.
///
/// The wire format keeps the producer's camelCase field names. Tags other
/// than the three known kinds decode to [`SimulationResult::Unknown`];
/// rendering an unknown result is a documented no-op, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimulationResult {
    StressAnalysis {
        #[serde(rename = "stressValues")]
        stress_values: Vec<f32>,
        #[serde(rename = "maxStress", default, skip_serializing_if = "Option::is_none")]
        max_stress: Option<f32>,
    },
    FluidDynamics {
        particles: Vec<SamplePoint>,
    },
    Electromagnetic {
        #[serde(rename = "fieldLines")]
        field_lines: Vec<SamplePoint>,
    },
    #[serde(other)]
    Unknown,
}

impl SimulationResult {
    /// The wire tag for this result kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StressAnalysis { .. } => "stress_analysis",
            Self::FluidDynamics { .. } => "fluid_dynamics",
            Self::Electromagnetic { .. } => "electromagnetic",
            Self::Unknown => "unknown",
        }
    }

    /// Number of data elements carried by the payload.
    pub fn element_count(&self) -> usize {
        match self {
            Self::StressAnalysis { stress_values, .. } => stress_values.len(),
            Self::FluidDynamics { particles } => particles.len(),
            Self::Electromagnetic { field_lines } => field_lines.len(),
            Self::Unknown => 0,
        }
    }

    /// One-line human-readable summary, for logging and CLI output.
    pub fn summary(&self) -> String {
        match self {
            Self::StressAnalysis {
                stress_values,
                max_stress,
            } => match max_stress {
                Some(m) => format!(
                    "stress_analysis: {} values, max_stress={m}",
                    stress_values.len()
                ),
                None => format!(
                    "stress_analysis: {} values, max_stress=auto",
                    stress_values.len()
                ),
            },
            Self::FluidDynamics { particles } => {
                format!("fluid_dynamics: {} particles", particles.len())
            }
            Self::Electromagnetic { field_lines } => {
                format!("electromagnetic: {} field line samples", field_lines.len())
            }
            Self::Unknown => "unknown result type".into(),
        }
    }
}

/// Load a result payload from a JSON file.
pub fn load_result(path: impl AsRef<Path>) -> Result<SimulationResult, ResultError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_stress_analysis() {
        let json = r#"{
            "type": "stress_analysis",
            "stressValues": [0.1, 0.5, 0.9],
            "maxStress": 1.0
        }"#;
        let result: SimulationResult = serde_json::from_str(json).unwrap();
        match result {
            SimulationResult::StressAnalysis {
                stress_values,
                max_stress,
            } => {
                assert_eq!(stress_values, vec![0.1, 0.5, 0.9]);
                assert_eq!(max_stress, Some(1.0));
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn decode_stress_analysis_without_max() {
        let json = r#"{"type": "stress_analysis", "stressValues": [2.0]}"#;
        let result: SimulationResult = serde_json::from_str(json).unwrap();
        match result {
            SimulationResult::StressAnalysis { max_stress, .. } => {
                assert_eq!(max_stress, None);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn decode_fluid_dynamics() {
        let json = r#"{
            "type": "fluid_dynamics",
            "particles": [{"x": 0.0, "y": 0.5, "z": 1.0}]
        }"#;
        let result: SimulationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.kind(), "fluid_dynamics");
        assert_eq!(result.element_count(), 1);
    }

    #[test]
    fn decode_electromagnetic() {
        let json = r#"{
            "type": "electromagnetic",
            "fieldLines": [{"x": 0.1, "y": 0.2, "z": 0.3}, {"x": 0.4, "y": 0.5, "z": 0.6}]
        }"#;
        let result: SimulationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.kind(), "electromagnetic");
        assert_eq!(result.element_count(), 2);
    }

    #[test]
    fn unrecognized_tag_decodes_to_unknown() {
        let json = r#"{"type": "quantum_chromodynamics", "fields": []}"#;
        let result: SimulationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result, SimulationResult::Unknown);
        assert_eq!(result.element_count(), 0);
    }

    #[test]
    fn roundtrip_preserves_wire_names() {
        let result = SimulationResult::Electromagnetic {
            field_lines: vec![SamplePoint {
                x: 0.0,
                y: 0.5,
                z: 1.0,
            }],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"fieldLines\""));
        assert!(json.contains("\"electromagnetic\""));
        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn summary_mentions_counts() {
        let result = SimulationResult::FluidDynamics {
            particles: vec![
                SamplePoint {
                    x: 0.0,
                    y: 0.0,
                    z: 0.0,
                };
                7
            ],
        };
        assert!(result.summary().contains("7 particles"));
    }
}
