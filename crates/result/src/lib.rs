//! Simulation result payloads.
//!
//! The solver backend produces one JSON payload per completed job, tagged
//! by a `type` field. This crate owns the typed model for those payloads,
//! plus file loading and deterministic demo generation for development.
//!
//! # Invariants
//! - Exactly one payload shape per tag; unrecognized tags decode to
//!   [`SimulationResult::Unknown`] instead of failing.
//! - Coordinates in fluid/electromagnetic payloads are normalized to
//!   [0, 1] by the producer. This crate stores them as-is; display
//!   scaling is the scene mapper's job.

mod demo;
mod model;

pub use demo::{DemoKind, demo_result};
pub use model::{ResultError, SamplePoint, SimulationResult, load_result};

pub fn crate_info() -> &'static str {
    "simview-result v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("result"));
    }
}
