use crate::model::{SamplePoint, SimulationResult};

/// Which demo payload to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    StressAnalysis,
    FluidDynamics,
    Electromagnetic,
}

impl DemoKind {
    /// Element count the mock backend uses for this kind.
    pub fn default_count(self) -> usize {
        match self {
            Self::StressAnalysis => 100,
            Self::FluidDynamics => 100,
            Self::Electromagnetic => 50,
        }
    }
}

/// Generate a demo payload with `count` elements.
///
/// Deterministic for a given seed, so demo scenes are reproducible across
/// runs and platforms. Values match the mock backend's ranges: everything
/// uniform in [0, 1), stress normalized against a max of 1.0.
pub fn demo_result(kind: DemoKind, count: usize, seed: u64) -> SimulationResult {
    let mut rng = DemoRng::new(seed);
    match kind {
        DemoKind::StressAnalysis => SimulationResult::StressAnalysis {
            stress_values: (0..count).map(|_| rng.next_f32()).collect(),
            max_stress: Some(1.0),
        },
        DemoKind::FluidDynamics => SimulationResult::FluidDynamics {
            particles: (0..count).map(|_| rng.next_point()).collect(),
        },
        DemoKind::Electromagnetic => SimulationResult::Electromagnetic {
            field_lines: (0..count).map(|_| rng.next_point()).collect(),
        },
    }
}

/// Minimal deterministic RNG over splitmix64.
struct DemoRng {
    state: u64,
}

impl DemoRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = splitmix64(self.state);
        self.state
    }

    /// Uniform in [0, 1) with 24 bits of precision.
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    fn next_point(&mut self) -> SamplePoint {
        SamplePoint {
            x: self.next_f32(),
            y: self.next_f32(),
            z: self.next_f32(),
        }
    }
}

/// Splitmix64 step function; fast and reproducible across platforms.
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
