use crate::color::stress_color;
use crate::drawable::{Drawable, LineVertex, MeshVertex, POLYLINE_COLOR, WIREFRAME_COLOR};
use simview_result::{SamplePoint, SimulationResult};

/// Errors from mapping a result to a drawable.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    /// Stress normalization divides by the value maximum, which is
    /// undefined for an empty sequence. Fail fast instead of pushing
    /// NaN into vertex colors.
    #[error("stress_analysis result carries no stress values")]
    EmptyStressValues,
}

/// A mapped result: the drawable plus whether the camera should snap
/// back to its default framing.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedResult {
    pub drawable: Drawable,
    /// True only for stress analysis; the other kinds leave the camera
    /// where the user put it.
    pub reset_camera: bool,
}

/// Re-center a normalized [0, 1] coordinate into the [-2, 2] display volume.
pub fn display_position(p: &SamplePoint) -> [f32; 3] {
    [
        (p.x - 0.5) * 4.0,
        (p.y - 0.5) * 4.0,
        (p.z - 0.5) * 4.0,
    ]
}

/// Map a result to its drawable.
///
/// Returns `Ok(None)` for [`SimulationResult::Unknown`]: the defined
/// behavior is a no-op that leaves the current drawable untouched.
pub fn map_result(result: &SimulationResult) -> Result<Option<MappedResult>, MapError> {
    match result {
        SimulationResult::StressAnalysis {
            stress_values,
            max_stress,
        } => Ok(Some(MappedResult {
            drawable: map_stress(stress_values, *max_stress)?,
            reset_camera: true,
        })),
        SimulationResult::FluidDynamics { particles } => Ok(Some(MappedResult {
            drawable: map_particles(particles),
            reset_camera: false,
        })),
        SimulationResult::Electromagnetic { field_lines } => Ok(Some(MappedResult {
            drawable: map_field_lines(field_lines),
            reset_camera: false,
        })),
        SimulationResult::Unknown => {
            tracing::warn!("ignoring result with unrecognized type");
            Ok(None)
        }
    }
}

/// Stress analysis: a fixed 2x2x2 cube whose vertices are colored by the
/// stress gradient. Vertex `i` samples `values[i % len]` normalized by
/// the maximum.
fn map_stress(values: &[f32], max_stress: Option<f32>) -> Result<Drawable, MapError> {
    if values.is_empty() {
        return Err(MapError::EmptyStressValues);
    }
    let max = max_stress.unwrap_or_else(|| values.iter().copied().fold(f32::MIN, f32::max));

    let (mut vertices, indices) = cube_mesh(1.0);
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let normalized = values[i % values.len()] / max;
        vertex.color = stress_color(normalized);
    }

    let edges = wireframe_edges(&vertices, &indices);
    Ok(Drawable::Mesh {
        vertices,
        indices,
        edges,
    })
}

/// Fluid dynamics: one point per particle in display coordinates.
fn map_particles(particles: &[SamplePoint]) -> Drawable {
    Drawable::Points {
        positions: particles.iter().map(display_position).collect(),
    }
}

/// Electromagnetic: a connected polyline through the samples in input order.
fn map_field_lines(samples: &[SamplePoint]) -> Drawable {
    Drawable::Polyline {
        vertices: samples
            .iter()
            .map(|p| LineVertex {
                position: display_position(p),
                color: POLYLINE_COLOR,
            })
            .collect(),
    }
}

/// One-line drawable summary for logging and CLI output.
pub fn describe(drawable: &Drawable) -> String {
    match drawable {
        Drawable::Mesh {
            vertices,
            indices,
            edges,
        } => format!(
            "mesh: {} vertices, {} triangles, {} wireframe segments",
            vertices.len(),
            indices.len() / 3,
            edges.len() / 2
        ),
        Drawable::Points { positions } => format!("points: {} particles", positions.len()),
        Drawable::Polyline { vertices } => {
            format!("polyline: {} samples", vertices.len())
        }
    }
}

/// Generate cube vertices and indices with per-face normals.
/// `half` is the half extent; the stress cube uses 1.0 (a 2x2x2 box).
fn cube_mesh(half: f32) -> (Vec<MeshVertex>, Vec<u16>) {
    let p = half;
    let v = |position: [f32; 3], normal: [f32; 3]| MeshVertex {
        position,
        normal,
        color: [1.0, 1.0, 1.0],
    };
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        v([-p, -p,  p], [0.0, 0.0, 1.0]),
        v([ p, -p,  p], [0.0, 0.0, 1.0]),
        v([ p,  p,  p], [0.0, 0.0, 1.0]),
        v([-p,  p,  p], [0.0, 0.0, 1.0]),
        // -Z face
        v([ p, -p, -p], [0.0, 0.0, -1.0]),
        v([-p, -p, -p], [0.0, 0.0, -1.0]),
        v([-p,  p, -p], [0.0, 0.0, -1.0]),
        v([ p,  p, -p], [0.0, 0.0, -1.0]),
        // +X face
        v([ p, -p,  p], [1.0, 0.0, 0.0]),
        v([ p, -p, -p], [1.0, 0.0, 0.0]),
        v([ p,  p, -p], [1.0, 0.0, 0.0]),
        v([ p,  p,  p], [1.0, 0.0, 0.0]),
        // -X face
        v([-p, -p, -p], [-1.0, 0.0, 0.0]),
        v([-p, -p,  p], [-1.0, 0.0, 0.0]),
        v([-p,  p,  p], [-1.0, 0.0, 0.0]),
        v([-p,  p, -p], [-1.0, 0.0, 0.0]),
        // +Y face
        v([-p,  p,  p], [0.0, 1.0, 0.0]),
        v([ p,  p,  p], [0.0, 1.0, 0.0]),
        v([ p,  p, -p], [0.0, 1.0, 0.0]),
        v([-p,  p, -p], [0.0, 1.0, 0.0]),
        // -Y face
        v([-p, -p, -p], [0.0, -1.0, 0.0]),
        v([ p, -p, -p], [0.0, -1.0, 0.0]),
        v([ p, -p,  p], [0.0, -1.0, 0.0]),
        v([-p, -p,  p], [0.0, -1.0, 0.0]),
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    (vertices, indices)
}

/// Build the black wireframe overlay: a line list with three segments per
/// triangle, including the face diagonals the triangulation introduces.
fn wireframe_edges(vertices: &[MeshVertex], indices: &[u16]) -> Vec<LineVertex> {
    let mut edges = Vec::with_capacity(indices.len() * 2);
    let lv = |i: u16| LineVertex {
        position: vertices[i as usize].position,
        color: WIREFRAME_COLOR,
    };
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        edges.extend_from_slice(&[lv(a), lv(b), lv(b), lv(c), lv(c), lv(a)]);
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::stress_color;

    fn assert_close(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn fluid_maps_to_display_volume() {
        // Scenario A: corner particles land at the display volume corners.
        let result = SimulationResult::FluidDynamics {
            particles: vec![
                SamplePoint { x: 0.0, y: 0.0, z: 0.0 },
                SamplePoint { x: 1.0, y: 1.0, z: 1.0 },
            ],
        };
        let mapped = map_result(&result).unwrap().unwrap();
        assert!(!mapped.reset_camera);
        match mapped.drawable {
            Drawable::Points { positions } => {
                assert_eq!(positions.len(), 2);
                assert_eq!(positions[0], [-2.0, -2.0, -2.0]);
                assert_eq!(positions[1], [2.0, 2.0, 2.0]);
            }
            other => panic!("wrong drawable: {}", other.kind_name()),
        }
    }

    #[test]
    fn fluid_point_count_matches_particles() {
        let particles: Vec<SamplePoint> = (0..37)
            .map(|i| SamplePoint {
                x: i as f32 / 37.0,
                y: 0.5,
                z: 0.5,
            })
            .collect();
        let result = SimulationResult::FluidDynamics { particles };
        let mapped = map_result(&result).unwrap().unwrap();
        assert_eq!(mapped.drawable.vertex_count(), 37);
    }

    #[test]
    fn stress_colors_span_blue_to_red() {
        // Scenario B: values [0, 1] with max 1 alternate pure blue / pure red.
        let result = SimulationResult::StressAnalysis {
            stress_values: vec![0.0, 1.0],
            max_stress: Some(1.0),
        };
        let mapped = map_result(&result).unwrap().unwrap();
        assert!(mapped.reset_camera);
        match mapped.drawable {
            Drawable::Mesh { vertices, .. } => {
                assert_eq!(vertices.len(), 24);
                for (i, vertex) in vertices.iter().enumerate() {
                    if i % 2 == 0 {
                        assert_close(vertex.color, stress_color(0.0)); // hue 0.6
                    } else {
                        assert_close(vertex.color, [1.0, 0.0, 0.0]); // hue 0.0
                    }
                }
            }
            other => panic!("wrong drawable: {}", other.kind_name()),
        }
    }

    #[test]
    fn stress_defaults_max_to_value_maximum() {
        let result = SimulationResult::StressAnalysis {
            stress_values: vec![1.0, 2.0, 4.0],
            max_stress: None,
        };
        let mapped = map_result(&result).unwrap().unwrap();
        match mapped.drawable {
            Drawable::Mesh { vertices, .. } => {
                // Vertex 2 samples the maximum value: normalized 1.0 = red.
                assert_close(vertices[2].color, [1.0, 0.0, 0.0]);
                // Vertex 0 samples 1.0/4.0.
                assert_close(vertices[0].color, stress_color(0.25));
            }
            other => panic!("wrong drawable: {}", other.kind_name()),
        }
    }

    #[test]
    fn stress_single_value_is_defined() {
        let result = SimulationResult::StressAnalysis {
            stress_values: vec![3.5],
            max_stress: None,
        };
        let mapped = map_result(&result).unwrap().unwrap();
        match mapped.drawable {
            Drawable::Mesh { vertices, .. } => {
                // Every vertex samples the same value, normalized to 1.0.
                for vertex in vertices {
                    assert_close(vertex.color, [1.0, 0.0, 0.0]);
                }
            }
            other => panic!("wrong drawable: {}", other.kind_name()),
        }
    }

    #[test]
    fn empty_stress_values_fail_fast() {
        let result = SimulationResult::StressAnalysis {
            stress_values: vec![],
            max_stress: None,
        };
        assert_eq!(map_result(&result), Err(MapError::EmptyStressValues));
    }

    #[test]
    fn stress_mesh_has_wireframe_overlay() {
        let result = SimulationResult::StressAnalysis {
            stress_values: vec![0.5],
            max_stress: Some(1.0),
        };
        let mapped = map_result(&result).unwrap().unwrap();
        match mapped.drawable {
            Drawable::Mesh { indices, edges, .. } => {
                assert_eq!(indices.len(), 36);
                // Three segments (six endpoints) per triangle.
                assert_eq!(edges.len(), 36 / 3 * 6);
                assert!(edges.iter().all(|e| e.color == WIREFRAME_COLOR));
            }
            other => panic!("wrong drawable: {}", other.kind_name()),
        }
    }

    #[test]
    fn field_lines_connect_in_input_order() {
        let samples = vec![
            SamplePoint { x: 0.5, y: 0.5, z: 0.5 },
            SamplePoint { x: 0.75, y: 0.5, z: 0.5 },
            SamplePoint { x: 1.0, y: 0.5, z: 0.5 },
        ];
        let result = SimulationResult::Electromagnetic {
            field_lines: samples,
        };
        let mapped = map_result(&result).unwrap().unwrap();
        assert!(!mapped.reset_camera);
        match mapped.drawable {
            Drawable::Polyline { vertices } => {
                assert_eq!(vertices.len(), 3);
                assert_eq!(vertices[0].position, [0.0, 0.0, 0.0]);
                assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
                assert_eq!(vertices[2].position, [2.0, 0.0, 0.0]);
                assert!(vertices.iter().all(|v| v.color == POLYLINE_COLOR));
            }
            other => panic!("wrong drawable: {}", other.kind_name()),
        }
    }

    #[test]
    fn unknown_result_maps_to_nothing() {
        assert_eq!(map_result(&SimulationResult::Unknown), Ok(None));
    }

    #[test]
    fn mapping_is_idempotent() {
        let result = SimulationResult::StressAnalysis {
            stress_values: vec![0.2, 0.9, 0.4],
            max_stress: Some(1.0),
        };
        let a = map_result(&result).unwrap().unwrap();
        let b = map_result(&result).unwrap().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.drawable.kind_name(), b.drawable.kind_name());
        assert_eq!(a.drawable.vertex_count(), b.drawable.vertex_count());
    }

    #[test]
    fn describe_summarizes_each_kind() {
        let mesh = map_result(&SimulationResult::StressAnalysis {
            stress_values: vec![1.0],
            max_stress: None,
        })
        .unwrap()
        .unwrap();
        assert!(describe(&mesh.drawable).contains("24 vertices"));

        let points = Drawable::Points {
            positions: vec![[0.0; 3]; 5],
        };
        assert!(describe(&points).contains("5 particles"));

        let line = Drawable::Polyline { vertices: vec![] };
        assert!(describe(&line).contains("0 samples"));
    }

    #[test]
    fn hue_stays_in_stress_band() {
        // Every mapped color comes from hue in [0, 0.6]: red channel and
        // blue channel never exceed the gradient's envelope.
        let values: Vec<f32> = (0..=20).map(|i| i as f32 / 20.0).collect();
        let result = SimulationResult::StressAnalysis {
            stress_values: values,
            max_stress: Some(1.0),
        };
        let mapped = map_result(&result).unwrap().unwrap();
        match mapped.drawable {
            Drawable::Mesh { vertices, .. } => {
                for vertex in vertices {
                    let [r, g, b] = vertex.color;
                    assert!((0.0..=1.0).contains(&r));
                    assert!((0.0..=1.0).contains(&g));
                    assert!((0.0..=1.0).contains(&b));
                    // hue <= 0.6 means never magenta/violet: blue and red
                    // are not simultaneously dominant over green.
                    assert!(!(r > 0.5 && b > 0.5));
                }
            }
            other => panic!("wrong drawable: {}", other.kind_name()),
        }
    }
}
