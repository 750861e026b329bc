//! Result mapper: turns a simulation result into a drawable primitive.
//!
//! This is the renderer-agnostic core of the viewer. Mapping is pure:
//! given the same result, it produces the same vertex data, so the whole
//! result-to-geometry path is unit-testable without a GPU.
//!
//! # Invariants
//! - Each result kind maps to exactly one drawable shape: stress analysis
//!   to a vertex-colored cube mesh, fluid dynamics to a point cloud,
//!   electromagnetic to a polyline.
//! - Normalized producer coordinates in [0, 1] land in the [-2, 2]
//!   display volume via `(v - 0.5) * 4`.
//! - Unknown result kinds map to nothing; the caller keeps whatever
//!   drawable is currently on screen.

mod color;
mod drawable;
mod mapper;

pub use color::{hsl_to_rgb, stress_color};
pub use drawable::{
    Drawable, LINE_WIDTH, LineVertex, MeshVertex, POINT_COLOR, POINT_SIZE, POLYLINE_COLOR,
    WIREFRAME_COLOR,
};
pub use mapper::{MapError, MappedResult, describe, display_position, map_result};

pub fn crate_info() -> &'static str {
    "simview-scene v0.1.0"
}
