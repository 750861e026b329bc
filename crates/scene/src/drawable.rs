use bytemuck::{Pod, Zeroable};

/// World-space point size for fluid particles (billboard edge length).
pub const POINT_SIZE: f32 = 0.1;

/// Fluid particle tint: 0x0088ff at 60% opacity.
pub const POINT_COLOR: [f32; 4] = [0.0, 136.0 / 255.0, 1.0, 0.6];

/// Field-line tint: pure red, opaque.
pub const POLYLINE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Nominal field-line width. wgpu draws hairlines; kept as the style
/// constant the mapper stamps onto polylines.
pub const LINE_WIDTH: f32 = 2.0;

/// Wireframe overlay color for stress meshes.
pub const WIREFRAME_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// A lit mesh vertex with a per-vertex color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// An unlit vertex for line primitives.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// The single primitive currently representing a result.
///
/// Owned exclusively by the renderer; replacing it releases the previous
/// GPU resources first, so at most one drawable exists at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Indexed triangle mesh with per-vertex colors, plus a black
    /// wireframe overlay (a line list, three segments per triangle).
    Mesh {
        vertices: Vec<MeshVertex>,
        indices: Vec<u16>,
        edges: Vec<LineVertex>,
    },
    /// Point cloud; each position becomes a camera-facing quad of
    /// [`POINT_SIZE`] world units tinted [`POINT_COLOR`].
    Points { positions: Vec<[f32; 3]> },
    /// Connected line strip in input order.
    Polyline { vertices: Vec<LineVertex> },
}

impl Drawable {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Mesh { .. } => "mesh",
            Self::Points { .. } => "points",
            Self::Polyline { .. } => "polyline",
        }
    }

    /// Number of primary vertices (mesh vertices, points, or line samples).
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Mesh { vertices, .. } => vertices.len(),
            Self::Points { positions } => positions.len(),
            Self::Polyline { vertices } => vertices.len(),
        }
    }
}
