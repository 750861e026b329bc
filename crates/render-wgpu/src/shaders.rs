/// WGSL shader for the stress mesh: per-vertex colors, ambient plus one
/// directional light, and a specular highlight.
pub const MESH_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    camera_right: vec4<f32>, // xyz = right, w = point size
    camera_up: vec4<f32>,
    camera_pos: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = uniforms.model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (uniforms.model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = normalize(world_normal);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput, @builtin(front_facing) front_facing: bool) -> @location(0) vec4<f32> {
    let light_dir = normalize(vec3<f32>(1.0, 1.0, 1.0));
    // Double-sided: flip the normal on back faces.
    var normal = normalize(in.world_normal);
    if (!front_facing) {
        normal = -normal;
    }
    let ambient = 0.25;
    let diffuse = max(dot(normal, light_dir), 0.0);
    let view_dir = normalize(uniforms.camera_pos.xyz - in.world_pos);
    let reflect_dir = reflect(-light_dir, normal);
    let specular = pow(max(dot(view_dir, reflect_dir), 0.0), 50.0) * 0.35;
    let lighting = ambient + diffuse * 0.75;
    return vec4<f32>(in.color * lighting + vec3<f32>(specular), 1.0);
}
"#;

/// WGSL shader for unlit line primitives (wireframe overlay, field lines).
pub const FLAT_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    camera_right: vec4<f32>,
    camera_up: vec4<f32>,
    camera_pos: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct LineVertex {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct LineOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_flat(vertex: LineVertex) -> LineOutput {
    var out: LineOutput;
    out.clip_position = uniforms.view_proj * uniforms.model * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_flat(in: LineOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

/// WGSL shader for the particle point cloud. Each instance is one
/// particle expanded into a camera-facing quad of point-size extent.
/// Tint matches the scene style constant 0x0088ff at 0.6 opacity.
pub const POINT_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    camera_right: vec4<f32>, // xyz = right, w = point size
    camera_up: vec4<f32>,
    camera_pos: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct CornerInput {
    @location(0) corner: vec2<f32>,
};

struct InstanceInput {
    @location(1) center: vec3<f32>,
};

struct PointOutput {
    @builtin(position) clip_position: vec4<f32>,
};

@vertex
fn vs_point(vertex: CornerInput, instance: InstanceInput) -> PointOutput {
    let size = uniforms.camera_right.w;
    let center = (uniforms.model * vec4<f32>(instance.center, 1.0)).xyz;
    let offset = uniforms.camera_right.xyz * vertex.corner.x * size
        + uniforms.camera_up.xyz * vertex.corner.y * size;

    var out: PointOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(center + offset, 1.0);
    return out;
}

@fragment
fn fs_point(_in: PointOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(0.0, 0.53333336, 1.0, 0.6);
}
"#;
