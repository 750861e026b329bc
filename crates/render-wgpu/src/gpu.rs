use crate::camera::OrbitCamera;
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use simview_result::SimulationResult;
use simview_scene::{Drawable, LineVertex, MapError, MeshVertex, POINT_SIZE, map_result};
use wgpu::util::DeviceExt;

/// Idle rotation applied to the active drawable, radians per render tick.
pub const IDLE_SPIN_STEP: f32 = 0.002;

/// Neutral light-gray background (0xf0f0f0).
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.941,
    g: 0.941,
    b: 0.941,
    a: 1.0,
};

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    camera_right: [f32; 4],
    camera_up: [f32; 4],
    camera_pos: [f32; 4],
}

/// Billboard quad corner, expanded per particle instance.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct QuadCorner {
    corner: [f32; 2],
}

/// GPU-resident form of the active drawable.
enum GpuDrawable {
    Mesh {
        vertex_buffer: wgpu::Buffer,
        index_buffer: wgpu::Buffer,
        index_count: u32,
        edge_buffer: wgpu::Buffer,
        edge_vertex_count: u32,
    },
    Points {
        instance_buffer: wgpu::Buffer,
        instance_count: u32,
    },
    Polyline {
        vertex_buffer: wgpu::Buffer,
        vertex_count: u32,
    },
}

impl GpuDrawable {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Mesh { .. } => "mesh",
            Self::Points { .. } => "points",
            Self::Polyline { .. } => "polyline",
        }
    }

    /// Explicitly destroy all buffers. Safe to call once per drawable;
    /// the renderer drops the value immediately after.
    fn release(&self) {
        match self {
            Self::Mesh {
                vertex_buffer,
                index_buffer,
                edge_buffer,
                ..
            } => {
                vertex_buffer.destroy();
                index_buffer.destroy();
                edge_buffer.destroy();
            }
            Self::Points {
                instance_buffer, ..
            } => instance_buffer.destroy(),
            Self::Polyline { vertex_buffer, .. } => vertex_buffer.destroy(),
        }
    }
}

/// wgpu scene renderer: owns the single active drawable and the pipelines
/// for the three primitive kinds.
///
/// One instance per window surface. All methods are no-ops after
/// [`SceneRenderer::dispose`].
pub struct SceneRenderer {
    mesh_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    strip_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    quad_vertex_buffer: wgpu::Buffer,
    quad_index_buffer: wgpu::Buffer,
    drawable: Option<GpuDrawable>,
    spin: f32,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
    disposed: bool,
}

impl SceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                model: Mat4::IDENTITY.to_cols_array_2d(),
                camera_right: [1.0, 0.0, 0.0, POINT_SIZE],
                camera_up: [0.0, 1.0, 0.0, 0.0],
                camera_pos: [0.0, 0.0, 5.0, 1.0],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::MESH_SHADER.into()),
        });
        let flat_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("flat_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::FLAT_SHADER.into()),
        });
        let point_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("point_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::POINT_SHADER.into()),
        });

        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &mesh_shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                        2 => Float32x3,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &mesh_shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Double-sided material: no culling.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(depth_state(true)),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let line_vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![
                0 => Float32x3,
                1 => Float32x4,
            ],
        };

        let line_pipeline = flat_pipeline(
            device,
            &pipeline_layout,
            &flat_shader,
            line_vertex_layout.clone(),
            surface_format,
            wgpu::PrimitiveTopology::LineList,
            "line_pipeline",
        );
        let strip_pipeline = flat_pipeline(
            device,
            &pipeline_layout,
            &flat_shader,
            line_vertex_layout,
            surface_format,
            wgpu::PrimitiveTopology::LineStrip,
            "strip_pipeline",
        );

        let point_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("point_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &point_shader,
                entry_point: Some("vs_point"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<QuadCorner>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x2,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            1 => Float32x3,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &point_shader,
                entry_point: Some("fs_point"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            // Transparent particles depth-test but skip depth writes.
            depth_stencil: Some(depth_state(false)),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Unit quad corners, scaled by point size in the shader.
        let corners = [
            QuadCorner { corner: [-0.5, -0.5] },
            QuadCorner { corner: [0.5, -0.5] },
            QuadCorner { corner: [0.5, 0.5] },
            QuadCorner { corner: [-0.5, 0.5] },
        ];
        let quad_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vertex_buffer"),
            contents: bytemuck::cast_slice(&corners),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_indices: [u16; 6] = [0, 1, 2, 2, 3, 0];
        let quad_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_index_buffer"),
            contents: bytemuck::cast_slice(&quad_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let depth_texture = Self::create_depth_texture(device, width, height);

        Self {
            mesh_pipeline,
            line_pipeline,
            strip_pipeline,
            point_pipeline,
            uniform_buffer,
            uniform_bind_group,
            quad_vertex_buffer,
            quad_index_buffer,
            drawable: None,
            spin: 0.0,
            depth_texture,
            surface_format,
            disposed: false,
        }
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Kind of the active drawable, if any.
    pub fn drawable_kind(&self) -> Option<&'static str> {
        self.drawable.as_ref().map(GpuDrawable::kind_name)
    }

    /// Map a result and make it the sole render target.
    ///
    /// The previous drawable's buffers are destroyed before the new ones
    /// attach, so repeated calls never leak. Unknown result kinds leave
    /// the current drawable untouched. Stress analysis results also snap
    /// the camera back to its default framing.
    pub fn render_result(
        &mut self,
        device: &wgpu::Device,
        result: &SimulationResult,
        camera: &mut OrbitCamera,
    ) -> Result<(), MapError> {
        if self.disposed {
            return Ok(());
        }
        let Some(mapped) = map_result(result)? else {
            return Ok(());
        };

        self.release_drawable();
        self.drawable = Some(upload_drawable(device, &mapped.drawable));
        self.spin = 0.0;
        if mapped.reset_camera {
            camera.reset();
        }
        tracing::debug!(kind = mapped.drawable.kind_name(), "drawable replaced");
        Ok(())
    }

    /// Advance the idle rotation by one tick.
    pub fn advance_idle_spin(&mut self) {
        if self.drawable.is_some() {
            self.spin += IDLE_SPIN_STEP;
        }
    }

    /// Rebuild the depth buffer for a new surface size. Idempotent.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.disposed {
            return;
        }
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Release the active drawable and refuse further work. Idempotent;
    /// render/resize after disposal are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.release_drawable();
        self.disposed = true;
        tracing::debug!("scene renderer disposed");
    }

    fn release_drawable(&mut self) {
        if let Some(old) = self.drawable.take() {
            old.release();
        }
    }

    /// Draw one frame: clear, then the active drawable if there is one.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &OrbitCamera,
    ) {
        if self.disposed {
            return;
        }

        let right = camera.right();
        let up = camera.up();
        let eye = camera.eye();
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_projection().to_cols_array_2d(),
                model: Mat4::from_rotation_y(self.spin).to_cols_array_2d(),
                camera_right: [right.x, right.y, right.z, POINT_SIZE],
                camera_up: [up.x, up.y, up.z, 0.0],
                camera_pos: [eye.x, eye.y, eye.z, 1.0],
            }),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_bind_group(0, &self.uniform_bind_group, &[]);

            match &self.drawable {
                Some(GpuDrawable::Mesh {
                    vertex_buffer,
                    index_buffer,
                    index_count,
                    edge_buffer,
                    edge_vertex_count,
                }) => {
                    pass.set_pipeline(&self.mesh_pipeline);
                    pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                    pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                    pass.draw_indexed(0..*index_count, 0, 0..1);

                    pass.set_pipeline(&self.line_pipeline);
                    pass.set_vertex_buffer(0, edge_buffer.slice(..));
                    pass.draw(0..*edge_vertex_count, 0..1);
                }
                Some(GpuDrawable::Points {
                    instance_buffer,
                    instance_count,
                }) => {
                    pass.set_pipeline(&self.point_pipeline);
                    pass.set_vertex_buffer(0, self.quad_vertex_buffer.slice(..));
                    pass.set_vertex_buffer(1, instance_buffer.slice(..));
                    pass.set_index_buffer(
                        self.quad_index_buffer.slice(..),
                        wgpu::IndexFormat::Uint16,
                    );
                    pass.draw_indexed(0..6, 0, 0..*instance_count);
                }
                Some(GpuDrawable::Polyline {
                    vertex_buffer,
                    vertex_count,
                }) => {
                    pass.set_pipeline(&self.strip_pipeline);
                    pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                    pass.draw(0..*vertex_count, 0..1);
                }
                None => {}
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

fn depth_state(depth_write_enabled: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: wgpu::TextureFormat::Depth32Float,
        depth_write_enabled,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: Default::default(),
        bias: Default::default(),
    }
}

fn flat_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    vertex_layout: wgpu::VertexBufferLayout<'_>,
    surface_format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_flat"),
            compilation_options: Default::default(),
            buffers: &[vertex_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_flat"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            ..Default::default()
        },
        depth_stencil: Some(depth_state(true)),
        multisample: Default::default(),
        multiview: None,
        cache: None,
    })
}

fn upload_drawable(device: &wgpu::Device, drawable: &Drawable) -> GpuDrawable {
    match drawable {
        Drawable::Mesh {
            vertices,
            indices,
            edges,
        } => GpuDrawable::Mesh {
            vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_vertex_buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_index_buffer"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            }),
            index_count: indices.len() as u32,
            edge_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_edge_buffer"),
                contents: bytemuck::cast_slice(edges),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            edge_vertex_count: edges.len() as u32,
        },
        Drawable::Points { positions } => GpuDrawable::Points {
            instance_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("point_instance_buffer"),
                contents: bytemuck::cast_slice(positions),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            instance_count: positions.len() as u32,
        },
        Drawable::Polyline { vertices } => GpuDrawable::Polyline {
            vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("polyline_vertex_buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            vertex_count: vertices.len() as u32,
        },
    }
}
