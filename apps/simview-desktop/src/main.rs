use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use simview_render_wgpu::{OrbitCamera, SceneRenderer};
use simview_result::{DemoKind, SimulationResult, demo_result, load_result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "simview-desktop", about = "Interactive simulation result viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Result payload (JSON) to show on startup
    #[arg(long)]
    result: Option<PathBuf>,

    /// Seed for demo payloads
    #[arg(long, default_value = "42")]
    seed: u64,
}

/// Application state outside the GPU objects.
struct AppState {
    camera: OrbitCamera,
    /// Result queued for the next tick. A newer result simply replaces
    /// an older queued one; the render loop applies at most one per tick.
    pending_result: Option<SimulationResult>,
    status: String,
    active_kind: Option<&'static str>,
    show_inspector: bool,
    idle_spin: bool,
    demo_seed: u64,
    // Input state
    orbiting: bool,
    panning: bool,
}

impl AppState {
    fn new(seed: u64) -> Self {
        Self {
            camera: OrbitCamera::default(),
            pending_result: None,
            status: "no result loaded".into(),
            active_kind: None,
            show_inspector: true,
            idle_spin: true,
            demo_seed: seed,
            orbiting: false,
            panning: false,
        }
    }

    fn queue_result(&mut self, result: SimulationResult) {
        self.status = result.summary();
        self.pending_result = Some(result);
    }

    fn queue_demo(&mut self, kind: DemoKind) {
        self.queue_result(demo_result(kind, kind.default_count(), self.demo_seed));
        self.demo_seed = self.demo_seed.wrapping_add(1);
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !pressed {
            return;
        }
        match key {
            KeyCode::Digit1 => self.queue_demo(DemoKind::StressAnalysis),
            KeyCode::Digit2 => self.queue_demo(DemoKind::FluidDynamics),
            KeyCode::Digit3 => self.queue_demo(DemoKind::Electromagnetic),
            KeyCode::KeyR => self.camera.reset(),
            KeyCode::F1 => self.show_inspector = !self.show_inspector,
            _ => {}
        }
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_inspector {
            return;
        }

        egui::SidePanel::left("inspector")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("simview");
                ui.separator();
                ui.label(&self.status);
                ui.label(format!(
                    "drawable: {}",
                    self.active_kind.unwrap_or("none")
                ));
                let eye = self.camera.eye();
                ui.label(format!(
                    "camera: ({:.1}, {:.1}, {:.1})",
                    eye.x, eye.y, eye.z
                ));
                ui.separator();

                ui.heading("Demo results");
                if ui.button("Stress analysis (1)").clicked() {
                    self.queue_demo(DemoKind::StressAnalysis);
                }
                if ui.button("Fluid dynamics (2)").clicked() {
                    self.queue_demo(DemoKind::FluidDynamics);
                }
                if ui.button("Electromagnetic (3)").clicked() {
                    self.queue_demo(DemoKind::Electromagnetic);
                }

                ui.separator();
                ui.checkbox(&mut self.idle_spin, "Idle rotation");
                if ui.button("Reset camera (R)").clicked() {
                    self.camera.reset();
                }

                ui.separator();
                ui.small("F1: Toggle panel | LMB: Orbit | RMB: Pan | Wheel: Zoom");
            });
    }
}

struct ViewerApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<SceneRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl ViewerApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }

    /// Dispose the renderer and stop the loop.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(renderer) = &mut self.renderer {
            renderer.dispose();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("simview")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("simview_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.set_viewport(size.width, size.height);

        let renderer = SceneRenderer::new(&device, surface_format, size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.set_viewport(config.width, config.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput { button, state, .. } => match button {
                MouseButton::Left => {
                    self.state.orbiting = state == ElementState::Pressed;
                }
                MouseButton::Right => {
                    self.state.panning = state == ElementState::Pressed;
                }
                _ => {}
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 60.0,
                };
                self.state.camera.zoom(steps);
            }
            WindowEvent::RedrawRequested => {
                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                // Apply at most one queued result per tick; the previous
                // drawable is released before the new one attaches.
                if let Some(result) = self.state.pending_result.take() {
                    if let Some(renderer) = &mut self.renderer {
                        match renderer.render_result(device, &result, &mut self.state.camera) {
                            Ok(()) => {
                                self.state.active_kind = renderer.drawable_kind();
                            }
                            Err(e) => {
                                self.state.status = format!("error: {e}");
                                tracing::error!("failed to map result: {e}");
                            }
                        }
                    }
                }

                if self.state.idle_spin {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.advance_idle_spin();
                    }
                }
                self.state.camera.update();

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(device, queue, &view, &self.state.camera);
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.orbiting {
                self.state.camera.rotate(delta.0 as f32, delta.1 as f32);
            } else if self.state.panning {
                self.state.camera.pan(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("simview-desktop starting");

    let mut state = AppState::new(cli.seed);
    if let Some(path) = &cli.result {
        let result = load_result(path)?;
        tracing::info!("loaded result: {}", result.summary());
        state.queue_result(result);
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(state);
    event_loop.run_app(&mut app)?;

    Ok(())
}
