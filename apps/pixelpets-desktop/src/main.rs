mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::AppConfig;
use egui::Context as EguiContext;
use pixelpets_common::ViewerConfig;
use pixelpets_input::{CameraAction, HeldActions, KeyBindings};
use pixelpets_render::{FrameView, OrbitCamera, Projection, Scene};
use pixelpets_render_wgpu::{FrameUniforms, GpuVertexBuffer, WgpuRenderer};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Longest frame step applied to the camera, so a stall does not fling it.
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Parser)]
#[command(name = "pixelpets-desktop", about = "Orbit a scene of voxel animals")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene configuration (.yaml, .yml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Window-independent application state.
struct AppState {
    config: ViewerConfig,
    keys: KeyBindings,
    camera: OrbitCamera,
    projection: Projection,
    held: HeldActions,
    show_stats: bool,
    last_frame: Instant,
    fps: f32,
}

impl AppState {
    fn new(config: AppConfig) -> Self {
        let AppConfig { viewer, keys } = config;
        Self {
            camera: OrbitCamera::from_config(&viewer.camera),
            projection: Projection::from_config(
                &viewer.camera,
                viewer.window.width,
                viewer.window.height,
            ),
            config: viewer,
            keys,
            held: HeldActions::new(),
            show_stats: true,
            last_frame: Instant::now(),
            fps: 0.0,
        }
    }

    fn update(&mut self, dt: f32) {
        for action in self.held.iter() {
            self.camera.apply(action, dt);
        }
        if dt > 0.0 {
            self.fps = self.fps * 0.9 + (1.0 / dt) * 0.1;
        }
    }

    /// Returns true when the key asks the app to quit.
    fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if let Some(action) = self.keys.action_for_key(&format!("{key:?}")) {
            self.held.set(action, pressed);
            return false;
        }
        if !pressed {
            return false;
        }
        match key {
            KeyCode::F1 => {
                self.show_stats = !self.show_stats;
                false
            }
            KeyCode::Escape => true,
            _ => false,
        }
    }

    fn frame_view(&self) -> FrameView {
        FrameView::new(&self.camera, &self.projection)
    }

    fn draw_ui(&self, ctx: &EguiContext, scene: &Scene<GpuVertexBuffer>) {
        if !self.show_stats {
            return;
        }
        egui::Window::new("Stats")
            .default_pos([10.0, 10.0])
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("{:.0} fps", self.fps));
                ui.separator();

                let eye = self.camera.position();
                ui.heading("Camera");
                ui.label(format!("radius: {:.2}", self.camera.radius()));
                ui.label(format!(
                    "yaw: {:.1}  pitch: {:.1}",
                    self.camera.yaw(),
                    self.camera.pitch()
                ));
                ui.label(format!("eye: ({:.2}, {:.2}, {:.2})", eye.x, eye.y, eye.z));
                ui.separator();

                ui.heading("Models");
                egui::Grid::new("models").striped(true).show(ui, |ui| {
                    for object in scene.objects() {
                        ui.label(object.model.label());
                        ui.label(format!("{} verts", object.model.vertex_count()));
                        ui.label(format!("{} tris", object.model.triangle_count()));
                        ui.end_row();
                    }
                });
                ui.label(format!("total: {} vertices", scene.vertex_count()));
                ui.separator();

                let key = |action| {
                    self.keys
                        .key_for(action)
                        .unwrap_or("-")
                        .trim_start_matches("Key")
                };
                ui.small(format!(
                    "{}/{}: orbit | {}/{}: tilt | {}/{}: zoom | F1: stats | Esc: quit",
                    key(CameraAction::RotateLeft),
                    key(CameraAction::RotateRight),
                    key(CameraAction::RotateUp),
                    key(CameraAction::RotateDown),
                    key(CameraAction::ZoomIn),
                    key(CameraAction::ZoomOut)
                ));
            });
    }
}

/// Everything that exists only while a window is open.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    scene: Scene<GpuVertexBuffer>,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Gpu {
    fn new(
        event_loop: &ActiveEventLoop,
        state: &mut AppState,
        egui_ctx: &EguiContext,
    ) -> Result<Self> {
        let window_config = &state.config.window;
        let attrs = Window::default_attributes()
            .with_title(window_config.title.as_str())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height));
        let window = Arc::new(event_loop.create_window(attrs).context("creating window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("creating surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("pixelpets_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("creating device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        state.projection.set_viewport(size.width, size.height);

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        let mut renderer =
            WgpuRenderer::new(device, queue, surface_format, config.width, config.height);
        renderer.set_clear_color(state.config.window.clear_color);

        let mut scene = Scene::from_config(&state.config.scene);
        let uploaded = scene.finalize(&mut renderer);
        tracing::info!("uploaded {uploaded} of {} models", scene.len());

        Ok(Self {
            window,
            surface,
            config,
            renderer,
            scene,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(self.renderer.device(), &self.config);
        self.renderer.resize(self.config.width, self.config.height);
    }
}

struct GpuApp {
    state: AppState,
    egui_ctx: EguiContext,
    gpu: Option<Gpu>,
}

impl GpuApp {
    fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
            egui_ctx: EguiContext::default(),
            gpu: None,
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = (now - self.state.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.state.last_frame = now;
        self.state.update(dt);

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(gpu.renderer.device(), &gpu.config);
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

        gpu.scene.draw(&mut gpu.renderer);
        let lights = &self.state.config.lighting.lights;
        let frame = FrameUniforms::new(&self.state.frame_view(), lights);
        gpu.renderer.render_frame(&view, &frame);

        let raw_input = gpu.egui_winit.take_egui_input(&gpu.window);
        let state = &self.state;
        let scene = &gpu.scene;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            state.draw_ui(ctx, scene);
        });

        gpu.egui_winit
            .handle_platform_output(&gpu.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let device = gpu.renderer.device();
        let queue = gpu.renderer.queue();
        for (id, image_delta) in &full_output.textures_delta.set {
            gpu.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        gpu.egui_renderer.update_buffers(
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
            gpu.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(id);
        }

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match Gpu::new(event_loop, &mut self.state, &self.egui_ctx) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                tracing::error!("failed to start renderer: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gpu) = &mut self.gpu {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
                self.state
                    .projection
                    .set_viewport(new_size.width, new_size.height);
            }
            WindowEvent::Focused(false) => {
                self.state.held.clear();
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
                if self
                    .state
                    .handle_key(key, key_state == ElementState::Pressed)
                {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    tracing::info!(
        "pixelpets-desktop starting ({} creatures)",
        config.viewer.scene.creatures.len()
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
