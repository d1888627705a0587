use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use gridray_common::Pose;
use gridray_input::IntentSnapshot;
use gridray_kernel::{GridMap, MotionTuning, Session};
use gridray_render::{FrameRenderer, RenderConfig};
use gridray_render_wgpu::StripRenderer;
use gridray_timing::{FrameTimer, PacingConfig, TickScale};

/// Pacing rate used by the `--slow-motion` debug flag.
const SLOW_MOTION_HZ: f32 = 6.0;

/// Frames between frame-stat log lines.
const STATS_INTERVAL: u64 = 120;

#[derive(Parser)]
#[command(name = "gridray-desktop", about = "Windowed gridray renderer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON tuning file overriding the default configuration
    #[arg(long)]
    config: Option<String>,

    /// Pace frames at the debug slow-motion rate
    #[arg(long)]
    slow_motion: bool,
}

/// Optional JSON tuning file: any subset of fields, defaults fill the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    motion: MotionTuning,
    render: RenderConfig,
    pacing: PacingConfig,
}

fn load_config(path: Option<&str>) -> Result<FileConfig> {
    match path {
        Some(p) => {
            let text =
                std::fs::read_to_string(p).with_context(|| format!("reading config file {p}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config file {p}"))
        }
        None => Ok(FileConfig::default()),
    }
}

/// Flatten the held-key set into this frame's intent snapshot.
fn intent_from_keys(keys: &HashSet<KeyCode>) -> IntentSnapshot {
    IntentSnapshot {
        turn_left: keys.contains(&KeyCode::ArrowLeft),
        turn_right: keys.contains(&KeyCode::ArrowRight),
        look_up: keys.contains(&KeyCode::ArrowUp),
        look_down: keys.contains(&KeyCode::ArrowDown),
        move_forward: keys.contains(&KeyCode::KeyW),
        move_back: keys.contains(&KeyCode::KeyS),
        strafe_left: keys.contains(&KeyCode::KeyA),
        strafe_right: keys.contains(&KeyCode::KeyD),
        sprint: keys.contains(&KeyCode::ShiftLeft),
        exit: keys.contains(&KeyCode::Escape),
    }
}

struct App {
    session: Session,
    renderer: FrameRenderer,
    pacing: PacingConfig,
    tick_scale: TickScale,
    keys_held: HashSet<KeyCode>,
    last_frame: Instant,
    frame_timer: FrameTimer,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    surface_config: Option<wgpu::SurfaceConfiguration>,
    strip_renderer: Option<StripRenderer>,
}

impl App {
    fn new(session: Session, renderer: FrameRenderer, pacing: PacingConfig) -> Self {
        Self {
            session,
            renderer,
            pacing,
            tick_scale: TickScale::default(),
            keys_held: HashSet::new(),
            last_frame: Instant::now(),
            frame_timer: FrameTimer::new(STATS_INTERVAL as usize),
            window: None,
            surface: None,
            device: None,
            queue: None,
            surface_config: None,
            strip_renderer: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let config = self.renderer.config();
        let attrs = Window::default_attributes()
            .with_title("GridRay")
            .with_inner_size(PhysicalSize::new(config.screen_width, config.screen_height));
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
                label: Some("gridray_device"),
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

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let strip_renderer = StripRenderer::new(
            &device,
            surface_format,
            size.width,
            size.height,
            self.renderer.config().fov_degrees,
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.surface_config = Some(surface_config);
        self.strip_renderer = Some(strip_renderer);
        self.last_frame = Instant::now();

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
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(queue), Some(config)) = (
                    &self.surface,
                    &self.device,
                    &self.queue,
                    &mut self.surface_config,
                ) {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    if let Some(strips) = &self.strip_renderer {
                        strips.resize(queue, config.width, config.height);
                    }
                    // The projection anchors follow the window extent.
                    let mut render_config = *self.renderer.config();
                    render_config.screen_width = config.width;
                    render_config.screen_height = config.height;
                    match FrameRenderer::new(render_config) {
                        Ok(renderer) => self.renderer = renderer,
                        Err(e) => tracing::error!("resize rejected: {e}"),
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
                if key_state == ElementState::Pressed {
                    self.keys_held.insert(key);
                } else {
                    self.keys_held.remove(&key);
                }
            }
            WindowEvent::RedrawRequested => {
                let frame_start = Instant::now();
                let dt = (frame_start - self.last_frame).min(Duration::from_millis(100));
                self.last_frame = frame_start;

                let intent = intent_from_keys(&self.keys_held);
                if intent.exit {
                    event_loop.exit();
                    return;
                }

                self.session.advance(&intent, self.tick_scale.dt_ticks(dt));

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.surface_config {
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

                if let Some(strips) = &self.strip_renderer {
                    let pose: Pose = self.session.pose();
                    strips.render(
                        device,
                        queue,
                        &view,
                        self.renderer.config().column_width(),
                        self.renderer.render_frame(&pose, self.session.grid()),
                    );
                }

                output.present();

                self.frame_timer.record(dt);
                if self.session.frame() % STATS_INTERVAL == 0 {
                    tracing::debug!(stats = %self.frame_timer.summary(), "frame stats");
                }

                // Explicit pacing wait; the slow-motion override paces here.
                let budget = self.pacing.frame_budget();
                let spent = frame_start.elapsed();
                if budget > spent {
                    std::thread::sleep(budget - spent);
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
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

    let config = load_config(cli.config.as_deref())?;
    let mut pacing = config.pacing;
    if cli.slow_motion {
        pacing.slow_motion_hz = Some(SLOW_MOTION_HZ);
    }

    let session = Session::with_tuning(GridMap::demo(), Pose::at(2.0, 2.0), config.motion)?;
    let renderer = FrameRenderer::new(config.render)?;

    tracing::info!(
        fov = renderer.config().fov_degrees,
        pacing_hz = pacing.effective_hz(),
        "gridray-desktop starting"
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(session, renderer, pacing);
    event_loop.run_app(&mut app)?;

    Ok(())
}
