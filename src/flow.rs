//! Flow control and the application event loop.
//!
//! # User-facing types
//!
//! - [`FrameLoop`] is the `Running -> Stopped` state machine driving one
//!   iteration at a time
//! - [`Frame`] is what an iteration updates and renders
//! - [`run`] opens the window and loops until the window is closed
//!
//! # Lifecycle
//!
//! Every iteration does, strictly in sequence on one thread:
//! 1. Drain the pending window events; a close request stops the loop
//! 2. Advance the animation by the time since the previous iteration
//! 3. Render and present
//!
//! The iteration that sees the close request still finishes. After it nothing
//! is updated or rendered again.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    config::SceneConfig,
    context::{Context, InitContext},
    scene::Scene,
    time::TickClock,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// The only input the loop reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopEvent {
    Quit,
    Ignored,
}

impl From<&WindowEvent> for LoopEvent {
    fn from(event: &WindowEvent) -> Self {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => LoopEvent::Quit,
            _ => LoopEvent::Ignored,
        }
    }
}

/// One update plus one render per loop iteration.
pub trait Frame {
    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f32);

    /// Draw the current state and present it.
    fn render(&mut self) -> Result<(), wgpu::SurfaceError>;
}

#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    clock: TickClock,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            clock: TickClock::new(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Time since the loop was created, for [`FrameLoop::iterate`].
    pub fn ticks(&self) -> instant::Duration {
        self.clock.ticks()
    }

    /// Process input, update, render. Does nothing once stopped.
    pub fn iterate<F: Frame>(
        &mut self,
        events: impl IntoIterator<Item = LoopEvent>,
        ticks: instant::Duration,
        frame: &mut F,
    ) -> Result<LoopState, wgpu::SurfaceError> {
        if !self.is_running() {
            return Ok(self.state);
        }
        for event in events {
            if event == LoopEvent::Quit {
                self.state = LoopState::Stopped;
            }
        }
        let dt = self.clock.delta(ticks);
        frame.update(dt);
        frame.render()?;
        Ok(self.state)
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state bundle: GPU context and the scene drawn with it.
#[derive(Debug)]
pub struct AppState {
    pub ctx: Context,
    pub scene: Scene,
}

impl AppState {
    pub async fn new(window: Arc<Window>, config: &SceneConfig) -> anyhow::Result<Self> {
        let ctx = Context::new(window, config).await?;
        let scene = Scene::new(&InitContext::from(&ctx), config).await?;
        Ok(Self { ctx, scene })
    }

    fn get_surface_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.ctx.surface.get_current_texture()
    }
}

impl Frame for AppState {
    fn update(&mut self, dt: f32) {
        self.scene.update(&self.ctx.queue, dt);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.get_surface_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            self.scene.draw(&mut render_pass);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: SceneConfig,
    state: Option<AppState>,
    frame_loop: FrameLoop,
    pending: Vec<LoopEvent>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: SceneConfig) -> anyhow::Result<Self> {
        Ok(Self {
            async_runtime: tokio::runtime::Runtime::new()?,
            config,
            state: None,
            frame_loop: FrameLoop::new(),
            pending: Vec::new(),
            error: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.frame_loop.stop();
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || !self.frame_loop.is_running() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };
        centre_on_monitor(&window);

        match self
            .async_runtime
            .block_on(AppState::new(window, &self.config))
        {
            Ok(state) => {
                // The clock starts with the first frame, not with the window.
                self.frame_loop = FrameLoop::new();
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            if let Some(state) = &mut self.state {
                state.ctx.resize(size.width, size.height);
            }
        }
        self.pending.push(LoopEvent::from(&event));
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = &mut self.state else {
            return;
        };
        event_loop.set_control_flow(ControlFlow::Poll);

        let ticks = self.frame_loop.ticks();
        match self.frame_loop.iterate(self.pending.drain(..), ticks, state) {
            Ok(LoopState::Running) => (),
            Ok(LoopState::Stopped) => {
                log::info!("quit requested, leaving the loop");
                event_loop.exit();
            }
            // Reconfigure the surface if it's lost or outdated
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost or outdated, reconfiguring");
                let size = state.ctx.window().inner_size();
                state.ctx.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("out of GPU memory"));
            }
            Err(e) => {
                log::error!("Unable to render {}", e);
            }
        }
    }
}

fn centre_on_monitor(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        return;
    };
    let screen = monitor.size();
    let size = window.outer_size();
    let origin = monitor.position();
    let x = origin.x + (screen.width as i32 - size.width as i32) / 2;
    let y = origin.y + (screen.height as i32 - size.height as i32) / 2;
    window.set_outer_position(PhysicalPosition::new(x, y));
}

/// Open the window, load every asset and loop until the window is closed.
///
/// Asset and device failures come back as errors; nothing is retried.
pub fn run(config: SceneConfig) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config)?;

    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
