use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use anatomy_viewer::cli::Cli;
use anatomy_viewer::config::ViewerConfig;
use anatomy_viewer::frame::FrameClock;
use anatomy_viewer::gestures::{GestureEvent, GestureRecognizer};
use anatomy_viewer::interaction::{resolve_interaction_target, Highlighter};
use anatomy_viewer::loaders;
use anatomy_viewer::picking::pick_screen;
use anatomy_viewer::renderer::MeshRenderer;
use anatomy_viewer::rig::CameraRig;
use anatomy_viewer::scene::{create_figure_scene, SceneGraph};
use anatomy_viewer::window::Window;

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

struct App {
    cli: Cli,
    config: ViewerConfig,
    window: Option<Window>,
    renderer: Option<MeshRenderer>,
    rig: CameraRig,
    scene: SceneGraph,
    gestures: GestureRecognizer,
    highlighter: Highlighter,
    clock: FrameClock,
}

impl App {
    fn new(cli: Cli) -> Self {
        let config = match &cli.config {
            Some(path) => match ViewerConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{:#}; using default configuration", e);
                    ViewerConfig::default()
                }
            },
            None => ViewerConfig::default(),
        };

        let scene = match &cli.model {
            Some(path) => match loaders::load_scene(path, &config) {
                Ok(scene) => scene,
                Err(e) => {
                    log::warn!("{:#}; falling back to the built-in figure", e);
                    create_figure_scene()
                }
            },
            None => create_figure_scene(),
        };

        let rig = CameraRig::new(config.rig);

        Self {
            cli,
            config,
            window: None,
            renderer: None,
            rig,
            scene,
            gestures: GestureRecognizer::new(),
            highlighter: Highlighter::new(),
            clock: FrameClock::new(),
        }
    }

    fn dispatch(&mut self, events: Vec<GestureEvent>) {
        let Some(size) = self.window.as_ref().map(|w| w.inner_size()) else {
            return;
        };
        let (width, height) = (size.width.max(1) as f32, size.height.max(1) as f32);

        for event in events {
            match event {
                GestureEvent::Orbit { tx, ty, touches } => {
                    let rebase = self.rig.apply_orbit(tx, ty, width, height, touches);
                    self.gestures.rebase_orbit(rebase);
                }
                GestureEvent::Pan { tx, ty, touches } => {
                    let rebase = self.rig.apply_pan(tx, ty, touches);
                    self.gestures.rebase_pan(rebase);
                }
                GestureEvent::Pinch { velocity, touches } => {
                    self.rig.apply_pinch(velocity, touches);
                }
                GestureEvent::Tap { x, y } => self.handle_tap(x, y, width, height),
                GestureEvent::DoubleTap => self.rig.reset(),
            }
        }
    }

    /// A tap on an interactive part toggles its highlight and overlay; a tap
    /// on other geometry focuses the camera there; a miss does nothing.
    fn handle_tap(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let view_proj = self.rig.view_projection(width / height);
        let Some(hit) = pick_screen(&self.scene, x, y, width, height, &view_proj) else {
            return;
        };

        let labels = self.config.labels();
        match resolve_interaction_target(&self.scene, hit.node, &labels) {
            Some(target) => {
                let name: Option<String> = self.scene.name_of(target).map(str::to_string);
                let blurb: Option<String> = name
                    .as_deref()
                    .and_then(|n| self.config.blurb_for(n))
                    .map(str::to_string);
                self.highlighter
                    .toggle(&mut self.scene, target, blurb.as_deref());
            }
            None => self.rig.snap_to(hit.point.x, hit.point.y),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                winit::window::Window::default_attributes()
                    .with_title("Anatomy Viewer")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let mut renderer =
                match pollster::block_on(MeshRenderer::new(window.clone(), !self.cli.no_ui)) {
                    Ok(renderer) => renderer,
                    Err(e) => {
                        log::error!("Failed to initialize renderer: {:#}", e);
                        event_loop.exit();
                        return;
                    }
                };
            renderer.upload_scene(&self.scene);

            self.window = Some(Window::new(window));
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window.inner(), &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::Touch(touch) => {
                let events = self.gestures.handle_touch(&touch, self.clock.now());
                self.dispatch(events);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let events = self
                    .gestures
                    .handle_cursor_moved(position.x as f32, position.y as f32);
                self.dispatch(events);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let events = self
                    .gestures
                    .handle_mouse_button(button, state, self.clock.now());
                self.dispatch(events);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let events = self.gestures.handle_scroll(&delta);
                self.dispatch(events);
            }
            WindowEvent::RedrawRequested => {
                self.clock.tick();
                self.rig.tick();

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    let overlay = self.highlighter.overlay_text();
                    match window.draw(renderer, &self.rig, &self.scene, overlay, self.clock.fps())
                    {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(window.inner_size());
                        }
                        Err(e) => log::error!("Render error: {}", e),
                    }
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

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!(
        "Controls: drag to orbit, right-drag to pan, scroll to zoom, \
         click to select, double-click to reset"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
