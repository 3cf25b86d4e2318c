//! Shipdock - Harbor Scene Viewer
//!
//! Renders a dock with a boat that can be sent through a scripted docking and
//! sinking sequence.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use shipdock::config::AppConfig;
use shipdock::state::{HarborState, StateChange};
use shipdock::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    state: HarborState,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
}

impl App {
    fn new(config: AppConfig, state: HarborState) -> Self {
        let simulation = SimulationSystem::from_millis(
            config.animation.tick_ms,
            config.animation.max_ticks_per_frame,
        );
        Self {
            config,
            state,
            window: None,
            render: None,
            simulation,
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            window.update_title(self.state.phase_label(), self.state.status());
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Carry out what a state change asks of the window and GPU
    fn apply_change(&mut self, event_loop: &ActiveEventLoop, change: StateChange) {
        match change {
            StateChange::None => return,
            StateChange::Exit => {
                event_loop.exit();
                return;
            }
            StateChange::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            StateChange::BoatReplaced => {
                if let Some(render) = &mut self.render {
                    render.replace_boat(self.state.world().model().mesh());
                }
            }
            StateChange::AnimationStarted => {
                self.simulation.restart();
            }
            StateChange::Redraw => {}
        }
        self.update_title();
        self.request_redraw();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = self.simulation.update(self.state.world_mut());
        if result.finished {
            self.state.sync_controls();
        }
        if result.phase_changed {
            self.update_title();
        }

        let Some(render) = &mut self.render else {
            return;
        };

        let plan = self.state.frame(render.viewport());
        match render.render_frame(&plan) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                render.recover_surface();
                self.request_redraw();
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
            self.state.world().model().mesh(),
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialize GPU: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render.size();
        log::info!("Window ready ({}x{})", width, height);

        self.window = Some(window);
        self.render = Some(render);
        self.update_title();
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let change = self.state.handle_key(key, event.state);
                    self.apply_change(event_loop, change);
                }
            }

            WindowEvent::DroppedFile(path) => {
                let is_obj = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("obj"));
                if is_obj {
                    let change = self.state.load_model(&path);
                    self.apply_change(event_loop, change);
                } else {
                    log::warn!("Ignoring dropped file {} (not an .obj)", path.display());
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.world().is_animating() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(
                Instant::now() + self.simulation.time_until_next_tick(),
            ));
            self.request_redraw();
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

fn main() {
    let config = AppConfig::load();

    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Shipdock");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let state = match HarborState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to build harbor from {}: {}", config.model.path, e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, state);
    event_loop.run_app(&mut app).expect("Event loop error");
}
