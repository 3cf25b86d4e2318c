//! Harbor application state
//!
//! Everything the event loop mutates apart from the window and GPU: the world,
//! the orbit camera and its controller, and the status message shown in the
//! title bar. Kept free of winit windows so it can be driven from tests.

use std::path::Path;

use shipdock_core::World;
use shipdock_input::CameraController;
use shipdock_render::{build_frame, FramePlan, FrameSettings, OrbitCamera, Viewport};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::config::AppConfig;
use crate::input::{InputAction, InputMapper};
use crate::scene::{HarborBuilder, SceneError};
use crate::systems::SimulationSystem;

/// What the event loop has to do after the state changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// Nothing visible changed
    None,
    /// Draw a new frame
    Redraw,
    /// A new boat was loaded; its mesh must be uploaded
    BoatReplaced,
    /// The animation started; ticks must be scheduled
    AnimationStarted,
    ToggleFullscreen,
    Exit,
}

/// Scene, camera, and status of the running application
pub struct HarborState {
    builder: HarborBuilder,
    world: World,
    camera: OrbitCamera,
    controller: CameraController,
    settings: FrameSettings,
    status: Option<String>,
}

impl HarborState {
    /// Build the world described by `config`
    pub fn new(config: &AppConfig) -> Result<Self, SceneError> {
        let builder = HarborBuilder::from_config(config);
        let world = builder.build()?;
        log::info!("Loaded boat '{}'", world.model().name());
        Ok(Self::with_world(config, builder, world))
    }

    /// Wrap an already built world
    pub fn with_world(config: &AppConfig, builder: HarborBuilder, world: World) -> Self {
        Self {
            builder,
            world,
            camera: config.camera.orbit_camera(),
            controller: config.camera.controller(),
            settings: config.frame_settings(),
            status: None,
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> StateChange {
        if let Some(action) = InputMapper::map_keyboard(key, state, self.world.is_animating()) {
            return self.apply(action);
        }
        if self.controller.process_keyboard(&mut self.camera, key, state) {
            StateChange::Redraw
        } else {
            StateChange::None
        }
    }

    /// Perform a mapped action
    pub fn apply(&mut self, action: InputAction) -> StateChange {
        let changed = match action {
            InputAction::Exit => return StateChange::Exit,
            InputAction::ToggleFullscreen => return StateChange::ToggleFullscreen,
            InputAction::ReloadModel => {
                let path = self.builder.model_path().to_path_buf();
                return self.load_model(path);
            }
            InputAction::StartAnimation => {
                if self.world.start_animation() {
                    self.controller.set_enabled(false);
                    return StateChange::AnimationStarted;
                }
                false
            }
            InputAction::RampUp => self.world.adjust_ramp(1),
            InputAction::RampDown => self.world.adjust_ramp(-1),
            InputAction::PillarsUp => self.world.adjust_pillars(1),
            InputAction::PillarsDown => self.world.adjust_pillars(-1),
            InputAction::CycleLight => self.world.cycle_light(),
            InputAction::ResetCamera => {
                self.camera.reset();
                true
            }
        };

        if changed {
            StateChange::Redraw
        } else {
            StateChange::None
        }
    }

    /// Replace the world with one built around the boat at `path`
    ///
    /// On failure the current world stays and the error becomes the status
    /// message. Ignored while the animation runs.
    pub fn load_model<P: AsRef<Path>>(&mut self, path: P) -> StateChange {
        if self.world.is_animating() {
            return StateChange::None;
        }

        let builder = self.builder.clone().with_model_path(path.as_ref());
        match builder.build() {
            Ok(world) => {
                log::info!(
                    "Loaded boat '{}' ({} triangles)",
                    world.model().name(),
                    world.model().mesh().triangle_count()
                );
                self.builder = builder;
                self.world = world;
                self.camera.reset();
                self.status = None;
                StateChange::BoatReplaced
            }
            Err(e) => {
                log::error!("Failed to load boat from {}: {}", path.as_ref().display(), e);
                self.status = Some(e.to_string());
                StateChange::Redraw
            }
        }
    }

    /// Re-enable the camera keys once the sequencer stopped itself
    pub fn sync_controls(&mut self) {
        self.controller.set_enabled(!self.world.is_animating());
    }

    /// Compose the next frame
    pub fn frame(&self, viewport: Viewport) -> FramePlan {
        build_frame(&self.camera, &self.world, viewport, &self.settings)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    /// Last load error, if the most recent load failed
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn phase_label(&self) -> &'static str {
        SimulationSystem::phase_label(&self.world)
    }
}
