//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SHIP_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use shipdock_core::{AnimationStep, ControlRanges, LightPalette};
use shipdock_input::CameraController;
use shipdock_render::{FrameSettings, OrbitCamera};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Boat model and harbor layout files
    #[serde(default)]
    pub model: ModelConfig,
    /// Animation timing
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Live control ranges and reflector palette
    #[serde(default)]
    pub controls: ControlsConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Text overlay
    #[serde(default)]
    pub overlay: OverlayConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SHIP_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SHIP_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SHIP_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the animation and live controls cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.animation
            .step
            .validate()
            .map_err(|e| ConfigError::invalid("animation.step", e))?;
        self.controls
            .ranges
            .validate()
            .map_err(|e| ConfigError::invalid("controls.ranges", e))?;
        Ok(())
    }

    /// Settings handed to the frame builder
    pub fn frame_settings(&self) -> FrameSettings {
        FrameSettings {
            fov_degrees: self.camera.fov,
            near: self.camera.near,
            far: self.camera.far,
            light_dir: self.rendering.light_dir,
            ambient_strength: self.rendering.ambient_strength,
            diffuse_strength: self.rendering.diffuse_strength,
            reflector_strength: self.rendering.reflector_strength,
            overlay_lines: self.overlay.lines.clone(),
            overlay_color: self.overlay.color,
            overlay_enabled: self.overlay.enabled,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Shipdock - Harbor Scene".to_string(),
            width: 1024,
            height: 768,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Orbit camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Starting pitch in degrees
    pub rotation_x: f32,
    /// Starting yaw in degrees
    pub rotation_y: f32,
    /// Starting distance from the pivot
    pub distance: f32,
    pub pitch_step: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    pub yaw_step: f32,
    pub zoom_step: f32,
    pub distance_min: f32,
    pub distance_max: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 1.0,
            far: 20000.0,
            rotation_x: 10.0,
            rotation_y: 0.0,
            distance: 3500.0,
            pitch_step: 5.0,
            pitch_min: 5.0,
            pitch_max: 60.0,
            yaw_step: 5.0,
            zoom_step: 700.0,
            distance_min: 700.0,
            distance_max: 6300.0,
        }
    }
}

impl CameraConfig {
    /// Camera at the configured starting pose
    pub fn orbit_camera(&self) -> OrbitCamera {
        OrbitCamera::new(self.rotation_x, self.rotation_y, self.distance)
    }

    /// Keyboard controller with the configured steps and limits
    pub fn controller(&self) -> CameraController {
        CameraController::new()
            .with_pitch(self.pitch_step, self.pitch_min, self.pitch_max)
            .with_yaw_step(self.yaw_step)
            .with_zoom(self.zoom_step, self.distance_min, self.distance_max)
    }
}

/// Boat model and layout file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// OBJ file loaded at start-up and on reload
    pub path: String,
    /// Optional RON harbor layout; built-in defaults when unset
    pub layout_path: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "assets/models/boat/boat.obj".to_string(),
            layout_path: None,
        }
    }
}

/// Animation timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Milliseconds between animation ticks
    pub tick_ms: u64,
    /// Most ticks replayed in a single frame after a stall
    pub max_ticks_per_frame: u32,
    /// Per-tick increments and phase targets
    pub step: AnimationStep,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 20,
            max_ticks_per_frame: 10,
            step: AnimationStep::default(),
        }
    }
}

/// Live control configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub ranges: ControlRanges,
    /// Reflector colors cycled with L; empty keeps the built-in palette
    pub palette: Vec<[f32; 3]>,
}

impl ControlsConfig {
    pub fn palette(&self) -> LightPalette {
        if self.palette.is_empty() {
            LightPalette::default()
        } else {
            LightPalette::new(self.palette.clone())
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Light direction [x, y, z]
    pub light_dir: [f32; 3],
    /// Ambient light strength
    pub ambient_strength: f32,
    /// Diffuse light strength
    pub diffuse_strength: f32,
    /// Strength of the colored reflector
    pub reflector_strength: f32,
    /// Cull back faces (models with inconsistent winding look holed when on)
    pub cull_back_faces: bool,
    /// Side count of the pillar cylinders
    pub cylinder_segments: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            light_dir: [0.3, 1.0, 0.5],
            ambient_strength: 0.35,
            diffuse_strength: 0.5,
            reflector_strength: 0.6,
            cull_back_faces: false,
            cylinder_segments: 24,
        }
    }
}

/// Text overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub enabled: bool,
    pub lines: Vec<String>,
    /// RGBA text color
    pub color: [f32; 4],
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lines: vec![
                "HARBOR SCENE".to_string(),
                "C: DOCK AND SINK".to_string(),
                "F2: RELOAD BOAT".to_string(),
            ],
            color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace), overridden by RUST_LOG
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(section: &str, reason: impl std::fmt::Display) -> Self {
        ConfigError {
            message: format!("invalid [{}]: {}", section, reason),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use shipdock_input::CameraControl;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.animation.tick_ms, 20);
        assert_eq!(config.camera.distance, 3500.0);
        assert!(config.model.layout_path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("tick_ms"));
        assert!(toml.contains("retract_speed"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [camera]
            distance = 2100.0

            [animation.step]
            rock_swings = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.camera.distance, 2100.0);
        assert_eq!(config.camera.fov, 45.0);
        assert_eq!(config.animation.step.rock_swings, 4);
        assert_eq!(config.animation.step.retract_speed, 10.0);
        assert_eq!(config.animation.tick_ms, 20);
    }

    #[test]
    fn test_frame_settings_follow_config() {
        let mut config = AppConfig::default();
        config.camera.fov = 60.0;
        config.overlay.enabled = false;
        let settings = config.frame_settings();
        assert_eq!(settings.fov_degrees, 60.0);
        assert!(!settings.overlay_enabled);
        assert_eq!(settings.overlay_lines, config.overlay.lines);
    }

    #[test]
    fn test_controller_uses_camera_limits() {
        let config = CameraConfig {
            rotation_x: 55.0,
            pitch_max: 58.0,
            ..CameraConfig::default()
        };
        let mut camera = config.orbit_camera();
        let mut controller = config.controller();
        controller.process_keyboard(
            &mut camera,
            winit::keyboard::KeyCode::KeyW,
            winit::event::ElementState::Pressed,
        );
        assert_eq!(camera.rotation_x(), 58.0);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_stalled_animation() {
        let mut config = AppConfig::default();
        config.animation.step.rock_speed = 0.0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("animation.step"), "got {}", err);
        assert!(err.contains("rock_speed"), "got {}", err);
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let mut config = AppConfig::default();
        config.controls.ranges.ramp_min = 50.0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("controls.ranges"), "got {}", err);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let controls = ControlsConfig::default();
        assert_eq!(controls.palette(), LightPalette::default());

        let controls = ControlsConfig {
            palette: vec![[0.0, 1.0, 0.0]],
            ..ControlsConfig::default()
        };
        assert_eq!(controls.palette().current(), [0.0, 1.0, 0.0]);
    }
}
