//! HarborBuilder - Declarative world construction
//!
//! Provides a fluent API for assembling the harbor world from its boat model,
//! layout file, and tuning values.

use std::path::{Path, PathBuf};

use shipdock_core::{
    AnimationStep, AssetError, BoatModel, ControlRanges, HarborLayout, LayoutError, LightPalette,
    World,
};

use crate::config::AppConfig;

/// Builder for constructing the harbor [`World`]
///
/// # Example
/// ```ignore
/// let world = HarborBuilder::new("assets/models/boat/boat.obj")
///     .with_layout_file("assets/scenes/harbor.ron")
///     .with_animation_step(AnimationStep::default())
///     .build()?;
/// ```
#[derive(Clone, Debug)]
pub struct HarborBuilder {
    model_path: PathBuf,
    layout_path: Option<PathBuf>,
    layout: Option<HarborLayout>,
    step: AnimationStep,
    ranges: ControlRanges,
    palette: LightPalette,
}

impl HarborBuilder {
    /// Create a builder for the boat at `model_path`
    pub fn new<P: AsRef<Path>>(model_path: P) -> Self {
        Self {
            model_path: model_path.as_ref().to_path_buf(),
            layout_path: None,
            layout: None,
            step: AnimationStep::default(),
            ranges: ControlRanges::default(),
            palette: LightPalette::default(),
        }
    }

    /// Create a builder from every relevant config section
    pub fn from_config(config: &AppConfig) -> Self {
        let mut builder = Self::new(&config.model.path)
            .with_animation_step(config.animation.step.clone())
            .with_ranges(config.controls.ranges.clone())
            .with_palette(config.controls.palette());
        if let Some(path) = &config.model.layout_path {
            builder = builder.with_layout_file(path);
        }
        builder
    }

    /// Load another boat with the same settings
    pub fn with_model_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.model_path = path.as_ref().to_path_buf();
        self
    }

    /// Read the layout from a RON file at build time
    pub fn with_layout_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.layout_path = Some(path.as_ref().to_path_buf());
        self.layout = None;
        self
    }

    /// Use an in-memory layout
    pub fn with_layout(mut self, layout: HarborLayout) -> Self {
        self.layout = Some(layout);
        self.layout_path = None;
        self
    }

    pub fn with_animation_step(mut self, step: AnimationStep) -> Self {
        self.step = step;
        self
    }

    pub fn with_ranges(mut self, ranges: ControlRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn with_palette(mut self, palette: LightPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Path of the boat the builder loads
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Resolve the layout: file first, then the in-memory one, then defaults
    pub fn layout(&self) -> Result<HarborLayout, SceneError> {
        match (&self.layout_path, &self.layout) {
            (Some(path), _) => {
                let layout = HarborLayout::load(path)?;
                log::info!("Loaded harbor layout from {}", path.display());
                Ok(layout)
            }
            (None, Some(layout)) => Ok(layout.clone()),
            (None, None) => Ok(HarborLayout::default()),
        }
    }

    /// Load the boat and build the world
    pub fn build(&self) -> Result<World, SceneError> {
        let layout = self.layout()?;
        let model = BoatModel::load(&self.model_path)?;
        Ok(self.build_with_model(model, layout))
    }

    /// Build the world around an already loaded boat
    pub fn build_with_model(&self, model: BoatModel, layout: HarborLayout) -> World {
        World::with_model(model, layout)
            .with_animation_step(self.step.clone())
            .with_ranges(self.ranges.clone())
            .with_palette(self.palette.clone())
    }
}

/// Error building the harbor world
#[derive(Debug)]
pub enum SceneError {
    /// The layout file could not be read or parsed
    Layout(LayoutError),
    /// The boat model could not be loaded
    Asset(AssetError),
}

impl From<LayoutError> for SceneError {
    fn from(e: LayoutError) -> Self {
        SceneError::Layout(e)
    }
}

impl From<AssetError> for SceneError {
    fn from(e: AssetError) -> Self {
        SceneError::Asset(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Layout(e) => write!(f, "Layout error: {}", e),
            SceneError::Asset(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Layout(e) => Some(e),
            SceneError::Asset(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipdock_math::unit_cube;

    #[test]
    fn test_missing_model_is_not_found() {
        let result = HarborBuilder::new("does/not/exist.obj").build();
        match result {
            Err(SceneError::Asset(AssetError::NotFound(path))) => {
                assert!(path.contains("exist.obj"), "got {}", path)
            }
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_layout_file_is_layout_error() {
        let result = HarborBuilder::new("does/not/exist.obj")
            .with_layout_file("does/not/exist.ron")
            .build();
        assert!(matches!(result, Err(SceneError::Layout(LayoutError::Io(_)))));
    }

    #[test]
    fn test_default_layout() {
        let builder = HarborBuilder::new("boat.obj");
        assert_eq!(builder.layout().unwrap(), HarborLayout::default());
    }

    #[test]
    fn test_in_memory_layout_replaces_file() {
        let mut layout = HarborLayout::default();
        layout.initial_ramp_angle = 20.0;
        let builder = HarborBuilder::new("boat.obj")
            .with_layout_file("does/not/exist.ron")
            .with_layout(layout.clone());
        assert_eq!(builder.layout().unwrap(), layout);
    }

    #[test]
    fn test_build_with_model_applies_settings() {
        let ranges = ControlRanges {
            ramp_max: 15.0,
            ..ControlRanges::default()
        };
        let step = AnimationStep {
            rock_swings: 2,
            ..AnimationStep::default()
        };
        let world = HarborBuilder::new("boat.obj")
            .with_ranges(ranges)
            .with_animation_step(step)
            .with_palette(LightPalette::new(vec![[0.0, 0.0, 1.0]]))
            .build_with_model(BoatModel::from_mesh("cube", unit_cube()), HarborLayout::default());

        // default ramp angle 10 stays inside the narrower range
        assert_eq!(world.ramp_angle(), 10.0);
        assert_eq!(world.ranges().ramp_max, 15.0);
        assert_eq!(world.animation().step().rock_swings, 2);
        assert_eq!(world.light().color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_from_config() {
        let mut config = AppConfig::default();
        config.model.path = "boats/other.obj".to_string();
        config.model.layout_path = Some("harbor.ron".to_string());
        let builder = HarborBuilder::from_config(&config);
        assert_eq!(builder.model_path(), Path::new("boats/other.obj"));
        assert_eq!(builder.layout_path.as_deref(), Some(Path::new("harbor.ron")));
    }

    #[test]
    fn test_scene_error_display() {
        let err = SceneError::from(AssetError::NotFound("boat.obj".to_string()));
        assert_eq!(err.to_string(), "Asset not found: boat.obj");
    }
}
