//! Harbor world
//!
//! The World owns every piece of mutable scene state: the loaded boat, the
//! live control values, the reflector light and the animation sequencer.

use std::path::Path;

use crate::{
    AnimationEvent, AnimationSequencer, AnimationStep, AssetError, BoatModel, ControlFlags,
    ControlRanges, HarborLayout, LightPalette, ReflectorLight, Transform,
};

/// The harbor scene
pub struct World {
    layout: HarborLayout,
    model: BoatModel,
    ranges: ControlRanges,
    /// Ramp tilt set through the live control (degrees)
    ramp_angle: f32,
    /// Pillar lift set through the live control
    pillar_offset: f32,
    light: ReflectorLight,
    palette: LightPalette,
    animation: AnimationSequencer,
    controls: ControlFlags,
}

impl World {
    /// Create a world, loading the boat from an OBJ file
    pub fn new<P: AsRef<Path>>(model_path: P, layout: HarborLayout) -> Result<Self, AssetError> {
        let model = BoatModel::load(model_path)?;
        Ok(Self::with_model(model, layout))
    }

    /// Create a world around an already loaded boat
    pub fn with_model(model: BoatModel, layout: HarborLayout) -> Self {
        let ranges = ControlRanges::default();
        let ramp_angle = ranges.clamp_ramp(layout.initial_ramp_angle);
        Self {
            layout,
            model,
            ramp_angle,
            pillar_offset: ranges.clamp_pillar(0.0),
            ranges,
            light: ReflectorLight::default(),
            palette: LightPalette::default(),
            animation: AnimationSequencer::default(),
            controls: ControlFlags::all(),
        }
    }

    /// Replace the animation increments
    pub fn with_animation_step(mut self, step: AnimationStep) -> Self {
        self.animation = AnimationSequencer::new(step);
        self
    }

    /// Replace the control ranges, re-clamping the current values
    pub fn with_ranges(mut self, ranges: ControlRanges) -> Self {
        self.ramp_angle = ranges.clamp_ramp(self.ramp_angle);
        self.pillar_offset = ranges.clamp_pillar(self.pillar_offset);
        self.ranges = ranges;
        self
    }

    /// Replace the reflector color palette
    pub fn with_palette(mut self, palette: LightPalette) -> Self {
        self.light.set_color(palette.current());
        self.palette = palette;
        self
    }

    // --- live controls ---

    /// Tilt the ramp by a number of control steps
    ///
    /// Returns false when the ramp control is locked.
    pub fn adjust_ramp(&mut self, steps: i32) -> bool {
        let angle = self.ramp_angle + steps as f32 * self.ranges.ramp_step;
        self.set_ramp_angle(angle)
    }

    /// Set the ramp tilt directly (clamped)
    pub fn set_ramp_angle(&mut self, degrees: f32) -> bool {
        if !self.controls.contains(ControlFlags::RAMP) {
            return false;
        }
        self.ramp_angle = self.ranges.clamp_ramp(degrees);
        log::debug!("Ramp angle: {}", self.ramp_angle);
        true
    }

    /// Raise or lower the pillars by a number of control steps
    pub fn adjust_pillars(&mut self, steps: i32) -> bool {
        let offset = self.pillar_offset + steps as f32 * self.ranges.pillar_step;
        self.set_pillar_offset(offset)
    }

    /// Set the pillar lift directly (clamped)
    pub fn set_pillar_offset(&mut self, offset: f32) -> bool {
        if !self.controls.contains(ControlFlags::PILLARS) {
            return false;
        }
        self.pillar_offset = self.ranges.clamp_pillar(offset);
        log::debug!("Pillar offset: {}", self.pillar_offset);
        true
    }

    /// Switch the reflector to the next palette color
    pub fn cycle_light(&mut self) -> bool {
        if !self.controls.contains(ControlFlags::LIGHT) {
            return false;
        }
        let color = self.palette.next_color();
        self.light.set_color(color);
        log::debug!("Reflector color: {:?}", color);
        true
    }

    /// Set the reflector color from 0-255 channels
    pub fn set_light_color_rgb8(&mut self, r: u8, g: u8, b: u8) -> bool {
        if !self.controls.contains(ControlFlags::LIGHT) {
            return false;
        }
        self.light.set_color_rgb8(r, g, b);
        true
    }

    // --- animation ---

    /// Start the docking animation and lock the live controls
    ///
    /// Does nothing while a run is already in progress.
    pub fn start_animation(&mut self) -> bool {
        if !self.animation.start(self.ramp_angle) {
            return false;
        }
        self.controls = ControlFlags::empty();
        true
    }

    /// Advance the animation by one tick
    ///
    /// Unlocks the live controls once the run finishes.
    pub fn tick_animation(&mut self) -> AnimationEvent {
        let event = self.animation.tick();
        if event == AnimationEvent::Finished {
            self.ramp_angle = self.animation.ramp_angle();
            self.controls = ControlFlags::all();
        }
        event
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    // --- accessors ---

    pub fn layout(&self) -> &HarborLayout {
        &self.layout
    }

    pub fn model(&self) -> &BoatModel {
        &self.model
    }

    pub fn light(&self) -> &ReflectorLight {
        &self.light
    }

    pub fn ranges(&self) -> &ControlRanges {
        &self.ranges
    }

    /// Ramp tilt to draw: the animation's value while it runs
    pub fn ramp_angle(&self) -> f32 {
        if self.animation.is_running() {
            self.animation.ramp_angle()
        } else {
            self.ramp_angle
        }
    }

    pub fn pillar_offset(&self) -> f32 {
        self.pillar_offset
    }

    pub fn controls(&self) -> ControlFlags {
        self.controls
    }

    pub fn animation(&self) -> &AnimationSequencer {
        &self.animation
    }

    /// Boat model transform: layout placement composed with the animation pose
    pub fn boat_transform(&self) -> Transform {
        self.layout.boat_transform(&self.animation.boat_transform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnimationPhase, Vec3};

    fn test_world() -> World {
        World::with_model(
            BoatModel::from_mesh("cube", shipdock_math::unit_cube()),
            HarborLayout::default(),
        )
    }

    #[test]
    fn test_defaults() {
        let world = test_world();
        assert_eq!(world.ramp_angle(), 10.0);
        assert_eq!(world.pillar_offset(), 0.0);
        assert_eq!(world.controls(), ControlFlags::all());
        assert_eq!(world.light().color, [1.0, 1.0, 1.0]);
        assert!(!world.is_animating());
    }

    #[test]
    fn test_missing_model_file() {
        let result = World::new("/nonexistent/boat.obj", HarborLayout::default());
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_adjust_ramp_clamps() {
        let mut world = test_world();
        assert!(world.adjust_ramp(1));
        assert_eq!(world.ramp_angle(), 15.0);
        world.adjust_ramp(100);
        assert_eq!(world.ramp_angle(), 45.0);
        world.adjust_ramp(-100);
        assert_eq!(world.ramp_angle(), 0.0);
    }

    #[test]
    fn test_adjust_pillars_clamps() {
        let mut world = test_world();
        world.adjust_pillars(3);
        assert_eq!(world.pillar_offset(), 30.0);
        world.adjust_pillars(10);
        assert_eq!(world.pillar_offset(), 80.0);
    }

    #[test]
    fn test_cycle_light() {
        let mut world = test_world();
        let before = world.light().color;
        assert!(world.cycle_light());
        assert_ne!(world.light().color, before);
    }

    #[test]
    fn test_animation_locks_controls() {
        let mut world = test_world();
        assert!(world.start_animation());
        assert_eq!(world.controls(), ControlFlags::empty());

        assert!(!world.adjust_ramp(1));
        assert!(!world.adjust_pillars(1));
        assert!(!world.cycle_light());
        assert!(!world.set_light_color_rgb8(0, 0, 0));
        assert_eq!(world.pillar_offset(), 0.0);
        assert_eq!(world.light().color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut world = test_world();
        assert!(world.start_animation());
        assert!(!world.start_animation());
    }

    #[test]
    fn test_animation_drives_ramp_and_boat() {
        let mut world = test_world();
        world.start_animation();
        while world.animation().phase() != AnimationPhase::LowerRamp {
            world.tick_animation();
        }
        let boat = world.boat_transform().transform_point(Vec3::ZERO);
        assert_eq!(boat.x, -400.0);

        world.tick_animation();
        assert_eq!(world.ramp_angle(), 11.0);
    }

    #[test]
    fn test_finish_unlocks_and_restores() {
        let mut world = test_world();
        world.adjust_ramp(2);
        world.start_animation();
        while world.tick_animation() != AnimationEvent::Finished {}

        assert!(!world.is_animating());
        assert_eq!(world.controls(), ControlFlags::all());
        assert_eq!(world.ramp_angle(), 20.0);
        assert_eq!(world.boat_transform().transform_point(Vec3::ZERO), Vec3::ZERO);
    }
}
