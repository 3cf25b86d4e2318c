//! Scripted docking animation
//!
//! The boat backs away from the dock, the ramp tilts, the boat rocks from side
//! to side, sinks, and finally everything snaps back to where it started.
//!
//! [`advance`] is the whole state machine as a pure function; the
//! [`AnimationSequencer`] wraps it with the running flag that a fixed-step
//! timer polls.

use serde::{Serialize, Deserialize};

use crate::Transform;

/// Animation phases, visited strictly in declaration order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    #[default]
    Idle,
    /// Boat slides away from the dock along -X
    RetractBoat,
    /// Ramp tilts to its lowered angle
    LowerRamp,
    /// Boat rolls left and right a fixed number of times
    RockBoat,
    /// Boat sinks below the water line
    SubmergeBoat,
    /// Boat and ramp return to their starting pose
    Reset,
}

impl AnimationPhase {
    /// Short label for status text
    pub fn label(&self) -> &'static str {
        match self {
            AnimationPhase::Idle => "idle",
            AnimationPhase::RetractBoat => "retracting boat",
            AnimationPhase::LowerRamp => "lowering ramp",
            AnimationPhase::RockBoat => "rocking boat",
            AnimationPhase::SubmergeBoat => "submerging boat",
            AnimationPhase::Reset => "resetting",
        }
    }
}

/// Boat offset from its resting placement
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoatPose {
    pub x: f32,
    pub y: f32,
    /// Roll about the X axis, in degrees
    pub rotation: f32,
}

impl BoatPose {
    /// Model transform of the pose
    pub fn transform(&self) -> Transform {
        Transform::identity()
            .translate(self.x, self.y, 0.0)
            .rotate_x(self.rotation)
    }
}

/// Per-tick increments and phase limits
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationStep {
    pub retract_speed: f32,
    pub retract_to: f32,
    pub ramp_speed: f32,
    pub ramp_to: f32,
    pub rock_speed: f32,
    pub rock_amplitude: f32,
    /// Number of side-to-side swings (each reaching one side counts once)
    pub rock_swings: u32,
    pub submerge_speed: f32,
    pub submerge_to: f32,
}

impl Default for AnimationStep {
    fn default() -> Self {
        Self {
            retract_speed: 10.0,
            retract_to: -400.0,
            ramp_speed: 1.0,
            ramp_to: 30.0,
            rock_speed: 1.5,
            rock_amplitude: 15.0,
            rock_swings: 6,
            submerge_speed: 5.0,
            submerge_to: -250.0,
        }
    }
}

impl AnimationStep {
    /// Check that every phase can reach its target: speeds positive, targets
    /// finite, amplitude not negative
    pub fn validate(&self) -> Result<(), String> {
        let speeds = [
            ("retract_speed", self.retract_speed),
            ("ramp_speed", self.ramp_speed),
            ("rock_speed", self.rock_speed),
            ("submerge_speed", self.submerge_speed),
        ];
        for (name, speed) in speeds {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, speed));
            }
        }

        let targets = [
            ("retract_to", self.retract_to),
            ("ramp_to", self.ramp_to),
            ("submerge_to", self.submerge_to),
        ];
        for (name, target) in targets {
            if !target.is_finite() {
                return Err(format!("{} must be finite, got {}", name, target));
            }
        }

        if !self.rock_amplitude.is_finite() || self.rock_amplitude < 0.0 {
            return Err(format!(
                "rock_amplitude must be zero or more, got {}",
                self.rock_amplitude
            ));
        }
        Ok(())
    }
}

/// Everything the animation mutates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub phase: AnimationPhase,
    pub boat: BoatPose,
    /// Current ramp tilt in degrees
    pub ramp_angle: f32,
    /// Ramp tilt restored by the reset phase
    pub rest_ramp_angle: f32,
    /// Swings completed in the rocking phase
    pub swings: u32,
    /// +1 rolling toward +amplitude, -1 toward -amplitude
    pub rock_direction: f32,
}

impl AnimationState {
    /// Idle state with the ramp at `ramp_angle`
    pub fn idle(ramp_angle: f32) -> Self {
        Self {
            phase: AnimationPhase::Idle,
            boat: BoatPose::default(),
            ramp_angle,
            rest_ramp_angle: ramp_angle,
            swings: 0,
            rock_direction: 1.0,
        }
    }

    /// First state of a run starting from `ramp_angle`
    pub fn started(ramp_angle: f32) -> Self {
        Self {
            phase: AnimationPhase::RetractBoat,
            ..Self::idle(ramp_angle)
        }
    }
}

/// Move `value` toward `target` by at most `speed`
///
/// Returns the new value and whether the target was reached.
fn approach(value: f32, target: f32, speed: f32) -> (f32, bool) {
    let delta = target - value;
    if delta.abs() <= speed {
        (target, true)
    } else {
        (value + speed * delta.signum(), false)
    }
}

/// Advance the animation by one tick
pub fn advance(state: AnimationState, step: &AnimationStep) -> AnimationState {
    let mut next = state;

    match state.phase {
        AnimationPhase::Idle => {}
        AnimationPhase::RetractBoat => {
            let (x, done) = approach(state.boat.x, step.retract_to, step.retract_speed);
            next.boat.x = x;
            if done {
                next.phase = AnimationPhase::LowerRamp;
            }
        }
        AnimationPhase::LowerRamp => {
            let (angle, done) = approach(state.ramp_angle, step.ramp_to, step.ramp_speed);
            next.ramp_angle = angle;
            if done {
                next.phase = AnimationPhase::RockBoat;
                next.swings = 0;
                next.rock_direction = 1.0;
            }
        }
        AnimationPhase::RockBoat => {
            if state.swings >= step.rock_swings {
                // Settle back upright before sinking
                let (rotation, done) = approach(state.boat.rotation, 0.0, step.rock_speed);
                next.boat.rotation = rotation;
                if done {
                    next.phase = AnimationPhase::SubmergeBoat;
                }
            } else {
                let side = step.rock_amplitude * state.rock_direction;
                let (rotation, reached) = approach(state.boat.rotation, side, step.rock_speed);
                next.boat.rotation = rotation;
                if reached {
                    next.swings += 1;
                    next.rock_direction = -state.rock_direction;
                }
            }
        }
        AnimationPhase::SubmergeBoat => {
            let (y, done) = approach(state.boat.y, step.submerge_to, step.submerge_speed);
            next.boat.y = y;
            if done {
                next.phase = AnimationPhase::Reset;
            }
        }
        AnimationPhase::Reset => {
            next = AnimationState::idle(state.rest_ramp_angle);
        }
    }

    next
}

/// What a tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    /// Nothing is running
    Idle,
    /// The animation moved and is now in this phase
    Advanced(AnimationPhase),
    /// The reset phase completed; the sequencer stopped itself
    Finished,
}

/// Drives [`advance`] from a timer
#[derive(Clone, Debug)]
pub struct AnimationSequencer {
    state: AnimationState,
    step: AnimationStep,
    running: bool,
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new(AnimationStep::default())
    }
}

impl AnimationSequencer {
    pub fn new(step: AnimationStep) -> Self {
        Self {
            state: AnimationState::idle(0.0),
            step,
            running: false,
        }
    }

    /// Start a run with the ramp currently at `ramp_angle`
    ///
    /// Returns false (and changes nothing) when a run is already in progress.
    pub fn start(&mut self, ramp_angle: f32) -> bool {
        if self.running {
            return false;
        }
        self.state = AnimationState::started(ramp_angle);
        self.running = true;
        log::info!("Animation started (ramp at {} degrees)", ramp_angle);
        true
    }

    /// Advance one tick
    pub fn tick(&mut self) -> AnimationEvent {
        if !self.running {
            return AnimationEvent::Idle;
        }

        let previous = self.state.phase;
        self.state = advance(self.state, &self.step);

        if self.state.phase == AnimationPhase::Idle {
            self.running = false;
            log::info!("Animation finished");
            return AnimationEvent::Finished;
        }
        if self.state.phase != previous {
            log::debug!("Animation phase: {:?} -> {:?}", previous, self.state.phase);
        }
        AnimationEvent::Advanced(self.state.phase)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.state.phase
    }

    #[inline]
    pub fn step(&self) -> &AnimationStep {
        &self.step
    }

    /// Boat pose as a model transform
    pub fn boat_transform(&self) -> Transform {
        self.state.boat.transform()
    }

    /// Ramp tilt driven by the animation
    #[inline]
    pub fn ramp_angle(&self) -> f32 {
        self.state.ramp_angle
    }
}
