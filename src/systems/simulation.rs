//! Animation timing system
//!
//! Replays animation ticks at a fixed interval from the redraw loop:
//! - Frame time is accumulated between redraws
//! - Each whole tick interval advances the world's sequencer once
//! - A stalled frame replays at most `max_ticks` ticks

use std::time::{Duration, Instant};
use shipdock_core::{AnimationEvent, AnimationPhase, World};

/// Result of a simulation update
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationResult {
    /// Animation ticks run this frame
    pub ticks: u32,
    /// The phase differs from the one before the update
    pub phase_changed: bool,
    /// The run completed during this update
    pub finished: bool,
}

/// Fixed-step driver for the animation sequencer
pub struct SimulationSystem {
    last_frame: Instant,
    accumulator: Duration,
    tick: Duration,
    max_ticks: u32,
}

impl SimulationSystem {
    /// Create a simulation system ticking every `tick`
    pub fn new(tick: Duration, max_ticks: u32) -> Self {
        Self {
            last_frame: Instant::now(),
            accumulator: Duration::ZERO,
            tick: tick.max(Duration::from_millis(1)),
            max_ticks: max_ticks.max(1),
        }
    }

    /// Create from the configured tick length in milliseconds
    pub fn from_millis(tick_ms: u64, max_ticks: u32) -> Self {
        Self::new(Duration::from_millis(tick_ms), max_ticks)
    }

    /// Forget time spent before now (call when a run starts)
    pub fn restart(&mut self) {
        self.last_frame = Instant::now();
        self.accumulator = Duration::ZERO;
    }

    /// Run the ticks due since the previous update
    pub fn update(&mut self, world: &mut World) -> SimulationResult {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;
        self.advance(world, elapsed)
    }

    /// Run the ticks covered by `elapsed` plus any carried remainder
    pub fn advance(&mut self, world: &mut World, elapsed: Duration) -> SimulationResult {
        let mut result = SimulationResult::default();
        if !world.is_animating() {
            self.accumulator = Duration::ZERO;
            return result;
        }

        let start_phase = world.animation().phase();
        self.accumulator += elapsed;

        while self.accumulator >= self.tick && result.ticks < self.max_ticks {
            self.accumulator -= self.tick;
            result.ticks += 1;
            match world.tick_animation() {
                AnimationEvent::Advanced(_) => {}
                AnimationEvent::Finished => {
                    result.finished = true;
                    self.accumulator = Duration::ZERO;
                    break;
                }
                AnimationEvent::Idle => break,
            }
        }

        // Drop the backlog a stall left behind
        if result.ticks == self.max_ticks {
            self.accumulator = self.accumulator.min(self.tick);
        }

        result.phase_changed = result.finished || world.animation().phase() != start_phase;
        result
    }

    /// Time left until the next tick is due
    pub fn time_until_next_tick(&self) -> Duration {
        self.tick.saturating_sub(self.accumulator)
    }

    /// Current phase label for display
    pub fn phase_label(world: &World) -> &'static str {
        if world.is_animating() {
            world.animation().phase().label()
        } else {
            AnimationPhase::Idle.label()
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::from_millis(20, 10)
    }
}
