//! Integration tests for the shipped harbor assets
//!
//! Builds the world from `config/default.toml` exactly as the binary does.

use shipdock::config::AppConfig;
use shipdock::scene::HarborBuilder;
use shipdock::state::{HarborState, StateChange};
use shipdock_core::{AnimationPhase, HarborLayout};
use shipdock_render::Viewport;
use serial_test::serial;

#[test]
fn test_shipped_layout_matches_defaults() {
    let layout = HarborLayout::load("assets/scenes/harbor.ron").unwrap();
    assert_eq!(layout, HarborLayout::default());
}

#[test]
fn test_shipped_boat_sits_on_the_water() {
    let world = HarborBuilder::new("assets/models/boat/boat.obj").build().unwrap();
    let (min, max) = world.model().mesh().bounds().unwrap();
    let water = world.layout().water.height;
    assert!((min.y - water).abs() < 1.0, "got keel at {}", min.y);
    assert!(max.y > water);
    assert!(max.x - min.x > 300.0, "got length {}", max.x - min.x);
}

#[test]
#[serial]
fn test_default_config_builds_and_animates() {
    let config = AppConfig::load().unwrap();
    let mut state = HarborState::new(&config).unwrap();
    assert!(state.status().is_none());

    let change = state.apply(shipdock::input::InputAction::StartAnimation);
    assert_eq!(change, StateChange::AnimationStarted);

    let mut phases = vec![state.world().animation().phase()];
    while state.world().is_animating() {
        state.world_mut().tick_animation();
        let phase = state.world().animation().phase();
        if phases.last() != Some(&phase) {
            phases.push(phase);
        }
        let plan = state.frame(Viewport::new(1024, 768));
        assert_eq!(plan.draws.len(), 14);
    }
    state.sync_controls();

    assert_eq!(
        phases,
        vec![
            AnimationPhase::RetractBoat,
            AnimationPhase::LowerRamp,
            AnimationPhase::RockBoat,
            AnimationPhase::SubmergeBoat,
            AnimationPhase::Reset,
            AnimationPhase::Idle,
        ]
    );
    assert!(state.controller().is_enabled());
}
