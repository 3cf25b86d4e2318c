//! Integration tests for the harbor world
//!
//! These tests drive a complete World the way the app does:
//! 1. A boat model is loaded from an OBJ file on disk
//! 2. The live controls shape the scene
//! 3. The animation runs tick by tick and hands the controls back

use shipdock_core::{
    AnimationEvent, AnimationPhase, AssetError, BoatModel, ControlFlags, HarborLayout, Vec3,
    World,
};

const HULL_OBJ: &str = "\
o hull
v -200 40 -40
v 200 40 -40
v 200 40 40
v -200 40 40
v -160 0 0
v 160 0 0
f 1 2 3 4
f 1 5 6 2
f 4 3 6 5
";

fn write_temp_obj(tag: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "shipdock_{}_{}.obj",
        tag,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

// ==================== Model Loading Tests ====================

#[test]
fn test_world_from_obj_file() {
    let path = write_temp_obj("world", HULL_OBJ);
    let world = World::new(&path, HarborLayout::default()).unwrap();

    // quad top + two quads down to the keel
    assert_eq!(world.model().mesh().triangle_count(), 6);
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_model_reports_not_found() {
    let result = World::new("does/not/exist.obj", HarborLayout::default());
    match result {
        Err(AssetError::NotFound(path)) => assert!(path.ends_with("exist.obj")),
        Err(other) => panic!("Expected NotFound, got {}", other),
        Ok(_) => panic!("Expected an error for a missing model"),
    }
}

#[test]
fn test_file_without_faces_reports_empty() {
    let path = write_temp_obj("empty", "v 0 0 0\n");
    let result = BoatModel::load(&path);
    assert!(matches!(result, Err(AssetError::Empty(_))));
    std::fs::remove_file(&path).ok();
}

// ==================== Animation Tests ====================

fn world_with_cube() -> World {
    World::with_model(
        BoatModel::from_mesh("cube", shipdock_math::unit_cube()),
        HarborLayout::default(),
    )
}

/// A full run visits every phase in order and leaves the world idle
#[test]
fn test_full_run_phase_order() {
    let mut world = world_with_cube();
    assert!(world.start_animation());

    let mut visited = vec![world.animation().phase()];
    loop {
        match world.tick_animation() {
            AnimationEvent::Advanced(phase) if visited.last() != Some(&phase) => visited.push(phase),
            AnimationEvent::Advanced(_) => {}
            AnimationEvent::Finished => break,
            AnimationEvent::Idle => panic!("world went idle without finishing"),
        }
    }

    assert_eq!(
        visited,
        vec![
            AnimationPhase::RetractBoat,
            AnimationPhase::LowerRamp,
            AnimationPhase::RockBoat,
            AnimationPhase::SubmergeBoat,
            AnimationPhase::Reset,
        ]
    );
    assert!(!world.is_animating());
    assert_eq!(world.tick_animation(), AnimationEvent::Idle);
}

/// The boat ends the sinking phase below the water plane
#[test]
fn test_boat_sinks_below_water() {
    let mut world = world_with_cube();
    world.start_animation();
    while world.animation().phase() != AnimationPhase::Reset {
        world.tick_animation();
    }
    let keel = world.boat_transform().transform_point(Vec3::ZERO);
    assert!(keel.y < world.layout().water.height, "boat at {:?}", keel);
}

/// Controls stay locked for the whole run and come back afterwards
#[test]
fn test_controls_locked_during_run() {
    let mut world = world_with_cube();
    world.adjust_pillars(2);
    world.start_animation();

    let mut ticks = 0;
    while world.is_animating() {
        assert_eq!(world.controls(), ControlFlags::empty());
        assert!(!world.adjust_pillars(1));
        world.tick_animation();
        ticks += 1;
    }

    assert!(ticks > 0);
    assert_eq!(world.pillar_offset(), 20.0);
    assert_eq!(world.controls(), ControlFlags::all());
    assert!(world.adjust_pillars(1));
}
