//! End-to-end streaming against the standard terrain.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec3;
use terrace_chunk::{ChunkCoord, ChunkGenerator};
use terrace_noise::{HeightField, ScalarField, TerrainParams};
use terrace_world::{StreamingConfig, World, WorldError, coords_in_range};

const RENDER_DISTANCE: f32 = 300.0;

fn standard_world(render_distance: f32) -> World {
    World::from_params(StreamingConfig { render_distance }, &TerrainParams::from_seed(7)).unwrap()
}

fn resident(world: &World) -> BTreeSet<ChunkCoord> {
    world.chunks().map(|c| c.coord()).collect()
}

fn expected(viewer: Vec3, render_distance: f32) -> BTreeSet<ChunkCoord> {
    coords_in_range(viewer, render_distance).into_iter().collect()
}

/// Call `update` like a frame loop until the resident set covers the range.
fn run_until_settled(world: &mut World, viewer: Vec3) {
    let target = expected(viewer, world.config().render_distance);
    let deadline = Instant::now() + Duration::from_secs(30);
    loop {
        world.update(viewer).unwrap();
        if resident(world) == target && !world.is_batch_running() {
            return;
        }
        assert!(Instant::now() < deadline, "world did not settle around {viewer}");
        std::thread::sleep(Duration::from_millis(2));
    }
}

#[test]
fn test_world_converges_to_render_range() {
    let mut world = standard_world(RENDER_DISTANCE);
    let viewer = Vec3::new(0.0, 50.0, 0.0);
    run_until_settled(&mut world, viewer);

    assert_eq!(resident(&world), expected(viewer, RENDER_DISTANCE));
    assert_eq!(world.resident_count(), resident(&world).len(), "duplicate coords");
}

#[test]
fn test_resident_set_respects_range_while_moving() {
    let mut world = standard_world(RENDER_DISTANCE);
    let deadline = Instant::now() + Duration::from_secs(30);
    let mut viewer = Vec3::ZERO;

    for step in 0..200 {
        viewer.x = step as f32 * 7.5;
        viewer.z = -(step as f32) * 3.0;
        world.update(viewer).unwrap();

        for chunk in world.chunks() {
            assert!(
                chunk.coord().planar_distance(viewer) <= RENDER_DISTANCE,
                "chunk {:?} out of range at step {step}",
                chunk.coord()
            );
        }
        assert!(Instant::now() < deadline);
        std::thread::sleep(Duration::from_millis(1));
    }

    run_until_settled(&mut world, viewer);
    assert_eq!(resident(&world), expected(viewer, RENDER_DISTANCE));
}

#[test]
fn test_ground_height_follows_resident_chunks() {
    let mut world = standard_world(RENDER_DISTANCE);
    let viewer = Vec3::new(120.0, 0.0, -40.0);
    run_until_settled(&mut world, viewer);

    for (x, z) in [(120.0, -40.0), (0.0, 0.0), (-75.0, 33.3), (249.0, 10.0)] {
        let coord = ChunkCoord::containing(x, z);
        let chunk = world.chunk(coord).expect("point lies in a resident chunk");
        let from_chunk = chunk.height_at(x, z).unwrap();
        assert_eq!(world.ground_height(Vec3::new(x, 0.0, z)), from_chunk);
    }

    // Far outside the resident set the ground is the water plane.
    assert_eq!(world.ground_height(Vec3::new(50_000.0, 0.0, 50_000.0)), 0.0);
}

#[test]
fn test_surface_tracks_height_field() {
    let params = TerrainParams::from_seed(7);
    let mut world = standard_world(150.0);
    run_until_settled(&mut world, Vec3::ZERO);

    let field = world.generator().height_field();
    // Mesh vertices sample the field exactly.
    for chunk in world.chunks() {
        for vertex in chunk.vertices() {
            let p = vertex.position();
            assert_eq!(p.y, field.height(p.x, p.z));
        }
    }
    assert_eq!(params.decor.seed as u64, world.generator().decor_seed());
}

struct Poisoned;

impl HeightField for Poisoned {
    fn height(&self, x: f32, _z: f32) -> f32 {
        if x > 150.0 { f32::NAN } else { 1.0 }
    }
}

struct Bare;

impl ScalarField for Bare {
    fn value(&self, _x: f32, _z: f32) -> f32 {
        0.0
    }
}

#[test]
fn test_failed_batch_is_reported_and_not_merged() {
    let generator = ChunkGenerator::new(Arc::new(Poisoned), Arc::new(Bare), 0);
    let mut world = World::new(StreamingConfig { render_distance: 250.0 }, generator);

    let deadline = Instant::now() + Duration::from_secs(30);
    let err = loop {
        match world.update(Vec3::ZERO) {
            Ok(_) => {
                assert!(Instant::now() < deadline, "batch failure never surfaced");
                std::thread::sleep(Duration::from_millis(2));
            }
            Err(e) => break e,
        }
    };

    assert!(matches!(err, WorldError::Batch { .. }), "{err}");
    assert_eq!(world.resident_count(), 0, "no chunk of a failed batch is merged");
}

/// Valid terrain near the origin, broken heights beyond x = 500.
struct BrokenEast;

impl HeightField for BrokenEast {
    fn height(&self, x: f32, _z: f32) -> f32 {
        if x > 500.0 { f32::NAN } else { 4.0 }
    }
}

#[test]
fn test_failed_batch_leaves_resident_set_untouched() {
    let generator = ChunkGenerator::new(Arc::new(BrokenEast), Arc::new(Bare), 0);
    let mut world = World::new(StreamingConfig { render_distance: 250.0 }, generator);
    run_until_settled(&mut world, Vec3::ZERO);

    // Moving east requests chunk (5, 0), which cannot be built.
    let east = Vec3::new(300.0, 0.0, 0.0);
    let report = world.update(east).unwrap();
    assert!(report.dispatched > 0);
    let deadline = Instant::now() + Duration::from_secs(30);
    while world.is_batch_running() {
        assert!(Instant::now() < deadline, "batch never finished");
        std::thread::sleep(Duration::from_millis(2));
    }

    // Moving west would evict chunks; the failure must surface first.
    let west = Vec3::new(-100.0, 0.0, 0.0);
    let before = resident(&world);
    let err = world.update(west).unwrap_err();
    assert!(
        matches!(err, WorldError::Batch { coord, .. } if coord == ChunkCoord::new(5, 0)),
        "{err}"
    );
    assert_eq!(resident(&world), before, "resident set changed on a failed update");

    // The next update performs and reports the eviction.
    let report = world.update(west).unwrap();
    let expected_evicted: BTreeSet<ChunkCoord> = before
        .iter()
        .copied()
        .filter(|c| c.planar_distance(west) > 250.0)
        .collect();
    assert!(!expected_evicted.is_empty());
    assert_eq!(report.evicted.iter().copied().collect::<BTreeSet<_>>(), expected_evicted);
}

#[test]
fn test_shutdown_with_batch_in_flight() {
    let mut world = standard_world(RENDER_DISTANCE);
    let report = world.update(Vec3::ZERO).unwrap();
    assert!(report.dispatched > 0);

    world.shutdown();
    assert_eq!(world.resident_count(), 0);
    assert!(!world.is_batch_running());

    // The world streams again after a shutdown.
    run_until_settled(&mut world, Vec3::ZERO);
    assert_eq!(resident(&world), expected(Vec3::ZERO, RENDER_DISTANCE));
}
