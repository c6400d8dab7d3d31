//! Procedural decoration (trees) scattered over a chunk.
//!
//! The chunk is split into a 10x10 grid of tiles. Each tile gets one candidate
//! point, jittered by up to half a tile from the tile center with the chunk's
//! own RNG. A candidate becomes a [`DecorItem`] only if it lies on the chunk
//! surface above [`DECOR_MIN_HEIGHT`] and the density field exceeds
//! [`DECOR_DENSITY_THRESHOLD`] there.

use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use terrace_noise::{ScalarField, chunk_rng};

use crate::chunk::HALF_EDGE_LENGTH;
use crate::coord::{CHUNK_EDGE_LENGTH, ChunkCoord};

/// Decoration tiles per chunk edge.
pub const DECOR_GRID_SIZE: usize = 10;

/// Edge length of one decoration tile.
pub const DECOR_TILE_EDGE_LENGTH: f32 = CHUNK_EDGE_LENGTH / DECOR_GRID_SIZE as f32;

/// Candidates at or below this height (shore and underwater) are skipped.
pub const DECOR_MIN_HEIGHT: f32 = 5.0;

/// Minimum density sample for a candidate to be kept.
pub const DECOR_DENSITY_THRESHOLD: f32 = 0.9;

/// One placed decoration instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorItem {
    /// World position; `y` is the chunk surface height at `(x, z)`.
    pub position: Vec3,
    /// Rotation about the vertical axis, radians in `[0, 2*pi)`.
    pub rotation: f32,
}

impl DecorItem {
    pub fn new(position: Vec3, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Model matrix for instanced rendering: rotate about Y, then translate.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.rotation), self.position)
    }
}

/// Scatter decoration over the chunk at `coord`.
///
/// `surface_height` is the chunk's own triangle lookup so that items sit
/// exactly on the rendered mesh.
pub(crate) fn scatter(
    coord: ChunkCoord,
    surface_height: impl Fn(f32, f32) -> Option<f32>,
    density: &dyn ScalarField,
    decor_seed: u64,
) -> Vec<DecorItem> {
    let mut rng = chunk_rng(decor_seed, coord.x, coord.z);
    let center = coord.world_center();
    let half_tile = DECOR_TILE_EDGE_LENGTH / 2.0;
    let origin_x = center.x - HALF_EDGE_LENGTH + half_tile;
    let origin_z = center.z - HALF_EDGE_LENGTH + half_tile;

    let mut items = Vec::new();
    for tz in 0..DECOR_GRID_SIZE {
        for tx in 0..DECOR_GRID_SIZE {
            let x = origin_x + tx as f32 * DECOR_TILE_EDGE_LENGTH
                + (2.0 * rng.random::<f32>() - 1.0) * half_tile;
            let z = origin_z + tz as f32 * DECOR_TILE_EDGE_LENGTH
                + (2.0 * rng.random::<f32>() - 1.0) * half_tile;

            let Some(height) = surface_height(x, z) else {
                continue;
            };
            if height <= DECOR_MIN_HEIGHT || density.value(x, z) <= DECOR_DENSITY_THRESHOLD {
                continue;
            }

            let rotation = rng.random::<f32>() * TAU;
            items.push(DecorItem::new(Vec3::new(x, height, z), rotation));
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f32);

    impl ScalarField for Constant {
        fn value(&self, _x: f32, _z: f32) -> f32 {
            self.0
        }
    }

    #[test]
    fn test_every_tile_decorated_on_dense_high_ground() {
        let coord = ChunkCoord::new(2, -1);
        let items = scatter(coord, |_, _| Some(20.0), &Constant(1.0), 7);
        assert_eq!(items.len(), DECOR_GRID_SIZE * DECOR_GRID_SIZE);

        let center = coord.world_center();
        for item in &items {
            assert_eq!(item.position.y, 20.0);
            assert!((item.position.x - center.x).abs() <= HALF_EDGE_LENGTH);
            assert!((item.position.z - center.z).abs() <= HALF_EDGE_LENGTH);
            assert!((0.0..TAU).contains(&item.rotation), "rotation {}", item.rotation);
        }
    }

    #[test]
    fn test_items_stay_within_their_tile() {
        let coord = ChunkCoord::new(0, 0);
        let items = scatter(coord, |_, _| Some(20.0), &Constant(1.0), 1);
        for (i, item) in items.iter().enumerate() {
            let tx = (i % DECOR_GRID_SIZE) as f32;
            let tz = (i / DECOR_GRID_SIZE) as f32;
            let tile_min_x = -HALF_EDGE_LENGTH + tx * DECOR_TILE_EDGE_LENGTH;
            let tile_min_z = -HALF_EDGE_LENGTH + tz * DECOR_TILE_EDGE_LENGTH;
            assert!(item.position.x >= tile_min_x - 1e-4);
            assert!(item.position.x <= tile_min_x + DECOR_TILE_EDGE_LENGTH + 1e-4);
            assert!(item.position.z >= tile_min_z - 1e-4);
            assert!(item.position.z <= tile_min_z + DECOR_TILE_EDGE_LENGTH + 1e-4);
        }
    }

    #[test]
    fn test_low_ground_is_bare() {
        let items = scatter(ChunkCoord::new(0, 0), |_, _| Some(DECOR_MIN_HEIGHT), &Constant(1.0), 0);
        assert!(items.is_empty());
    }

    #[test]
    fn test_sparse_density_is_bare() {
        let items = scatter(
            ChunkCoord::new(0, 0),
            |_, _| Some(50.0),
            &Constant(DECOR_DENSITY_THRESHOLD),
            0,
        );
        assert!(items.is_empty());
    }

    #[test]
    fn test_lookup_miss_is_bare() {
        let items = scatter(ChunkCoord::new(0, 0), |_, _| None, &Constant(1.0), 0);
        assert!(items.is_empty());
    }

    #[test]
    fn test_scatter_is_deterministic_per_coord() {
        let a = scatter(ChunkCoord::new(-4, 9), |_, _| Some(30.0), &Constant(1.0), 3);
        let b = scatter(ChunkCoord::new(-4, 9), |_, _| Some(30.0), &Constant(1.0), 3);
        let other = scatter(ChunkCoord::new(-4, 10), |_, _| Some(30.0), &Constant(1.0), 3);
        assert_eq!(a, b);
        let shifted: Vec<_> = other
            .iter()
            .map(|item| item.position - Vec3::new(0.0, 0.0, CHUNK_EDGE_LENGTH))
            .collect();
        let original: Vec<_> = a.iter().map(|item| item.position).collect();
        assert_ne!(original, shifted, "neighboring chunks share a jitter pattern");
    }

    #[test]
    fn test_transform_places_origin_at_position() {
        let item = DecorItem::new(Vec3::new(10.0, 6.0, -3.0), std::f32::consts::FRAC_PI_2);
        let m = item.transform();
        assert!((m.transform_point3(Vec3::ZERO) - item.position).length() < 1e-5);
        // A quarter turn about Y maps +X onto -Z.
        let rotated = m.transform_vector3(Vec3::X);
        assert!((rotated - Vec3::NEG_Z).length() < 1e-5, "rotated = {rotated}");
    }
}
