//! Chunk grid coordinates.

use glam::Vec3;

/// Edge length of one chunk in world units.
pub const CHUNK_EDGE_LENGTH: f32 = 100.0;

/// Identifies a chunk on the horizontal grid.
///
/// Chunk `(x, z)` is centered on world position `(x * 100, 0, z * 100)` and
/// covers `[-50, 50]` around that center on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The chunk whose footprint contains world point `(x, z)`.
    ///
    /// Points exactly on a shared edge resolve to the chunk on the positive side.
    pub fn containing(x: f32, z: f32) -> Self {
        let half = CHUNK_EDGE_LENGTH / 2.0;
        Self {
            x: ((x + half) / CHUNK_EDGE_LENGTH).floor() as i32,
            z: ((z + half) / CHUNK_EDGE_LENGTH).floor() as i32,
        }
    }

    /// World-space center of the chunk, on the water plane (y = 0).
    pub fn world_center(self) -> Vec3 {
        Vec3::new(
            self.x as f32 * CHUNK_EDGE_LENGTH,
            0.0,
            self.z as f32 * CHUNK_EDGE_LENGTH,
        )
    }

    /// Horizontal distance from `p` to the chunk center, ignoring height.
    pub fn planar_distance(self, p: Vec3) -> f32 {
        let center = self.world_center();
        (p.x - center.x).hypot(p.z - center.z)
    }

    /// Squared horizontal distance from `p` to the chunk center.
    pub fn planar_distance_sq(self, p: Vec3) -> f32 {
        let center = self.world_center();
        let dx = p.x - center.x;
        let dz = p.z - center.z;
        dx * dx + dz * dz
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}
