//! A single terrain tile: vertex grid, triangle height index, bounds and decoration.

use glam::{Vec2, Vec3};
use terrace_math::Aabb;
use terrace_noise::{HeightField, ScalarField};

use crate::coord::{CHUNK_EDGE_LENGTH, ChunkCoord};
use crate::decor::{self, DecorItem};
use crate::error::ChunkError;
use crate::indices::{TRIANGLE_COUNT, chunk_indices};
use crate::triangle::GridTriangle;
use crate::vertex::TerrainVertex;

/// Vertices along one chunk edge.
pub const VERTICES_PER_EDGE: usize = 8;

/// Vertices per chunk.
pub const VERTEX_COUNT: usize = VERTICES_PER_EDGE * VERTICES_PER_EDGE;

pub const HALF_EDGE_LENGTH: f32 = CHUNK_EDGE_LENGTH / 2.0;

/// Distance between neighboring grid vertices.
pub const VERTEX_SPACING: f32 = CHUNK_EDGE_LENGTH / (VERTICES_PER_EDGE - 1) as f32;

/// Chunk-local offset of grid line `i`, in `[-50, 50]`.
///
/// Computed as `i * 100 / 7` rather than `i * spacing` so the last line lands
/// exactly on the chunk edge.
fn local_offset(i: usize) -> f32 {
    i as f32 * CHUNK_EDGE_LENGTH / (VERTICES_PER_EDGE - 1) as f32 - HALF_EDGE_LENGTH
}

/// One generated terrain tile. Immutable once built.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    vertices: Vec<TerrainVertex>,
    triangles: Vec<GridTriangle>,
    bounds: Aabb,
    decor: Vec<DecorItem>,
}

impl Chunk {
    /// Build the chunk at `coord`.
    ///
    /// Vertex heights and normals come from `height_field`; decoration density
    /// from `decor_field`, with per-chunk randomness keyed by `decor_seed` and
    /// the coordinates.
    pub fn generate(
        coord: ChunkCoord,
        height_field: &dyn HeightField,
        decor_field: &dyn ScalarField,
        decor_seed: u64,
    ) -> Result<Self, ChunkError> {
        let center = coord.world_center();
        let mut vertices = Vec::with_capacity(VERTEX_COUNT);

        for z in 0..VERTICES_PER_EDGE {
            for x in 0..VERTICES_PER_EDGE {
                let local = Vec2::new(local_offset(x), local_offset(z));
                let world_x = center.x + local.x;
                let world_z = center.z + local.y;

                let height = height_field.height(world_x, world_z);
                if !height.is_finite() {
                    return Err(ChunkError::NonFiniteHeight {
                        x: world_x,
                        z: world_z,
                        height,
                    });
                }

                vertices.push(TerrainVertex::new(
                    Vec3::new(world_x, height, world_z),
                    height_field.normal(world_x, world_z),
                    local / HALF_EDGE_LENGTH,
                    local * 2.0 / HALF_EDGE_LENGTH,
                ));
            }
        }

        let triangles: Vec<GridTriangle> = chunk_indices()
            .chunks_exact(3)
            .map(|tri| {
                GridTriangle::new(
                    vertices[tri[0] as usize].position(),
                    vertices[tri[1] as usize].position(),
                    vertices[tri[2] as usize].position(),
                )
            })
            .collect();
        debug_assert_eq!(triangles.len(), TRIANGLE_COUNT);

        // The water tile is never culled while its chunk is visible.
        let bounds = Aabb::from_points(
            vertices
                .iter()
                .map(TerrainVertex::position)
                .chain(water_corners(center)),
        );

        let mut chunk = Self {
            coord,
            vertices,
            triangles,
            bounds,
            decor: Vec::new(),
        };
        let decor = decor::scatter(coord, |x, z| chunk.height_at(x, z), decor_field, decor_seed);
        chunk.decor = decor;

        Ok(chunk)
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn world_center(&self) -> Vec3 {
        self.coord.world_center()
    }

    /// Vertex buffer contents, row-major with `z` outer and `x` inner.
    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    /// Index buffer contents. Shared by every chunk.
    pub fn indices(&self) -> &'static [u16] {
        chunk_indices()
    }

    /// Bounds of the surface and the water tile under it.
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn decor(&self) -> &[DecorItem] {
        &self.decor
    }

    pub fn triangles(&self) -> &[GridTriangle] {
        &self.triangles
    }

    /// Corners of the water tile (y = 0) under this chunk.
    pub fn water_corners(&self) -> [Vec3; 4] {
        water_corners(self.world_center())
    }

    /// Height of the rendered surface at `(x, z)`.
    ///
    /// Returns the first triangle containing the point, or `None` outside the
    /// chunk footprint.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        self.triangles.iter().find_map(|tri| tri.height_at(x, z))
    }
}

fn water_corners(center: Vec3) -> [Vec3; 4] {
    let h = HALF_EDGE_LENGTH;
    [
        Vec3::new(center.x - h, 0.0, center.z - h),
        Vec3::new(center.x + h, 0.0, center.z - h),
        Vec3::new(center.x - h, 0.0, center.z + h),
        Vec3::new(center.x + h, 0.0, center.z + h),
    ]
}
