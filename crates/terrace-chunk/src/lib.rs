//! Terrain chunks: a fixed-size tile of mesh, triangle height index and decoration.

mod chunk;
mod coord;
mod decor;
mod error;
mod generator;
mod indices;
mod triangle;
mod vertex;

pub use chunk::{Chunk, HALF_EDGE_LENGTH, VERTEX_COUNT, VERTEX_SPACING, VERTICES_PER_EDGE};
pub use coord::{CHUNK_EDGE_LENGTH, ChunkCoord};
pub use decor::{
    DECOR_DENSITY_THRESHOLD, DECOR_GRID_SIZE, DECOR_MIN_HEIGHT, DECOR_TILE_EDGE_LENGTH, DecorItem,
};
pub use error::ChunkError;
pub use generator::ChunkGenerator;
pub use indices::{INDEX_COUNT, TRIANGLE_COUNT, chunk_indices};
pub use triangle::GridTriangle;
pub use vertex::TerrainVertex;
