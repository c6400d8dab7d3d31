//! Chunk construction errors.

/// Failure to construct a chunk. Fatal for the chunk and for any batch containing it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChunkError {
    /// The height field returned NaN or infinity for a mesh vertex.
    #[error("height field produced non-finite height {height} at ({x}, {z})")]
    NonFiniteHeight { x: f32, z: f32, height: f32 },
}
