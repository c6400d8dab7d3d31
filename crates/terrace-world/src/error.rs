//! Streaming errors.

use terrace_chunk::{ChunkCoord, ChunkError};
use terrace_noise::NoiseError;

/// Errors surfaced by [`World`](crate::World) and [`ChunkBatchWorker`](crate::ChunkBatchWorker).
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The background worker thread could not be started.
    #[error("failed to spawn chunk batch worker: {0}")]
    Spawn(#[source] std::io::Error),

    /// A chunk in the batch failed to build; the whole batch is discarded.
    #[error("chunk {coord:?} failed to build: {source}")]
    Batch {
        coord: ChunkCoord,
        #[source]
        source: ChunkError,
    },

    /// The worker thread panicked before delivering its batch.
    #[error("chunk batch worker panicked")]
    WorkerPanicked,

    /// A batch was dispatched while another one was still in flight.
    #[error("a chunk batch is already in flight")]
    BatchInFlight,

    /// Terrain parameters were rejected.
    #[error("invalid terrain configuration: {0}")]
    InvalidConfig(#[from] NoiseError),
}
