//! Streams terrain chunks in and out around a moving viewer.
//!
//! [`World`] owns the resident chunks and a [`ChunkBatchWorker`] that builds
//! newly required chunks on a single background thread.

mod batch;
mod config;
mod error;
mod world;

pub use batch::{ChunkBatch, ChunkBatchWorker};
pub use config::StreamingConfig;
pub use error::WorldError;
pub use world::{UpdateReport, World, coords_in_range};
