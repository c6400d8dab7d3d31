//! The resident chunk set and its per-frame streaming step.

use glam::Vec3;
use rustc_hash::FxHashMap;
use terrace_chunk::{CHUNK_EDGE_LENGTH, Chunk, ChunkCoord, ChunkGenerator};
use terrace_noise::TerrainParams;

use crate::batch::{ChunkBatch, ChunkBatchWorker};
use crate::config::StreamingConfig;
use crate::error::WorldError;

/// What a single [`World::update`] call did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateReport {
    /// Chunks removed because their center moved out of range.
    pub evicted: Vec<ChunkCoord>,
    /// Chunks from a completed batch that became resident.
    pub merged: Vec<ChunkCoord>,
    /// Chunks from a completed batch that were already out of range on arrival.
    pub discarded: Vec<ChunkCoord>,
    /// Number of chunks handed to a newly dispatched batch.
    pub dispatched: usize,
    /// A batch was still running, so nothing was merged or dispatched.
    pub batch_running: bool,
    /// Build time of the merged batch, in microseconds.
    pub generation_time_us: Option<u64>,
}

/// All chunks centered within the render distance of `viewer`, nearest first.
///
/// Ties are broken by coordinate so the order is stable.
pub fn coords_in_range(viewer: Vec3, render_distance: f32) -> Vec<ChunkCoord> {
    if render_distance.is_nan() || render_distance < 0.0 {
        return Vec::new();
    }

    let min_x = ((viewer.x - render_distance) / CHUNK_EDGE_LENGTH).ceil() as i32;
    let max_x = ((viewer.x + render_distance) / CHUNK_EDGE_LENGTH).floor() as i32;
    let min_z = ((viewer.z - render_distance) / CHUNK_EDGE_LENGTH).ceil() as i32;
    let max_z = ((viewer.z + render_distance) / CHUNK_EDGE_LENGTH).floor() as i32;

    let mut coords: Vec<ChunkCoord> = (min_z..=max_z)
        .flat_map(|z| (min_x..=max_x).map(move |x| ChunkCoord::new(x, z)))
        .filter(|coord| coord.planar_distance(viewer) <= render_distance)
        .collect();

    coords.sort_by(|a, b| {
        a.planar_distance_sq(viewer)
            .total_cmp(&b.planar_distance_sq(viewer))
            .then(a.cmp(b))
    });
    coords
}

/// Streams chunks in and out around a moving viewer.
///
/// Owns every resident chunk. New chunks are built off-thread in batches; at
/// most one batch is in flight and its chunks only become visible once the
/// main thread merges them in [`update`](Self::update).
pub struct World {
    config: StreamingConfig,
    generator: ChunkGenerator,
    chunks: FxHashMap<ChunkCoord, Chunk>,
    worker: ChunkBatchWorker,
}

impl World {
    pub fn new(config: StreamingConfig, generator: ChunkGenerator) -> Self {
        tracing::info!(
            render_distance = config.render_distance,
            decor_seed = generator.decor_seed(),
            "world created"
        );
        Self {
            config,
            generator,
            chunks: FxHashMap::default(),
            worker: ChunkBatchWorker::new(),
        }
    }

    /// World over the standard terrain built from `params`.
    pub fn from_params(config: StreamingConfig, params: &TerrainParams) -> Result<Self, WorldError> {
        let generator = ChunkGenerator::from_params(params)?;
        Ok(Self::new(config, generator))
    }

    pub fn config(&self) -> &StreamingConfig {
        &self.config
    }

    pub fn generator(&self) -> &ChunkGenerator {
        &self.generator
    }

    /// Advance streaming for a viewer at `viewer`.
    ///
    /// Out-of-range chunks are always evicted. If a batch is still running the
    /// call stops there. Otherwise a finished batch is merged, and every
    /// in-range chunk that is still missing is dispatched as a new batch.
    ///
    /// A failed batch is reported as an error before anything is evicted, so
    /// the resident set is untouched and none of the batch's chunks are
    /// merged; the missing chunks are requested again on the next call.
    pub fn update(&mut self, viewer: Vec3) -> Result<UpdateReport, WorldError> {
        let running = self.worker.is_running();
        let finished = if running {
            None
        } else {
            self.worker.try_collect()?
        };

        let mut report = UpdateReport::default();
        self.evict(viewer, &mut report);

        if running {
            report.batch_running = true;
            return Ok(report);
        }

        if let Some(batch) = finished {
            self.merge(batch, viewer, &mut report);
        }

        let missing: Vec<ChunkCoord> = coords_in_range(viewer, self.config.render_distance)
            .into_iter()
            .filter(|coord| !self.chunks.contains_key(coord))
            .collect();

        if !missing.is_empty() {
            report.dispatched = missing.len();
            tracing::debug!(count = missing.len(), "dispatching chunk batch");
            self.worker.dispatch(self.generator.clone(), missing)?;
        }

        Ok(report)
    }

    fn evict(&mut self, viewer: Vec3, report: &mut UpdateReport) {
        let render_distance = self.config.render_distance;
        self.chunks.retain(|&coord, _| {
            let keep = coord.planar_distance(viewer) <= render_distance;
            if !keep {
                tracing::trace!(x = coord.x, z = coord.z, "evicting chunk");
                report.evicted.push(coord);
            }
            keep
        });
    }

    fn merge(&mut self, batch: ChunkBatch, viewer: Vec3, report: &mut UpdateReport) {
        let render_distance = self.config.render_distance;
        for chunk in batch.chunks {
            let coord = chunk.coord();
            if coord.planar_distance(viewer) > render_distance || self.chunks.contains_key(&coord) {
                report.discarded.push(coord);
                continue;
            }
            self.chunks.insert(coord, chunk);
            report.merged.push(coord);
        }

        if !report.discarded.is_empty() {
            tracing::warn!(
                count = report.discarded.len(),
                "discarded chunks that left range while their batch was running"
            );
        }
        tracing::debug!(
            merged = report.merged.len(),
            resident = self.chunks.len(),
            generation_time_us = batch.generation_time_us,
            "merged chunk batch"
        );
        report.generation_time_us = Some(batch.generation_time_us);
    }

    /// Height of the resident terrain surface under `p`.
    ///
    /// Returns `0.0` (the water plane) when no resident chunk covers `(p.x, p.z)`.
    ///
    /// The chunk whose footprint contains the point is asked first. If its
    /// triangle lookup misses, every other resident chunk whose bounds contain
    /// the point is tried before giving up, rather than returning `0.0` after
    /// the first candidate.
    pub fn ground_height(&self, p: Vec3) -> f32 {
        if let Some(h) = self
            .chunks
            .get(&ChunkCoord::containing(p.x, p.z))
            .and_then(|chunk| chunk.height_at(p.x, p.z))
        {
            return h;
        }

        // Edge and corner points can round into a neighbour's footprint.
        self.chunks
            .values()
            .filter(|chunk| chunk.bounds().contains_planar(p.x, p.z))
            .find_map(|chunk| chunk.height_at(p.x, p.z))
            .unwrap_or(0.0)
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Resident chunks in unspecified order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn resident_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_batch_running(&self) -> bool {
        self.worker.is_running()
    }

    /// Wait for the in-flight batch, then release it and every resident chunk.
    ///
    /// The world stays usable afterwards and starts streaming from scratch
    /// on the next [`update`](Self::update).
    pub fn shutdown(&mut self) {
        let unmerged = match self.worker.wait() {
            Ok(batch) => batch.map_or(0, |b| b.chunks.len()),
            Err(e) => {
                tracing::warn!(error = %e, "chunk batch failed during shutdown");
                0
            }
        };
        let released = self.chunks.len();
        self.chunks.clear();
        if released > 0 || unmerged > 0 {
            tracing::info!(released, unmerged, "world shut down");
        }
    }
}

impl Drop for World {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("config", &self.config)
            .field("resident", &self.chunks.len())
            .field("batch_running", &self.worker.is_running())
            .finish_non_exhaustive()
    }
}
