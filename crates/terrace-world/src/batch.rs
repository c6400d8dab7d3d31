//! Single-slot background chunk generation.
//!
//! At most one batch is in flight. The worker thread owns the list it is
//! building and hands it over through a one-slot channel when done; the main
//! thread only polls the thread's liveness and collects once it has finished.
//! Batches cannot be cancelled: a dispatched batch always runs to completion.

use std::thread::JoinHandle;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, bounded};
use terrace_chunk::{Chunk, ChunkCoord, ChunkError, ChunkGenerator};

use crate::error::WorldError;

/// The chunks produced by one completed batch.
#[derive(Debug)]
pub struct ChunkBatch {
    /// Chunks in the order they were built.
    pub chunks: Vec<Chunk>,
    /// Wall time spent building the batch, in microseconds.
    pub generation_time_us: u64,
}

type BatchOutcome = Result<ChunkBatch, (ChunkCoord, ChunkError)>;

/// Runs chunk batches on a dedicated background thread, one at a time.
pub struct ChunkBatchWorker {
    result_sender: Sender<BatchOutcome>,
    result_receiver: Receiver<BatchOutcome>,
    handle: Option<JoinHandle<()>>,
}

impl ChunkBatchWorker {
    pub fn new() -> Self {
        let (result_sender, result_receiver) = bounded(1);
        Self {
            result_sender,
            result_receiver,
            handle: None,
        }
    }

    /// True while the worker thread is still building a batch.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// True if a batch was dispatched and has not been collected yet.
    pub fn has_pending(&self) -> bool {
        self.handle.is_some() || !self.result_receiver.is_empty()
    }

    /// Start building `coords` on a new worker thread.
    ///
    /// Fails with [`WorldError::BatchInFlight`] if the previous batch has not
    /// been collected.
    pub fn dispatch(
        &mut self,
        generator: ChunkGenerator,
        coords: Vec<ChunkCoord>,
    ) -> Result<(), WorldError> {
        if self.has_pending() {
            return Err(WorldError::BatchInFlight);
        }

        let sender = self.result_sender.clone();
        let handle = std::thread::Builder::new()
            .name("chunk-batch-worker".into())
            .spawn(move || {
                let start = Instant::now();
                let outcome = build_batch(&generator, &coords).map(|chunks| ChunkBatch {
                    chunks,
                    generation_time_us: start.elapsed().as_micros() as u64,
                });
                // The slot is empty: dispatch refuses to run while a result is pending.
                let _ = sender.send(outcome);
            })
            .map_err(WorldError::Spawn)?;

        self.handle = Some(handle);
        Ok(())
    }

    /// Collect the finished batch without blocking.
    ///
    /// Returns `Ok(None)` while the batch is still running or when nothing was dispatched.
    pub fn try_collect(&mut self) -> Result<Option<ChunkBatch>, WorldError> {
        if self.is_running() {
            return Ok(None);
        }
        self.finish()
    }

    /// Block until the in-flight batch (if any) finishes, then collect it.
    pub fn wait(&mut self) -> Result<Option<ChunkBatch>, WorldError> {
        self.finish()
    }

    fn finish(&mut self) -> Result<Option<ChunkBatch>, WorldError> {
        if let Some(handle) = self.handle.take() {
            handle.join().map_err(|_| WorldError::WorkerPanicked)?;
        }

        match self.result_receiver.try_recv() {
            Ok(Ok(batch)) => Ok(Some(batch)),
            Ok(Err((coord, source))) => Err(WorldError::Batch { coord, source }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for ChunkBatchWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ChunkBatchWorker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Build every chunk in order. The first failure aborts the batch.
fn build_batch(
    generator: &ChunkGenerator,
    coords: &[ChunkCoord],
) -> Result<Vec<Chunk>, (ChunkCoord, ChunkError)> {
    coords
        .iter()
        .map(|&coord| generator.generate(coord).map_err(|e| (coord, e)))
        .collect()
}
