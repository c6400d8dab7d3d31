//! Shared, cheaply clonable chunk construction context.

use std::sync::Arc;

use terrace_noise::{
    CoherentNoiseField, HeightField, NoiseError, ScalarField, TerrainHeightField, TerrainParams,
};

use crate::chunk::Chunk;
use crate::coord::ChunkCoord;
use crate::error::ChunkError;

/// Everything needed to build any chunk: the height field, the decoration
/// density field and the decoration seed.
///
/// Both fields are immutable and pure, so a clone can be handed to a
/// background thread while the original keeps serving the main thread.
#[derive(Clone)]
pub struct ChunkGenerator {
    height_field: Arc<dyn HeightField>,
    decor_field: Arc<dyn ScalarField>,
    decor_seed: u64,
}

impl ChunkGenerator {
    pub fn new(
        height_field: Arc<dyn HeightField>,
        decor_field: Arc<dyn ScalarField>,
        decor_seed: u64,
    ) -> Self {
        Self {
            height_field,
            decor_field,
            decor_seed,
        }
    }

    /// Standard terrain: [`TerrainHeightField`] for the surface and a
    /// [`CoherentNoiseField`] for decoration density, seeded by the decor params.
    pub fn from_params(params: &TerrainParams) -> Result<Self, NoiseError> {
        params.validate()?;
        let height_field = TerrainHeightField::from_params(params.main, params.modulation)?;
        let decor_field = CoherentNoiseField::new(params.decor);

        Ok(Self::new(
            Arc::new(height_field),
            Arc::new(decor_field),
            params.decor.seed as u32 as u64,
        ))
    }

    pub fn height_field(&self) -> &dyn HeightField {
        self.height_field.as_ref()
    }

    pub fn decor_seed(&self) -> u64 {
        self.decor_seed
    }

    pub fn generate(&self, coord: ChunkCoord) -> Result<Chunk, ChunkError> {
        Chunk::generate(
            coord,
            self.height_field.as_ref(),
            self.decor_field.as_ref(),
            self.decor_seed,
        )
    }
}

impl std::fmt::Debug for ChunkGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkGenerator")
            .field("decor_seed", &self.decor_seed)
            .finish_non_exhaustive()
    }
}
