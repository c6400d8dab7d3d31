//! Deterministic coherent noise and the height fields built on it.

mod coherent;
mod error;
mod field;
mod params;
mod seed;

pub use coherent::{CoherentNoiseField, cosine_interpolate, lattice_value};
pub use error::NoiseError;
pub use field::{HeightField, NORMAL_SAMPLE_OFFSET, ScalarField, TerrainHeightField};
pub use params::{NoiseParams, TerrainParams};
pub use seed::{chunk_rng, derive_chunk_seed};
