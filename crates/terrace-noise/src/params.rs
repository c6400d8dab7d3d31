//! Serializable parameter sets for noise fields.

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Configuration of a single [`CoherentNoiseField`](crate::CoherentNoiseField).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Seed mixed into the lattice hash.
    pub seed: i32,
    /// Number of octaves summed. Octave `o` runs at frequency `2^o`.
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f32,
    /// Spatial wavelength of the first octave, in world units.
    pub zoom: f32,
}

impl NoiseParams {
    pub const fn new(seed: i32, octaves: u32, persistence: f32, zoom: f32) -> Self {
        Self {
            seed,
            octaves,
            persistence,
            zoom,
        }
    }

    /// Check that the parameters describe a usable field.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 {
            return Err(NoiseError::ZeroOctaves);
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(NoiseError::InvalidZoom(self.zoom));
        }
        if !self.persistence.is_finite() || self.persistence < 0.0 {
            return Err(NoiseError::InvalidPersistence(self.persistence));
        }
        Ok(())
    }
}

/// The three noise fields that drive terrain generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Base terrain shape.
    pub main: NoiseParams,
    /// Low-frequency field that flattens or raises whole regions.
    pub modulation: NoiseParams,
    /// Decoration density.
    pub decor: NoiseParams,
}

impl TerrainParams {
    /// Standard terrain for a world seed: main and decor at zoom 200, modulation at zoom 600.
    pub fn from_seed(seed: i32) -> Self {
        Self {
            main: NoiseParams::new(seed, 4, 0.2, 200.0),
            modulation: NoiseParams::new(seed.wrapping_add(1), 2, 0.2, 600.0),
            decor: NoiseParams::new(seed.wrapping_add(2), 2, 0.2, 200.0),
        }
    }

    /// Re-seed all three fields from a world seed, keeping their shapes.
    pub fn with_seed(self, seed: i32) -> Self {
        Self {
            main: NoiseParams { seed, ..self.main },
            modulation: NoiseParams {
                seed: seed.wrapping_add(1),
                ..self.modulation
            },
            decor: NoiseParams {
                seed: seed.wrapping_add(2),
                ..self.decor
            },
        }
    }

    pub fn validate(&self) -> Result<(), NoiseError> {
        self.main.validate()?;
        self.modulation.validate()?;
        self.decor.validate()
    }
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self::from_seed(0)
    }
}
