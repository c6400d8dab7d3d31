//! Height and scalar field capabilities plus the standard terrain height field.

use glam::Vec3;

use crate::coherent::CoherentNoiseField;
use crate::error::NoiseError;
use crate::params::NoiseParams;

/// Distance between the center and each finite-difference sample in [`HeightField::normal`].
pub const NORMAL_SAMPLE_OFFSET: f32 = 0.5;

/// Vertical component of the unnormalized normal. Tied to [`NORMAL_SAMPLE_OFFSET`]:
/// the two samples on each axis are `2 * 0.5 = 1` unit apart, hence a run of 1
/// mapped onto 2 so that slopes are halved before normalization.
const NORMAL_SLOPE_HEIGHT: f32 = 2.0;

/// A scalar value for every point on the horizontal plane.
///
/// Implementors must be pure: identical inputs give identical outputs, so they
/// can be shared across threads without synchronization.
pub trait ScalarField: Send + Sync {
    fn value(&self, x: f32, z: f32) -> f32;
}

/// Terrain surface: a height for every `(x, z)` and a normal derived from it.
pub trait HeightField: Send + Sync {
    fn height(&self, x: f32, z: f32) -> f32;

    /// Surface normal from central differences of [`height`](Self::height).
    fn normal(&self, x: f32, z: f32) -> Vec3 {
        let left = self.height(x - NORMAL_SAMPLE_OFFSET, z);
        let right = self.height(x + NORMAL_SAMPLE_OFFSET, z);
        let near = self.height(x, z - NORMAL_SAMPLE_OFFSET);
        let far = self.height(x, z + NORMAL_SAMPLE_OFFSET);

        Vec3::new(left - right, NORMAL_SLOPE_HEIGHT, near - far).normalize()
    }
}

/// Terrain carved by a base field and a squared modulation field.
///
/// `height = (main * modulation^2 - 0.15) * 200`, so regions where the
/// modulation field is low flatten out below the water line.
#[derive(Clone, Debug)]
pub struct TerrainHeightField {
    main: CoherentNoiseField,
    modulation: CoherentNoiseField,
}

impl TerrainHeightField {
    pub const HEIGHT_SCALE: f32 = 200.0;
    pub const SEA_LEVEL_OFFSET: f32 = 0.15;

    pub fn new(main: CoherentNoiseField, modulation: CoherentNoiseField) -> Self {
        Self { main, modulation }
    }

    /// Build from parameters, rejecting unusable ones.
    pub fn from_params(main: NoiseParams, modulation: NoiseParams) -> Result<Self, NoiseError> {
        main.validate()?;
        modulation.validate()?;
        Ok(Self::new(
            CoherentNoiseField::new(main),
            CoherentNoiseField::new(modulation),
        ))
    }

    pub fn main(&self) -> &CoherentNoiseField {
        &self.main
    }

    pub fn modulation(&self) -> &CoherentNoiseField {
        &self.modulation
    }
}

impl HeightField for TerrainHeightField {
    fn height(&self, x: f32, z: f32) -> f32 {
        let main = self.main.value(x, z);
        let modulation = self.modulation.value(x, z);

        (main * modulation * modulation - Self::SEA_LEVEL_OFFSET) * Self::HEIGHT_SCALE
    }
}
