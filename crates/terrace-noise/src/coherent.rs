//! Value noise over an integer lattice with cosine smoothing, summed over octaves.
//!
//! The lattice hash uses wrapping `i32` arithmetic and must stay bit-exact:
//! terrain produced for a seed is only reproducible while the hash is unchanged.
//! Cosine comes from `libm` so results do not depend on the platform libc.

use std::f32::consts::PI;

use crate::field::ScalarField;
use crate::params::NoiseParams;

/// Pseudo-random value in `[0, 1]` for an integer lattice point.
pub fn lattice_value(ix: i32, iz: i32, seed: i32) -> f32 {
    let mut n = 1619_i32
        .wrapping_mul(ix)
        .wrapping_add(31337_i32.wrapping_mul(iz))
        .wrapping_add(1013_i32.wrapping_mul(seed))
        & 0x7fff_ffff;
    n ^= n >> 13;

    let hashed = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(60493).wrapping_add(19_990_303))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;

    hashed as f32 / i32::MAX as f32
}

/// Interpolate from `a` to `b` with a half-cosine ease. `w` is clamped to `[0, 1]`.
#[inline]
pub fn cosine_interpolate(a: f32, b: f32, w: f32) -> f32 {
    let w = w.clamp(0.0, 1.0);
    a + (b - a) * (1.0 - libm::cosf(w * PI)) / 2.0
}

/// Deterministic coherent noise field.
///
/// A pure function of `(x, z)` and its parameters. Inputs are folded onto the
/// positive quadrant (`|x|`, `|z|`) before scaling, so the field mirrors across
/// both axes.
#[derive(Clone, Debug, PartialEq)]
pub struct CoherentNoiseField {
    params: NoiseParams,
}

impl CoherentNoiseField {
    pub fn new(params: NoiseParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// Sum of all octaves at `(x, z)`. Roughly `[0, 1]` for typical persistence,
    /// bounded by the geometric sum of octave amplitudes.
    pub fn value(&self, x: f32, z: f32) -> f32 {
        let mut total = 0.0;
        let mut frequency = 1.0_f32;

        for octave in 0..self.params.octaves {
            let amplitude = libm::powf(self.params.persistence, octave as f32);
            let nx = x.abs() * frequency / self.params.zoom;
            let nz = z.abs() * frequency / self.params.zoom;
            total += self.smoothed(nx, nz) * amplitude;

            frequency *= 2.0;
        }

        total
    }

    /// Upper bound of [`value`](Self::value): the geometric sum of octave amplitudes.
    pub fn max_value(&self) -> f32 {
        (0..self.params.octaves)
            .map(|octave| libm::powf(self.params.persistence, octave as f32))
            .sum()
    }

    fn smoothed(&self, x: f32, z: f32) -> f32 {
        let ix = x.floor();
        let iz = z.floor();
        let fx = x - ix;
        let fz = z - iz;
        let (ix, iz) = (ix as i32, iz as i32);
        let seed = self.params.seed;

        let v1 = lattice_value(ix, iz, seed);
        let v2 = lattice_value(ix.wrapping_add(1), iz, seed);
        let v3 = lattice_value(ix, iz.wrapping_add(1), seed);
        let v4 = lattice_value(ix.wrapping_add(1), iz.wrapping_add(1), seed);

        let near = cosine_interpolate(v1, v2, fx);
        let far = cosine_interpolate(v3, v4, fx);
        cosine_interpolate(near, far, fz)
    }
}

impl ScalarField for CoherentNoiseField {
    fn value(&self, x: f32, z: f32) -> f32 {
        CoherentNoiseField::value(self, x, z)
    }
}
