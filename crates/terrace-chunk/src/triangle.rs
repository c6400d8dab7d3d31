//! Flat triangles with precomputed barycentric terms for exact height lookup.

use glam::Vec3;

/// A terrain triangle projected onto the x/z plane.
///
/// Stores the Cramer's-rule coefficients of its barycentric system so that a
/// lookup is two multiply-adds per weight. Near-collinear input gives a
/// near-zero denominator; lookups then produce extreme or NaN weights, which
/// fail the range checks and report a miss rather than panic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTriangle {
    c1: f32,
    c2: f32,
    c3: f32,
    c4: f32,
    denominator: f32,
    h1: f32,
    h2: f32,
    p3: Vec3,
}

impl GridTriangle {
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let c1 = p2.z - p3.z;
        let c2 = p3.x - p2.x;
        let c3 = p3.z - p1.z;
        let c4 = p1.x - p3.x;

        Self {
            c1,
            c2,
            c3,
            c4,
            denominator: c1 * c4 - c2 * c3,
            h1: p1.y,
            h2: p2.y,
            p3,
        }
    }

    /// Barycentric weights `(u, v, w)` of `(x, z)` relative to `(p1, p2, p3)`.
    pub fn barycentric(&self, x: f32, z: f32) -> (f32, f32, f32) {
        let dx = x - self.p3.x;
        let dz = z - self.p3.z;

        let u = (self.c1 * dx + self.c2 * dz) / self.denominator;
        let v = (self.c3 * dx + self.c4 * dz) / self.denominator;
        (u, v, 1.0 - u - v)
    }

    /// Interpolated height at `(x, z)`, or `None` if the point lies outside the triangle.
    ///
    /// Points on an edge or vertex count as inside.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        let (u, v, w) = self.barycentric(x, z);
        let unit = 0.0..=1.0;

        (unit.contains(&u) && unit.contains(&v) && unit.contains(&w))
            .then(|| u * self.h1 + v * self.h2 + w * self.p3.y)
    }
}
