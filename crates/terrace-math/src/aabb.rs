use glam::Vec3;

/// Axis-Aligned Bounding Box in world space.
///
/// Invariant: for a non-empty box, min.x <= max.x, min.y <= max.y, min.z <= max.z.
/// [`Aabb::EMPTY`] is the inverted box used as the identity for [`Aabb::extend`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// A box containing nothing. Extending it by a point yields a zero-size box at that point.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    /// Smallest box enclosing every point of the iterator.
    ///
    /// Returns [`Aabb::EMPTY`] for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().fold(Self::EMPTY, |aabb, p| aabb.extend(p))
    }

    /// Returns this box grown to include `p`.
    pub fn extend(self, p: Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Containment test on the horizontal (x/z) extent only, ignoring height.
    pub fn contains_planar(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.z && z <= self.max.z
    }
}
