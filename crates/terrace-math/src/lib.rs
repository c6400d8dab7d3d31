//! Bounding volumes and small geometric helpers shared by the Terrace crates.

mod aabb;

pub use aabb::Aabb;
