//! Terrain vertex format, laid out for direct GPU upload.

use glam::{Vec2, Vec3};

/// A single terrain mesh vertex.
///
/// Layout (40 bytes total, tightly packed `f32`s):
///   - `[0..12]`  position `[f32; 3]` in world space
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..32]` uv `[f32; 2]` base texture coordinates, `local / 50`
///   - `[32..40]` uv_detail `[f32; 2]` detail texture coordinates, `local * 2 / 50`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub uv_detail: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 40]);

impl TerrainVertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2, uv_detail: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
            uv_detail: uv_detail.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}
