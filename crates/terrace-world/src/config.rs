//! Streaming configuration.

/// Tunables for [`World`](crate::World) streaming.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamingConfig {
    /// Chunks whose center lies within this planar distance of the viewer are
    /// kept resident; chunks beyond it are evicted.
    pub render_distance: f32,
}

impl StreamingConfig {
    pub const DEFAULT_RENDER_DISTANCE: f32 = 1000.0;
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            render_distance: Self::DEFAULT_RENDER_DISTANCE,
        }
    }
}
