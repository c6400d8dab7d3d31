//! Noise configuration errors.

/// Errors reported when validating [`NoiseParams`](crate::NoiseParams).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseError {
    /// A field needs at least one octave.
    #[error("noise field needs at least one octave")]
    ZeroOctaves,

    /// Zoom must be finite and strictly positive.
    #[error("noise zoom must be finite and positive, got {0}")]
    InvalidZoom(f32),

    /// Persistence must be finite and non-negative.
    #[error("noise persistence must be finite and non-negative, got {0}")]
    InvalidPersistence(f32),
}
