//! Error types for scene and settings validation.

use thiserror::Error;

/// Errors raised while configuring a render.
///
/// Tracing itself never fails; these only come from validating settings or
/// a scene before rendering starts.
#[derive(Error, Debug)]
pub enum TraceError {
    /// Settings are out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings text could not be parsed.
    #[error("failed to parse settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// A primitive has unusable geometry or material values.
    #[error("invalid primitive at index {index}: {reason}")]
    InvalidPrimitive {
        /// Position of the primitive in the scene.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A light position is not finite.
    #[error("light at index {index} has a non-finite position")]
    InvalidLight {
        /// Position of the light in the scene.
        index: usize,
    },
}

/// Result type for tracer configuration.
pub type Result<T> = std::result::Result<T, TraceError>;
