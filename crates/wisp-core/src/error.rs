//! Error types for Wisp

use thiserror::Error;

/// The main error type for Wisp operations
///
/// Every variant is a configuration error surfaced at construction or
/// setter time; the simulation itself never fails mid-update.
#[derive(Debug, Error)]
pub enum WispError {
    #[error("Invalid pool capacity: max_particles must be at least 1")]
    InvalidCapacity,

    #[error("Non-finite bound in range '{field}': [{min}, {max}]")]
    NonFiniteRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("Non-finite spawn location: ({x}, {y})")]
    NonFiniteSpawnLocation { x: f32, y: f32 },
}

/// Result type alias for Wisp operations
pub type Result<T> = std::result::Result<T, WispError>;
