//! Error types for the sandbox.
//!
//! The simulation itself never fails; only configuration and explicit body
//! parameters can be rejected.

use thiserror::Error;

/// Result alias for configuration and spawn checks.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reasons a [`WorldConfig`](crate::config::WorldConfig) is refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field holds NaN or an infinity.
    #[error("`{0}` must be finite")]
    NonFinite(&'static str),

    /// The left wall is not strictly left of the right wall.
    #[error("left wall ({left}) must be less than right wall ({right})")]
    InvertedWalls { left: f64, right: f64 },

    /// A random spawn range has `min > max`.
    #[error("spawn range `{field}` is empty: {min} > {max}")]
    EmptyRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// Spawned body sizes must stay strictly positive.
    #[error("smallest spawn size must be positive, got {0}")]
    NonPositiveSize(i64),

    /// An explicitly requested body size is zero, negative or not finite.
    #[error("body size must be positive and finite, got {0}")]
    BodySize(f64),

    /// A radius or falloff distance that must be positive is not.
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// Restitution outside `[0, 1]`.
    #[error("restitution must lie in [0, 1], got {0}")]
    Restitution(f64),

    /// The driver cannot tick with a zero interval.
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}
