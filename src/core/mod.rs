//! Core types describing the simulated entities.

pub mod body;
pub mod types;
pub mod well;

pub use body::{Body, BoundaryContact};
pub use types::{BodyParams, Bounds, ColorTag, ShapeTag};
pub use well::Well;
