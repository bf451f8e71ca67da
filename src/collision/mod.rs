//! Pairwise circle collision detection and elastic response.

pub mod resolver;

pub use resolver::{elastic_exchange, CollisionOutcome, CollisionResolver};
