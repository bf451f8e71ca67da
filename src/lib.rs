//! Gravity Sandbox – a small 2D physics toy.
//!
//! Bodies fall under uniform gravity, are pulled by fixed gravity wells, bounce off
//! a floor and two walls, and collide elastically with each other. The [`World`]
//! owns all state and advances it one fixed tick at a time; a [`Driver`] applies
//! queued input [`Command`]s between ticks and hands a [`WorldSnapshot`] to whatever
//! renders it.

pub mod collision;
pub mod config;
pub mod core;
pub mod driver;
pub mod dynamics;
pub mod error;
pub mod input;
pub mod utils;
pub mod world;

pub use glam::DVec2;

pub use collision::{elastic_exchange, CollisionOutcome, CollisionResolver};
pub use config::{IntRange, SpawnRange, WorldConfig};
pub use crate::core::{
    body::{Body, BoundaryContact},
    types::{BodyParams, Bounds, ColorTag, ShapeTag},
    well::Well,
};
pub use driver::{Command, CommandQueue, Driver, FrameSink, NullSink};
pub use dynamics::{ForceGenerator, Integrator, StepContext, UniformGravity, WellField};
pub use error::ConfigError;
pub use input::{InputEvent, InputMapper, Key, CONTROLS_HELP};
pub use utils::allocator::EntityId;
pub use utils::profiling::StepProfiler;
pub use world::{BodySnapshot, ClickOutcome, WellSnapshot, World, WorldSnapshot};
