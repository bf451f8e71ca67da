//! Simulation dynamics: well and gravity forces, and the per-tick body pass.

pub mod forces;
pub mod integrator;

pub use forces::{ForceGenerator, UniformGravity, WellField};
pub use integrator::{Integrator, StepContext};
