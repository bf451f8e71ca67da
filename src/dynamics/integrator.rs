#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::WorldConfig;
use crate::core::{
    body::{Body, BoundaryContact},
    types::Bounds,
    well::Well,
};

/// Read-only environment every body is advanced against during one tick.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub wells: &'a [Well],
    pub gravity: f64,
    pub bounds: Bounds,
    pub restitution: f64,
    pub rest_threshold: f64,
    pub well_influence_radius: f64,
    pub well_falloff: f64,
}

impl<'a> StepContext<'a> {
    pub fn from_config(wells: &'a [Well], gravity: f64, config: &WorldConfig) -> Self {
        Self {
            wells,
            gravity,
            bounds: config.bounds,
            restitution: config.restitution,
            rest_threshold: config.rest_threshold,
            well_influence_radius: config.well_influence_radius,
            well_falloff: config.well_falloff,
        }
    }
}

/// Per-tick body pass. Every body only reads shared state and writes itself, so the
/// parallel pass yields the same numbers as the sequential one.
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    parallel: bool,
}

impl Integrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Advances every body in creation order. Returns how many touched a boundary.
    pub fn step(&self, bodies: &mut [Body], ctx: &StepContext<'_>) -> usize {
        if self.parallel {
            return Self::step_parallel(bodies, ctx);
        }
        Self::step_sequential(bodies, ctx)
    }

    fn step_sequential(bodies: &mut [Body], ctx: &StepContext<'_>) -> usize {
        bodies
            .iter_mut()
            .map(|body| body.advance(ctx))
            .filter(BoundaryContact::any)
            .count()
    }

    #[cfg(feature = "parallel")]
    fn step_parallel(bodies: &mut [Body], ctx: &StepContext<'_>) -> usize {
        bodies
            .par_iter_mut()
            .map(|body| body.advance(ctx))
            .filter(BoundaryContact::any)
            .count()
    }

    #[cfg(not(feature = "parallel"))]
    fn step_parallel(bodies: &mut [Body], ctx: &StepContext<'_>) -> usize {
        Self::step_sequential(bodies, ctx)
    }
}
