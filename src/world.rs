use glam::DVec2;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::time::Duration;

use crate::{
    collision::resolver::CollisionResolver,
    config::WorldConfig,
    core::{
        body::Body,
        types::{BodyParams, Bounds, ColorTag, ShapeTag},
        well::Well,
    },
    dynamics::integrator::{Integrator, StepContext},
    error::{ConfigError, Result},
    utils::{
        allocator::{EntityId, IdAllocator},
        logging::{PhaseTrace, TickPhase},
        profiling::{self, StepProfiler},
    },
};

/// What the renderer needs to draw a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub id: EntityId,
    pub position: DVec2,
    pub size: f64,
    pub shape: ShapeTag,
    pub color: ColorTag,
    pub is_dragged: bool,
}

/// What the renderer needs to draw a well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellSnapshot {
    pub id: EntityId,
    pub position: DVec2,
    pub strength: f64,
}

/// Read-only copy of the world handed to the renderer once per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub gravity: f64,
    pub bounds: Bounds,
    pub bodies: Vec<BodySnapshot>,
    pub wells: Vec<WellSnapshot>,
}

/// Result of a click: either a well went away or a body appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    RemovedWell(EntityId),
    SpawnedBody(EntityId),
}

/// Owns every body and well and advances them one tick at a time.
pub struct World {
    config: WorldConfig,
    bodies: Vec<Body>,
    wells: Vec<Well>,
    gravity: f64,
    ids: IdAllocator,
    rng: StdRng,
    integrator: Integrator,
    resolver: CollisionResolver,
    profiler: StepProfiler,
    tick: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Empty world with the default arena, seeded from entropy.
    pub fn new() -> Self {
        Self::build(WorldConfig::default(), StdRng::from_entropy())
    }

    /// Empty world with the default arena and a reproducible random stream.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(WorldConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Empty world with a custom configuration, seeded from entropy.
    pub fn try_new(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, StdRng::from_entropy()))
    }

    /// Empty world with a custom configuration and a reproducible random stream.
    pub fn try_with_seed(config: WorldConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, StdRng::seed_from_u64(seed)))
    }

    fn build(config: WorldConfig, rng: StdRng) -> Self {
        Self {
            gravity: config.gravity,
            config,
            bodies: Vec::new(),
            wells: Vec::new(),
            ids: IdAllocator::new(),
            rng,
            integrator: Integrator::new(),
            resolver: CollisionResolver::new(),
            profiler: StepProfiler::default(),
            tick: 0,
        }
    }

    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.integrator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.integrator.parallel()
    }

    /// Advances the world by one tick: every body in creation order, then every
    /// unordered pair `(i, j)`, `i < j`, in ascending order.
    pub fn step(&mut self) {
        self.profiler.reset();
        let mut integrate_time = Duration::ZERO;
        let mut collision_time = Duration::ZERO;
        let mut total_time = Duration::ZERO;

        {
            let _total = profiling::ScopedTimer::new(&mut total_time);

            let ctx = StepContext::from_config(&self.wells, self.gravity, &self.config);
            {
                let _trace = PhaseTrace::begin(TickPhase::Integrate, self.tick);
                let _timer = profiling::ScopedTimer::new(&mut integrate_time);
                self.integrator.step(&mut self.bodies, &ctx);
            }

            let _trace = PhaseTrace::begin(TickPhase::Collide, self.tick);
            let _timer = profiling::ScopedTimer::new(&mut collision_time);
            let (checked, hits) = self.resolver.resolve_all(&mut self.bodies);
            self.profiler.pair_checks = checked;
            self.profiler.collisions = hits;
        }

        self.tick += 1;
        self.profiler.integrate_time = integrate_time;
        self.profiler.collision_time = collision_time;
        self.profiler.total_step_time = total_time;
        self.profiler.body_count = self.bodies.len();
        self.profiler.well_count = self.wells.len();
        self.profiler.report();
    }

    /// Spawns a body at `(x, y)` with random velocity, size, shape and color.
    pub fn spawn_body(&mut self, x: f64, y: f64) -> EntityId {
        let params = self.random_body_params();
        self.insert_body(x, y, params)
    }

    /// Spawns a body at `(x, y)` with the given initial state.
    ///
    /// Sizes that are not finite and strictly positive are refused and nothing is spawned.
    pub fn spawn_body_with(&mut self, x: f64, y: f64, params: BodyParams) -> Result<EntityId> {
        if !(params.size.is_finite() && params.size > 0.0) {
            log::debug!("refusing body at ({x:.1}, {y:.1}) with size {}", params.size);
            return Err(ConfigError::BodySize(params.size));
        }
        Ok(self.insert_body(x, y, params))
    }

    fn insert_body(&mut self, x: f64, y: f64, params: BodyParams) -> EntityId {
        let id = self.ids.allocate();
        self.bodies.push(Body::new(id, DVec2::new(x, y), params));
        log::debug!("spawned body {id} at ({x:.1}, {y:.1}), size {}", params.size);
        id
    }

    fn random_body_params(&mut self) -> BodyParams {
        let cfg = &self.config;
        let vx = self.rng.gen_range(cfg.spawn_vx.min..=cfg.spawn_vx.max);
        let vy = self.rng.gen_range(cfg.spawn_vy.min..=cfg.spawn_vy.max);
        let shape = *ShapeTag::ALL
            .choose(&mut self.rng)
            .unwrap_or(&ShapeTag::Circle);
        let color = *ColorTag::ALL
            .choose(&mut self.rng)
            .unwrap_or(&ColorTag::White);
        let size = self.rng.gen_range(cfg.spawn_size.min..=cfg.spawn_size.max) as f64;
        BodyParams {
            velocity: DVec2::new(vx, vy),
            size,
            shape,
            color,
        }
    }

    /// Spawns a well at `at`, or at a random spot inside the arena if `None`.
    pub fn spawn_well(&mut self, at: Option<(f64, f64)>) -> EntityId {
        match at {
            Some((x, y)) => self.spawn_well_at(x, y),
            None => self.spawn_well_random(),
        }
    }

    pub fn spawn_well_at(&mut self, x: f64, y: f64) -> EntityId {
        self.spawn_well_with(x, y, self.config.default_well_strength)
    }

    pub fn spawn_well_random(&mut self) -> EntityId {
        let x = self
            .rng
            .gen_range(self.config.well_spawn_x.min..=self.config.well_spawn_x.max);
        let y = self
            .rng
            .gen_range(self.config.well_spawn_y.min..=self.config.well_spawn_y.max);
        self.spawn_well_at(x as f64, y as f64)
    }

    pub fn spawn_well_with(&mut self, x: f64, y: f64, strength: f64) -> EntityId {
        let id = self.ids.allocate();
        self.wells.push(Well::new(id, DVec2::new(x, y), strength));
        log::debug!("spawned well {id} at ({x:.1}, {y:.1}), strength {strength}");
        id
    }

    /// First well (in creation order) within the pick radius of `(x, y)`.
    pub fn pick_well(&self, x: f64, y: f64) -> Option<EntityId> {
        let point = DVec2::new(x, y);
        self.wells
            .iter()
            .find(|well| well.is_picked_by(point, self.config.well_pick_radius))
            .map(|well| well.id)
    }

    /// Most recently spawned body whose circle contains `(x, y)`.
    pub fn pick_body(&self, x: f64, y: f64) -> Option<EntityId> {
        let point = DVec2::new(x, y);
        self.bodies
            .iter()
            .rev()
            .find(|body| body.contains(point))
            .map(|body| body.id)
    }

    /// Removes the first well near `(x, y)`; spawns a body there when none is close.
    pub fn try_remove_well(&mut self, x: f64, y: f64) -> ClickOutcome {
        let point = DVec2::new(x, y);
        let radius = self.config.well_pick_radius;
        if let Some(index) = self
            .wells
            .iter()
            .position(|well| well.is_picked_by(point, radius))
        {
            let well = self.wells.remove(index);
            log::debug!("removed well {}", well.id);
            return ClickOutcome::RemovedWell(well.id);
        }
        ClickOutcome::SpawnedBody(self.spawn_body(x, y))
    }

    /// Removes a specific well. Returns `false` if it does not exist.
    pub fn remove_well(&mut self, id: EntityId) -> bool {
        match self.wells.iter().position(|well| well.id == id) {
            Some(index) => {
                self.wells.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops every body and well. Gravity and the tick counter are kept.
    pub fn clear_world(&mut self) {
        log::debug!(
            "clearing {} bodies and {} wells",
            self.bodies.len(),
            self.wells.len()
        );
        self.bodies.clear();
        self.wells.clear();
    }

    pub fn adjust_gravity(&mut self, delta: f64) {
        self.gravity += delta;
        log::debug!("gravity now {:.2}", self.gravity);
    }

    /// Strengthens the downward pull by one step.
    pub fn increase_gravity(&mut self) {
        self.adjust_gravity(-self.config.gravity_step);
    }

    /// Weakens the downward pull by one step.
    pub fn decrease_gravity(&mut self) {
        self.adjust_gravity(self.config.gravity_step);
    }

    pub fn begin_drag(&mut self, id: EntityId, x: f64, y: f64) -> bool {
        self.with_body(id, |body| body.begin_drag(DVec2::new(x, y)))
    }

    pub fn update_drag(&mut self, id: EntityId, x: f64, y: f64) -> bool {
        self.with_body(id, |body| body.drag_to(DVec2::new(x, y)))
    }

    pub fn end_drag(&mut self, id: EntityId) -> bool {
        self.with_body(id, Body::end_drag)
    }

    fn with_body<F>(&mut self, id: EntityId, f: F) -> bool
    where
        F: FnOnce(&mut Body),
    {
        match self.body_mut(id) {
            Some(body) => {
                f(body);
                true
            }
            None => {
                log::debug!("no body {id}; drag command ignored");
                false
            }
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn wells(&self) -> &[Well] {
        &self.wells
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id == id)
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|body| body.id == id)
    }

    pub fn well(&self, id: EntityId) -> Option<&Well> {
        self.wells.iter().find(|well| well.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn well_count(&self) -> usize {
        self.wells.len()
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn profiler(&self) -> &StepProfiler {
        &self.profiler
    }

    /// Σ size·velocity over bodies that are not held.
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies
            .iter()
            .filter(|body| !body.is_dragged)
            .map(Body::momentum)
            .sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            gravity: self.gravity,
            bounds: self.config.bounds,
            bodies: self
                .bodies
                .iter()
                .map(|body| BodySnapshot {
                    id: body.id,
                    position: body.position,
                    size: body.size,
                    shape: body.shape,
                    color: body.color,
                    is_dragged: body.is_dragged,
                })
                .collect(),
            wells: self
                .wells
                .iter()
                .map(|well| WellSnapshot {
                    id: well.id,
                    position: well.position,
                    strength: well.strength,
                })
                .collect(),
        }
    }
}
