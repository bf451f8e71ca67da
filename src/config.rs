//! Global configuration constants and the tunable [`WorldConfig`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::types::Bounds;
use crate::error::{ConfigError, Result};

/// Starting vertical acceleration per tick (negative is down).
pub const DEFAULT_GRAVITY: f64 = -0.2;

/// Amount one gravity key press changes gravity by.
pub const DEFAULT_GRAVITY_STEP: f64 = 0.05;

/// Height of the floor.
pub const DEFAULT_GROUND_LEVEL: f64 = -250.0;

/// Horizontal position of the left wall.
pub const DEFAULT_LEFT_WALL: f64 = -380.0;

/// Horizontal position of the right wall.
pub const DEFAULT_RIGHT_WALL: f64 = 380.0;

/// Velocity fraction kept after hitting the floor or a wall.
pub const DEFAULT_RESTITUTION: f64 = 0.8;

/// Post-bounce vertical speeds below this are zeroed.
pub const DEFAULT_REST_THRESHOLD: f64 = 1.0;

/// Wells only attract bodies closer than this.
pub const DEFAULT_WELL_INFLUENCE_RADIUS: f64 = 200.0;

/// Distance at which a well pulls with exactly its strength.
pub const DEFAULT_WELL_FALLOFF: f64 = 50.0;

/// Clicks closer than this to a well remove it.
pub const DEFAULT_WELL_PICK_RADIUS: f64 = 20.0;

/// Strength given to wells spawned without an explicit one.
pub const DEFAULT_WELL_STRENGTH: f64 = 0.5;

/// Sleep between driver ticks (roughly 60 FPS).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 17;

/// Continuous range sampled uniformly, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRange {
    pub min: f64,
    pub max: f64,
}

impl SpawnRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Integer range sampled uniformly, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Every tunable of a [`World`](crate::World) and its driver.
///
/// Missing fields fall back to the defaults when deserialised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub gravity: f64,
    pub gravity_step: f64,
    pub bounds: Bounds,
    pub restitution: f64,
    pub rest_threshold: f64,
    pub well_influence_radius: f64,
    pub well_falloff: f64,
    pub well_pick_radius: f64,
    pub default_well_strength: f64,
    pub spawn_vx: SpawnRange,
    pub spawn_vy: SpawnRange,
    pub spawn_size: IntRange,
    pub well_spawn_x: IntRange,
    pub well_spawn_y: IntRange,
    pub tick_interval_ms: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            gravity_step: DEFAULT_GRAVITY_STEP,
            bounds: Bounds::default(),
            restitution: DEFAULT_RESTITUTION,
            rest_threshold: DEFAULT_REST_THRESHOLD,
            well_influence_radius: DEFAULT_WELL_INFLUENCE_RADIUS,
            well_falloff: DEFAULT_WELL_FALLOFF,
            well_pick_radius: DEFAULT_WELL_PICK_RADIUS,
            default_well_strength: DEFAULT_WELL_STRENGTH,
            spawn_vx: SpawnRange::new(-2.0, 2.0),
            spawn_vy: SpawnRange::new(0.0, 5.0),
            spawn_size: IntRange::new(20, 40),
            well_spawn_x: IntRange::new(-300, 300),
            well_spawn_y: IntRange::new(-200, 200),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl WorldConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Rejects configurations that would make spawning panic or the geometry meaningless.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("gravity", self.gravity),
            ("gravity_step", self.gravity_step),
            ("bounds.ground_y", self.bounds.ground_y),
            ("bounds.left_x", self.bounds.left_x),
            ("bounds.right_x", self.bounds.right_x),
            ("restitution", self.restitution),
            ("rest_threshold", self.rest_threshold),
            ("well_influence_radius", self.well_influence_radius),
            ("well_falloff", self.well_falloff),
            ("well_pick_radius", self.well_pick_radius),
            ("default_well_strength", self.default_well_strength),
            ("spawn_vx.min", self.spawn_vx.min),
            ("spawn_vx.max", self.spawn_vx.max),
            ("spawn_vy.min", self.spawn_vy.min),
            ("spawn_vy.max", self.spawn_vy.max),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(field));
        }

        if self.bounds.left_x >= self.bounds.right_x {
            return Err(ConfigError::InvertedWalls {
                left: self.bounds.left_x,
                right: self.bounds.right_x,
            });
        }

        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Restitution(self.restitution));
        }

        for (field, value) in [
            ("well_influence_radius", self.well_influence_radius),
            ("well_falloff", self.well_falloff),
            ("well_pick_radius", self.well_pick_radius),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, range) in [("spawn_vx", self.spawn_vx), ("spawn_vy", self.spawn_vy)] {
            if range.min > range.max {
                return Err(ConfigError::EmptyRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        for (field, range) in [
            ("spawn_size", self.spawn_size),
            ("well_spawn_x", self.well_spawn_x),
            ("well_spawn_y", self.well_spawn_y),
        ] {
            if range.min > range.max {
                return Err(ConfigError::EmptyRange {
                    field,
                    min: range.min as f64,
                    max: range.max as f64,
                });
            }
        }

        if self.spawn_size.min <= 0 {
            return Err(ConfigError::NonPositiveSize(self.spawn_size.min));
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(())
    }
}
