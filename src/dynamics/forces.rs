use glam::DVec2;

use crate::core::{body::Body, well::Well};
use crate::utils::math::{angle_between, distance, unit_from_angle};

/// Something that nudges a body's velocity once per tick.
pub trait ForceGenerator: Send + Sync {
    fn apply(&self, body: &mut Body);
}

/// Uniform vertical acceleration added straight to `velocity.y`.
#[derive(Debug, Clone, Copy)]
pub struct UniformGravity {
    pub gravity: f64,
}

impl UniformGravity {
    pub fn new(gravity: f64) -> Self {
        Self { gravity }
    }
}

impl ForceGenerator for UniformGravity {
    fn apply(&self, body: &mut Body) {
        body.velocity.y += self.gravity;
    }
}

/// Pull of every well within `influence_radius`, applied in well order.
///
/// Magnitude is `strength / (distance / falloff)`. There is no lower bound on the
/// distance, so a body sitting exactly on a well receives a non-finite kick.
#[derive(Debug, Clone, Copy)]
pub struct WellField<'a> {
    pub wells: &'a [Well],
    pub influence_radius: f64,
    pub falloff: f64,
}

impl<'a> WellField<'a> {
    pub fn new(wells: &'a [Well], influence_radius: f64, falloff: f64) -> Self {
        Self {
            wells,
            influence_radius,
            falloff,
        }
    }

    /// Velocity change a single well imparts on a body at `position`, if in range.
    pub fn pull(&self, well: &Well, position: DVec2) -> Option<DVec2> {
        let dist = distance(position, well.position);
        if dist >= self.influence_radius {
            return None;
        }
        let force = well.strength / (dist / self.falloff);
        Some(unit_from_angle(angle_between(position, well.position)) * force)
    }
}

impl ForceGenerator for WellField<'_> {
    fn apply(&self, body: &mut Body) {
        for well in self.wells {
            if let Some(delta) = self.pull(well, body.position) {
                body.velocity.x += delta.x;
                body.velocity.y += delta.y;
            }
        }
    }
}
