use glam::DVec2;

use super::types::{BodyParams, Bounds, ColorTag, ShapeTag};
use crate::dynamics::{
    forces::{ForceGenerator, UniformGravity, WellField},
    integrator::StepContext,
};
use crate::utils::{allocator::EntityId, math::distance};

/// Which boundaries a body touched during its last advance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryContact {
    pub ground: bool,
    pub left_wall: bool,
    pub right_wall: bool,
}

impl BoundaryContact {
    pub fn any(&self) -> bool {
        self.ground || self.left_wall || self.right_wall
    }
}

/// Circular moving body. Its size doubles as its diameter and its mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: EntityId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub shape: ShapeTag,
    pub color: ColorTag,
    pub is_dragged: bool,
    pub drag_offset: DVec2,
}

impl Body {
    /// Builds a body at rest in no drag. `params.size` is trusted to be positive;
    /// [`World::spawn_body_with`](crate::World::spawn_body_with) checks it.
    pub fn new(id: EntityId, position: DVec2, params: BodyParams) -> Self {
        Self {
            id,
            position,
            velocity: params.velocity,
            size: params.size,
            shape: params.shape,
            color: params.color,
            is_dragged: false,
            drag_offset: DVec2::ZERO,
        }
    }

    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    pub fn mass(&self) -> f64 {
        self.size
    }

    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity.length_squared()
    }

    /// Whether `point` lies inside the body's circle.
    pub fn contains(&self, point: DVec2) -> bool {
        distance(self.position, point) < self.radius()
    }

    /// Advances the body by one tick: well pull, gravity, integration, then
    /// floor and wall response. Dragged bodies are left untouched.
    pub fn advance(&mut self, ctx: &StepContext<'_>) -> BoundaryContact {
        if self.is_dragged {
            return BoundaryContact::default();
        }

        WellField::new(ctx.wells, ctx.well_influence_radius, ctx.well_falloff).apply(self);
        UniformGravity::new(ctx.gravity).apply(self);

        let tentative = self.position + self.velocity;
        let (committed, contact) = self.resolve_boundaries(tentative, ctx);
        self.position = committed;
        contact
    }

    fn resolve_boundaries(
        &mut self,
        mut next: DVec2,
        ctx: &StepContext<'_>,
    ) -> (DVec2, BoundaryContact) {
        let Bounds {
            ground_y,
            left_x,
            right_x,
        } = ctx.bounds;
        let half = self.radius();
        let mut contact = BoundaryContact::default();

        if next.y - half <= ground_y {
            next.y = ground_y + half;
            self.velocity.y = -self.velocity.y * ctx.restitution;
            if self.velocity.y.abs() < ctx.rest_threshold {
                self.velocity.y = 0.0;
            }
            contact.ground = true;
        }

        // The left wall wins when a body is wider than the arena.
        if next.x - half <= left_x {
            next.x = left_x + half;
            self.velocity.x = -self.velocity.x * ctx.restitution;
            contact.left_wall = true;
        } else if next.x + half >= right_x {
            next.x = right_x - half;
            self.velocity.x = -self.velocity.x * ctx.restitution;
            contact.right_wall = true;
        }

        (next, contact)
    }

    /// Grabs the body at `cursor`: freezes it and remembers where it was held.
    pub fn begin_drag(&mut self, cursor: DVec2) {
        self.is_dragged = true;
        self.drag_offset = self.position - cursor;
        self.velocity = DVec2::ZERO;
    }

    /// Moves a held body so the grab point follows `cursor`.
    pub fn drag_to(&mut self, cursor: DVec2) {
        self.position = cursor + self.drag_offset;
    }

    /// Releases the body. It stays at rest until the next tick applies forces.
    pub fn end_drag(&mut self) {
        self.is_dragged = false;
    }
}
