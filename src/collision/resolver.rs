use glam::DVec2;

use crate::core::body::Body;
use crate::utils::math::{angle_between, distance, unit_from_angle};

/// What happened when a pair was found overlapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOutcome {
    /// `min_distance - distance` before separation.
    pub overlap: f64,
    /// Unit vector from the first body towards the second.
    pub normal: DVec2,
}

/// Pairwise overlap test and response between circular bodies.
///
/// Velocities are exchanged with the 1D elastic formula applied independently on
/// each axis, using size as mass. Bodies are then pushed apart along the line of
/// centres by half the overlap each.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollisionResolver;

impl CollisionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Returns the overlap depth if the two bodies interpenetrate.
    pub fn detect(a: &Body, b: &Body) -> Option<f64> {
        let min_distance = (a.size + b.size) / 2.0;
        let dist = distance(a.position, b.position);
        (dist < min_distance).then_some(min_distance - dist)
    }

    /// Resolves one pair in place. Pairs involving a held body are skipped.
    pub fn resolve(&self, a: &mut Body, b: &mut Body) -> Option<CollisionOutcome> {
        if a.is_dragged || b.is_dragged {
            return None;
        }

        let overlap = Self::detect(a, b)?;
        let normal = unit_from_angle(angle_between(a.position, b.position));

        let (v1, v2) = elastic_exchange(a.mass(), a.velocity, b.mass(), b.velocity);
        a.velocity = v1;
        b.velocity = v2;

        let push = normal * (overlap / 2.0);
        a.position -= push;
        b.position += push;

        Some(CollisionOutcome { overlap, normal })
    }

    /// Resolves every unordered pair `(i, j)` with `i < j`, in ascending order, in
    /// place. Later pairs see the results of earlier ones. Returns `(checked, hits)`.
    pub fn resolve_all(&self, bodies: &mut [Body]) -> (usize, usize) {
        let mut checked = 0;
        let mut hits = 0;
        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                checked += 1;
                if self.resolve(a, b).is_some() {
                    hits += 1;
                }
            }
        }
        (checked, hits)
    }
}

/// Component-wise 1D elastic collision between masses `m1` and `m2`.
pub fn elastic_exchange(m1: f64, u1: DVec2, m2: f64, u2: DVec2) -> (DVec2, DVec2) {
    let total = m1 + m2;
    let v1 = DVec2::new(
        (u1.x * (m1 - m2) + 2.0 * m2 * u2.x) / total,
        (u1.y * (m1 - m2) + 2.0 * m2 * u2.y) / total,
    );
    let v2 = DVec2::new(
        (u2.x * (m2 - m1) + 2.0 * m1 * u1.x) / total,
        (u2.y * (m2 - m1) + 2.0 * m1 * u1.y) / total,
    );
    (v1, v2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BodyParams;
    use crate::utils::allocator::EntityId;
    use approx::assert_relative_eq;

    fn body(id: u64, x: f64, y: f64, vx: f64, vy: f64, size: f64) -> Body {
        Body::new(
            EntityId::new(id),
            DVec2::new(x, y),
            BodyParams::new(DVec2::new(vx, vy), size),
        )
    }

    #[test]
    fn equal_masses_swap_velocities() {
        let (v1, v2) = elastic_exchange(20.0, DVec2::new(3.0, -1.0), 20.0, DVec2::new(-2.0, 4.0));
        assert_eq!(v1, DVec2::new(-2.0, 4.0));
        assert_eq!(v2, DVec2::new(3.0, -1.0));
    }

    #[test]
    fn separated_bodies_are_left_alone() {
        let mut a = body(0, 0.0, 0.0, 1.0, 0.0, 20.0);
        let mut b = body(1, 20.0, 0.0, -1.0, 0.0, 20.0);
        assert!(CollisionResolver::new().resolve(&mut a, &mut b).is_none());
        assert_eq!(a.velocity.x, 1.0);
        assert_eq!(b.velocity.x, -1.0);
    }

    #[test]
    fn overlap_is_split_evenly_along_line_of_centres() {
        let mut a = body(0, 0.0, 0.0, 1.0, 0.0, 20.0);
        let mut b = body(1, 16.0, 0.0, -1.0, 0.0, 20.0);
        let outcome = CollisionResolver::new()
            .resolve(&mut a, &mut b)
            .expect("bodies overlap");
        assert_relative_eq!(outcome.overlap, 4.0);
        assert_relative_eq!(outcome.normal.x, 1.0);
        assert_relative_eq!(a.position.x, -2.0);
        assert_relative_eq!(b.position.x, 18.0);
        assert_relative_eq!(a.position.y, 0.0);
        assert_eq!(a.velocity.x, -1.0);
        assert_eq!(b.velocity.x, 1.0);
    }

    #[test]
    fn momentum_is_conserved_for_unequal_masses() {
        let mut a = body(0, 0.0, 0.0, 2.5, -1.0, 36.0);
        let mut b = body(1, 10.0, 12.0, -0.5, 3.0, 22.0);
        let before = a.momentum() + b.momentum();
        CollisionResolver::new()
            .resolve(&mut a, &mut b)
            .expect("bodies overlap");
        let after = a.momentum() + b.momentum();
        assert_relative_eq!(before.x, after.x, epsilon = 1e-9);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-9);
    }

    #[test]
    fn dragged_pairs_are_skipped_even_when_overlapping() {
        let mut a = body(0, 0.0, 0.0, 1.0, 0.0, 20.0);
        let mut b = body(1, 5.0, 0.0, -1.0, 0.0, 20.0);
        b.begin_drag(DVec2::new(5.0, 0.0));
        assert!(CollisionResolver::new().resolve(&mut a, &mut b).is_none());
        assert_eq!(a.position, DVec2::ZERO);
        assert_eq!(b.position, DVec2::new(5.0, 0.0));
    }

    #[test]
    fn resolve_all_visits_every_pair_once() {
        let mut bodies: Vec<Body> = (0..5)
            .map(|i| body(i, i as f64 * 100.0, 0.0, 0.0, 0.0, 20.0))
            .collect();
        let (checked, hits) = CollisionResolver::new().resolve_all(&mut bodies);
        assert_eq!(checked, 10);
        assert_eq!(hits, 0);
    }
}
