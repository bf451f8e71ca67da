use glam::DVec2;

use crate::utils::{allocator::EntityId, math::distance};

/// Fixed attractor. Never moves once placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Well {
    pub id: EntityId,
    pub position: DVec2,
    pub strength: f64,
}

impl Well {
    pub fn new(id: EntityId, position: DVec2, strength: f64) -> Self {
        Self {
            id,
            position,
            strength,
        }
    }

    /// Whether a click at `point` lands within `pick_radius` of the well.
    pub fn is_picked_by(&self, point: DVec2, pick_radius: f64) -> bool {
        distance(self.position, point) < pick_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_radius_is_exclusive() {
        let well = Well::new(EntityId::new(0), DVec2::new(10.0, 10.0), 0.5);
        assert!(well.is_picked_by(DVec2::new(10.0, 29.9), 20.0));
        assert!(!well.is_picked_by(DVec2::new(10.0, 30.0), 20.0));
    }
}
