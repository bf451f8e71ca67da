//! Scalar helpers for points in the plane, layered on top of `glam`.

use glam::DVec2;

/// Euclidean distance between two points.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    let d = b - a;
    d.x.hypot(d.y)
}

/// Heading from `from` towards `to`, in radians, measured from +x.
///
/// Coincident points give `0.0`, matching `atan2(0, 0)`.
pub fn angle_between(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Length of a vector.
pub fn magnitude(v: DVec2) -> f64 {
    v.x.hypot(v.y)
}

/// Unit vector pointing along `angle`.
pub fn unit_from_angle(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_and_magnitude_agree() {
        let a = DVec2::new(1.0, 2.0);
        let b = DVec2::new(4.0, 6.0);
        assert_relative_eq!(distance(a, b), 5.0);
        assert_relative_eq!(magnitude(b - a), 5.0);
    }

    #[test]
    fn angle_points_towards_target() {
        let origin = DVec2::ZERO;
        assert_relative_eq!(
            angle_between(origin, DVec2::new(0.0, 3.0)),
            std::f64::consts::FRAC_PI_2
        );
        assert_relative_eq!(
            angle_between(origin, DVec2::new(-2.0, 0.0)),
            std::f64::consts::PI
        );
        assert_eq!(angle_between(origin, origin), 0.0);
    }

    #[test]
    fn unit_from_angle_has_unit_length() {
        let u = unit_from_angle(1.234);
        assert_relative_eq!(magnitude(u), 1.0, epsilon = 1e-12);
    }
}
