//! Hypotrochoid curve generation and canvas scaling
//!
//! A hypotrochoid is traced by a pen fixed at distance `d` from the centre of
//! a wheel of radius `r` rolling inside a ring of radius `R`:
//!
//! ```text
//! x(t) = (R - r) cos(t) + d cos((R - r) t / r)
//! y(t) = (R - r) sin(t) - d sin((R - r) t / r)
//! ```
//!
//! The parameter runs over `loops` full turns so the curve closes exactly.

use std::f64::consts::TAU;

use glam::DVec2;
use spiro_config::{DEFAULT_CURVE_STEPS, DEFAULT_GHOST_STEPS};

use crate::types::MechanismParams;

/// Greatest common divisor (Euclid). `gcd(a, 0) == a`.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of wheel revolutions needed for the curve to close.
///
/// Radii are truncated to integers with R >= 2 and r >= 1.
pub fn compute_loops(outer_radius: f64, inner_radius: f64) -> u64 {
    let outer = (outer_radius.floor() as u64).max(2);
    let inner = (inner_radius.floor() as u64).max(1);
    match gcd(outer, inner) {
        0 => 1,
        g => inner / g,
    }
}

/// Compute `steps + 1` curve points in math space, centred at the origin.
///
/// Parameters are sanitized first, so the result is always finite.
pub fn compute_curve(params: MechanismParams, steps: usize) -> Vec<DVec2> {
    let params = params.sanitized();
    let big_r = params.outer_radius;
    let r = params.inner_radius;
    let d = params.pen_offset;

    let loops = compute_loops(big_r, r) as f64;
    let rolling = big_r - r;
    let ratio = rolling / r;

    (0..=steps)
        .map(|i| {
            let t = if steps == 0 {
                0.0
            } else {
                TAU * loops * i as f64 / steps as f64
            };
            DVec2::new(
                rolling * t.cos() + d * (ratio * t).cos(),
                rolling * t.sin() - d * (ratio * t).sin(),
            )
        })
        .collect()
}

/// Full-resolution stroke curve (6001 points).
pub fn compute_stroke_curve(params: MechanismParams) -> Vec<DVec2> {
    compute_curve(params, DEFAULT_CURVE_STEPS)
}

/// Low-resolution preview curve (901 points) of the same shape.
pub fn compute_ghost_curve(params: MechanismParams) -> Vec<DVec2> {
    compute_curve(params, DEFAULT_GHOST_STEPS)
}

/// Map math-space points into canvas pixels.
///
/// The largest coordinate extent is fitted into `canvas_size / 2 - margin`
/// and the result is centred on the canvas.
pub fn scale_points(points: &[DVec2], canvas_size: f64, margin: f64) -> Vec<DVec2> {
    if points.is_empty() {
        return Vec::new();
    }

    let max_extent = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(1.0_f64, f64::max);

    let scale = (canvas_size / 2.0 - margin) / max_extent;
    let center = DVec2::splat(canvas_size / 2.0);

    points.iter().map(|&p| center + p * scale).collect()
}

/// Geometry of the toy mechanism at a given wheel angle
///
/// Used by preview collaborators to draw the ring, the rolling wheel and the
/// pen arm. All positions are in math space (origin at ring centre).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanismPose {
    /// Centre of the rolling wheel
    pub wheel_center: DVec2,
    /// Effective wheel radius
    pub wheel_radius: f64,
    /// Rotation of the wheel about its own centre, in radians
    pub wheel_rotation: f64,
    /// Pen tip position
    pub pen: DVec2,
}

impl MechanismPose {
    /// Pose of the mechanism after the wheel has travelled `angle` radians
    /// around the ring.
    pub fn at(params: MechanismParams, angle: f64) -> Self {
        let params = params.sanitized();
        let rolling = params.outer_radius - params.inner_radius;
        let wheel_center = DVec2::from_angle(angle) * rolling;
        let wheel_rotation = -rolling / params.inner_radius * angle;
        let pen = wheel_center + DVec2::from_angle(wheel_rotation) * params.pen_offset;

        Self {
            wheel_center,
            wheel_radius: params.inner_radius,
            wheel_rotation,
            pen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(150, 80), 10);
        assert_eq!(gcd(80, 150), 10);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(12, 8), 4);
    }

    #[test]
    fn test_gcd_edge_cases() {
        assert_eq!(gcd(5, 5), 5);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_loops() {
        // loops = r / gcd(R, r) = 80 / 10
        assert_eq!(compute_loops(150.0, 80.0), 8);
        assert_eq!(compute_loops(100.0, 50.0), 1);
        // Degenerate radii are floored to R = 2, r = 1
        assert_eq!(compute_loops(0.0, 0.0), 1);
    }

    #[test]
    fn test_point_count() {
        assert_eq!(compute_stroke_curve(MechanismParams::new(150.0, 80.0, 100.0)).len(), 6001);
        assert_eq!(compute_ghost_curve(MechanismParams::new(150.0, 80.0, 100.0)).len(), 901);
        assert_eq!(compute_curve(MechanismParams::default(), 0).len(), 1);
    }

    #[test]
    fn test_inner_equal_outer_is_finite() {
        let points = compute_stroke_curve(MechanismParams::new(100.0, 100.0, 50.0));
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_inner_greater_than_outer_is_finite() {
        let points = compute_stroke_curve(MechanismParams::new(80.0, 100.0, 50.0));
        assert!(points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_sub_unit_outer_radius_follows_formula() {
        // R = 0.5 keeps its value; r clamps to 1, one loop
        let points = compute_curve(MechanismParams::new(0.5, 1.0, 1.0), 8);
        assert_eq!(points.len(), 9);
        for (i, p) in points.iter().enumerate() {
            let t = std::f64::consts::TAU * i as f64 / 8.0;
            let x = -0.5 * t.cos() + (-0.5 * t).cos();
            let y = -0.5 * t.sin() - (-0.5 * t).sin();
            assert_relative_eq!(p.x, x, epsilon = 1e-9);
            assert_relative_eq!(p.y, y, epsilon = 1e-9);
        }
        assert_relative_eq!(points[2].x, 0.70710678, epsilon = 1e-6);
        assert_relative_eq!(points[2].y, 0.20710678, epsilon = 1e-6);
        assert_relative_eq!(points[4].x, 0.5, epsilon = 1e-9);
        assert_relative_eq!(points[4].y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(points[6].x, -0.70710678, epsilon = 1e-6);
        assert_relative_eq!(points[6].y, 1.20710678, epsilon = 1e-6);
    }

    #[test]
    fn test_curve_closes() {
        let points = compute_stroke_curve(MechanismParams::new(150.0, 80.0, 100.0));
        let first = points[0];
        let last = points[points.len() - 1];
        assert_relative_eq!(first.x, last.x, epsilon = 1e-6);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-6);
        // t = 0 puts the pen at (R - r + d, 0)
        assert_relative_eq!(first.x, 170.0, epsilon = 1e-9);
        assert_relative_eq!(first.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ghost_is_subsampled_stroke() {
        let params = MechanismParams::new(180.0, 45.0, 120.0);
        let full = compute_curve(params, 9000);
        let ghost = compute_curve(params, 900);
        for (i, g) in ghost.iter().enumerate() {
            let f = full[i * 10];
            assert_relative_eq!(g.x, f.x, epsilon = 1e-6);
            assert_relative_eq!(g.y, f.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_points_are_centered() {
        let points = compute_stroke_curve(MechanismParams::new(150.0, 80.0, 100.0));
        let scaled = scale_points(&points, 390.0, 28.0);
        assert_eq!(scaled.len(), points.len());

        for p in &scaled {
            assert!(p.x >= 28.0 - 1e-9 && p.x <= 390.0 - 28.0 + 1e-9);
            assert!(p.y >= 28.0 - 1e-9 && p.y <= 390.0 - 28.0 + 1e-9);
        }

        // The widest point touches the margin
        let max_x = scaled.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        assert_relative_eq!(max_x, 390.0 - 28.0, epsilon = 1e-9);
    }

    #[test]
    fn test_scale_empty_points() {
        assert!(scale_points(&[], 390.0, 28.0).is_empty());
    }

    #[test]
    fn test_scale_tiny_extent_floored() {
        // Extent below 1 is floored, so a single point near the origin stays near centre
        let scaled = scale_points(&[DVec2::new(0.5, 0.0)], 100.0, 10.0);
        assert_relative_eq!(scaled[0].x, 70.0, epsilon = 1e-9);
        assert_relative_eq!(scaled[0].y, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mechanism_pose_matches_curve() {
        let params = MechanismParams::new(150.0, 80.0, 100.0);
        let pose = MechanismPose::at(params, 0.0);
        assert_relative_eq!(pose.wheel_center.x, 70.0, epsilon = 1e-9);
        assert_relative_eq!(pose.pen.x, 170.0, epsilon = 1e-9);

        // The pen traces the same hypotrochoid as the curve generator
        let t = 1.234;
        let pose = MechanismPose::at(params, t);
        let ratio = 70.0 / 80.0;
        let x = 70.0 * t.cos() + 100.0 * (ratio * t).cos();
        let y = 70.0 * t.sin() - 100.0 * (ratio * t).sin();
        assert_relative_eq!(pose.pen.x, x, epsilon = 1e-9);
        assert_relative_eq!(pose.pen.y, y, epsilon = 1e-9);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn curve_is_always_finite(
                outer in 0.001f64..500.0,
                inner in -500.0f64..500.0,
                offset in -500.0f64..500.0,
            ) {
                let points = compute_curve(MechanismParams::new(outer, inner, offset), 600);
                prop_assert!(points.iter().all(|p| p.is_finite()));
            }

            #[test]
            fn curve_has_steps_plus_one_points(steps in 0usize..2000) {
                let points = compute_curve(MechanismParams::default(), steps);
                prop_assert_eq!(points.len(), steps + 1);
            }

            #[test]
            fn scaled_points_stay_inside_margin(
                outer in 2.0f64..300.0,
                inner in 1.0f64..300.0,
                offset in 0.0f64..300.0,
                size in 64.0f64..1024.0,
            ) {
                let margin = 28.0;
                let points = compute_curve(MechanismParams::new(outer, inner, offset), 500);
                let scaled = scale_points(&points, size, margin);
                for p in scaled {
                    prop_assert!(p.x >= margin - 1e-6 && p.x <= size - margin + 1e-6);
                    prop_assert!(p.y >= margin - 1e-6 && p.y <= size - margin + 1e-6);
                }
            }
        }
    }
}
