// ==============================================================================
// steering.rs — STEERING GEOMETRY + PROFILE GENERATION
// ==============================================================================
// Responsibilities:
// - Convert steering-wheel angle into road-wheel angle (gear ratio)
// - Bicycle-model turn radius with the straight-line cutoff
// - Generate the per-step steering-angle sequences the integrator consumes
//
// Given:
// - steering_ratio (wheel deg per road deg)
// - wheelbase
// - ramp targets + slew rate
//
// turn_radius(...):
// - R = wheelbase / tan(road_angle)
// - Below STRAIGHT_ANGLE_EPS the tangent is near-vertical; a finite R there
//   would be numerically huge and pollute ay downstream, so R is +inf.
//
// ramp_profile(...):
// - Piecewise-linear slew between consecutive targets at a fixed rate,
//   one angle per time step, final target appended once at the end.
// ==============================================================================

/// Road-wheel angles below this are treated as driving straight.
pub const STRAIGHT_ANGLE_EPS: f64 = 1e-6; // rad

/// Steering-wheel angle (deg) -> road-wheel angle (rad).
#[inline]
pub fn road_wheel_angle(steering_ratio: f64, steering_deg: f64) -> f64 {
    (steering_deg / steering_ratio).to_radians()
}

/// Bicycle-model turn radius, meters. Positive infinity when straight.
/// Sign follows the tangent of the road-wheel angle.
#[inline]
pub fn turn_radius(wheelbase: f64, road_angle_rad: f64) -> f64 {
    if road_angle_rad.abs() < STRAIGHT_ANGLE_EPS {
        f64::INFINITY
    } else {
        wheelbase / road_angle_rad.tan()
    }
}

/// Zero steering for a fixed number of steps.
pub fn straight_profile(steps: usize) -> Vec<f64> {
    vec![0.0; steps]
}

/// Piecewise-linear steering ramp through `targets` (deg) at `rate` deg/s,
/// one angle per `dt` step. Each segment starts exactly on its start target;
/// the final target is appended once after the last segment.
pub fn ramp_profile(targets: &[f64], rate: f64, dt: f64) -> Vec<f64> {
    let mut profile = Vec::new();

    for pair in targets.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let direction = (end - start).signum();
        let span = (end - start).abs();
        let steps = (span / rate / dt) as usize;
        for s in 0..steps {
            profile.push(start + direction * s as f64 * rate * dt);
        }
    }
    if let Some(last) = targets.last() {
        profile.push(*last);
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const WHEELBASE: f64 = 2.8;

    #[test]
    fn road_wheel_angle_applies_gear_ratio() {
        let angle = road_wheel_angle(20.0, -100.0);
        assert_relative_eq!(angle, (-5.0f64).to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn zero_angle_radius_is_infinite() {
        assert_eq!(turn_radius(WHEELBASE, 0.0), f64::INFINITY);
    }

    #[test]
    fn radius_grows_unbounded_then_snaps_to_infinity() {
        // Shrinking the angle toward the cutoff grows |R| monotonically.
        let r4 = turn_radius(WHEELBASE, 1e-4);
        let r5 = turn_radius(WHEELBASE, 1e-5);
        let r6 = turn_radius(WHEELBASE, 1e-6);
        assert!(r4.is_finite() && r5.is_finite() && r6.is_finite());
        assert!(r4 < r5 && r5 < r6);

        // Strictly below the cutoff the radius is defined as +inf.
        assert_eq!(turn_radius(WHEELBASE, 9.9e-7), f64::INFINITY);
        assert_eq!(turn_radius(WHEELBASE, -9.9e-7), f64::INFINITY);

        // Negative angles keep the tangent's sign, no NaN near the boundary.
        let r_neg = turn_radius(WHEELBASE, -1e-5);
        assert!(r_neg.is_finite() && r_neg < 0.0);
        assert_relative_eq!(r_neg, -r5, epsilon = 1e-6);
    }

    #[test]
    fn straight_profile_is_all_zero() {
        let profile = straight_profile(100);
        assert_eq!(profile.len(), 100);
        assert!(profile.iter().all(|a| *a == 0.0));
    }

    #[test]
    fn ramp_profile_shape() {
        let targets = [0.0, -150.0, 0.0, 150.0, 0.0];
        let profile = ramp_profile(&targets, 5.0, 0.1);

        // 4 segments x 300 steps, plus the final target appended once.
        assert_eq!(profile.len(), 1201);
        assert_eq!(profile[0], 0.0);
        assert_eq!(profile[300], -150.0);
        assert_eq!(profile[600], 0.0);
        assert_eq!(profile[900], 150.0);
        assert_eq!(*profile.last().unwrap(), 0.0);

        // Constant slew: every step moves by exactly rate * dt.
        for pair in profile.windows(2) {
            assert_relative_eq!((pair[1] - pair[0]).abs(), 0.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn ramp_profile_skips_equal_targets() {
        let profile = ramp_profile(&[10.0, 10.0], 5.0, 0.1);
        assert_eq!(profile, vec![10.0]);
    }
}
