use crate::single_track::types::{RunConfig, VehicleConfig};

/// Mid-size sedan, the parameter set used by all three canned runs.
pub const SEDAN: VehicleConfig = VehicleConfig {
    mass: 1500.0,               // kg
    wheelbase: 2.8,             // meters (front axle to rear axle)
    cg_to_front: 1.4,           // meters
    cg_to_rear: 1.4,            // meters
    cg_height: 1.0,             // meters
    gravity: 9.81,              // m/s^2
    cornering_stiffness: 60_000.0,
    steering_ratio: 20.0,       // wheel deg per road deg
    roll_couple_arm: 1.2,       // meters (rear-axle-to-CG arm, see loads.rs)
};

pub const DEFAULT_RUN: RunConfig = RunConfig {
    dt: 0.1,                    // s
    accel: 2.0,                 // m/s^2
    speed_cap: 60.0 / 3.6,      // m/s (60 km/h)
    cruise_speed: 20.0 / 3.6,   // m/s (20 km/h)
    steer_rate: 5.0,            // deg/s
    lock_angle: -100.0,         // deg at the steering wheel
    straight_steps: 100,
    max_steps: 10_000,          // hard bound for the capped-speed loop
};

/// Steering-wheel targets (deg) for the steer-ramp run.
pub const RAMP_TARGETS: [f64; 5] = [0.0, -150.0, 0.0, 150.0, 0.0];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sedan_geometry_is_consistent() {
        // Wheelbase must equal the two CG distances; the model assumes it.
        assert_relative_eq!(
            SEDAN.wheelbase,
            SEDAN.cg_to_front + SEDAN.cg_to_rear,
            epsilon = 1e-12
        );
    }

    #[test]
    fn default_run_caps() {
        assert_relative_eq!(DEFAULT_RUN.speed_cap, 16.6667, epsilon = 1e-4);
        assert_relative_eq!(DEFAULT_RUN.cruise_speed, 5.5556, epsilon = 1e-4);
        assert!(DEFAULT_RUN.max_steps > 0);
    }
}
