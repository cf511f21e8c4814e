// ==============================================================================
// evaluate.rs — INSTANTANEOUS STATE EVALUATOR
// ==============================================================================
// ------------------------------------------------------------------------------
// This module combines:
// - Steering conversion + bicycle-model turn radius from steering.rs
// - Axle + wheel load transfer from loads.rs
// - A linearized steady-state yaw-rate balance
// - Sideslip from yaw rate and rear CG distance
//
// One call maps (speed, steering-wheel deg, ax) onto the full dynamics
// record. Pure computation, no state, no failure paths: the singular spots
// (near-zero road-wheel angle, zero speed) resolve to well-defined sentinel
// values instead of blowing up:
//
//     |road angle| < eps  =>  R = +inf, ay = 0
//     v = 0 or R = inf    =>  yaw = 0
//     v = 0               =>  slip = 0
//
// The yaw denominator  L + ((mf - mr)/Ca) * v^2  is intentionally left
// unguarded; with the SEDAN preset it stays near L at reachable speeds.
// See DESIGN.md for that and for the roll-couple arm in the load split.
// ==============================================================================

use crate::single_track::loads;
use crate::single_track::steering;
use crate::single_track::types::{DynamicsRecord, VehicleConfig};

/// Derive the full dynamics record for one instantaneous vehicle state.
///
/// `steering_deg` is the steering-wheel angle; the gear ratio maps it to the
/// road wheels. The conventional longitudinal command is 2 m/s^2
/// (`RunConfig::accel` in the preset).
pub fn evaluate(
    cfg: &VehicleConfig,
    speed: f64,
    steering_deg: f64,
    accel_long: f64,
) -> DynamicsRecord {
    let road_angle = steering::road_wheel_angle(cfg.steering_ratio, steering_deg);

    // Axle loads under the longitudinal command, before any cornering.
    let axles = loads::axle_loads(cfg, accel_long);

    let radius = steering::turn_radius(cfg.wheelbase, road_angle);
    let accel_lat = if radius.is_infinite() {
        0.0
    } else {
        speed * speed / radius
    };

    let wheel_loads = loads::wheel_loads(cfg, axles, accel_lat);

    // Post-split axle masses. The lateral couple cancels in each axle sum,
    // so the imbalance feeding the yaw balance comes from ax alone.
    let front_mass = wheel_loads.front_total() / cfg.gravity;
    let rear_mass = wheel_loads.rear_total() / cfg.gravity;

    let yaw_rate = if speed == 0.0 || radius.is_infinite() {
        0.0
    } else {
        speed
            / (cfg.wheelbase
                + (front_mass - rear_mass) / cfg.cornering_stiffness * speed * speed)
    };

    let forward_speed = speed;
    let slip_angle = if forward_speed != 0.0 {
        (yaw_rate * cfg.cg_to_rear / forward_speed).atan()
    } else {
        0.0
    };

    DynamicsRecord {
        speed,
        radius,
        accel_long,
        accel_lat,
        yaw_rate,
        yaw_rate_deg: yaw_rate.to_degrees(),
        forward_speed,
        slip_angle_deg: slip_angle.to_degrees(),
        loads: wheel_loads,
    }
}
