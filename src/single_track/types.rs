//! Core shared types for `single_track` (renderer-agnostic).
use std::fmt;

use serde::Serialize;

// ============================================
// Wheel identification
// ============================================

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum WheelId { FrontInner, FrontOuter, RearInner, RearOuter }

impl WheelId {
    pub const ALL: [WheelId; 4] = [
        WheelId::FrontInner,
        WheelId::FrontOuter,
        WheelId::RearInner,
        WheelId::RearOuter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WheelId::FrontInner => "FI",
            WheelId::FrontOuter => "FO",
            WheelId::RearInner => "RI",
            WheelId::RearOuter => "RO",
        }
    }

    pub fn is_front(&self) -> bool {
        matches!(self, WheelId::FrontInner | WheelId::FrontOuter)
    }

    pub fn is_rear(&self) -> bool {
        matches!(self, WheelId::RearInner | WheelId::RearOuter)
    }
}

impl fmt::Display for WheelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================
// ----- configs ------------------------------
// ============================================

/// Fixed vehicle parameters. Built once, passed by reference, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct VehicleConfig {
    pub mass: f64,                // kg
    pub wheelbase: f64,           // meters (front axle to rear axle)
    pub cg_to_front: f64,         // meters (CG to front axle)
    pub cg_to_rear: f64,          // meters (CG to rear axle)
    pub cg_height: f64,           // meters
    pub gravity: f64,             // m/s^2
    pub cornering_stiffness: f64, // N/rad, single-track lumped
    pub steering_ratio: f64,      // steering wheel deg per road wheel deg

    /// Lever arm used when splitting an axle load into inner/outer wheels.
    /// The rear-axle-to-CG distance serves here for BOTH axles, not the
    /// track width. See DESIGN.md.
    pub roll_couple_arm: f64,     // meters
}

/// Fixed integration constants shared by all trajectory runs.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub dt: f64,                  // s
    pub accel: f64,               // m/s^2, longitudinal command for accelerating runs
    pub speed_cap: f64,           // m/s
    pub cruise_speed: f64,        // m/s, constant-speed run
    pub steer_rate: f64,          // deg/s, ramp slew rate
    pub lock_angle: f64,          // deg, steering-wheel lock for the constant-lock run
    pub straight_steps: usize,    // profile length of the straight-line run
    pub max_steps: usize,         // hard iteration bound for the capped-speed loop
}

// ============================================
// ----- evaluator output ---------------------
// ============================================

/// Vertical load on each wheel, N. Lateral transfer moves load from the
/// inner pair to the outer pair; it never changes an axle total.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WheelLoads {
    pub front_inner: f64, // N
    pub front_outer: f64, // N
    pub rear_inner: f64,  // N
    pub rear_outer: f64,  // N
}

impl WheelLoads {
    pub fn get(&self, id: WheelId) -> f64 {
        match id {
            WheelId::FrontInner => self.front_inner,
            WheelId::FrontOuter => self.front_outer,
            WheelId::RearInner => self.rear_inner,
            WheelId::RearOuter => self.rear_outer,
        }
    }

    pub fn front_total(&self) -> f64 {
        self.front_inner + self.front_outer
    }

    pub fn rear_total(&self) -> f64 {
        self.rear_inner + self.rear_outer
    }
}

/// Everything the evaluator derives from one instantaneous state.
/// Created fresh per call; owned by the caller.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DynamicsRecord {
    pub speed: f64,         // m/s
    pub radius: f64,        // meters, +inf when driving straight
    pub accel_long: f64,    // m/s^2, the commanded ax
    pub accel_lat: f64,     // m/s^2, exactly 0.0 on an infinite radius
    pub yaw_rate: f64,      // rad/s
    pub yaw_rate_deg: f64,  // deg/s
    pub forward_speed: f64, // m/s
    pub slip_angle_deg: f64,// deg
    pub loads: WheelLoads,
}

// ============================================
// ----- trajectory output --------------------
// ============================================

/// One integration step of a trajectory run. The ordered sequence of these
/// is the whole contract with plotting/export.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrajectorySample {
    pub time: f64,          // s, elapsed at the start of the step
    pub x: f64,             // meters
    pub y: f64,             // meters
    pub lateral_speed: f64, // m/s, integrated only by the steer-ramp run
    pub record: DynamicsRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_id_axles() {
        assert!(WheelId::FrontInner.is_front());
        assert!(WheelId::FrontOuter.is_front());
        assert!(WheelId::RearInner.is_rear());
        assert!(WheelId::RearOuter.is_rear());
        assert_eq!(WheelId::ALL.len(), 4);
    }

    #[test]
    fn wheel_loads_accessors() {
        let loads = WheelLoads {
            front_inner: 1.0,
            front_outer: 2.0,
            rear_inner: 3.0,
            rear_outer: 4.0,
        };
        assert_eq!(loads.get(WheelId::FrontInner), 1.0);
        assert_eq!(loads.get(WheelId::RearOuter), 4.0);
        assert_eq!(loads.front_total(), 3.0);
        assert_eq!(loads.rear_total(), 7.0);
    }
}
