// ==============================================================================
// loads.rs — STATIC + TRANSFER WHEEL LOADS
// ------------------------------------------------------------------------------
// Load transfer does NOT create net vertical force; it redistributes it.
// Longitudinal acceleration shifts load between the axles, lateral
// acceleration shifts load across an axle between inner and outer wheel.
// Axle totals are invariant under the lateral split.
//
// axle_loads(...):
// - Static split from CG geometry, plus the pitch term m * ax * h / L
//
// wheel_loads(...):
// - Splits each axle total into inner/outer using the roll couple
//   axle_mass * ay * h / roll_couple_arm
// - The split divides by the rear-axle-to-CG arm on BOTH axles, where a
//   track-width arm would be the textbook choice. See DESIGN.md.
//
// Output feeds the yaw-rate balance in evaluate.rs and the load panel of
// the time-series chart.
// ==============================================================================

use crate::single_track::types::{VehicleConfig, WheelLoads};

/// Vertical load per axle, N.
#[derive(Debug, Clone, Copy)]
pub struct AxleLoads {
    pub front: f64, // N
    pub rear: f64,  // N
}

impl AxleLoads {
    /// Effective front axle mass, kg.
    #[inline]
    pub fn front_mass(&self, gravity: f64) -> f64 {
        self.front / gravity
    }

    /// Effective rear axle mass, kg.
    #[inline]
    pub fn rear_mass(&self, gravity: f64) -> f64 {
        self.rear / gravity
    }
}

/// Static axle loads shifted by longitudinal acceleration.
/// Positive `ax` (accelerating) unloads the front and loads the rear.
pub fn axle_loads(cfg: &VehicleConfig, accel_long: f64) -> AxleLoads {
    let static_term = cfg.mass * cfg.gravity / cfg.wheelbase;
    let pitch_term = cfg.mass * accel_long * cfg.cg_height / cfg.wheelbase;

    AxleLoads {
        front: static_term * cfg.cg_to_rear - pitch_term,
        rear: static_term * cfg.cg_to_front + pitch_term,
    }
}

/// Split both axle totals into inner/outer wheel loads under lateral
/// acceleration. Positive `ay` unloads the inner pair.
pub fn wheel_loads(cfg: &VehicleConfig, axles: AxleLoads, accel_lat: f64) -> WheelLoads {
    let front_couple =
        axles.front_mass(cfg.gravity) * accel_lat * cfg.cg_height / cfg.roll_couple_arm;
    let rear_couple =
        axles.rear_mass(cfg.gravity) * accel_lat * cfg.cg_height / cfg.roll_couple_arm;

    WheelLoads {
        front_inner: axles.front / 2.0 - front_couple,
        front_outer: axles.front / 2.0 + front_couple,
        rear_inner: axles.rear / 2.0 - rear_couple,
        rear_outer: axles.rear / 2.0 + rear_couple,
    }
}
