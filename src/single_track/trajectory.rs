// ==============================================================================
// trajectory.rs — FIXED-STEP TRAJECTORY INTEGRATION
// ------------------------------------------------------------------------------
// One forward-Euler stepping loop drives all three named runs; a run is just
// a steering profile plus a speed policy plus two integration switches.
//
// Per step:
// - Update speed (accelerate toward the cap, or hold)
// - Re-derive road-wheel angle and turn radius (same cutoff rule as the
//   evaluator), omega = v / R
// - heading += omega * dt, position advances along the heading
// - Evaluate the full dynamics record and append the sample
//
// The straight-line run integrates y from the held lateral speed instead of
// the heading projection, and the steer-ramp run integrates ay into the
// lateral speed. See DESIGN.md on both.
//
// The capped-speed run terminates when the cap is reached; its profile
// length doubles as a hard iteration bound so the loop ends even if the
// policy can never reach the cap.
// ==============================================================================

use nalgebra::{Point2, Vector2};

use crate::single_track::evaluate::evaluate;
use crate::single_track::steering;
use crate::single_track::types::{RunConfig, TrajectorySample, VehicleConfig};
use crate::vehicle::RAMP_TARGETS;

// ============================================
// ----- run selection ------------------------
// ============================================

/// The three canned simulation runs, selected as A / B / C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trajectory {
    StraightLine,
    ConstantLock,
    SteerRamp,
}

impl Trajectory {
    /// Case-insensitive selector parse. `None` for anything but A, B, C;
    /// the caller reports and simulates nothing.
    pub fn from_selector(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Trajectory::StraightLine),
            "B" => Some(Trajectory::ConstantLock),
            "C" => Some(Trajectory::SteerRamp),
            _ => None,
        }
    }

    pub fn selector(&self) -> char {
        match self {
            Trajectory::StraightLine => 'A',
            Trajectory::ConstantLock => 'B',
            Trajectory::SteerRamp => 'C',
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Trajectory::StraightLine => "straight-line run, accelerating to 60 km/h",
            Trajectory::ConstantLock => {
                "constant -100 deg steering lock, accelerating to 60 km/h"
            }
            Trajectory::SteerRamp => {
                "steering ramp between -150 and 150 deg at a constant 20 km/h"
            }
        }
    }

    /// Expand the run into profile + policy + integration switches.
    fn spec(&self, run: &RunConfig) -> TrajectorySpec {
        match self {
            Trajectory::StraightLine => TrajectorySpec {
                profile: steering::straight_profile(run.straight_steps),
                speed: SpeedPolicy::Accelerate { accel: run.accel, cap: run.speed_cap },
                initial_speed: 0.0,
                eval_accel: run.accel,
                heading_projected_y: false,
                integrate_lateral: false,
                stop_at_cap: false,
            },
            Trajectory::ConstantLock => TrajectorySpec {
                // Profile length is the safety bound; the cap ends the run first.
                profile: vec![run.lock_angle; run.max_steps],
                speed: SpeedPolicy::Accelerate { accel: run.accel, cap: run.speed_cap },
                initial_speed: 0.0,
                eval_accel: run.accel,
                heading_projected_y: true,
                integrate_lateral: false,
                stop_at_cap: true,
            },
            Trajectory::SteerRamp => TrajectorySpec {
                profile: steering::ramp_profile(&RAMP_TARGETS, run.steer_rate, run.dt),
                speed: SpeedPolicy::Hold,
                initial_speed: run.cruise_speed,
                eval_accel: 0.0,
                heading_projected_y: true,
                integrate_lateral: true,
                stop_at_cap: false,
            },
        }
    }
}

/// Speed update applied at the top of every step.
#[derive(Debug, Clone, Copy)]
pub enum SpeedPolicy {
    Accelerate { accel: f64, cap: f64 }, // m/s^2, m/s
    Hold,
}

impl SpeedPolicy {
    #[inline]
    fn apply(&self, speed: f64, dt: f64) -> f64 {
        match self {
            SpeedPolicy::Accelerate { accel, cap } => (speed + accel * dt).min(*cap),
            SpeedPolicy::Hold => speed,
        }
    }
}

struct TrajectorySpec {
    profile: Vec<f64>, // steering-wheel deg, one per step
    speed: SpeedPolicy,
    initial_speed: f64,       // m/s
    eval_accel: f64,          // ax handed to the evaluator each step
    heading_projected_y: bool,// false: y advances on the held lateral speed
    integrate_lateral: bool,  // true: vy += ay * dt each step
    stop_at_cap: bool,        // terminate once the speed cap is reached
}

// ============================================
// ----- integration state --------------------
// ============================================

/// Mutable state of one simulation run. Starts at the origin, is stepped
/// once per dt, and is discarded when the run ends.
#[derive(Debug, Clone)]
struct TrajectoryState {
    position: Point2<f64>, // meters
    heading: f64,          // rad
    speed: f64,            // m/s
    lateral_speed: f64,    // m/s
    time: f64,             // s
}

impl TrajectoryState {
    fn new(initial_speed: f64) -> Self {
        Self {
            position: Point2::origin(),
            heading: 0.0,
            speed: initial_speed,
            lateral_speed: 0.0,
            time: 0.0,
        }
    }
}

// ============================================
// ----- the stepping loop --------------------
// ============================================

/// Integrate one trajectory run and return the full sample sequence.
pub fn run(cfg: &VehicleConfig, run_cfg: &RunConfig, trajectory: Trajectory) -> Vec<TrajectorySample> {
    let spec = trajectory.spec(run_cfg);
    let dt = run_cfg.dt;

    let mut state = TrajectoryState::new(spec.initial_speed);
    let mut samples = Vec::with_capacity(spec.profile.len());

    for &steering_deg in &spec.profile {
        if spec.stop_at_cap {
            if let SpeedPolicy::Accelerate { cap, .. } = spec.speed {
                if state.speed >= cap {
                    break;
                }
            }
        }

        state.speed = spec.speed.apply(state.speed, dt);

        // Same angle/radius derivation as the evaluator, so the integrated
        // heading and the recorded dynamics never disagree on the cutoff.
        let road_angle = steering::road_wheel_angle(cfg.steering_ratio, steering_deg);
        let radius = steering::turn_radius(cfg.wheelbase, road_angle);
        let omega = if radius.is_infinite() { 0.0 } else { state.speed / radius };
        state.heading += omega * dt;

        let dir = Vector2::new(state.heading.cos(), state.heading.sin());
        state.position.x += state.speed * dir.x * dt;
        state.position.y += if spec.heading_projected_y {
            state.speed * dir.y * dt
        } else {
            state.lateral_speed * dir.y * dt
        };

        let record = evaluate(cfg, state.speed, steering_deg, spec.eval_accel);
        if spec.integrate_lateral {
            state.lateral_speed += record.accel_lat * dt;
        }

        samples.push(TrajectorySample {
            time: state.time,
            x: state.position.x,
            y: state.position.y,
            lateral_speed: state.lateral_speed,
            record,
        });

        state.time += dt;
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{DEFAULT_RUN, SEDAN};
    use approx::assert_relative_eq;

    #[test]
    fn selector_parse_is_lenient_and_case_insensitive() {
        assert_eq!(Trajectory::from_selector("a"), Some(Trajectory::StraightLine));
        assert_eq!(Trajectory::from_selector(" B "), Some(Trajectory::ConstantLock));
        assert_eq!(Trajectory::from_selector("c"), Some(Trajectory::SteerRamp));
        assert_eq!(Trajectory::from_selector("d"), None);
        assert_eq!(Trajectory::from_selector(""), None);
        assert_eq!(Trajectory::from_selector("ab"), None);
    }

    #[test]
    fn straight_line_run_stays_on_the_x_axis() {
        let samples = run(&SEDAN, &DEFAULT_RUN, Trajectory::StraightLine);
        assert_eq!(samples.len(), DEFAULT_RUN.straight_steps);

        for s in &samples {
            // y advances on the held (zero) lateral speed, never on heading.
            assert_eq!(s.y, 0.0);
            assert_eq!(s.lateral_speed, 0.0);
            assert_eq!(s.record.radius, f64::INFINITY);
            assert_eq!(s.record.yaw_rate_deg, 0.0);
        }

        // Speed ramps to the cap and stays there; x keeps growing.
        let last = samples.last().unwrap();
        assert_relative_eq!(last.record.speed, DEFAULT_RUN.speed_cap, epsilon = 1e-9);
        assert!(samples.windows(2).all(|w| w[1].x > w[0].x));
        assert_eq!(samples[0].time, 0.0);
        assert_relative_eq!(last.time, (samples.len() - 1) as f64 * DEFAULT_RUN.dt, epsilon = 1e-9);
    }

    #[test]
    fn constant_lock_run_terminates_at_the_cap() {
        let samples = run(&SEDAN, &DEFAULT_RUN, Trajectory::ConstantLock);

        // Bounded by ceil(cap / (accel * dt)) steps, well under the safety bound.
        let expected = (DEFAULT_RUN.speed_cap / (DEFAULT_RUN.accel * DEFAULT_RUN.dt)).ceil() as usize;
        assert_eq!(samples.len(), expected);
        assert!(samples.len() < DEFAULT_RUN.max_steps);

        // Non-decreasing speed, never above the cap.
        for w in samples.windows(2) {
            assert!(w[1].record.speed >= w[0].record.speed);
        }
        assert!(samples.iter().all(|s| s.record.speed <= DEFAULT_RUN.speed_cap));
        assert_relative_eq!(
            samples.last().unwrap().record.speed,
            DEFAULT_RUN.speed_cap,
            epsilon = 1e-9
        );

        // The lock actually turns the car.
        assert!(samples.last().unwrap().y.abs() > 1.0);
    }

    #[test]
    fn safety_bound_ends_a_run_that_cannot_reach_the_cap() {
        let stalled = RunConfig { accel: 0.0, max_steps: 50, ..DEFAULT_RUN };
        let samples = run(&SEDAN, &stalled, Trajectory::ConstantLock);
        assert_eq!(samples.len(), 50);
    }

    #[test]
    fn steer_ramp_run_holds_speed_and_integrates_lateral() {
        let samples = run(&SEDAN, &DEFAULT_RUN, Trajectory::SteerRamp);
        assert_eq!(samples.len(), 1201);

        assert!(samples
            .iter()
            .all(|s| s.record.speed == DEFAULT_RUN.cruise_speed));
        assert!(samples.iter().all(|s| s.record.accel_long == 0.0));

        // vy is the running sum of ay * dt.
        let mut vy = 0.0;
        for s in &samples {
            vy += s.record.accel_lat * DEFAULT_RUN.dt;
            assert_relative_eq!(s.lateral_speed, vy, epsilon = 1e-9);
        }
    }
}
