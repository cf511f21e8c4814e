use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::single_track::TrajectorySample;

/// Machine-readable hand-off of one simulation run: the trajectory selector,
/// the time step, and every sample in order. Any external renderer can
/// consume this instead of the built-in charts.
///
/// The infinite straight-line radius serializes as JSON `null`.
#[derive(Serialize)]
pub struct RunReport<'a> {
    pub trajectory: char,
    pub dt: f64, // s
    pub samples: &'a [TrajectorySample],
}

/// Write the full sample sequence of a run as pretty-printed JSON.
pub fn write_json(
    path: &Path,
    trajectory: char,
    dt: f64,
    samples: &[TrajectorySample],
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &RunReport { trajectory, dt, samples })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::single_track::{Trajectory, run};
    use crate::vehicle::{DEFAULT_RUN, SEDAN};

    #[test]
    fn report_serializes_with_null_radius_when_straight() {
        let samples = run(&SEDAN, &DEFAULT_RUN, Trajectory::StraightLine);
        let report = RunReport {
            trajectory: 'A',
            dt: DEFAULT_RUN.dt,
            samples: &samples[..2],
        };
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"trajectory\":\"A\""));
        // Straight-line radius is +inf in the record, null on the wire.
        assert!(json.contains("\"radius\":null"));
        assert!(json.contains("\"front_inner\""));
    }

    #[test]
    fn report_keeps_finite_radius() {
        let samples = run(&SEDAN, &DEFAULT_RUN, Trajectory::ConstantLock);
        let report = RunReport {
            trajectory: 'B',
            dt: DEFAULT_RUN.dt,
            samples: &samples[..1],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("\"radius\":null"));
    }
}
