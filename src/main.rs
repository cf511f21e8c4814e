mod error;
mod plot;
mod report;
mod single_track;
mod vehicle;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::error::Result;
use crate::single_track::{Trajectory, run};
use crate::vehicle::{DEFAULT_RUN, SEDAN};

/// Single-track vehicle-dynamics simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Trajectory to simulate (A, B or C); prompts interactively when omitted
    #[arg(short, long)]
    trajectory: Option<String>,

    /// Directory for the rendered charts
    #[arg(short, long, default_value = "./output")]
    out_dir: PathBuf,

    /// Write the full sample sequence as JSON to this file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let selector = match &args.trajectory {
        Some(s) => s.clone(),
        None => prompt_selection()?,
    };

    // Lenient by design: junk input reports and simulates nothing.
    let Some(trajectory) = Trajectory::from_selector(&selector) else {
        info!(
            "unrecognized trajectory {:?}; nothing was simulated",
            selector.trim()
        );
        return Ok(());
    };

    info!(
        "simulating trajectory {}: {}",
        trajectory.selector(),
        trajectory.describe()
    );

    let samples = run(&SEDAN, &DEFAULT_RUN, trajectory);

    if let Some(last) = samples.last() {
        info!(
            "{} steps over {:.1} s, final position ({:.1}, {:.1}) m, final speed {:.2} m/s",
            samples.len(),
            last.time,
            last.x,
            last.y,
            last.record.speed
        );
    }

    if !args.no_charts {
        std::fs::create_dir_all(&args.out_dir)?;
        let tag = trajectory.selector().to_ascii_lowercase();
        let series_path = args.out_dir.join(format!("trajectory_{tag}_series.png"));
        let path_path = args.out_dir.join(format!("trajectory_{tag}_path.png"));

        plot::time_series(
            &samples,
            &series_path,
            &format!("Trajectory {} time series", trajectory.selector()),
        )?;
        plot::trajectory_xy(
            &samples,
            &path_path,
            &format!("Trajectory {} path", trajectory.selector()),
        )?;
        info!(
            "charts written to {} and {}",
            series_path.display(),
            path_path.display()
        );
    }

    if let Some(path) = &args.export {
        report::write_json(path, trajectory.selector(), DEFAULT_RUN.dt, &samples)?;
        info!("samples exported to {}", path.display());
    }

    Ok(())
}

fn prompt_selection() -> Result<String> {
    println!("Choose a trajectory:");
    for t in [
        Trajectory::StraightLine,
        Trajectory::ConstantLock,
        Trajectory::SteerRamp,
    ] {
        println!("  {} - {}", t.selector(), t.describe());
    }
    print!("Enter A, B or C: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
