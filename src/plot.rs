// ==============================================================================
// plot.rs — CHART RENDERING (PERIPHERAL)
// ------------------------------------------------------------------------------
// Consumes the sample sequence produced by single_track::run and renders:
// - a stacked time-series figure (speeds, accelerations, yaw rate, slip
//   angle, wheel loads)
// - a standalone x/y trajectory figure with equal axis scaling
//
// Nothing here feeds back into the core; swap this module for any other
// renderer that reads TrajectorySample.
// ==============================================================================

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::single_track::{TrajectorySample, WheelId};

const LOAD_COLORS: [&RGBColor; 4] = [&BLUE, &RED, &GREEN, &CYAN];

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Min/max over the finite values, padded so flat series still get a
/// drawable band.
fn padded_range<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (-1.0, 1.0);
    }
    if (max - min).abs() < 1e-9 {
        (min - 1.0, max + 1.0)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

struct Series<'a> {
    label: &'a str,
    values: Vec<f64>,
    color: &'static RGBColor,
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    y_label: &str,
    time: &[f64],
    series: &[Series],
) -> Result<()> {
    let (x_min, x_max) = padded_range(time.iter().copied());
    let (y_min, y_max) = padded_range(series.iter().flat_map(|s| s.values.iter().copied()));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(8)
        .x_label_area_size(28)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc(y_label)
        .draw()
        .map_err(render_err)?;

    for s in series {
        let color = s.color;
        chart
            .draw_series(LineSeries::new(
                time.iter().copied().zip(s.values.iter().copied()),
                color,
            ))
            .map_err(render_err)?
            .label(s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

/// Stacked time-series figure, one panel per quantity family.
pub fn time_series(samples: &[TrajectorySample], path: &Path, title: &str) -> Result<()> {
    let root = BitMapBackend::new(path, (1200, 1500)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let root = root.titled(title, ("sans-serif", 30)).map_err(render_err)?;
    let panels = root.split_evenly((5, 1));

    let time: Vec<f64> = samples.iter().map(|s| s.time).collect();
    let column = |f: &dyn Fn(&TrajectorySample) -> f64| samples.iter().map(f).collect::<Vec<_>>();

    draw_panel(
        &panels[0],
        "Speeds",
        "m/s",
        &time,
        &[
            Series { label: "vx", values: column(&|s| s.record.forward_speed), color: &BLUE },
            Series { label: "vy", values: column(&|s| s.lateral_speed), color: &RED },
        ],
    )?;

    draw_panel(
        &panels[1],
        "Accelerations",
        "m/s^2",
        &time,
        &[
            Series { label: "ax", values: column(&|s| s.record.accel_long), color: &BLUE },
            Series { label: "ay", values: column(&|s| s.record.accel_lat), color: &RED },
        ],
    )?;

    draw_panel(
        &panels[2],
        "Yaw rate",
        "deg/s",
        &time,
        &[Series { label: "yaw rate", values: column(&|s| s.record.yaw_rate_deg), color: &GREEN }],
    )?;

    draw_panel(
        &panels[3],
        "Slip angle",
        "deg",
        &time,
        &[Series { label: "slip angle", values: column(&|s| s.record.slip_angle_deg), color: &MAGENTA }],
    )?;

    let loads: Vec<Series> = WheelId::ALL
        .iter()
        .zip(LOAD_COLORS)
        .map(|(id, color)| Series {
            label: id.as_str(),
            values: samples.iter().map(|s| s.record.loads.get(*id)).collect(),
            color,
        })
        .collect();
    draw_panel(&panels[4], "Wheel loads", "N", &time, &loads)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// x/y path figure. Both axes share the same span so the geometry is not
/// distorted.
pub fn trajectory_xy(samples: &[TrajectorySample], path: &Path, title: &str) -> Result<()> {
    let root = BitMapBackend::new(path, (900, 900)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (x_min, x_max) = padded_range(samples.iter().map(|s| s.x));
    let (y_min, y_max) = padded_range(samples.iter().map(|s| s.y));

    // Equal aspect: widen the shorter axis around its center.
    let span = (x_max - x_min).max(y_max - y_min);
    let x_mid = (x_min + x_max) / 2.0;
    let y_mid = (y_min + y_max) / 2.0;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            x_mid - span / 2.0..x_mid + span / 2.0,
            y_mid - span / 2.0..y_mid + span / 2.0,
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("x (m)")
        .y_desc("y (m)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(samples.iter().map(|s| (s.x, s.y)), &BLUE))
        .map_err(render_err)?
        .label("path")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
