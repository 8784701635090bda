use anyhow::anyhow;
use clap::Parser;
use dart_arc_calculator::export::report as export_report;
use dart_arc_calculator::export::trajectory::{self as export_trajectory, ArcPath};
use dart_arc_calculator::scenario::load_scenario;
use dart_arc_calculator::solver::{SolutionStatus, SolveReport, TargetSpec};
use std::path::PathBuf;

#[path = "common/logging.rs"]
mod logging;

/// Solve the launch angles that put the dart through a sighted target.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dart launch-angle solver (low/high arc with near/far bounds)"
)]
struct Cli {
    /// Horizontal distance to the target in metres
    #[arg(long)]
    distance: f64,

    /// Sighting angle to the target in degrees (negative when below the launcher)
    #[arg(long, allow_hyphen_values = true)]
    aim: f64,

    /// Calibration file or directory
    #[arg(long, default_value = "configs/sparrow_dart.toml")]
    config: PathBuf,

    /// Calibration name (defaults to the first in the file)
    #[arg(long)]
    calibration: Option<String>,

    /// Override the calibrated launch speed in m/s
    #[arg(long)]
    speed: Option<f64>,

    /// Override the root-scan step in degrees
    #[arg(long)]
    step: Option<f64>,

    /// Write the full report as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write sampled flight paths of the nominal arcs as CSV (`-` for stdout)
    #[arg(long)]
    trajectory: Option<PathBuf>,

    /// Samples per flight path
    #[arg(long, default_value_t = 300)]
    samples: usize,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    if !(cli.distance.is_finite() && cli.distance > 0.0) {
        return Err(anyhow!("distance must be a positive number of metres"));
    }
    if !cli.aim.is_finite() || cli.aim.abs() >= 90.0 {
        return Err(anyhow!("aim angle must lie strictly between -90 and 90 degrees"));
    }

    let mut scenario = load_scenario(&cli.config, cli.calibration.as_deref())?;
    if let Some(speed) = cli.speed {
        scenario.launch_speed_m_s = speed;
    }
    if let Some(step) = cli.step {
        scenario.settings.scan_step_deg = step;
    }
    let solver = scenario.solver()?;
    let report = solver.solve(cli.distance, cli.aim)?;

    print_report(&report);

    if let Some(path) = &cli.json {
        export_report::write_json_to_path(path, cli.aim, &report)?;
    }

    if let Some(path) = &cli.trajectory {
        let target = TargetSpec::new(cli.distance, report.height_m)?;
        let arcs = [
            ("low", report.nominal.arcs.low_deg),
            ("high", report.nominal.arcs.high_deg),
        ];
        let sampled: Vec<(&str, f64, Vec<_>)> = arcs
            .iter()
            .filter_map(|&(label, theta)| {
                let theta = theta?;
                let points = solver.path(theta, target, cli.samples)?;
                Some((label, theta, points))
            })
            .collect();
        let paths: Vec<ArcPath<'_>> = sampled
            .iter()
            .map(|(label, theta, points)| ArcPath {
                arc: *label,
                theta_deg: *theta,
                points: points.as_slice(),
            })
            .collect();
        export_trajectory::write_csv_to_path(path, &paths)?;
    }

    Ok(())
}

fn print_report(report: &SolveReport) {
    println!("Target height  : h = {:.1} m", report.height_m);

    let arcs = report.nominal.arcs;
    match report.nominal.status {
        SolutionStatus::NoSolution => {
            println!("No solution    : the target cannot be hit.");
            return;
        }
        SolutionStatus::LowOnly => {
            println!("High arc       : no solution");
            if let Some(low) = arcs.low_deg {
                println!("Low arc        : θ_low  = {:.2}°", low);
            }
        }
        SolutionStatus::HighOnly => {
            if let Some(high) = arcs.high_deg {
                println!("Launch angle   : θ = {:.2}°", high);
            }
        }
        SolutionStatus::Both => {
            if let (Some(low), Some(high)) = (arcs.low_deg, arcs.high_deg) {
                println!("Low arc        : θ_low  = {:.2}°", low);
                println!("High arc       : θ_high = {:.2}°", high);
            }
        }
    }

    let bounds = [
        ("θ_low_min ", report.low_min_deg()),
        ("θ_low_max ", report.low_max_deg()),
        ("θ_high_min", report.high_min_deg()),
        ("θ_high_max", report.high_max_deg()),
    ];
    for (label, value) in bounds {
        if let Some(theta) = value {
            println!("Bound          : {label} = {theta:.2}°");
        }
    }
}
