use clap::Parser;
use dart_arc_calculator::gravity::GravityFunction;
use dart_arc_calculator::scenario::load_scenario;
use std::path::PathBuf;

#[path = "common/logging.rs"]
mod logging;

/// Print the linear pieces of a calibration's gravity table.
#[derive(Parser, Debug)]
#[command(author, version, about = "List piecewise-linear gravity segments")]
struct Cli {
    /// Calibration file or directory
    #[arg(long, default_value = "configs/sparrow_dart.toml")]
    config: PathBuf,

    /// Calibration name (defaults to the first in the file)
    #[arg(long)]
    calibration: Option<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let scenario = load_scenario(&cli.config, cli.calibration.as_deref())?;
    let segments = scenario.gravity.segments();

    println!(
        "{}: {} segments, domain {}, v0 = {:.2} m/s",
        scenario.name,
        segments.len(),
        scenario.gravity.domain(),
        scenario.launch_speed_m_s
    );
    for (idx, segment) in segments.iter().enumerate() {
        println!("{:>2}. {}", idx + 1, segment);
    }
    Ok(())
}
