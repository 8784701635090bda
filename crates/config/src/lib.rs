//! Configuration models and loaders for the Dart Arc Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use dart_core::constants::{
    DEFAULT_BISECTION_MAX_ITER, DEFAULT_BISECTION_TOLERANCE_DEG, DEFAULT_LAUNCH_SPEED_M_S,
    DEFAULT_ROOT_ROUNDING_DIGITS, DEFAULT_SCAN_STEP_DEG, DEFAULT_SENSITIVITY_OFFSET_M,
};
use serde::Deserialize;
use thiserror::Error;

/// Launcher calibration: launch speed, gravity table, and solver tuning.
#[derive(Debug, Deserialize, Clone)]
pub struct CalibrationConfig {
    pub name: String,
    #[serde(default = "default_launch_speed")]
    pub launch_speed_m_s: f64,
    /// Solving domain `[min, max)` in degrees; defaults to the anchor span.
    #[serde(default)]
    pub domain_deg: Option<[f64; 2]>,
    #[serde(default)]
    pub anchors: Vec<AnchorConfig>,
    /// Anchor table stored next to the calibration (CSV, YAML, or TOML).
    #[serde(default)]
    pub anchors_file: Option<PathBuf>,
    #[serde(default)]
    pub solver: SolverConfig,
}

fn default_launch_speed() -> f64 {
    DEFAULT_LAUNCH_SPEED_M_S
}

/// One `(θ, g)` point of the fitted gravity table.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct AnchorConfig {
    pub theta_deg: f64,
    pub g_m_s2: f64,
}

/// Numerical tuning of the root scan and bisection.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub scan_step_deg: f64,
    pub tolerance_deg: f64,
    pub max_iterations: usize,
    pub rounding_digits: u32,
    pub sensitivity_offset_m: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            scan_step_deg: DEFAULT_SCAN_STEP_DEG,
            tolerance_deg: DEFAULT_BISECTION_TOLERANCE_DEG,
            max_iterations: DEFAULT_BISECTION_MAX_ITER,
            rounding_digits: DEFAULT_ROOT_ROUNDING_DIGITS,
            sensitivity_offset_m: DEFAULT_SENSITIVITY_OFFSET_M,
        }
    }
}

#[derive(Deserialize)]
struct AnchorTable {
    anchors: Vec<AnchorConfig>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Load calibrations from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_calibrations<P: AsRef<Path>>(path: P) -> Result<Vec<CalibrationConfig>, ConfigError> {
    load_records(path)
}

/// Load a gravity anchor table.
///
/// CSV files need a `theta_deg,g_m_s2` header; TOML files hold an `anchors` array;
/// anything else is read as a YAML list.
pub fn load_anchor_table<P: AsRef<Path>>(path: P) -> Result<Vec<AnchorConfig>, ConfigError> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => {
            let mut reader = csv::Reader::from_path(path)?;
            let anchors = reader
                .deserialize()
                .collect::<Result<Vec<AnchorConfig>, csv::Error>>()?;
            Ok(anchors)
        }
        Some("toml") => {
            let contents = std::fs::read_to_string(path)?;
            let table: AnchorTable = toml::from_str(&contents)?;
            Ok(table.anchors)
        }
        _ => {
            let reader = File::open(path)?;
            Ok(serde_yaml::from_reader(reader)?)
        }
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
