//! Turns calibration files into ready-to-solve scenarios.

use std::path::Path;

use dart_config::{AnchorConfig, CalibrationConfig, ConfigError, load_anchor_table, load_calibrations};
use dart_core::domain::AngleDomain;
use dart_gravity::{GravityError, GravityModel};
use dart_solver::{ArcSolver, SolverError, SolverSettings};
use thiserror::Error;
use tracing::info;

/// A launcher calibration with its gravity table built.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub launch_speed_m_s: f64,
    pub gravity: GravityModel,
    pub settings: SolverSettings,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to load calibration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid gravity table: {0}")]
    Gravity(#[from] GravityError),
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error("calibration '{0}' has neither inline anchors nor an anchors file")]
    MissingAnchors(String),
    #[error("calibration '{0}' not found")]
    NotFound(String),
    #[error("calibration catalog is empty")]
    EmptyCatalog,
}

impl Scenario {
    /// Build a scenario; a relative `anchors_file` is resolved against `base_dir`.
    pub fn from_config(config: CalibrationConfig, base_dir: &Path) -> Result<Self, ScenarioError> {
        let anchors: Vec<AnchorConfig> = match (&config.anchors_file, config.anchors.is_empty()) {
            (_, false) => config.anchors.clone(),
            (Some(file), true) => load_anchor_table(base_dir.join(file))?,
            (None, true) => return Err(ScenarioError::MissingAnchors(config.name)),
        };
        let points: Vec<(f64, f64)> = anchors.iter().map(|a| (a.theta_deg, a.g_m_s2)).collect();

        let gravity = match config.domain_deg {
            Some([min_deg, max_deg]) => {
                GravityModel::with_domain(&points, AngleDomain { min_deg, max_deg })?
            }
            None => GravityModel::from_anchors(&points)?,
        };

        let solver = config.solver;
        let settings = SolverSettings {
            scan_step_deg: solver.scan_step_deg,
            tolerance_deg: solver.tolerance_deg,
            max_iterations: solver.max_iterations,
            rounding_digits: solver.rounding_digits,
            sensitivity_offset_m: solver.sensitivity_offset_m,
        };

        let scenario = Self {
            name: config.name,
            launch_speed_m_s: config.launch_speed_m_s,
            gravity,
            settings,
        };
        scenario.solver()?;
        Ok(scenario)
    }

    /// Solver over this scenario's gravity table and calibration.
    pub fn solver(&self) -> Result<ArcSolver<'_, GravityModel>, SolverError> {
        ArcSolver::new(&self.gravity, self.launch_speed_m_s, self.settings)
    }
}

/// Load every calibration found at `path` (YAML list, TOML file, or directory of TOML files).
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioError> {
    let path = path.as_ref();
    let base_dir = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or_else(|| Path::new("."))
    };
    let scenarios = load_calibrations(path)?
        .into_iter()
        .map(|config| Scenario::from_config(config, base_dir))
        .collect::<Result<Vec<_>, _>>()?;
    info!(path = %path.display(), count = scenarios.len(), "loaded calibrations");
    Ok(scenarios)
}

/// Load calibrations and pick one by name (case-insensitive), defaulting to the first.
pub fn load_scenario<P: AsRef<Path>>(path: P, name: Option<&str>) -> Result<Scenario, ScenarioError> {
    let mut scenarios = load_scenarios(path)?;
    if scenarios.is_empty() {
        return Err(ScenarioError::EmptyCatalog);
    }
    let index = match name {
        Some(requested) => {
            let upper = requested.to_uppercase();
            scenarios
                .iter()
                .position(|s| s.name.to_uppercase() == upper)
                .ok_or_else(|| ScenarioError::NotFound(requested.to_string()))?
        }
        None => 0,
    };
    Ok(scenarios.swap_remove(index))
}
