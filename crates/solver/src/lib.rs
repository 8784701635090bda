//! Launch-angle solver: which angles put the dart through a target point.
//!
//! The pipeline scans the angle domain for sign changes of the miss function,
//! refines each bracket by bisection, classifies the roots into low and high
//! arcs, and repeats the solve at slightly nearer and farther distances.

pub mod classify;
pub mod path;
pub mod roots;
pub mod sensitivity;
pub mod settings;
pub mod trajectory;

pub use classify::{ClassificationResult, SolutionStatus, classify_roots};
pub use path::{PathPoint, sample_path};
pub use roots::{Bracket, bisect, find_all_roots, scan_brackets};
pub use sensitivity::{ArcSolver, SolveReport, VariantSolution};
pub use settings::SolverSettings;
pub use trajectory::{MISS_SENTINEL, TrajectoryEquation};

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the solver.
///
/// An empty root set is not an error; it is reported as [`SolutionStatus::NoSolution`].
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    #[error("no sign change on [{lo_deg}, {hi_deg}]: F = {f_lo}, {f_hi}")]
    InvalidBracket {
        lo_deg: f64,
        hi_deg: f64,
        f_lo: f64,
        f_hi: f64,
    },
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    #[error("invalid solver settings: {0}")]
    InvalidSettings(String),
}

/// Target point relative to the launcher: horizontal distance and height delta (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetSpec {
    pub distance_m: f64,
    pub height_m: f64,
}

impl TargetSpec {
    pub fn new(distance_m: f64, height_m: f64) -> Result<Self, SolverError> {
        if !distance_m.is_finite() || distance_m <= 0.0 {
            return Err(SolverError::InvalidTarget(format!(
                "distance must be positive and finite, got {distance_m}"
            )));
        }
        if !height_m.is_finite() {
            return Err(SolverError::InvalidTarget(format!(
                "height must be finite, got {height_m}"
            )));
        }
        Ok(Self {
            distance_m,
            height_m,
        })
    }

    /// Target sighted at `aim_deg` above the horizontal: `h = d·tan(aim)`.
    pub fn from_aim(distance_m: f64, aim_deg: f64) -> Result<Self, SolverError> {
        if !aim_deg.is_finite() {
            return Err(SolverError::InvalidTarget(format!(
                "aim angle must be finite, got {aim_deg}"
            )));
        }
        Self::new(distance_m, distance_m * aim_deg.to_radians().tan())
    }

    /// Same height, different distance.
    pub fn at_distance(&self, distance_m: f64) -> Result<Self, SolverError> {
        Self::new(distance_m, self.height_m)
    }
}
