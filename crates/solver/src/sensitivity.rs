//! Nominal solve plus near/far sensitivity solves, assembled into a report.

use dart_gravity::GravityFunction;
use serde::Serialize;
use tracing::debug;

use crate::classify::{ClassificationResult, SolutionStatus, classify_roots};
use crate::path::{PathPoint, sample_path};
use crate::roots::find_all_roots;
use crate::settings::SolverSettings;
use crate::trajectory::TrajectoryEquation;
use crate::{SolverError, TargetSpec};

/// Roots and arcs for one target distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantSolution {
    pub distance_m: f64,
    /// `false` when the variant was skipped because its distance would not be positive.
    pub evaluated: bool,
    pub roots_deg: Vec<f64>,
    pub arcs: ClassificationResult,
    pub status: SolutionStatus,
}

impl VariantSolution {
    fn skipped(distance_m: f64) -> Self {
        Self {
            distance_m,
            evaluated: false,
            roots_deg: Vec::new(),
            arcs: ClassificationResult::none(),
            status: SolutionStatus::NoSolution,
        }
    }
}

/// Nominal arcs plus the bounding arcs for a target 2 m nearer and farther.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub launch_speed_m_s: f64,
    pub height_m: f64,
    pub nominal: VariantSolution,
    pub near: VariantSolution,
    pub far: VariantSolution,
}

impl SolveReport {
    pub fn low_min_deg(&self) -> Option<f64> {
        self.far.arcs.low_deg
    }

    pub fn low_max_deg(&self) -> Option<f64> {
        self.near.arcs.low_deg
    }

    pub fn high_min_deg(&self) -> Option<f64> {
        self.far.arcs.high_deg
    }

    pub fn high_max_deg(&self) -> Option<f64> {
        self.near.arcs.high_deg
    }
}

/// Solver bound to one gravity model and launch-speed calibration.
pub struct ArcSolver<'g, G: GravityFunction + ?Sized> {
    gravity: &'g G,
    launch_speed_m_s: f64,
    settings: SolverSettings,
}

impl<'g, G: GravityFunction + ?Sized> ArcSolver<'g, G> {
    pub fn new(
        gravity: &'g G,
        launch_speed_m_s: f64,
        settings: SolverSettings,
    ) -> Result<Self, SolverError> {
        if !(launch_speed_m_s.is_finite() && launch_speed_m_s > 0.0) {
            return Err(SolverError::InvalidSettings(format!(
                "launch speed must be positive, got {launch_speed_m_s}"
            )));
        }
        settings.validate()?;
        Ok(Self {
            gravity,
            launch_speed_m_s,
            settings,
        })
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn launch_speed_m_s(&self) -> f64 {
        self.launch_speed_m_s
    }

    pub fn equation(&self, target: TargetSpec) -> TrajectoryEquation<'g, G> {
        TrajectoryEquation::new(self.gravity, self.launch_speed_m_s, target)
    }

    pub fn find_all_roots(&self, target: TargetSpec) -> Result<Vec<f64>, SolverError> {
        find_all_roots(&self.equation(target), &self.settings)
    }

    /// Roots and arcs for a single target; descent is judged at the target's own distance.
    pub fn solve_variant(&self, target: TargetSpec) -> Result<VariantSolution, SolverError> {
        let equation = self.equation(target);
        let roots_deg = find_all_roots(&equation, &self.settings)?;
        let arcs = classify_roots(&roots_deg, |theta| equation.is_descending(theta));
        Ok(VariantSolution {
            distance_m: target.distance_m,
            evaluated: true,
            roots_deg,
            status: arcs.status(),
            arcs,
        })
    }

    /// Solve a target given by distance and sighting angle.
    pub fn solve(&self, distance_m: f64, aim_deg: f64) -> Result<SolveReport, SolverError> {
        self.solve_target(TargetSpec::from_aim(distance_m, aim_deg)?)
    }

    /// Nominal solve plus near/far solves with the height held fixed.
    ///
    /// Near/far are only solved when the distance exceeds the sensitivity offset;
    /// otherwise they are reported as skipped with no arcs.
    pub fn solve_target(&self, target: TargetSpec) -> Result<SolveReport, SolverError> {
        let offset = self.settings.sensitivity_offset_m;
        let nominal = self.solve_variant(target)?;

        let near_m = target.distance_m - offset;
        let far_m = target.distance_m + offset;
        let (near, far) = if target.distance_m > offset {
            (
                self.solve_variant(target.at_distance(near_m)?)?,
                self.solve_variant(target.at_distance(far_m)?)?,
            )
        } else {
            debug!(
                distance_m = target.distance_m,
                offset_m = offset,
                "target too close for sensitivity solves"
            );
            (
                VariantSolution::skipped(near_m),
                VariantSolution::skipped(far_m),
            )
        };

        Ok(SolveReport {
            launch_speed_m_s: self.launch_speed_m_s,
            height_m: target.height_m,
            nominal,
            near,
            far,
        })
    }

    /// Sampled flight path for an arc, or `None` if gravity is undefined at `theta_deg`.
    pub fn path(&self, theta_deg: f64, target: TargetSpec, samples: usize) -> Option<Vec<PathPoint>> {
        let g = self.gravity.gravity_at(theta_deg)?;
        Some(sample_path(
            theta_deg,
            g,
            self.launch_speed_m_s,
            target,
            samples,
        ))
    }
}
