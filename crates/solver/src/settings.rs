//! Tunable numerical parameters for the scan/bisect pipeline.

use dart_core::constants::{
    DEFAULT_BISECTION_MAX_ITER, DEFAULT_BISECTION_TOLERANCE_DEG, DEFAULT_ROOT_ROUNDING_DIGITS,
    DEFAULT_SCAN_STEP_DEG, DEFAULT_SENSITIVITY_OFFSET_M,
};
use serde::Serialize;

use crate::SolverError;

/// Beyond this many decimals an `f64` angle no longer rounds meaningfully.
const MAX_ROUNDING_DIGITS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolverSettings {
    /// Sampling step for the sign-change scan (degrees). Finer steps catch
    /// closely spaced roots at proportional cost.
    pub scan_step_deg: f64,
    /// Bisection stops once the bracket is narrower than this (degrees).
    pub tolerance_deg: f64,
    pub max_iterations: usize,
    /// Decimal digits kept when deduplicating roots.
    pub rounding_digits: u32,
    /// Distance offset for the near/far solves (m).
    pub sensitivity_offset_m: f64,
}

impl Default for SolverSettings {
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

impl SolverSettings {
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.scan_step_deg.is_finite() && self.scan_step_deg > 0.0) {
            return Err(SolverError::InvalidSettings(format!(
                "scan step must be positive, got {}",
                self.scan_step_deg
            )));
        }
        if !(self.tolerance_deg.is_finite() && self.tolerance_deg > 0.0) {
            return Err(SolverError::InvalidSettings(format!(
                "bisection tolerance must be positive, got {}",
                self.tolerance_deg
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidSettings(
                "bisection needs at least one iteration".to_string(),
            ));
        }
        if self.rounding_digits > MAX_ROUNDING_DIGITS {
            return Err(SolverError::InvalidSettings(format!(
                "root rounding keeps at most {MAX_ROUNDING_DIGITS} digits, got {}",
                self.rounding_digits
            )));
        }
        if !(self.sensitivity_offset_m.is_finite() && self.sensitivity_offset_m > 0.0) {
            return Err(SolverError::InvalidSettings(format!(
                "sensitivity offset must be positive, got {}",
                self.sensitivity_offset_m
            )));
        }
        Ok(())
    }
}
