//! Core units, constants, and shared primitives for the Dart Arc Calculator workspace.

/// Calibration and solver defaults (SI units, angles in degrees).
pub mod constants {
    /// Empirically measured launch speed of the dart (m/s).
    pub const DEFAULT_LAUNCH_SPEED_M_S: f64 = 100.37;
    /// Lower bound of the solvable launch-angle domain (degrees, inclusive).
    pub const DEFAULT_DOMAIN_MIN_DEG: f64 = 25.0;
    /// Upper bound of the solvable launch-angle domain (degrees, exclusive).
    pub const DEFAULT_DOMAIN_MAX_DEG: f64 = 89.0;
    /// Sampling step used when scanning the domain for sign changes (degrees).
    pub const DEFAULT_SCAN_STEP_DEG: f64 = 0.01;
    /// Bisection interval width at which refinement stops (degrees).
    pub const DEFAULT_BISECTION_TOLERANCE_DEG: f64 = 1e-6;
    /// Iteration cap for a single bisection.
    pub const DEFAULT_BISECTION_MAX_ITER: usize = 50;
    /// Decimal digits kept when deduplicating roots.
    pub const DEFAULT_ROOT_ROUNDING_DIGITS: u32 = 5;
    /// Distance offset used for the near/far sensitivity solves (m).
    pub const DEFAULT_SENSITIVITY_OFFSET_M: f64 = 2.0;
}

/// Numeric helpers.
pub mod units {
    /// Round a value to a fixed number of decimal digits.
    #[inline]
    pub fn round_to_digits(v: f64, digits: u32) -> f64 {
        let scale = 10f64.powi(digits as i32);
        (v * scale).round() / scale
    }
}

/// Launch-angle domain shared by the gravity model and the solver.
pub mod domain {
    use std::fmt;

    use super::constants::{DEFAULT_DOMAIN_MAX_DEG, DEFAULT_DOMAIN_MIN_DEG};

    /// Closed-open interval `[min_deg, max_deg)` of launch angles in degrees.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct AngleDomain {
        pub min_deg: f64,
        pub max_deg: f64,
    }

    impl AngleDomain {
        /// Returns `None` if the bounds are not finite or the interval is empty.
        pub fn new(min_deg: f64, max_deg: f64) -> Option<Self> {
            if !min_deg.is_finite() || !max_deg.is_finite() || min_deg >= max_deg {
                return None;
            }
            Some(Self { min_deg, max_deg })
        }

        #[inline]
        pub fn contains(&self, theta_deg: f64) -> bool {
            theta_deg >= self.min_deg && theta_deg < self.max_deg
        }

        #[inline]
        pub fn width_deg(&self) -> f64 {
            self.max_deg - self.min_deg
        }

        /// Number of samples `min_deg + i * step_deg` that fall inside the domain.
        ///
        /// Starts from `ceil(width / step)` and drops trailing samples that
        /// rounding pushed onto or past `max_deg`.
        pub fn sample_count(&self, step_deg: f64) -> usize {
            if step_deg <= 0.0 || !step_deg.is_finite() {
                return 0;
            }
            let mut count = (self.width_deg() / step_deg).ceil() as usize;
            while count > 0 && self.min_deg + (count - 1) as f64 * step_deg >= self.max_deg {
                count -= 1;
            }
            count
        }

        /// Lazily yields `min_deg + i * step_deg` for every sample inside the domain.
        ///
        /// Samples are computed from the index rather than accumulated, so the
        /// sequence carries no drift across thousands of steps.
        pub fn samples(&self, step_deg: f64) -> impl Iterator<Item = f64> + use<> {
            let min = self.min_deg;
            (0..self.sample_count(step_deg)).map(move |i| min + i as f64 * step_deg)
        }
    }

    impl Default for AngleDomain {
        fn default() -> Self {
            Self {
                min_deg: DEFAULT_DOMAIN_MIN_DEG,
                max_deg: DEFAULT_DOMAIN_MAX_DEG,
            }
        }
    }

    impl fmt::Display for AngleDomain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[{:.2}°, {:.2}°)", self.min_deg, self.max_deg)
        }
    }
}
