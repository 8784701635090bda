//! Piecewise-linear effective gravity as a function of launch angle.
//!
//! The table is produced offline by fitting observed trajectories; this crate only
//! turns its anchor points into line segments and evaluates them. Angles are in
//! degrees, gravity in m/s².

use std::fmt;

use dart_core::domain::AngleDomain;
use dart_core::units::round_to_digits;
use serde::Serialize;
use thiserror::Error;

/// Source of effective gravity consumed by the solver.
pub trait GravityFunction {
    /// Gravity at `theta_deg`, or `None` when the angle lies outside the model's domain.
    fn gravity_at(&self, theta_deg: f64) -> Option<f64>;

    /// Domain over which `gravity_at` is defined.
    fn domain(&self) -> AngleDomain;
}

/// Errors raised while building a gravity table.
#[derive(Debug, Error, PartialEq)]
pub enum GravityError {
    #[error("gravity table needs at least two anchors, got {count}")]
    TooFewAnchors { count: usize },
    #[error("anchor {index} is not finite ({theta_deg}, {g_m_s2})")]
    NonFiniteAnchor {
        index: usize,
        theta_deg: f64,
        g_m_s2: f64,
    },
    #[error("anchor angles must be strictly increasing: {previous_deg} then {theta_deg} at index {index}")]
    NotIncreasing {
        index: usize,
        previous_deg: f64,
        theta_deg: f64,
    },
    #[error("invalid gravity domain [{min_deg}, {max_deg})")]
    InvalidDomain { min_deg: f64, max_deg: f64 },
}

/// One linear piece `g(θ) = slope·θ + intercept` between two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PiecewiseSegment {
    pub theta_lo_deg: f64,
    pub theta_hi_deg: f64,
    pub slope: f64,
    pub intercept: f64,
}

impl PiecewiseSegment {
    fn through(lo: (f64, f64), hi: (f64, f64)) -> Self {
        let slope = (hi.1 - lo.1) / (hi.0 - lo.0);
        Self {
            theta_lo_deg: lo.0,
            theta_hi_deg: hi.0,
            slope,
            intercept: lo.1 - slope * lo.0,
        }
    }

    /// Evaluate the segment's line, without any bounds check.
    #[inline]
    pub fn value_at(&self, theta_deg: f64) -> f64 {
        self.slope * theta_deg + self.intercept
    }
}

impl fmt::Display for PiecewiseSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}]  g(θ) = {:.5}·θ + {:.5}",
            self.theta_lo_deg,
            self.theta_hi_deg,
            round_to_digits(self.slope, 5),
            round_to_digits(self.intercept, 5)
        )
    }
}

/// Gravity table built from strictly increasing `(θ, g)` anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityModel {
    segments: Vec<PiecewiseSegment>,
    domain: AngleDomain,
}

impl GravityModel {
    /// Build a model whose domain spans `[first anchor, last anchor)`.
    pub fn from_anchors(anchors: &[(f64, f64)]) -> Result<Self, GravityError> {
        let segments = build_segments(anchors)?;
        let min_deg = segments[0].theta_lo_deg;
        let max_deg = segments[segments.len() - 1].theta_hi_deg;
        Ok(Self {
            segments,
            domain: AngleDomain { min_deg, max_deg },
        })
    }

    /// Build a model over an explicit domain.
    ///
    /// The domain must be finite, non-empty, and overlap the anchor span.
    /// Angles inside `domain` but beyond the outermost anchors are evaluated on the
    /// first or last segment's line.
    pub fn with_domain(anchors: &[(f64, f64)], domain: AngleDomain) -> Result<Self, GravityError> {
        let segments = build_segments(anchors)?;
        if AngleDomain::new(domain.min_deg, domain.max_deg).is_none() {
            return Err(GravityError::InvalidDomain {
                min_deg: domain.min_deg,
                max_deg: domain.max_deg,
            });
        }
        let first_deg = segments[0].theta_lo_deg;
        let last_deg = segments[segments.len() - 1].theta_hi_deg;
        if domain.min_deg > last_deg || domain.max_deg <= first_deg {
            return Err(GravityError::InvalidDomain {
                min_deg: domain.min_deg,
                max_deg: domain.max_deg,
            });
        }
        Ok(Self { segments, domain })
    }

    pub fn segments(&self) -> &[PiecewiseSegment] {
        &self.segments
    }

    /// Segment responsible for `theta_deg`, if the angle is inside the domain.
    ///
    /// A breakpoint belongs to the segment that ends there.
    pub fn segment_for(&self, theta_deg: f64) -> Option<&PiecewiseSegment> {
        if !self.domain.contains(theta_deg) {
            return None;
        }
        let idx = self
            .segments
            .partition_point(|segment| segment.theta_hi_deg < theta_deg)
            .min(self.segments.len() - 1);
        self.segments.get(idx)
    }

    pub fn evaluate(&self, theta_deg: f64) -> Option<f64> {
        self.segment_for(theta_deg)
            .map(|segment| segment.value_at(theta_deg))
    }
}

impl GravityFunction for GravityModel {
    fn gravity_at(&self, theta_deg: f64) -> Option<f64> {
        self.evaluate(theta_deg)
    }

    fn domain(&self) -> AngleDomain {
        self.domain
    }
}

fn build_segments(anchors: &[(f64, f64)]) -> Result<Vec<PiecewiseSegment>, GravityError> {
    if anchors.len() < 2 {
        return Err(GravityError::TooFewAnchors {
            count: anchors.len(),
        });
    }
    for (index, &(theta_deg, g_m_s2)) in anchors.iter().enumerate() {
        if !theta_deg.is_finite() || !g_m_s2.is_finite() {
            return Err(GravityError::NonFiniteAnchor {
                index,
                theta_deg,
                g_m_s2,
            });
        }
    }
    anchors
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            if pair[1].0 <= pair[0].0 {
                return Err(GravityError::NotIncreasing {
                    index: i + 1,
                    previous_deg: pair[0].0,
                    theta_deg: pair[1].0,
                });
            }
            Ok(PiecewiseSegment::through(pair[0], pair[1]))
        })
        .collect()
}
