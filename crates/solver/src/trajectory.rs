//! Miss function and descent predicate for a drag-free arc with angle-dependent gravity.

use dart_core::domain::AngleDomain;
use dart_gravity::GravityFunction;

use crate::TargetSpec;

/// Value returned by [`TrajectoryEquation::miss`] where gravity is undefined.
///
/// Always positive, so the edge of the gravity domain never looks like a sign change.
pub const MISS_SENTINEL: f64 = 1e6;

/// `F(θ)` for a fixed launch speed and target.
pub struct TrajectoryEquation<'g, G: GravityFunction + ?Sized> {
    gravity: &'g G,
    launch_speed_m_s: f64,
    target: TargetSpec,
}

impl<'g, G: GravityFunction + ?Sized> TrajectoryEquation<'g, G> {
    pub fn new(gravity: &'g G, launch_speed_m_s: f64, target: TargetSpec) -> Self {
        Self {
            gravity,
            launch_speed_m_s,
            target,
        }
    }

    pub fn target(&self) -> TargetSpec {
        self.target
    }

    pub fn domain(&self) -> AngleDomain {
        self.gravity.domain()
    }

    /// Height of the arc at `x = d` minus the target height.
    ///
    /// `F(θ) = d·tan θ − g(θ)·d² / (2·v0²·cos²θ) − h`
    pub fn miss(&self, theta_deg: f64) -> f64 {
        let Some(g) = self.gravity.gravity_at(theta_deg) else {
            return MISS_SENTINEL;
        };
        let theta = theta_deg.to_radians();
        let d = self.target.distance_m;
        let v0 = self.launch_speed_m_s;
        let cos = theta.cos();
        d * theta.tan() - g * d * d / (2.0 * v0 * v0 * cos * cos) - self.target.height_m
    }

    /// Whether the dart has passed its apex by the time it reaches `x = d`.
    ///
    /// `None` when gravity is undefined at `theta_deg`.
    pub fn is_descending(&self, theta_deg: f64) -> Option<bool> {
        let g = self.gravity.gravity_at(theta_deg)?;
        let theta = theta_deg.to_radians();
        let v0 = self.launch_speed_m_s;
        let cos = theta.cos();
        let slope = theta.tan() - g * self.target.distance_m / (v0 * v0 * cos * cos);
        Some(slope < 0.0)
    }
}
