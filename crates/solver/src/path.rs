//! Sampled flight path for a solved arc, for export to external plotters.

use serde::Serialize;

use crate::TargetSpec;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathPoint {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Sample the arc launched at `theta_deg` under constant gravity `gravity_m_s2`.
///
/// Targets at or above the launcher are followed until the dart returns to
/// launch height; targets below it until the dart reaches the target distance.
/// At least two samples are produced, the first at `t = 0`.
pub fn sample_path(
    theta_deg: f64,
    gravity_m_s2: f64,
    launch_speed_m_s: f64,
    target: TargetSpec,
    samples: usize,
) -> Vec<PathPoint> {
    let theta = theta_deg.to_radians();
    let vx = launch_speed_m_s * theta.cos();
    let vy = launch_speed_m_s * theta.sin();
    let end_s = if target.height_m >= 0.0 {
        2.0 * vy / gravity_m_s2
    } else {
        target.distance_m / vx
    };

    let count = samples.max(2);
    (0..count)
        .map(|i| {
            let t = end_s * i as f64 / (count - 1) as f64;
            PathPoint {
                time_s: t,
                x_m: vx * t,
                y_m: vy * t - 0.5 * gravity_m_s2 * t * t,
            }
        })
        .collect()
}
