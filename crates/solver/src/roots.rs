//! Sign-change scan over the angle domain followed by bisection refinement.

use dart_core::domain::AngleDomain;
use dart_core::units::round_to_digits;
use dart_gravity::GravityFunction;
use tracing::{debug, error};

use crate::settings::SolverSettings;
use crate::trajectory::TrajectoryEquation;
use crate::SolverError;

/// Adjacent scan samples between which the miss function changes sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lo_deg: f64,
    pub hi_deg: f64,
    pub f_lo: f64,
    pub f_hi: f64,
}

/// Lazily scan `domain` at `step_deg` and yield every strict sign change of `f`.
///
/// A sample where `f` is exactly zero produces a zero product and is not
/// reported as a bracket.
pub fn scan_brackets<F>(f: F, domain: AngleDomain, step_deg: f64) -> impl Iterator<Item = Bracket>
where
    F: Fn(f64) -> f64,
{
    let mut previous: Option<(f64, f64)> = None;
    domain.samples(step_deg).filter_map(move |theta| {
        let value = f(theta);
        match previous.replace((theta, value)) {
            Some((lo_deg, f_lo)) if f_lo * value < 0.0 => Some(Bracket {
                lo_deg,
                hi_deg: theta,
                f_lo,
                f_hi: value,
            }),
            _ => None,
        }
    })
}

/// Bisection on `[a, b]`; requires `f(a)·f(b) ≤ 0`.
///
/// Returns the midpoint of the final interval. Hitting `max_iterations` before the
/// width drops below `tolerance` is not an error.
pub fn bisect<F>(
    f: F,
    mut a: f64,
    mut b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
{
    let mut fa = f(a);
    let fb = f(b);
    if fa * fb > 0.0 {
        return Err(SolverError::InvalidBracket {
            lo_deg: a,
            hi_deg: b,
            f_lo: fa,
            f_hi: fb,
        });
    }

    for _ in 0..max_iterations {
        let mid = 0.5 * (a + b);
        let fm = f(mid);
        if fa * fm <= 0.0 {
            b = mid;
        } else {
            a = mid;
            fa = fm;
        }
        if (b - a).abs() < tolerance {
            break;
        }
    }
    Ok(0.5 * (a + b))
}

/// Every launch angle in the gravity domain that hits the equation's target.
///
/// Roots are rounded to `settings.rounding_digits` decimals, sorted, and
/// deduplicated on the rounded value.
pub fn find_all_roots<G>(
    equation: &TrajectoryEquation<'_, G>,
    settings: &SolverSettings,
) -> Result<Vec<f64>, SolverError>
where
    G: GravityFunction + ?Sized,
{
    let miss = |theta: f64| equation.miss(theta);
    let mut roots = Vec::new();
    let mut brackets = 0usize;

    for bracket in scan_brackets(miss, equation.domain(), settings.scan_step_deg) {
        brackets += 1;
        let root = bisect(
            miss,
            bracket.lo_deg,
            bracket.hi_deg,
            settings.tolerance_deg,
            settings.max_iterations,
        )
        .inspect_err(|err| error!(%err, "bisection rejected a scanned bracket"))?;
        roots.push(round_to_digits(root, settings.rounding_digits));
    }

    roots.sort_by(f64::total_cmp);
    roots.dedup();

    let target = equation.target();
    debug!(
        distance_m = target.distance_m,
        height_m = target.height_m,
        brackets,
        ?roots,
        "root scan finished"
    );
    Ok(roots)
}
