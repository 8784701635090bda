use approx::assert_abs_diff_eq;
use dart_arc_calculator::domain::AngleDomain;
use dart_arc_calculator::gravity::{GravityFunction, GravityModel};
use dart_arc_calculator::solver::{
    MISS_SENTINEL, SolverError, SolverSettings, TargetSpec, TrajectoryEquation, bisect,
    find_all_roots, scan_brackets,
};

const V0: f64 = 100.37;

fn sparrow() -> GravityModel {
    GravityModel::with_domain(
        &[
            (30.00, 21.6),
            (46.77, 24.6),
            (53.58, 27.8),
            (66.95, 31.8),
            (81.89, 35.2888),
            (89.00, 37.2539),
        ],
        AngleDomain::new(25.0, 89.0).unwrap(),
    )
    .expect("valid table")
}

/// Constant gravity over the default solving domain.
struct FlatGravity(f64);

impl GravityFunction for FlatGravity {
    fn gravity_at(&self, theta_deg: f64) -> Option<f64> {
        self.domain().contains(theta_deg).then_some(self.0)
    }

    fn domain(&self) -> AngleDomain {
        AngleDomain::default()
    }
}

#[test]
fn scan_reports_strict_sign_changes() {
    let domain = AngleDomain::new(25.0, 89.0).unwrap();
    let brackets: Vec<_> = scan_brackets(|t| t - 50.005, domain, 0.01).collect();
    assert_eq!(brackets.len(), 1);
    assert_abs_diff_eq!(brackets[0].lo_deg, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(brackets[0].hi_deg, 50.01, epsilon = 1e-9);
    assert!(brackets[0].f_lo < 0.0 && brackets[0].f_hi > 0.0);
}

#[test]
fn scan_ignores_exact_zero_samples() {
    let domain = AngleDomain::new(0.0, 10.0).unwrap();
    assert_eq!(domain.sample_count(0.5), 20);
    assert_eq!(scan_brackets(|t| t - 5.0, domain, 0.5).count(), 0);
}

#[test]
fn scan_samples_stay_inside_half_open_domain() {
    let domain = AngleDomain::new(25.0, 89.0).unwrap();
    let samples: Vec<f64> = domain.samples(0.01).collect();
    assert_eq!(samples.len(), 6400);
    assert_eq!(samples[0], 25.0);
    assert!(samples.iter().all(|&t| domain.contains(t)));
}

#[test]
fn scan_grid_never_lands_on_the_excluded_edge() {
    // 20.04 + 6896 * 0.01 rounds to exactly 89.0
    let domain = AngleDomain::new(20.04, 89.0).unwrap();
    let samples: Vec<f64> = domain.samples(0.01).collect();
    assert_eq!(samples.len(), domain.sample_count(0.01));
    assert!(samples.iter().all(|&t| domain.contains(t)));
    assert!(*samples.last().unwrap() < 89.0);
}

#[test]
fn no_root_reported_on_the_domain_edge() {
    let gravity = GravityModel::with_domain(
        &[
            (30.00, 21.6),
            (46.77, 24.6),
            (53.58, 27.8),
            (66.95, 31.8),
            (81.89, 35.2888),
            (89.00, 37.2539),
        ],
        AngleDomain::new(20.04, 89.0).unwrap(),
    )
    .expect("valid table");
    let target = TargetSpec::from_aim(50.0, 10.0).unwrap();
    let equation = TrajectoryEquation::new(&gravity, V0, target);
    let roots = find_all_roots(&equation, &SolverSettings::default()).expect("roots");

    assert_eq!(roots.len(), 1, "roots = {roots:?}");
    assert_abs_diff_eq!(roots[0], 84.7562, epsilon = 1e-3);
    assert!(roots.iter().all(|&r| gravity.domain().contains(r)));
}

#[test]
fn bisect_converges_within_tolerance() {
    let root = bisect(|x| x * x - 2.0, 1.0, 2.0, 1e-6, 50).expect("bracketed");
    assert_abs_diff_eq!(root, 2f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn bisect_rejects_unbracketed_interval() {
    let err = bisect(|x| x * x - 2.0, 2.0, 3.0, 1e-6, 50).expect_err("no sign change");
    assert!(matches!(err, SolverError::InvalidBracket { .. }));
}

#[test]
fn bisect_returns_midpoint_when_iterations_run_out() {
    let root = bisect(|x| x * x - 2.0, 1.0, 2.0, 1e-12, 3).expect("bracketed");
    // three halvings leave a 0.125-wide interval around sqrt(2)
    assert!((root - 2f64.sqrt()).abs() < 0.125);
}

#[test]
fn miss_function_uses_sentinel_outside_gravity_domain() {
    let gravity = sparrow();
    let target = TargetSpec::new(50.0, 8.8).unwrap();
    let equation = TrajectoryEquation::new(&gravity, V0, target);
    assert_eq!(equation.miss(24.99), MISS_SENTINEL);
    assert_eq!(equation.miss(89.0), MISS_SENTINEL);
    assert!(equation.miss(60.0) != MISS_SENTINEL);
    assert!(equation.is_descending(89.0).is_none());
}

#[test]
fn finds_the_angle_a_target_was_built_from() {
    let gravity = sparrow();
    let theta: f64 = 57.123;
    let d = 80.0;
    let g = gravity.evaluate(theta).unwrap();
    let rad = theta.to_radians();
    let h = d * rad.tan() - g * d * d / (2.0 * V0 * V0 * rad.cos().powi(2));

    let equation = TrajectoryEquation::new(&gravity, V0, TargetSpec::new(d, h).unwrap());
    let roots = find_all_roots(&equation, &SolverSettings::default()).expect("roots");
    assert!(
        roots.iter().any(|r| (r - theta).abs() < 1e-5),
        "roots = {roots:?}"
    );
}

#[test]
fn matches_flat_gravity_range_equation() {
    let gravity = FlatGravity(30.0);
    let range = 200.0;
    let equation = TrajectoryEquation::new(&gravity, V0, TargetSpec::new(range, 0.0).unwrap());
    let roots = find_all_roots(&equation, &SolverSettings::default()).expect("roots");

    let half_angle = 0.5 * (30.0 * range / (V0 * V0)).asin().to_degrees();
    assert_eq!(roots.len(), 1, "roots = {roots:?}");
    assert_abs_diff_eq!(roots[0], 90.0 - half_angle, epsilon = 1e-5);
    assert_eq!(equation.is_descending(roots[0]), Some(true));
}

#[test]
fn root_set_is_sorted_unique_and_repeatable() {
    let gravity = sparrow();
    let target = TargetSpec::from_aim(150.0, 30.0).unwrap();
    let equation = TrajectoryEquation::new(&gravity, V0, target);
    let settings = SolverSettings::default();

    let first = find_all_roots(&equation, &settings).expect("roots");
    let second = find_all_roots(&equation, &settings).expect("roots");
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert!(first.windows(2).all(|w| w[0] < w[1]));
    assert_abs_diff_eq!(first[0], 41.8464, epsilon = 1e-3);
    assert_abs_diff_eq!(first[1], 71.3035, epsilon = 1e-3);
}

#[test]
fn roots_never_sit_on_the_domain_edge() {
    let gravity = sparrow();
    let target = TargetSpec::from_aim(50.0, 10.0).unwrap();
    let equation = TrajectoryEquation::new(&gravity, V0, target);
    let roots = find_all_roots(&equation, &SolverSettings::default()).expect("roots");
    assert_eq!(roots.len(), 1);
    assert!(roots.iter().all(|&r| (25.0..88.99).contains(&r)));
    assert_abs_diff_eq!(roots[0], 84.7562, epsilon = 1e-3);
}

#[test]
fn unreachable_height_has_no_roots() {
    let gravity = sparrow();
    let target = TargetSpec::from_aim(50.0, 80.0).unwrap();
    let equation = TrajectoryEquation::new(&gravity, V0, target);
    let roots = find_all_roots(&equation, &SolverSettings::default()).expect("no fault");
    assert!(roots.is_empty());
}
