use dart_arc_calculator::export::report::{write_json, write_json_to_path};
use dart_arc_calculator::export::trajectory::{ArcPath, write_csv};
use dart_arc_calculator::gravity::GravityModel;
use dart_arc_calculator::solver::{ArcSolver, SolverSettings, TargetSpec};

fn solver_fixture() -> GravityModel {
    GravityModel::from_anchors(&[
        (30.00, 21.6),
        (46.77, 24.6),
        (53.58, 27.8),
        (66.95, 31.8),
        (81.89, 35.2888),
        (89.00, 37.2539),
    ])
    .expect("valid table")
}

#[test]
fn report_json_carries_arcs_and_bounds() {
    let gravity = solver_fixture();
    let solver = ArcSolver::new(&gravity, 100.37, SolverSettings::default()).unwrap();
    let report = solver.solve(150.0, 30.0).unwrap();

    let mut buffer = Vec::new();
    write_json(&mut buffer, 30.0, &report).expect("json");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");

    assert_eq!(value["distance_m"], 150.0);
    assert_eq!(value["aim_deg"], 30.0);
    assert_eq!(value["nominal"]["status"], "both");
    assert_eq!(value["near"]["distance_m"], 148.0);
    assert!(value["nominal"]["arcs"]["low_deg"].is_number());
    assert!(value["bounds"]["high_max_deg"].is_number());
    assert_eq!(
        value["nominal"]["roots_deg"].as_array().map(|r| r.len()),
        Some(2)
    );
}

#[test]
fn report_json_marks_missing_arcs_as_null() {
    let gravity = solver_fixture();
    let solver = ArcSolver::new(&gravity, 100.37, SolverSettings::default()).unwrap();
    let report = solver.solve(2.0, 10.0).unwrap();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested/report.json");
    write_json_to_path(&path, 10.0, &report).expect("json file");

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value["near"]["arcs"]["low_deg"].is_null());
    assert_eq!(value["near"]["evaluated"], false);
    assert_eq!(value["nominal"]["status"], "no_solution");
}

#[test]
fn trajectory_csv_has_one_row_per_sample() {
    let gravity = solver_fixture();
    let solver = ArcSolver::new(&gravity, 100.37, SolverSettings::default()).unwrap();
    let target = TargetSpec::new(150.0, 86.6).unwrap();
    let low = solver.path(41.85, target, 5).unwrap();
    let high = solver.path(71.30, target, 5).unwrap();

    let mut buffer = Vec::new();
    write_csv(
        &mut buffer,
        &[
            ArcPath {
                arc: "low",
                theta_deg: 41.85,
                points: &low,
            },
            ArcPath {
                arc: "high",
                theta_deg: 71.30,
                points: &high,
            },
        ],
    )
    .expect("csv");

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "arc,theta_deg,time_s,x_m,y_m");
    assert_eq!(lines.len(), 11);
    assert!(lines[1].starts_with("low,41.85,0.0,0.0,0.0"));
    assert!(lines[10].starts_with("high,71.3,"));
}
