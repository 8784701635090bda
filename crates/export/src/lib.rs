//! Export helpers for solve reports (JSON) and sampled flight paths (CSV).

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod report {
    use std::io::Write;
    use std::path::Path;

    use dart_solver::SolveReport;
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use super::{ExportError, writer_for_path};

    #[derive(Serialize)]
    struct Bounds {
        low_min_deg: Option<f64>,
        low_max_deg: Option<f64>,
        high_min_deg: Option<f64>,
        high_max_deg: Option<f64>,
    }

    #[derive(Serialize)]
    struct ReportSidecar<'a> {
        distance_m: f64,
        aim_deg: f64,
        #[serde(flatten)]
        report: &'a SolveReport,
        bounds: Bounds,
    }

    /// Write the report as pretty JSON, including the four sensitivity bounds.
    pub fn write_json(
        writer: &mut dyn Write,
        aim_deg: f64,
        report: &SolveReport,
    ) -> Result<(), ExportError> {
        let sidecar = ReportSidecar {
            distance_m: report.nominal.distance_m,
            aim_deg,
            report,
            bounds: Bounds {
                low_min_deg: report.low_min_deg(),
                low_max_deg: report.low_max_deg(),
                high_min_deg: report.high_min_deg(),
                high_max_deg: report.high_max_deg(),
            },
        };
        to_writer_pretty(&mut *writer, &sidecar)?;
        writeln!(writer)?;
        Ok(())
    }

    pub fn write_json_to_path(
        path: &Path,
        aim_deg: f64,
        report: &SolveReport,
    ) -> Result<(), ExportError> {
        let mut writer = writer_for_path(path)?;
        write_json(writer.as_mut(), aim_deg, report)?;
        writer.flush()?;
        Ok(())
    }
}

pub mod trajectory {
    use std::io::Write;
    use std::path::Path;

    use dart_solver::PathPoint;
    use serde::Serialize;

    use super::{ExportError, writer_for_path};

    /// CSV row emitted by the trajectory exporter.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub arc: &'a str,
        pub theta_deg: f64,
        pub time_s: f64,
        pub x_m: f64,
        pub y_m: f64,
    }

    /// A labelled arc and its samples.
    #[derive(Debug, Clone)]
    pub struct ArcPath<'a> {
        pub arc: &'a str,
        pub theta_deg: f64,
        pub points: &'a [PathPoint],
    }

    /// Write every arc's samples as CSV rows under a single header.
    pub fn write_csv(writer: &mut dyn Write, arcs: &[ArcPath<'_>]) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for path in arcs {
            for point in path.points {
                csv_writer.serialize(Record {
                    arc: path.arc,
                    theta_deg: path.theta_deg,
                    time_s: point.time_s,
                    x_m: point.x_m,
                    y_m: point.y_m,
                })?;
            }
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_csv_to_path(path: &Path, arcs: &[ArcPath<'_>]) -> Result<(), ExportError> {
        let mut writer = writer_for_path(path)?;
        write_csv(writer.as_mut(), arcs)?;
        writer.flush()?;
        Ok(())
    }
}
