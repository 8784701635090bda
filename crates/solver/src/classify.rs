//! Low/high arc selection from a root set.

use serde::Serialize;
use tracing::warn;

/// Canonical low and high arcs for one target (degrees).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub low_deg: Option<f64>,
    pub high_deg: Option<f64>,
}

/// Shape of the answer for one target, in the order a shooter reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    /// No launch angle in the domain hits the target.
    NoSolution,
    /// Roots exist but none is descending, so there is no high arc.
    LowOnly,
    /// A single usable angle, the high arc.
    HighOnly,
    Both,
}

impl ClassificationResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.low_deg.is_none() && self.high_deg.is_none()
    }

    pub fn status(&self) -> SolutionStatus {
        match (self.low_deg, self.high_deg) {
            (None, None) => SolutionStatus::NoSolution,
            (Some(_), None) => SolutionStatus::LowOnly,
            (None, Some(_)) => SolutionStatus::HighOnly,
            (Some(_), Some(_)) => SolutionStatus::Both,
        }
    }
}

/// Split `roots` by the descent predicate and pick the canonical arcs.
///
/// - two or more descending roots: shallowest is low, steepest is high;
/// - exactly one descending root: it is high, and low is the steepest ascending
///   root strictly below it;
/// - no descending root: no high arc, low is the steepest ascending root.
///
/// Roots for which `is_descending` returns `None` are skipped. The result does not
/// depend on the order of `roots`.
pub fn classify_roots<P>(roots: &[f64], is_descending: P) -> ClassificationResult
where
    P: Fn(f64) -> Option<bool>,
{
    let mut descending = Vec::new();
    let mut ascending = Vec::new();
    for &root in roots {
        match is_descending(root) {
            Some(true) => descending.push(root),
            Some(false) => ascending.push(root),
            None => warn!(root_deg = root, "dropping root with undefined gravity"),
        }
    }
    descending.sort_by(f64::total_cmp);
    ascending.sort_by(f64::total_cmp);

    match descending.as_slice() {
        [] => ClassificationResult {
            low_deg: ascending.last().copied(),
            high_deg: None,
        },
        [high] => ClassificationResult {
            low_deg: ascending.iter().rev().copied().find(|&r| r < *high),
            high_deg: Some(*high),
        },
        [first, .., last] => ClassificationResult {
            low_deg: Some(*first),
            high_deg: Some(*last),
        },
    }
}
