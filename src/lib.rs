//! Launch-angle calculator for a dart with angle-dependent effective gravity.
//!
//! The workspace crates are re-exported here so front-ends (the CLI, tests,
//! other tools) depend on a single library.

pub mod scenario;

pub use dart_config as config;
pub use dart_core::{constants, domain, units};
pub use dart_export as export;
pub use dart_gravity as gravity;
pub use dart_solver as solver;
