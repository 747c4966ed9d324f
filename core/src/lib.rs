//! Sensitivity and luminosity estimator for far-infrared line observations
//! with a single-dish heterodyne telescope.
//!
//! [`LuminosityEstimator`] builds the fixed per-line receiver table, derives
//! noise-limited flux for requested integration times, and converts those
//! flux limits to luminosities at a given source distance.

pub mod config;
pub mod constants;
pub mod estimator;
pub mod math;
pub mod prelude;
pub mod receiver;
pub mod table;
pub mod telemetry;
pub mod units;

pub use config::TelescopeConfig;
pub use estimator::{FluxKind, FluxResult, LuminosityEstimator, LuminositySeries, SensitivityRun};
pub use prelude::{EstimatorError, EstimatorResult};
pub use table::{Column, LineTable, Unit};
