// File: crates/overview-core/src/lib.rs
// Summary: Core library entry point; exports the annual aggregator and the sample generator.

pub mod annual;
pub mod error;
pub mod sample;

pub use annual::{project_annual, running_totals, total, AnnualOverview, MONTHS, MONTHS_PER_YEAR};
pub use error::{ConfigError, ShapeError};
pub use sample::{numbers, ContinuityGate, SampleConfig, SampleRng};
