// File: crates/overview-core/src/error.rs
// Summary: Validation errors for series shapes and sample configs.

use thiserror::Error;

/// Input series do not have the shape an annual projection needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("budget series must have 12 monthly values, got {len}")]
    BudgetLength { len: usize },
    #[error("actual series has {len} months, at most 12 allowed")]
    ActualTooLong { len: usize },
    #[error("actual series is empty; at least one observed month is required to project")]
    NoActualMonths,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `10^decimals` overflowed to infinity or underflowed to zero.
    #[error("decimals = {decimals} gives a rounding factor that is not finite and non-zero")]
    NonFiniteScale { decimals: i32 },
    #[error("sample bounds must be finite (min = {min}, max = {max})")]
    NonFiniteBounds { min: f64, max: f64 },
}
