//! Estimation Error Types
//!
//! Reasons a growth baseline could not be computed from history. None of
//! these reach the caller: each one selects the quantity's proxy rate.

use thiserror::Error;

use super::snapshot::TrackedQuantity;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    /// Fewer than two ordered history points
    #[error("Insufficient history: {points} point(s), need at least 2")]
    InsufficientHistory { points: usize },

    /// Latest or previous point does not record the quantity
    #[error("Missing {quantity:?} value in {month:?}")]
    MissingValue {
        quantity: TrackedQuantity,
        month: String,
    },

    /// Previous-period value is zero, so the ratio is undefined
    #[error("Zero {quantity:?} baseline in {month:?}")]
    ZeroBaseline {
        quantity: TrackedQuantity,
        month: String,
    },

    /// Arithmetic produced NaN or infinity
    #[error("Non-finite {quantity:?} growth rate")]
    NonFinite { quantity: TrackedQuantity },
}

impl EstimateError {
    /// Whether the error comes from absent data rather than bad arithmetic
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            Self::InsufficientHistory { .. } | Self::MissingValue { .. }
        )
    }
}
