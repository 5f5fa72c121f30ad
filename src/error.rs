//! Errors for parameter validation and parsing.
//!
//! The calculator itself never fails; these only cover the inputs a caller
//! assembles before calling it.

use thiserror::Error;

/// Invalid [`RiskParams`](crate::RiskParams).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParamsError {
    /// Liquidation buffer must be finite and non-negative.
    #[error("buffer_pct must be >= 0 and finite, got {0}")]
    Buffer(f64),
    /// Leverage cap must be finite and at least 1x.
    #[error("leverage_cap must be >= 1 and finite, got {0}")]
    LeverageCap(f64),
}

/// Unrecognised side string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown side '{0}', expected long or short")]
pub struct ParseSideError(pub String);

/// Unrecognised size mode string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown size mode '{0}', expected quote or base")]
pub struct ParseSizeModeError(pub String);
