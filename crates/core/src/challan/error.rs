//! Challan assessment error types.

use feedesk_shared::AppError;
use thiserror::Error;

use crate::late_fee::LateFeeError;
use crate::waiver::WaiverError;

/// Errors raised while assessing a challan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChallanError {
    /// Base amount cannot be negative.
    #[error("Challan amount cannot be negative")]
    NegativeAmount,

    /// Base amount plus late fee does not fit in a decimal.
    #[error("Challan total is too large to represent")]
    AmountOverflow,

    /// Late-fee configuration or input problem.
    #[error(transparent)]
    LateFee(#[from] LateFeeError),

    /// Waiver problem.
    #[error(transparent)]
    Waiver(#[from] WaiverError),
}

impl From<ChallanError> for AppError {
    fn from(err: ChallanError) -> Self {
        match err {
            ChallanError::NegativeAmount | ChallanError::AmountOverflow => {
                Self::Validation(err.to_string())
            }
            ChallanError::LateFee(e) => e.into(),
            ChallanError::Waiver(e) => e.into(),
        }
    }
}
