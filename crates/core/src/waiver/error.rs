//! Waiver workflow error types.

use feedesk_shared::AppError;
use feedesk_shared::types::{ChallanId, UserId};
use thiserror::Error;

use super::types::WaiverStatus;

/// Errors that can occur while requesting or deciding a waiver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WaiverError {
    /// The school's settings do not allow waivers.
    #[error("Late fee waivers are disabled")]
    WaiverNotAllowed,

    /// A reason is required.
    #[error("A reason is required")]
    ReasonRequired,

    /// The request has already been decided.
    #[error("Invalid waiver transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: WaiverStatus,
        /// The attempted target status.
        to: WaiverStatus,
    },

    /// The approver's role is too low.
    #[error("Role {user_role} does not meet required role {required_role}")]
    InsufficientRole {
        /// The approver's role.
        user_role: String,
        /// The minimum role.
        required_role: String,
    },

    /// The requester tried to decide their own request.
    #[error("User {user_id} cannot decide their own waiver request")]
    SelfApproval {
        /// The user who raised and tried to decide the request.
        user_id: UserId,
    },

    /// The waiver belongs to a different challan.
    #[error("Waiver is for challan {waiver_challan}, not {challan}")]
    WaiverMismatch {
        /// Challan named on the waiver.
        waiver_challan: ChallanId,
        /// Challan being assessed.
        challan: ChallanId,
    },
}

impl WaiverError {
    /// Returns the HTTP-style status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ReasonRequired | Self::WaiverMismatch { .. } => 400,
            Self::InsufficientRole { .. } | Self::SelfApproval { .. } => 403,
            Self::InvalidTransition { .. } => 409,
            Self::WaiverNotAllowed => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::WaiverNotAllowed => "WAIVER_NOT_ALLOWED",
            Self::ReasonRequired => "REASON_REQUIRED",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::InsufficientRole { .. } => "INSUFFICIENT_ROLE",
            Self::SelfApproval { .. } => "SELF_APPROVAL",
            Self::WaiverMismatch { .. } => "WAIVER_MISMATCH",
        }
    }
}

impl From<WaiverError> for AppError {
    fn from(err: WaiverError) -> Self {
        let msg = err.to_string();
        match err {
            WaiverError::WaiverNotAllowed => Self::BusinessRule(msg),
            WaiverError::ReasonRequired | WaiverError::WaiverMismatch { .. } => {
                Self::Validation(msg)
            }
            WaiverError::InvalidTransition { .. } => Self::Conflict(msg),
            WaiverError::InsufficientRole { .. } | WaiverError::SelfApproval { .. } => {
                Self::Forbidden(msg)
            }
        }
    }
}
