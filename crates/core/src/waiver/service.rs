//! Waiver request lifecycle.

use chrono::Utc;
use feedesk_shared::types::{ChallanId, UserId, WaiverId};
use tracing::info;

use super::error::WaiverError;
use super::types::{StaffRole, WaiverRequest, WaiverStatus};
use crate::late_fee::LateFeeConfig;

/// Lowest role allowed to decide a waiver.
pub const MIN_APPROVER_ROLE: StaffRole = StaffRole::Accountant;

/// Stateless service for waiver transitions.
pub struct WaiverService;

impl WaiverService {
    /// Raise a waiver request for a challan's late fee.
    ///
    /// # Errors
    ///
    /// Returns `WaiverNotAllowed` if the settings disable waivers and
    /// `ReasonRequired` if `reason` is blank.
    pub fn request(
        challan_id: ChallanId,
        requested_by: UserId,
        reason: &str,
        config: &LateFeeConfig,
    ) -> Result<WaiverRequest, WaiverError> {
        if !config.allow_waiver {
            return Err(WaiverError::WaiverNotAllowed);
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(WaiverError::ReasonRequired);
        }

        Ok(WaiverRequest {
            id: WaiverId::new(),
            challan_id,
            requested_by,
            reason: reason.to_string(),
            requested_at: Utc::now(),
            status: WaiverStatus::Pending,
            decided_by: None,
            decided_at: None,
            decision_note: None,
        })
    }

    /// Approve a pending waiver.
    ///
    /// # Errors
    ///
    /// Fails if the request is not pending, the approver's role is below
    /// [`MIN_APPROVER_ROLE`], or the approver raised the request.
    pub fn approve(
        request: &WaiverRequest,
        approver: UserId,
        approver_role: StaffRole,
        note: Option<String>,
    ) -> Result<WaiverRequest, WaiverError> {
        Self::check_decision(request, approver, approver_role, WaiverStatus::Approved)?;

        info!(
            waiver_id = %request.id,
            challan_id = %request.challan_id,
            approver = %approver,
            "Late fee waiver approved"
        );

        Ok(WaiverRequest {
            status: WaiverStatus::Approved,
            decided_by: Some(approver),
            decided_at: Some(Utc::now()),
            decision_note: note.filter(|n| !n.trim().is_empty()),
            ..request.clone()
        })
    }

    /// Reject a pending waiver.
    ///
    /// # Errors
    ///
    /// Same as [`WaiverService::approve`], plus `ReasonRequired` when the
    /// rejection reason is blank.
    pub fn reject(
        request: &WaiverRequest,
        approver: UserId,
        approver_role: StaffRole,
        reason: &str,
    ) -> Result<WaiverRequest, WaiverError> {
        Self::check_decision(request, approver, approver_role, WaiverStatus::Rejected)?;
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(WaiverError::ReasonRequired);
        }

        info!(
            waiver_id = %request.id,
            challan_id = %request.challan_id,
            approver = %approver,
            "Late fee waiver rejected"
        );

        Ok(WaiverRequest {
            status: WaiverStatus::Rejected,
            decided_by: Some(approver),
            decided_at: Some(Utc::now()),
            decision_note: Some(reason.to_string()),
            ..request.clone()
        })
    }

    /// Check if a status transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: WaiverStatus, to: WaiverStatus) -> bool {
        matches!(
            (from, to),
            (WaiverStatus::Pending, WaiverStatus::Approved | WaiverStatus::Rejected)
        )
    }

    fn check_decision(
        request: &WaiverRequest,
        approver: UserId,
        approver_role: StaffRole,
        to: WaiverStatus,
    ) -> Result<(), WaiverError> {
        if !Self::is_valid_transition(request.status, to) {
            return Err(WaiverError::InvalidTransition {
                from: request.status,
                to,
            });
        }
        if approver_role < MIN_APPROVER_ROLE {
            return Err(WaiverError::InsufficientRole {
                user_role: approver_role.to_string(),
                required_role: MIN_APPROVER_ROLE.to_string(),
            });
        }
        if approver == request.requested_by {
            return Err(WaiverError::SelfApproval { user_id: approver });
        }
        Ok(())
    }
}
