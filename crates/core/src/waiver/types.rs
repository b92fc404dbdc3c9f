//! Waiver domain types.

use chrono::{DateTime, Utc};
use feedesk_shared::types::{ChallanId, UserId, WaiverId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a waiver request.
///
/// Valid transitions:
/// - Pending → Approved (approve)
/// - Pending → Rejected (reject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaiverStatus {
    /// Awaiting a decision.
    Pending,
    /// Late fee is forgiven.
    Approved,
    /// Late fee stands.
    Rejected,
}

impl WaiverStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for WaiverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Staff role in the school office.
///
/// Roles are ordered from lowest to highest privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    /// Front-office clerk; may raise requests.
    Clerk = 0,
    /// Accounts office; may decide waivers.
    Accountant = 1,
    /// School principal.
    Principal = 2,
    /// System administrator.
    Admin = 3,
}

impl StaffRole {
    /// Parse a role from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clerk" => Some(Self::Clerk),
            "accountant" => Some(Self::Accountant),
            "principal" => Some(Self::Principal),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clerk => "clerk",
            Self::Accountant => "accountant",
            Self::Principal => "principal",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to forgive the late fee on one challan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaiverRequest {
    /// Unique identifier.
    pub id: WaiverId,
    /// Challan whose late fee is to be waived.
    pub challan_id: ChallanId,
    /// Staff member who raised the request.
    pub requested_by: UserId,
    /// Why the fee should be forgiven.
    pub reason: String,
    /// When the request was raised.
    pub requested_at: DateTime<Utc>,
    /// Current status.
    pub status: WaiverStatus,
    /// Who approved or rejected it.
    pub decided_by: Option<UserId>,
    /// When it was decided.
    pub decided_at: Option<DateTime<Utc>>,
    /// Approval note or rejection reason.
    pub decision_note: Option<String>,
}

impl WaiverRequest {
    /// Returns true if this waiver zeroes the late fee on `challan_id`.
    #[must_use]
    pub fn waives(&self, challan_id: ChallanId) -> bool {
        self.status == WaiverStatus::Approved && self.challan_id == challan_id
    }
}
