//! Challan and statement types.

use chrono::NaiveDate;
use feedesk_shared::types::{ChallanId, Money, StudentId, WaiverId};
use serde::{Deserialize, Serialize};

use crate::late_fee::{BillingMonth, LateFeeAssessment};

/// A fee demand issued to a student for one billing month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challan {
    /// Unique identifier.
    pub id: ChallanId,
    /// Student billed.
    pub student_id: StudentId,
    /// Month billed.
    pub billing_month: BillingMonth,
    /// Fees owed before any late fee.
    pub amount: Money,
}

impl Challan {
    /// Creates a challan with a fresh id.
    #[must_use]
    pub fn new(student_id: StudentId, billing_month: BillingMonth, amount: Money) -> Self {
        Self {
            id: ChallanId::new(),
            student_id,
            billing_month,
            amount,
        }
    }
}

/// What a student owes when paying a challan on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallanStatement {
    /// Challan assessed.
    pub challan_id: ChallanId,
    /// Date the challan fell due.
    pub due_date: NaiveDate,
    /// First date a late fee applies.
    pub late_from: Option<NaiveDate>,
    /// Date of payment.
    pub payment_date: NaiveDate,
    /// Base fees.
    pub base_amount: Money,
    /// Late-fee calculation.
    pub late_fee: LateFeeAssessment,
    /// Approved waiver applied, if any.
    pub waiver_id: Option<WaiverId>,
    /// Late fee forgiven.
    pub waived_amount: Money,
    /// Base plus late fee minus waiver.
    pub total_payable: Money,
}
