//! Challan assessment: base fees, late fee, and waiver.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::ChallanError;
use super::types::{Challan, ChallanStatement};
use crate::late_fee::{
    LateFeeCalculator, LateFeeConfig, days_late, first_late_day, validate_config,
};
use crate::waiver::{WaiverError, WaiverRequest};

/// Stateless challan assessor.
pub struct ChallanAssessor;

impl ChallanAssessor {
    /// Works out what is owed on `challan` if paid on `payment_date`.
    ///
    /// A pending or rejected waiver has no effect; an approved one forgives
    /// the whole late fee.
    ///
    /// # Errors
    ///
    /// Returns an error if the base amount is negative, the total does not
    /// fit in a `Decimal`, the configuration is invalid, or `waiver` was
    /// raised for a different challan.
    pub fn assess(
        challan: &Challan,
        payment_date: NaiveDate,
        config: &LateFeeConfig,
        waiver: Option<&WaiverRequest>,
    ) -> Result<ChallanStatement, ChallanError> {
        if challan.amount.is_negative() {
            return Err(ChallanError::NegativeAmount);
        }
        validate_config(config)?;
        if let Some(w) = waiver
            && w.challan_id != challan.id
        {
            return Err(WaiverError::WaiverMismatch {
                waiver_challan: w.challan_id,
                challan: challan.id,
            }
            .into());
        }

        let due_date = challan.billing_month.due_date(config.due_date_day)?;
        let late_days = days_late(due_date, payment_date, config.grace_period_days);
        let late_fee = LateFeeCalculator::calculate(i64::from(late_days), config)?;

        let applied = waiver.filter(|w| w.waives(challan.id));
        let waived = if applied.is_some() {
            late_fee.amount
        } else {
            Decimal::ZERO
        };
        let total = challan
            .amount
            .amount
            .checked_add(late_fee.amount)
            .and_then(|t| t.checked_sub(waived))
            .ok_or(ChallanError::AmountOverflow)?;

        debug!(
            challan_id = %challan.id,
            days_late = late_days,
            late_fee = %late_fee.amount,
            waived = %waived,
            total = %total,
            "Challan assessed"
        );

        Ok(ChallanStatement {
            challan_id: challan.id,
            due_date,
            late_from: first_late_day(due_date, config.grace_period_days),
            payment_date,
            base_amount: challan.amount,
            waiver_id: applied.map(|w| w.id),
            waived_amount: challan.amount.with_amount(waived),
            total_payable: challan.amount.with_amount(total),
            late_fee,
        })
    }
}
