//! Business rule validation for late-fee settings.

use rust_decimal::Decimal;

use super::error::LateFeeError;
use super::types::{LateFeeConfig, LateFeeSlab, LateFeeType};

/// Latest day of month a challan may fall due; every month has it.
pub const MAX_DUE_DATE_DAY: u32 = 28;

/// Validates a late-fee configuration.
///
/// # Errors
///
/// Returns `LateFeeError::InvalidConfiguration` describing the first rule
/// the configuration breaks.
pub fn validate_config(config: &LateFeeConfig) -> Result<(), LateFeeError> {
    if !(1..=MAX_DUE_DATE_DAY).contains(&config.due_date_day) {
        return Err(invalid(format!(
            "due date day must be between 1 and {MAX_DUE_DATE_DAY}, got {}",
            config.due_date_day
        )));
    }

    ensure_non_negative("fixed amount", config.fixed_amount)?;
    ensure_non_negative("per-day amount", config.per_day_amount)?;
    ensure_non_negative("maximum late fee cap", config.max_late_fee_cap)?;

    if config.late_fee_type == LateFeeType::SlabBased {
        validate_slabs(&config.slabs)?;
    }

    Ok(())
}

/// Validates that slabs are well formed, ascending, and contiguous.
///
/// # Errors
///
/// Returns `LateFeeError::InvalidConfiguration` on an empty list, an
/// inverted range, a negative amount, or overlapping / gapped neighbours.
pub fn validate_slabs(slabs: &[LateFeeSlab]) -> Result<(), LateFeeError> {
    if slabs.is_empty() {
        return Err(invalid("slab-based late fee requires at least one slab"));
    }

    for (index, slab) in slabs.iter().enumerate() {
        if slab.from_day == 0 {
            return Err(invalid(format!("slab {index} must start at day 1 or later")));
        }
        if slab.from_day > slab.to_day {
            return Err(invalid(format!(
                "slab {index} starts at day {} after it ends at day {}",
                slab.from_day, slab.to_day
            )));
        }
        ensure_non_negative("slab amount", slab.amount)?;
    }

    for (index, pair) in slabs.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.from_day <= prev.to_day {
            return Err(invalid(format!(
                "slab {} (days {}-{}) overlaps or precedes slab {index} (days {}-{})",
                index + 1,
                next.from_day,
                next.to_day,
                prev.from_day,
                prev.to_day
            )));
        }
        if next.from_day != prev.to_day + 1 {
            return Err(invalid(format!(
                "days {}-{} are not covered by any slab",
                prev.to_day + 1,
                next.from_day - 1
            )));
        }
    }

    Ok(())
}

fn ensure_non_negative(field: &str, value: Decimal) -> Result<(), LateFeeError> {
    if value < Decimal::ZERO {
        return Err(invalid(format!("{field} cannot be negative")));
    }
    Ok(())
}

fn invalid(msg: impl Into<String>) -> LateFeeError {
    LateFeeError::InvalidConfiguration(msg.into())
}
