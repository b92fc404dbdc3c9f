//! Late-fee domain types.

use std::fmt;
use std::str::FromStr;

use feedesk_shared::config::LateFeeSection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LateFeeError;
use super::validation::validate_config;

/// Rule used to turn days-late into a fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LateFeeType {
    /// A flat amount once the challan is late.
    Fixed,
    /// A fixed amount for every day late.
    PerDay,
    /// An amount looked up from day-range slabs.
    SlabBased,
}

impl LateFeeType {
    /// Returns the string representation of the fee type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::PerDay => "per-day",
            Self::SlabBased => "slab-based",
        }
    }
}

impl fmt::Display for LateFeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LateFeeType {
    type Err = LateFeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "per-day" => Ok(Self::PerDay),
            "slab-based" => Ok(Self::SlabBased),
            other => Err(LateFeeError::InvalidConfiguration(format!(
                "unknown late fee type '{other}'"
            ))),
        }
    }
}

/// A day-range to amount mapping.
///
/// `from_day` and `to_day` are inclusive offsets past the due date plus grace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFeeSlab {
    /// First day covered.
    pub from_day: u32,
    /// Last day covered.
    pub to_day: u32,
    /// Fee charged for any day in the range.
    pub amount: Decimal,
}

impl LateFeeSlab {
    /// Creates a slab.
    #[must_use]
    pub const fn new(from_day: u32, to_day: u32, amount: Decimal) -> Self {
        Self {
            from_day,
            to_day,
            amount,
        }
    }

    /// Returns true if `days_late` falls inside this slab.
    #[must_use]
    pub fn covers(&self, days_late: u32) -> bool {
        self.from_day <= days_late && days_late <= self.to_day
    }
}

/// Late-fee settings for a school.
///
/// Only the amount selected by `late_fee_type` is used; the others are kept
/// so an administrator can switch rules without losing what they entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFeeConfig {
    /// Day of month (1-28) challans fall due.
    pub due_date_day: u32,
    /// Days after the due date before fees accrue.
    pub grace_period_days: u32,
    /// Active rule.
    pub late_fee_type: LateFeeType,
    /// Amount for [`LateFeeType::Fixed`].
    pub fixed_amount: Decimal,
    /// Daily amount for [`LateFeeType::PerDay`].
    pub per_day_amount: Decimal,
    /// Tiers for [`LateFeeType::SlabBased`], ascending by `from_day`.
    pub slabs: Vec<LateFeeSlab>,
    /// Upper bound on the fee.
    pub max_late_fee_cap: Decimal,
    /// Whether waivers may be requested.
    pub allow_waiver: bool,
}

impl LateFeeConfig {
    /// Returns the slab covering `days_late`, if any.
    #[must_use]
    pub fn slab_for(&self, days_late: u32) -> Option<&LateFeeSlab> {
        self.slabs.iter().find(|slab| slab.covers(days_late))
    }
}

impl TryFrom<LateFeeSection> for LateFeeConfig {
    type Error = LateFeeError;

    fn try_from(section: LateFeeSection) -> Result<Self, Self::Error> {
        let config = Self {
            due_date_day: section.due_date_day,
            grace_period_days: section.grace_period_days,
            late_fee_type: section.late_fee_type.parse()?,
            fixed_amount: section.fixed_amount,
            per_day_amount: section.per_day_amount,
            slabs: section
                .slabs
                .into_iter()
                .map(|s| LateFeeSlab::new(s.from_day, s.to_day, s.amount))
                .collect(),
            max_late_fee_cap: section.max_late_fee_cap,
            allow_waiver: section.allow_waiver,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Raised when no slab covers the days late.
///
/// The fee is reported as zero, which most likely under-charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabGapWarning {
    /// Days late that fell outside every slab.
    pub days_late: u32,
    /// Last day covered by the configured slabs.
    pub covered_through: Option<u32>,
}

impl fmt::Display for SlabGapWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.covered_through {
            Some(last) => write!(
                f,
                "no late fee slab covers day {} (slabs end at day {last})",
                self.days_late
            ),
            None => write!(f, "no late fee slabs configured for day {}", self.days_late),
        }
    }
}

/// Result of applying a late-fee rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFeeAssessment {
    /// Days late after clamping negatives to zero.
    pub days_late: u32,
    /// Rule that produced the amount.
    pub rule: LateFeeType,
    /// Amount before the cap was applied.
    pub uncapped_amount: Decimal,
    /// Amount owed.
    pub amount: Decimal,
    /// True if the cap reduced the amount.
    pub capped: bool,
    /// Set when slab lookup found no match.
    pub warning: Option<SlabGapWarning>,
}

impl LateFeeAssessment {
    /// An assessment for a challan that is not late.
    #[must_use]
    pub fn on_time(rule: LateFeeType) -> Self {
        Self {
            days_late: 0,
            rule,
            uncapped_amount: Decimal::ZERO,
            amount: Decimal::ZERO,
            capped: false,
            warning: None,
        }
    }
}
