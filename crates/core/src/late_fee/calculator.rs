//! Late-fee calculation.

use rust_decimal::Decimal;
use tracing::warn;

use super::error::LateFeeError;
use super::types::{LateFeeAssessment, LateFeeConfig, LateFeeType, SlabGapWarning};
use super::validation::validate_config;

/// Stateless late-fee calculator.
pub struct LateFeeCalculator;

impl LateFeeCalculator {
    /// Computes the late fee owed for a challan paid `days_late` days after
    /// its due date plus grace period.
    ///
    /// Zero or negative `days_late` means the payment is on time. The amount
    /// never exceeds `max_late_fee_cap`. A slab-based configuration that has
    /// no slab for `days_late` yields zero with a [`SlabGapWarning`].
    ///
    /// # Errors
    ///
    /// Returns `LateFeeError::InvalidConfiguration` if `config` fails validation.
    pub fn calculate(
        days_late: i64,
        config: &LateFeeConfig,
    ) -> Result<LateFeeAssessment, LateFeeError> {
        validate_config(config)?;

        if days_late <= 0 {
            return Ok(LateFeeAssessment::on_time(config.late_fee_type));
        }
        let days = u32::try_from(days_late).unwrap_or(u32::MAX);

        let mut warning = None;
        let uncapped = match config.late_fee_type {
            LateFeeType::Fixed => config.fixed_amount,
            // Overflow only happens far beyond any sane cap.
            LateFeeType::PerDay => config
                .per_day_amount
                .checked_mul(Decimal::from(days))
                .unwrap_or(Decimal::MAX),
            LateFeeType::SlabBased => {
                if let Some(slab) = config.slab_for(days) {
                    slab.amount
                } else {
                    let gap = SlabGapWarning {
                        days_late: days,
                        covered_through: config.slabs.last().map(|s| s.to_day),
                    };
                    warn!(
                        days_late = days,
                        covered_through = ?gap.covered_through,
                        "No late fee slab covers days late; charging zero"
                    );
                    warning = Some(gap);
                    Decimal::ZERO
                }
            }
        };

        let amount = uncapped.min(config.max_late_fee_cap);

        Ok(LateFeeAssessment {
            days_late: days,
            rule: config.late_fee_type,
            uncapped_amount: uncapped,
            amount,
            capped: amount < uncapped,
            warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::late_fee::types::LateFeeSlab;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn per_day_config() -> LateFeeConfig {
        LateFeeConfig {
            due_date_day: 5,
            grace_period_days: 3,
            late_fee_type: LateFeeType::PerDay,
            fixed_amount: Decimal::ZERO,
            per_day_amount: dec!(50),
            slabs: Vec::new(),
            max_late_fee_cap: dec!(500),
            allow_waiver: false,
        }
    }

    fn slab_config() -> LateFeeConfig {
        LateFeeConfig {
            late_fee_type: LateFeeType::SlabBased,
            slabs: vec![
                LateFeeSlab::new(1, 10, dec!(100)),
                LateFeeSlab::new(11, 20, dec!(250)),
            ],
            ..per_day_config()
        }
    }

    #[test]
    fn test_per_day_below_cap() {
        let result = LateFeeCalculator::calculate(4, &per_day_config()).unwrap();

        assert_eq!(result.days_late, 4);
        assert_eq!(result.rule, LateFeeType::PerDay);
        assert_eq!(result.amount, dec!(200));
        assert!(!result.capped);
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_per_day_capped() {
        let result = LateFeeCalculator::calculate(15, &per_day_config()).unwrap();

        assert_eq!(result.uncapped_amount, dec!(750));
        assert_eq!(result.amount, dec!(500));
        assert!(result.capped);
    }

    #[rstest]
    #[case(5, dec!(100))]
    #[case(10, dec!(100))]
    #[case(11, dec!(250))]
    #[case(20, dec!(250))]
    fn test_slab_lookup(#[case] days: i64, #[case] expected: Decimal) {
        let result = LateFeeCalculator::calculate(days, &slab_config()).unwrap();
        assert_eq!(result.amount, expected);
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_slab_gap_yields_zero_with_warning() {
        let result = LateFeeCalculator::calculate(25, &slab_config()).unwrap();

        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(
            result.warning,
            Some(SlabGapWarning {
                days_late: 25,
                covered_through: Some(20),
            })
        );
    }

    #[test]
    fn test_slab_amount_capped() {
        let mut config = slab_config();
        config.max_late_fee_cap = dec!(200);

        let result = LateFeeCalculator::calculate(12, &config).unwrap();
        assert_eq!(result.amount, dec!(200));
        assert!(result.capped);
    }

    #[test]
    fn test_fixed_amount() {
        let config = LateFeeConfig {
            late_fee_type: LateFeeType::Fixed,
            fixed_amount: dec!(300),
            ..per_day_config()
        };

        assert_eq!(LateFeeCalculator::calculate(1, &config).unwrap().amount, dec!(300));
        assert_eq!(LateFeeCalculator::calculate(90, &config).unwrap().amount, dec!(300));

        let capped = LateFeeConfig {
            fixed_amount: dec!(800),
            ..config
        };
        assert_eq!(LateFeeCalculator::calculate(1, &capped).unwrap().amount, dec!(500));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn test_not_late_is_free(#[case] days: i64) {
        for config in [per_day_config(), slab_config()] {
            let result = LateFeeCalculator::calculate(days, &config).unwrap();
            assert_eq!(result.amount, Decimal::ZERO);
            assert_eq!(result.days_late, 0);
            assert!(result.warning.is_none());
        }
    }

    #[test]
    fn test_huge_days_late_hits_cap() {
        let result = LateFeeCalculator::calculate(i64::MAX, &per_day_config()).unwrap();
        assert_eq!(result.days_late, u32::MAX);
        assert_eq!(result.amount, dec!(500));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = slab_config();
        config.slabs.clear();

        let err = LateFeeCalculator::calculate(3, &config).unwrap_err();
        assert!(matches!(err, LateFeeError::InvalidConfiguration(_)));
    }
}
