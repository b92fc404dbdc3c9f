//! Due dates and days-late for monthly challans.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::LateFeeError;

/// A calendar month a challan is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillingMonth {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
}

impl BillingMonth {
    /// Creates a billing month.
    ///
    /// # Errors
    ///
    /// Returns `LateFeeError::Validation` if `month` is not 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, LateFeeError> {
        if !(1..=12).contains(&month) {
            return Err(LateFeeError::Validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// Returns the date challans for this month fall due.
    ///
    /// # Errors
    ///
    /// Returns `LateFeeError::Validation` if the day does not exist in the month.
    pub fn due_date(&self, due_date_day: u32) -> Result<NaiveDate, LateFeeError> {
        NaiveDate::from_ymd_opt(self.year, self.month, due_date_day).ok_or_else(|| {
            LateFeeError::Validation(format!("{self} has no day {due_date_day}"))
        })
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BillingMonth {
    type Err = LateFeeError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LateFeeError::Validation(format!("expected YYYY-MM, got '{s}'"));

        let (year, month) = s.trim().split_once('-').ok_or_else(malformed)?;
        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

/// Returns the number of late days once the grace period is spent.
///
/// Payment on or before `due_date + grace_period_days` is not late.
#[must_use]
pub fn days_late(due_date: NaiveDate, payment_date: NaiveDate, grace_period_days: u32) -> u32 {
    let elapsed = payment_date.signed_duration_since(due_date).num_days();
    let late = elapsed - i64::from(grace_period_days);
    u32::try_from(late.max(0)).unwrap_or(u32::MAX)
}

/// Returns the first date on which a late fee applies.
#[must_use]
pub fn first_late_day(due_date: NaiveDate, grace_period_days: u32) -> Option<NaiveDate> {
    due_date.checked_add_days(Days::new(u64::from(grace_period_days) + 1))
}

/// Parses an ISO `YYYY-MM-DD` payment date.
///
/// # Errors
///
/// Returns `LateFeeError::Validation` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, LateFeeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| LateFeeError::Validation(format!("invalid date '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_billing_month_parse() {
        let month: BillingMonth = "2026-02".parse().unwrap();
        assert_eq!(month, BillingMonth { year: 2026, month: 2 });
        assert_eq!(month.to_string(), "2026-02");

        assert!("2026-13".parse::<BillingMonth>().is_err());
        assert!("2026-00".parse::<BillingMonth>().is_err());
        assert!("202602".parse::<BillingMonth>().is_err());
        assert!("abcd-02".parse::<BillingMonth>().is_err());
    }

    #[test]
    fn test_due_date() {
        let month = BillingMonth::new(2026, 2).unwrap();
        assert_eq!(month.due_date(5).unwrap(), date(2026, 2, 5));
        assert_eq!(month.due_date(28).unwrap(), date(2026, 2, 28));
        assert!(month.due_date(30).is_err());
    }

    #[rstest]
    // due 5th, grace 3: last free day is the 8th
    #[case(date(2026, 3, 1), 0)]
    #[case(date(2026, 3, 5), 0)]
    #[case(date(2026, 3, 8), 0)]
    #[case(date(2026, 3, 9), 1)]
    #[case(date(2026, 3, 12), 4)]
    #[case(date(2026, 3, 23), 15)]
    #[case(date(2026, 4, 8), 31)]
    fn test_days_late(#[case] paid: NaiveDate, #[case] expected: u32) {
        assert_eq!(days_late(date(2026, 3, 5), paid, 3), expected);
    }

    #[test]
    fn test_days_late_without_grace() {
        assert_eq!(days_late(date(2026, 3, 5), date(2026, 3, 5), 0), 0);
        assert_eq!(days_late(date(2026, 3, 5), date(2026, 3, 6), 0), 1);
    }

    #[test]
    fn test_first_late_day() {
        assert_eq!(first_late_day(date(2026, 3, 5), 3), Some(date(2026, 3, 9)));
        assert_eq!(first_late_day(date(2026, 2, 28), 0), Some(date(2026, 3, 1)));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-03-09").unwrap(), date(2026, 3, 9));
        assert!(matches!(
            parse_date("09/03/2026"),
            Err(LateFeeError::Validation(_))
        ));
    }
}
