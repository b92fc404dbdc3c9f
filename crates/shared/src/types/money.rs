//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for fee calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units (e.g., rupees).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "PKR", "INR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Pakistani Rupee
    Pkr,
    /// Indian Rupee
    Inr,
    /// US Dollar
    Usd,
    /// Pound Sterling
    Gbp,
    /// UAE Dirham
    Aed,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns a new value in the same currency with a different amount.
    #[must_use]
    pub const fn with_amount(self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: self.currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pkr => write!(f, "PKR"),
            Self::Inr => write!(f, "INR"),
            Self::Usd => write!(f, "USD"),
            Self::Gbp => write!(f, "GBP"),
            Self::Aed => write!(f, "AED"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PKR" => Ok(Self::Pkr),
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "AED" => Ok(Self::Aed),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
