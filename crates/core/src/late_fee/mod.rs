//! Late-fee rules for overdue challans.
//!
//! # Modules
//!
//! - `types` - Configuration, slabs, and assessment results
//! - `error` - Late-fee error types
//! - `validation` - Configuration rules (due day, amounts, slab layout)
//! - `calculator` - Days-late to fee computation
//! - `schedule` - Due dates and days-late from calendar dates

pub mod calculator;
pub mod error;
pub mod schedule;
pub mod types;
pub mod validation;

#[cfg(test)]
mod calculator_props;

pub use calculator::LateFeeCalculator;
pub use error::LateFeeError;
pub use schedule::{BillingMonth, days_late, first_late_day, parse_date};
pub use types::{LateFeeAssessment, LateFeeConfig, LateFeeSlab, LateFeeType, SlabGapWarning};
pub use validation::{validate_config, validate_slabs};
