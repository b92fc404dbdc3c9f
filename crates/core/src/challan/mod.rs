//! Fee challans and what is owed on them.

pub mod assessor;
pub mod error;
pub mod types;

pub use assessor::ChallanAssessor;
pub use error::ChallanError;
pub use types::{Challan, ChallanStatement};
