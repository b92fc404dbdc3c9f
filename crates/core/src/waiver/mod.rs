//! Late-fee waiver approval workflow.
//!
//! A waiver is an approval action with a requester, an approver, a reason,
//! and timestamps. Only an approved waiver removes a late fee.
//!
//! # Modules
//!
//! - `types` - Waiver request, status, and staff roles
//! - `error` - Waiver-specific error types
//! - `service` - Request, approve, and reject transitions

pub mod error;
pub mod service;
pub mod types;

pub use error::WaiverError;
pub use service::{MIN_APPROVER_ROLE, WaiverService};
pub use types::{StaffRole, WaiverRequest, WaiverStatus};
