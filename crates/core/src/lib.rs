//! Core fee logic for Feedesk.
//!
//! This crate contains pure fee logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `late_fee` - Late-fee configuration, validation, and calculation
//! - `settings` - Ownership and revision history of late-fee settings
//! - `waiver` - Late-fee waiver approval workflow
//! - `challan` - Challan assessment (base fees, late fee, waiver)

pub mod challan;
pub mod late_fee;
pub mod settings;
pub mod waiver;
