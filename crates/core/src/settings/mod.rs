//! Storage of the school's late-fee settings.

pub mod store;

pub use store::{InMemorySettingsStore, LateFeeSettingsStore, SettingsRevision};
