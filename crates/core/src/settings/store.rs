//! Late-fee settings store.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use feedesk_shared::types::UserId;
use feedesk_shared::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::late_fee::{LateFeeConfig, validate_config};

/// A saved version of the late-fee settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRevision {
    /// Revision number, starting at 1.
    pub revision: u64,
    /// Who saved this revision; `None` for the bootstrap configuration.
    pub updated_by: Option<UserId>,
    /// When it was saved.
    pub updated_at: DateTime<Utc>,
    /// The settings themselves.
    pub config: LateFeeConfig,
}

/// Owner of the school's late-fee settings.
///
/// Calculators receive snapshots from a store; they never hold a reference
/// to the live settings.
pub trait LateFeeSettingsStore: Send + Sync {
    /// Returns the latest revision.
    fn current(&self) -> AppResult<SettingsRevision>;

    /// Validates and saves new settings, returning the new revision.
    fn update(&self, config: LateFeeConfig, updated_by: UserId) -> AppResult<SettingsRevision>;

    /// Returns every revision, oldest first.
    fn history(&self) -> AppResult<Vec<SettingsRevision>>;
}

/// In-process settings store.
#[derive(Debug)]
pub struct InMemorySettingsStore {
    revisions: RwLock<Vec<SettingsRevision>>,
}

impl InMemorySettingsStore {
    /// Creates a store seeded with `initial` as revision 1.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if `initial` is invalid.
    pub fn new(initial: LateFeeConfig) -> AppResult<Self> {
        validate_config(&initial)?;

        Ok(Self {
            revisions: RwLock::new(vec![SettingsRevision {
                revision: 1,
                updated_by: None,
                updated_at: Utc::now(),
                config: initial,
            }]),
        })
    }
}

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::Internal("late fee settings lock poisoned".to_string())
}

impl LateFeeSettingsStore for InMemorySettingsStore {
    fn current(&self) -> AppResult<SettingsRevision> {
        let revisions = self.revisions.read().map_err(poisoned)?;
        revisions
            .last()
            .cloned()
            .ok_or_else(|| AppError::NotFound("late fee settings".to_string()))
    }

    fn update(&self, config: LateFeeConfig, updated_by: UserId) -> AppResult<SettingsRevision> {
        validate_config(&config)?;

        let mut revisions = self.revisions.write().map_err(poisoned)?;
        let revision = revisions.last().map_or(1, |r| r.revision + 1);
        let saved = SettingsRevision {
            revision,
            updated_by: Some(updated_by),
            updated_at: Utc::now(),
            config,
        };
        revisions.push(saved.clone());

        info!(
            revision,
            updated_by = %updated_by,
            late_fee_type = %saved.config.late_fee_type,
            "Late fee settings updated"
        );

        Ok(saved)
    }

    fn history(&self) -> AppResult<Vec<SettingsRevision>> {
        Ok(self.revisions.read().map_err(poisoned)?.clone())
    }
}
