//! # Session: one visit to the vault
//!
//! A [`VaultSession`] owns a fresh [`Vault`], the injected achievement ledger
//! and the notification tasks spawned on unlock.
//!
//! Submissions are synchronous. When the machine emits `vault_cracked`, the
//! session spawns a check-then-record task onto the current tokio runtime and
//! returns without waiting for it. Ledger failures are logged and dropped;
//! they never reach the caller and never relock the vault.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tracing::Instrument;
use uuid::Uuid;
use vault_core::prelude::*;

pub struct VaultSession {
    id: Uuid,
    vault: Vault,
    ledger: Arc<dyn AchievementLedger>,
    notifications: JoinSet<()>,
}

impl VaultSession {
    pub fn new(table: Arc<PuzzleTable>, ledger: Arc<dyn AchievementLedger>) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(vault.session = %id, stages = table.len(), "Vault opened");
        Self {
            id,
            vault: Vault::new(table),
            ledger,
            notifications: JoinSet::new(),
        }
    }

    pub fn love_vault(ledger: Arc<dyn AchievementLedger>) -> Self {
        Self::new(Arc::new(PuzzleTable::love_vault()), ledger)
    }

    /// Submit an answer. See [`Vault::submit_answer`] for the outcomes.
    pub fn submit_answer(&mut self, raw: &str) -> Outcome<VaultPhase, VaultError> {
        let outcome = self.vault.submit_answer(raw);
        if let Some(event) = outcome.event() {
            self.dispatch(event);
        }
        outcome
    }

    pub fn reveal_hint(&mut self) -> Option<&str> {
        self.vault.reveal_hint()
    }

    fn dispatch(&mut self, event: &str) {
        let Some(achievement) = Achievement::from_id(event) else {
            tracing::warn!(%event, "Unknown vault event; ignored");
            return;
        };
        let Ok(handle) = Handle::try_current() else {
            tracing::warn!(
                achievement = achievement.id(),
                "No async runtime; achievement notification dropped"
            );
            return;
        };

        let ledger = Arc::clone(&self.ledger);
        let span = tracing::info_span!(
            "Notify",
            vault.session = %self.id,
            achievement = achievement.id()
        );
        self.notifications.spawn_on(
            async move {
                match unlock_once(ledger.as_ref(), achievement).await {
                    Ok(true) => tracing::info!("Achievement recorded"),
                    Ok(false) => tracing::debug!("Achievement already on record"),
                    Err(e) => tracing::warn!(error = %e, "Achievement notification failed"),
                }
            }
            .instrument(span),
            &handle,
        );
    }

    /// Wait for every notification spawned so far.
    pub async fn settle(&mut self) {
        while let Some(joined) = self.notifications.join_next().await {
            if let Err(e) = joined {
                tracing::warn!(error = %e, "Achievement notification task aborted");
            }
        }
    }

    pub fn pending_notifications(&self) -> usize {
        self.notifications.len()
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ledger(&self) -> &Arc<dyn AchievementLedger> {
        &self.ledger
    }
}

impl Drop for VaultSession {
    fn drop(&mut self) {
        // Closing the vault must not cancel an in-flight ledger write.
        self.notifications.detach_all();
    }
}

impl std::fmt::Debug for VaultSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSession")
            .field("id", &self.id)
            .field("phase", &self.vault.phase())
            .field("pending_notifications", &self.notifications.len())
            .finish()
    }
}
