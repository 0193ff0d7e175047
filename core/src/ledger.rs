use crate::achievement::Achievement;
use crate::error::LedgerError;
use async_trait::async_trait;

/// The achievement collaborator.
///
/// A ledger records one-time milestones for a single player. `record` must be
/// idempotent; callers treat every method as best-effort.
#[async_trait]
pub trait AchievementLedger: Send + Sync {
    async fn is_recorded(&self, achievement: Achievement) -> Result<bool, LedgerError>;

    async fn record(&self, achievement: Achievement) -> Result<(), LedgerError>;

    /// Recorded badges in the order they were earned.
    async fn recorded(&self) -> Result<Vec<Achievement>, LedgerError>;
}

/// Check-then-record. Returns `true` when this call wrote the badge.
pub async fn unlock_once<L>(ledger: &L, achievement: Achievement) -> Result<bool, LedgerError>
where
    L: AchievementLedger + ?Sized,
{
    if ledger.is_recorded(achievement).await? {
        tracing::debug!(achievement = achievement.id(), "Already recorded");
        return Ok(false);
    }
    ledger.record(achievement).await?;
    Ok(true)
}
