//! Achievement ledgers
//!
//! Two implementations of [`AchievementLedger`]:
//! - [`MemoryLedger`]: process-local, forgotten on exit
//! - [`FileLedger`]: one JSON document per player under a directory
//!
//! Both award [`Achievement::LoveGuru`] the moment a player's badge count
//! reaches the threshold.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use vault_core::achievement::earns_love_guru;
use vault_core::prelude::*;

/// Append `achievement` unless present, then award the meta badge if earned.
/// Returns whether the list changed.
fn push_badge(badges: &mut Vec<Achievement>, achievement: Achievement) -> bool {
    if badges.contains(&achievement) {
        return false;
    }
    badges.push(achievement);
    tracing::info!(achievement = achievement.id(), "Achievement unlocked: {}", achievement);

    if earns_love_guru(badges) {
        badges.push(Achievement::LoveGuru);
        tracing::info!(
            achievement = Achievement::LoveGuru.id(),
            "Achievement unlocked: {}",
            Achievement::LoveGuru
        );
    }
    true
}

#[derive(Debug, Default)]
pub struct MemoryLedger {
    badges: Mutex<Vec<Achievement>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_badges(badges: impl IntoIterator<Item = Achievement>) -> Self {
        let mut list = Vec::new();
        for badge in badges {
            if !list.contains(&badge) {
                list.push(badge);
            }
        }
        Self {
            badges: Mutex::new(list),
        }
    }
}

#[async_trait]
impl AchievementLedger for MemoryLedger {
    async fn is_recorded(&self, achievement: Achievement) -> Result<bool, LedgerError> {
        Ok(self.badges.lock().await.contains(&achievement))
    }

    async fn record(&self, achievement: Achievement) -> Result<(), LedgerError> {
        push_badge(&mut *self.badges.lock().await, achievement);
        Ok(())
    }

    async fn recorded(&self) -> Result<Vec<Achievement>, LedgerError> {
        Ok(self.badges.lock().await.clone())
    }
}

/// On-disk shape of a player's achievements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub uid: String,
    pub unlocked_badges: Vec<Achievement>,
    pub updated_at: DateTime<Utc>,
}

impl LedgerDocument {
    fn empty(uid: &str) -> Self {
        Self {
            uid: uid.to_string(),
            unlocked_badges: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}

/// JSON-file ledger: `<dir>/<uid>.json`.
///
/// The document is loaded once and cached; every change rewrites the whole
/// file through a temp file + rename.
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    document: Mutex<LedgerDocument>,
}

impl FileLedger {
    /// Open (or create) the ledger for `uid` inside `dir`.
    pub async fn open(dir: impl AsRef<Path>, uid: &str) -> Result<Self, LedgerError> {
        if !is_valid_uid(uid) {
            return Err(LedgerError::Unavailable(format!(
                "invalid player id '{}'",
                uid
            )));
        }

        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{}.json", uid));

        let document = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let document: LedgerDocument = serde_json::from_slice(&bytes)?;
                tracing::debug!(
                    path = %path.display(),
                    badges = document.unlocked_badges.len(),
                    "Loaded achievement ledger"
                );
                document
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // First visit: create the document right away.
                let document = LedgerDocument::empty(uid);
                write_document(&path, &document).await?;
                tracing::info!(path = %path.display(), "Created achievement ledger");
                document
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AchievementLedger for FileLedger {
    async fn is_recorded(&self, achievement: Achievement) -> Result<bool, LedgerError> {
        Ok(self
            .document
            .lock()
            .await
            .unlocked_badges
            .contains(&achievement))
    }

    async fn record(&self, achievement: Achievement) -> Result<(), LedgerError> {
        let mut document = self.document.lock().await;
        let mut updated = document.clone();
        if !push_badge(&mut updated.unlocked_badges, achievement) {
            return Ok(());
        }
        updated.updated_at = Utc::now();

        // Only adopt the change once it is on disk.
        write_document(&self.path, &updated).await?;
        *document = updated;
        Ok(())
    }

    async fn recorded(&self) -> Result<Vec<Achievement>, LedgerError> {
        Ok(self.document.lock().await.unlocked_badges.clone())
    }
}

fn is_valid_uid(uid: &str) -> bool {
    !uid.is_empty()
        && uid
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

async fn write_document(path: &Path, document: &LedgerDocument) -> Result<(), LedgerError> {
    let json = serde_json::to_vec_pretty(document)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_ledger_is_idempotent() {
        let ledger = MemoryLedger::new();
        assert!(!ledger.is_recorded(Achievement::VaultCracked).await.unwrap());

        ledger.record(Achievement::VaultCracked).await.unwrap();
        ledger.record(Achievement::VaultCracked).await.unwrap();

        assert!(ledger.is_recorded(Achievement::VaultCracked).await.unwrap());
        assert_eq!(
            ledger.recorded().await.unwrap(),
            vec![Achievement::VaultCracked]
        );
    }

    #[tokio::test]
    async fn test_love_guru_awarded_once_at_threshold() {
        let ledger = MemoryLedger::with_badges(Achievement::ALL[..9].iter().copied());
        assert!(!ledger.is_recorded(Achievement::LoveGuru).await.unwrap());

        ledger.record(Achievement::TraitExplorer).await.unwrap();
        let badges = ledger.recorded().await.unwrap();
        assert_eq!(badges.len(), 11);
        assert_eq!(badges.last(), Some(&Achievement::LoveGuru));

        ledger.record(Achievement::QuizCompleted).await.unwrap();
        let badges = ledger.recorded().await.unwrap();
        let gurus = badges
            .iter()
            .filter(|b| **b == Achievement::LoveGuru)
            .count();
        assert_eq!(gurus, 1);
    }

    #[tokio::test]
    async fn test_unlock_once_reports_first_write() {
        let ledger = MemoryLedger::new();
        assert!(unlock_once(&ledger, Achievement::VaultCracked).await.unwrap());
        assert!(!unlock_once(&ledger, Achievement::VaultCracked).await.unwrap());
    }

    #[tokio::test]
    async fn test_file_ledger_creates_and_reloads() {
        let dir = tempfile::tempdir().unwrap();

        let ledger = FileLedger::open(dir.path(), "ishaan").await.unwrap();
        assert!(ledger.path().exists());
        assert!(ledger.recorded().await.unwrap().is_empty());

        ledger.record(Achievement::FirstVisit).await.unwrap();
        ledger.record(Achievement::VaultCracked).await.unwrap();
        ledger.record(Achievement::VaultCracked).await.unwrap();
        drop(ledger);

        let reopened = FileLedger::open(dir.path(), "ishaan").await.unwrap();
        assert_eq!(
            reopened.recorded().await.unwrap(),
            vec![Achievement::FirstVisit, Achievement::VaultCracked]
        );

        let raw = std::fs::read_to_string(reopened.path()).unwrap();
        let document: LedgerDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(document.uid, "ishaan");
        assert!(raw.contains("\"vault_cracked\""));
    }

    #[tokio::test]
    async fn test_file_ledger_rejects_path_like_uid() {
        let dir = tempfile::tempdir().unwrap();
        for uid in ["", "../escape", "a/b", "with space"] {
            let err = FileLedger::open(dir.path(), uid).await.unwrap_err();
            assert!(matches!(err, LedgerError::Unavailable(_)));
        }
    }

    #[tokio::test]
    async fn test_file_ledger_reports_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("kavya.json"), b"{ not json").unwrap();

        let err = FileLedger::open(dir.path(), "kavya").await.unwrap_err();
        assert!(matches!(err, LedgerError::Serialization(_)));
    }
}
