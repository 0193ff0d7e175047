use std::sync::Arc;
use vault_core::prelude::*;
use vault_runtime::prelude::*;

const ANSWERS: [&str; 5] = ["KAVYA", "DAYS", "show_feelings", "MISUPOT", "Misupot"];

#[tokio::test]
async fn cracked_vault_is_persisted_per_player() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Arc::new(FileLedger::open(dir.path(), "ishaan").await.unwrap());
    let mut session = VaultSession::love_vault(ledger.clone());

    assert!(session.submit_answer("kavy").is_fault());
    for answer in ANSWERS {
        session.submit_answer(&format!(" {} ", answer.to_uppercase()));
    }
    session.settle().await;

    assert!(session.vault().is_unlocked());
    assert_eq!(session.vault().transcript().count(LineKind::Error), 1);
    drop(session);

    // A fresh visit starts locked again, but the badge stays.
    let reopened = Arc::new(FileLedger::open(dir.path(), "ishaan").await.unwrap());
    assert_eq!(
        reopened.recorded().await.unwrap(),
        vec![Achievement::VaultCracked]
    );
    let session = VaultSession::love_vault(reopened);
    assert_eq!(session.vault().phase(), VaultPhase::Locked(0));

    let other = FileLedger::open(dir.path(), "kavya").await.unwrap();
    assert!(other.recorded().await.unwrap().is_empty());
}

#[tokio::test]
async fn tenth_badge_from_vault_earns_love_guru() {
    let earlier = Achievement::ALL
        .into_iter()
        .filter(|a| !matches!(a, Achievement::VaultCracked | Achievement::LoveGuru))
        .take(9);
    let ledger = Arc::new(MemoryLedger::with_badges(earlier));
    let mut session = VaultSession::love_vault(ledger.clone());

    for answer in ANSWERS {
        session.submit_answer(answer);
    }
    session.settle().await;

    let badges = ledger.recorded().await.unwrap();
    assert_eq!(badges.len(), 11);
    assert_eq!(
        &badges[9..],
        &[Achievement::VaultCracked, Achievement::LoveGuru]
    );
}

#[tokio::test]
async fn config_drives_ledger_choice() {
    let dir = tempfile::tempdir().unwrap();
    let config = VaultConfig {
        player: "kavya".into(),
        ledger_dir: Some(dir.path().join("ledgers")),
        advance_delay_ms: 0,
        ..Default::default()
    };

    let mut session = VaultSession::love_vault(config.open_ledger().await.unwrap());
    for answer in ANSWERS {
        session.submit_answer(answer);
    }
    session.settle().await;

    let raw = std::fs::read_to_string(dir.path().join("ledgers").join("kavya.json")).unwrap();
    assert!(raw.contains("vault_cracked"));
}
