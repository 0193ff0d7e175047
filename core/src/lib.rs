//! # vault-core
//!
//! Synchronous domain layer of the Love Vault: the stage table, the vault
//! state machine, its transcript and the achievement collaborator contract.
//! No runtime, no I/O; async follow-ups are signalled via [`Outcome::Emit`].

pub mod achievement;
pub mod error;
pub mod ledger;
pub mod outcome;
pub mod phase;
pub mod puzzle;
pub mod telemetry;
pub mod transcript;
pub mod transition;
pub mod vault;

pub use achievement::Achievement;
pub use error::{LedgerError, VaultError, VaultResult};
pub use ledger::AchievementLedger;
pub use outcome::Outcome;
pub use phase::VaultPhase;
pub use puzzle::{PuzzleStage, PuzzleTable, StageKind};
pub use transcript::{LineKind, Transcript, TranscriptLine};
pub use transition::Transition;
pub use vault::Vault;

pub mod prelude {
    pub use crate::achievement::Achievement;
    pub use crate::error::{LedgerError, VaultError};
    pub use crate::ledger::{AchievementLedger, unlock_once};
    pub use crate::outcome::Outcome;
    pub use crate::phase::VaultPhase;
    pub use crate::puzzle::{PuzzleStage, PuzzleTable, StageKind};
    pub use crate::transcript::{LineKind, Transcript, TranscriptLine};
    pub use crate::transition::Transition;
    pub use crate::vault::Vault;
}
