use thiserror::Error;

pub type VaultResult<T> = Result<T, VaultError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// The submitted answer did not match the current stage. Recoverable: resubmit.
    #[error("Incorrect answer for stage {}", stage + 1)]
    AnswerMismatch { stage: usize },

    /// A stage lookup fell outside the table. The machine never produces this
    /// on its own; seeing it means a caller indexed the table by hand.
    #[error("Stage index {index} out of range (table has {stage_count} stages)")]
    StageOutOfRange { index: usize, stage_count: usize },
}

/// Failures of the achievement collaborator. These never reach the puzzle UI.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ledger record is malformed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}
