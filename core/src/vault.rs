//! # Vault: The Stage Puzzle State Machine
//!
//! A [`Vault`] starts at `Locked(0)` and only moves when an answer matches the
//! current stage. The last match unlocks it for good and emits
//! `vault_cracked`, which the runtime turns into a ledger write.
//!
//! ```rust
//! use vault_core::prelude::*;
//!
//! let mut vault = Vault::love_vault();
//! for answer in ["kavya", "days", "show_feelings", "misupot", "Misupot"] {
//!     assert!(!vault.submit_answer(answer).is_fault());
//! }
//! assert!(vault.is_unlocked());
//! ```

use crate::achievement::Achievement;
use crate::error::VaultError;
use crate::outcome::Outcome;
use crate::phase::VaultPhase;
use crate::puzzle::{PuzzleStage, PuzzleTable};
use crate::telemetry::Traced;
use crate::transcript::{LineKind, Transcript};
use crate::transition::Transition;
use std::sync::Arc;

pub const INCORRECT_ANSWER: &str = "Incorrect answer. Try again!";

pub const SECRET_MESSAGE: &str = "Kudos! Since you are here...\n\n\
I wanna tell you that you are the cutest human I have ever met. \
You look like a cute little dumpling and sometimes I feel like eating you.\n\n\
I love you soooooooooo much.\n\n\
You are the best, Ishu! 💕\n\n\
With all my love,\nYour Kavya 💕";

/// Everything a submission writes besides the phase itself.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    completed: Vec<usize>,
    transcript: Transcript,
    feedback: Option<String>,
    hint_visible: bool,
}

impl Progress {
    fn opened(stage_count: usize) -> Self {
        Self {
            transcript: Transcript::boot(stage_count),
            ..Default::default()
        }
    }

    fn complete(&mut self, index: usize) {
        if !self.completed.contains(&index) {
            self.completed.push(index);
        }
    }
}

/// Transition: Locked(i) -> Locked(i + 1) | Unlocked, or a refusal.
#[derive(Clone)]
pub struct SubmitAnswer<'a> {
    table: &'a PuzzleTable,
    raw: &'a str,
}

impl<'a> SubmitAnswer<'a> {
    pub fn new(table: &'a PuzzleTable, raw: &'a str) -> Self {
        Self { table, raw }
    }
}

impl Transition<VaultPhase, VaultPhase> for SubmitAnswer<'_> {
    type Error = VaultError;
    type Context = Progress;

    fn run(&self, phase: VaultPhase, ctx: &mut Progress) -> Outcome<VaultPhase, VaultError> {
        let index = match phase {
            VaultPhase::Locked(index) => index,
            VaultPhase::Unlocked => {
                tracing::debug!("Vault already unlocked; submission ignored");
                return Outcome::next(VaultPhase::Unlocked);
            }
        };
        let stage = match self.table.stage_at(index) {
            Ok(stage) => stage,
            Err(e) => return Outcome::fault(e),
        };

        ctx.feedback = None;
        tracing::debug!(stage = stage.number(), kind = ?stage.kind, "Checking answer");

        if !stage.accepts(self.raw) {
            ctx.feedback = Some(INCORRECT_ANSWER.to_string());
            ctx.transcript
                .push(LineKind::Error, "> ACCESS DENIED - INVALID INPUT");
            return Outcome::fault(VaultError::AnswerMismatch { stage: index });
        }

        ctx.complete(index);
        ctx.hint_visible = false;
        ctx.transcript.push(
            LineKind::Success,
            format!(
                "> STAGE {} COMPLETE ✓ DECRYPTION: {}",
                stage.number(),
                stage.expected_answer
            ),
        );

        if index == self.table.last_index() {
            ctx.transcript.push(LineKind::Success, "> ACCESS GRANTED");
            ctx.transcript.push(LineKind::Success, "> VAULT UNLOCKED 🔓");
            Outcome::emit(Achievement::VaultCracked.id(), VaultPhase::Unlocked)
        } else {
            ctx.transcript.push(
                LineKind::System,
                format!("> LOADING STAGE {}...", stage.number() + 1),
            );
            Outcome::next(VaultPhase::Locked(index + 1))
        }
    }
}

/// The vault as opened by one visit. Never persisted.
#[derive(Debug, Clone)]
pub struct Vault {
    table: Arc<PuzzleTable>,
    phase: VaultPhase,
    progress: Progress,
}

impl Vault {
    pub fn new(table: Arc<PuzzleTable>) -> Self {
        let progress = Progress::opened(table.len());
        Self {
            table,
            phase: VaultPhase::default(),
            progress,
        }
    }

    pub fn love_vault() -> Self {
        Self::new(Arc::new(PuzzleTable::love_vault()))
    }

    /// Check `raw` against the current stage and advance on a match.
    ///
    /// * `Next(Locked(i + 1))` - stage passed
    /// * `Emit("vault_cracked", Unlocked)` - final stage passed
    /// * `Fault(AnswerMismatch)` - wrong answer, nothing moved
    /// * `Next(Unlocked)` - already open, submission ignored
    pub fn submit_answer(&mut self, raw: &str) -> Outcome<VaultPhase, VaultError> {
        let step = Traced::new(SubmitAnswer::new(&self.table, raw), "SubmitAnswer");
        let outcome: Outcome<VaultPhase, VaultError> =
            step.run(self.phase, &mut self.progress);
        if let Some(next) = outcome.state() {
            self.phase = *next;
        }
        outcome
    }

    /// Toggle the hint display and return the current stage's hint.
    pub fn reveal_hint(&mut self) -> Option<&str> {
        let index = self.phase.stage_index()?;
        let stage = self.table.stage_at(index).ok()?;
        self.progress.hint_visible = !self.progress.hint_visible;
        Some(stage.hint.as_str())
    }

    pub fn hint_visible(&self) -> bool {
        self.progress.hint_visible
    }

    pub fn phase(&self) -> VaultPhase {
        self.phase
    }

    pub fn is_unlocked(&self) -> bool {
        self.phase.is_unlocked()
    }

    pub fn current_stage(&self) -> Option<&PuzzleStage> {
        self.phase
            .stage_index()
            .and_then(|index| self.table.stage_at(index).ok())
    }

    pub fn completed(&self) -> &[usize] {
        &self.progress.completed
    }

    /// Fraction of stages passed, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        self.progress.completed.len() as f64 / self.table.len() as f64
    }

    pub fn transcript(&self) -> &Transcript {
        &self.progress.transcript
    }

    pub fn feedback(&self) -> Option<&str> {
        self.progress.feedback.as_deref()
    }

    pub fn table(&self) -> &PuzzleTable {
        &self.table
    }

    pub fn secret_message(&self) -> Option<&'static str> {
        self.is_unlocked().then_some(SECRET_MESSAGE)
    }
}
