//! # Puzzle: The Stage Table
//!
//! The vault is a fixed, ordered list of stages. Each stage carries its
//! display text and a single expected answer; the `kind` tag only tells the
//! front end how to prompt for input.

use crate::error::{VaultError, VaultResult};
use serde::{Deserialize, Serialize};

/// The final password is the nickname unscrambled in stage four.
pub const FINAL_PASSWORD: &str = "Misupot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Cipher,
    Pattern,
    Terminal,
    Scramble,
    Password,
}

impl StageKind {
    pub fn placeholder(&self) -> &'static str {
        match self {
            StageKind::Terminal => "Enter command...",
            _ => "Enter answer...",
        }
    }

    /// Whether the front end should hide what is typed.
    pub fn is_masked(&self) -> bool {
        matches!(self, StageKind::Password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleStage {
    pub index: usize,
    pub kind: StageKind,
    pub title: String,
    pub description: String,
    pub hint: String,
    #[serde(skip_serializing)]
    pub expected_answer: String,
}

impl PuzzleStage {
    pub fn new(
        kind: StageKind,
        title: impl Into<String>,
        description: impl Into<String>,
        hint: impl Into<String>,
        expected_answer: impl Into<String>,
    ) -> Self {
        Self {
            index: 0,
            kind,
            title: title.into(),
            description: description.into(),
            hint: hint.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// Case-insensitive comparison after trimming the submission.
    /// Internal whitespace and punctuation are compared literally.
    pub fn accepts(&self, raw: &str) -> bool {
        raw.trim().to_uppercase() == self.expected_answer.to_uppercase()
    }

    /// 1-based number used in transcript lines.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleTable {
    stages: Vec<PuzzleStage>,
}

impl PuzzleTable {
    /// Build a table from stages in play order. Indices are reassigned by
    /// position. Returns `None` for an empty list: a vault needs a final stage.
    pub fn new(stages: Vec<PuzzleStage>) -> Option<Self> {
        if stages.is_empty() {
            return None;
        }
        let stages = stages
            .into_iter()
            .enumerate()
            .map(|(index, stage)| PuzzleStage { index, ..stage })
            .collect();
        Some(Self { stages })
    }

    /// The five-stage love vault.
    pub fn love_vault() -> Self {
        Self {
            stages: vec![
                PuzzleStage {
                    index: 0,
                    kind: StageKind::Cipher,
                    title: "Stage 1: Cipher Decode".into(),
                    description: "Decode this love cipher. Each letter is shifted by the position of our anniversary month (December = 12)".into(),
                    hint: "Think about Caesar cipher with shift 12. What does \"YADKOL\" decode to?".into(),
                    expected_answer: "KAVYA".into(),
                },
                PuzzleStage {
                    index: 1,
                    kind: StageKind::Pattern,
                    title: "Stage 2: Date Pattern".into(),
                    description: "Find the pattern in these special numbers:\n30, 24, 1\nThese represent ___ of important dates.".into(),
                    hint: "Our Anniversary (30th Dec), Kavya's Birthday (24th April), Ishaan's Birthday (1st Dec). What are these?".into(),
                    expected_answer: "DAYS".into(),
                },
                PuzzleStage {
                    index: 2,
                    kind: StageKind::Terminal,
                    title: "Stage 3: Terminal Command".into(),
                    description: "In this love terminal, type the command that reveals what Kavya feels for Ishaan.\n\nAvailable commands:\n> show_feelings\n> display_love\n> echo_heart\n> print_forever".into(),
                    hint: "It's the one that shows feelings!".into(),
                    expected_answer: "show_feelings".into(),
                },
                PuzzleStage {
                    index: 3,
                    kind: StageKind::Scramble,
                    title: "Stage 4: Memory Puzzle".into(),
                    description: "Unscramble these letters from a special phrase:\nT O P U S I M\n\nThis is what Kavya calls Ishaan with love.".into(),
                    hint: "Rearrange to form a cute nickname... Mi ____ ot".into(),
                    expected_answer: "MISUPOT".into(),
                },
                PuzzleStage {
                    index: 4,
                    kind: StageKind::Password,
                    title: "Final Stage: Enter the Vault".into(),
                    description: "You've solved all puzzles! Now enter the secret password to unlock the vault.".into(),
                    hint: "You just unscrambled it in the previous puzzle!".into(),
                    expected_answer: FINAL_PASSWORD.into(),
                },
            ],
        }
    }

    pub fn stage_at(&self, index: usize) -> VaultResult<&PuzzleStage> {
        self.stages.get(index).ok_or(VaultError::StageOutOfRange {
            index,
            stage_count: self.stages.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Never true for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.stages.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &PuzzleStage> {
        self.stages.iter()
    }
}

impl Default for PuzzleTable {
    fn default() -> Self {
        Self::love_vault()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_love_vault_is_ordered() {
        let table = PuzzleTable::love_vault();
        assert_eq!(table.len(), 5);
        for (position, stage) in table.iter().enumerate() {
            assert_eq!(stage.index, position);
        }
        let answers: Vec<&str> = table.iter().map(|s| s.expected_answer.as_str()).collect();
        assert_eq!(answers, ["KAVYA", "DAYS", "show_feelings", "MISUPOT", "Misupot"]);
    }

    #[test]
    fn test_stage_at_out_of_range() {
        let table = PuzzleTable::love_vault();
        assert!(table.stage_at(4).is_ok());
        assert_eq!(
            table.stage_at(5),
            Err(VaultError::StageOutOfRange {
                index: 5,
                stage_count: 5
            })
        );
    }

    #[test]
    fn test_accepts_trims_and_ignores_case() {
        let table = PuzzleTable::love_vault();
        let cipher = table.stage_at(0).unwrap();
        assert!(cipher.accepts("KAVYA"));
        assert!(cipher.accepts("kavya"));
        assert!(cipher.accepts("  KaVyA \n"));
        assert!(!cipher.accepts("KAVY"));
        assert!(!cipher.accepts("K AVYA"));
        assert!(!cipher.accepts(""));

        let command = table.stage_at(2).unwrap();
        assert!(command.accepts("SHOW_FEELINGS"));
        assert!(!command.accepts("show feelings"));
    }

    #[test]
    fn test_new_reindexes_and_rejects_empty() {
        assert!(PuzzleTable::new(vec![]).is_none());

        let table = PuzzleTable::new(vec![
            PuzzleStage::new(StageKind::Pattern, "a", "", "", "one"),
            PuzzleStage::new(StageKind::Password, "b", "", "", "two"),
        ])
        .unwrap();
        assert_eq!(table.stage_at(1).unwrap().index, 1);
        assert_eq!(table.last_index(), 1);
    }

    #[test]
    fn test_serialized_stage_hides_answer() {
        let table = PuzzleTable::love_vault();
        let json = serde_json::to_value(table.stage_at(0).unwrap()).unwrap();
        assert_eq!(json["kind"], "cipher");
        assert!(json.get("expected_answer").is_none());
    }
}
