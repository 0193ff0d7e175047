//! VaultPhase - where the machine currently stands.
//!
//! `Locked(i)` means stage `i` is the one awaiting an answer. `Unlocked` is
//! terminal: no transition leaves it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultPhase {
    Locked(usize),
    Unlocked,
}

impl VaultPhase {
    pub fn is_locked(&self) -> bool {
        matches!(self, VaultPhase::Locked(_))
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, VaultPhase::Unlocked)
    }

    /// The stage awaiting an answer, if any.
    pub fn stage_index(&self) -> Option<usize> {
        match self {
            VaultPhase::Locked(index) => Some(*index),
            VaultPhase::Unlocked => None,
        }
    }
}

impl Default for VaultPhase {
    fn default() -> Self {
        VaultPhase::Locked(0)
    }
}

impl std::fmt::Display for VaultPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaultPhase::Locked(index) => write!(f, "Locked({})", index),
            VaultPhase::Unlocked => write!(f, "Unlocked"),
        }
    }
}
