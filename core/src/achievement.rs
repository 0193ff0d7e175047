//! One-time milestones a player can collect across the gift site.
//!
//! The vault itself only ever emits [`Achievement::VaultCracked`]; the rest of
//! the catalog is here so ledgers can store and list every badge.

use serde::{Deserialize, Serialize};

/// Number of badges that earns [`Achievement::LoveGuru`].
pub const LOVE_GURU_THRESHOLD: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstVisit,
    MemoryAdded,
    TenMemories,
    VaultCracked,
    MessageUnlocked,
    PlaylistAdded,
    AllSongsPlayed,
    ComplimentRead,
    BucketCompleted,
    VoiceListened,
    StarExplorer,
    TerminalMaster,
    QuizCompleted,
    TraitExplorer,
    LoveGuru,
}

impl Achievement {
    pub const ALL: [Achievement; 15] = [
        Achievement::FirstVisit,
        Achievement::MemoryAdded,
        Achievement::TenMemories,
        Achievement::VaultCracked,
        Achievement::MessageUnlocked,
        Achievement::PlaylistAdded,
        Achievement::AllSongsPlayed,
        Achievement::ComplimentRead,
        Achievement::BucketCompleted,
        Achievement::VoiceListened,
        Achievement::StarExplorer,
        Achievement::TerminalMaster,
        Achievement::QuizCompleted,
        Achievement::TraitExplorer,
        Achievement::LoveGuru,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Achievement::FirstVisit => "first_visit",
            Achievement::MemoryAdded => "memory_added",
            Achievement::TenMemories => "ten_memories",
            Achievement::VaultCracked => "vault_cracked",
            Achievement::MessageUnlocked => "message_unlocked",
            Achievement::PlaylistAdded => "playlist_added",
            Achievement::AllSongsPlayed => "all_songs_played",
            Achievement::ComplimentRead => "compliment_read",
            Achievement::BucketCompleted => "bucket_completed",
            Achievement::VoiceListened => "voice_listened",
            Achievement::StarExplorer => "star_explorer",
            Achievement::TerminalMaster => "terminal_master",
            Achievement::QuizCompleted => "quiz_completed",
            Achievement::TraitExplorer => "trait_explorer",
            Achievement::LoveGuru => "love_guru",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Achievement::FirstVisit => "First Steps",
            Achievement::MemoryAdded => "Memory Maker",
            Achievement::TenMemories => "Memory Collector",
            Achievement::VaultCracked => "Code Breaker",
            Achievement::MessageUnlocked => "Time Traveler",
            Achievement::PlaylistAdded => "DJ of Love",
            Achievement::AllSongsPlayed => "Music Lover",
            Achievement::ComplimentRead => "Sweet Talker",
            Achievement::BucketCompleted => "Dream Achiever",
            Achievement::VoiceListened => "Voice of Love",
            Achievement::StarExplorer => "Stargazer",
            Achievement::TerminalMaster => "Hacker Heart",
            Achievement::QuizCompleted => "Soul Connector",
            Achievement::TraitExplorer => "Trait Hunter",
            Achievement::LoveGuru => "Love Guru",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstVisit => "Visited the website for the first time",
            Achievement::MemoryAdded => "Added your first memory",
            Achievement::TenMemories => "Added 10 memories",
            Achievement::VaultCracked => "Cracked the secret vault",
            Achievement::MessageUnlocked => "Unlocked a time capsule message",
            Achievement::PlaylistAdded => "Added a song to playlist",
            Achievement::AllSongsPlayed => "Played all songs in playlist",
            Achievement::ComplimentRead => "Read 10 compliments",
            Achievement::BucketCompleted => "Completed a bucket list item",
            Achievement::VoiceListened => "Listened to a voice note",
            Achievement::StarExplorer => "Explored all stars in the sky",
            Achievement::TerminalMaster => "Found the terminal easter egg",
            Achievement::QuizCompleted => "Completed the compatibility quiz",
            Achievement::TraitExplorer => "Viewed all adorable traits",
            Achievement::LoveGuru => "Unlocked 10 achievements",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Achievement::FirstVisit => "🌟",
            Achievement::MemoryAdded => "📸",
            Achievement::TenMemories => "🎞️",
            Achievement::VaultCracked => "🔓",
            Achievement::MessageUnlocked => "💌",
            Achievement::PlaylistAdded => "🎵",
            Achievement::AllSongsPlayed => "🎧",
            Achievement::ComplimentRead => "💝",
            Achievement::BucketCompleted => "✅",
            Achievement::VoiceListened => "🎤",
            Achievement::StarExplorer => "⭐",
            Achievement::TerminalMaster => "💻",
            Achievement::QuizCompleted => "💕",
            Achievement::TraitExplorer => "💖",
            Achievement::LoveGuru => "👑",
        }
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon(), self.name())
    }
}

/// Whether a badge list that just grew should also earn the meta badge.
pub fn earns_love_guru(badges: &[Achievement]) -> bool {
    badges.len() >= LOVE_GURU_THRESHOLD && !badges.contains(&Achievement::LoveGuru)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for achievement in Achievement::ALL {
            assert_eq!(Achievement::from_id(achievement.id()), Some(achievement));
        }
        assert_eq!(Achievement::from_id("nope"), None);
    }

    #[test]
    fn test_serde_uses_catalog_ids() {
        for achievement in Achievement::ALL {
            let json = serde_json::to_string(&achievement).unwrap();
            assert_eq!(json, format!("\"{}\"", achievement.id()));
        }
    }

    #[test]
    fn test_love_guru_threshold() {
        let nine = &Achievement::ALL[..9];
        assert!(!earns_love_guru(nine));

        let ten = &Achievement::ALL[..10];
        assert!(earns_love_guru(ten));

        let mut with_guru = ten.to_vec();
        with_guru.push(Achievement::LoveGuru);
        assert!(!earns_love_guru(&with_guru));
    }
}
