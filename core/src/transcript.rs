use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    System,
    Input,
    Success,
    Error,
}

/// One line of the vault terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Echo of something the player typed.
    pub fn input(raw: &str) -> Self {
        Self::new(LineKind::Input, format!("> {}", raw))
    }
}

/// A sequential, append-only record of what the vault has said.
///
/// Display only: nothing in the machine ever reads it back to decide a transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// The boot banner shown when the vault opens.
    pub fn boot(stage_count: usize) -> Self {
        let mut transcript = Self::new();
        transcript.push(LineKind::System, "> INITIALIZING LOVE VAULT SECURITY SYSTEM...");
        transcript.push(
            LineKind::System,
            format!("> {} SECURITY LAYERS DETECTED", stage_count),
        );
        transcript.push(LineKind::System, "> BEGIN AUTHENTICATION SEQUENCE");
        transcript
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(TranscriptLine::new(kind, text));
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Lines appended at or after `offset`; lets a renderer print only what is new.
    pub fn since(&self, offset: usize) -> &[TranscriptLine] {
        self.lines.get(offset..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|line| line.kind == kind).count()
    }

    pub fn last(&self) -> Option<&TranscriptLine> {
        self.lines.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_banner() {
        let transcript = Transcript::boot(5);
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.count(LineKind::System), 3);
        assert_eq!(transcript.lines()[1].text, "> 5 SECURITY LAYERS DETECTED");
    }

    #[test]
    fn test_since_returns_tail() {
        let mut transcript = Transcript::boot(5);
        transcript.push(LineKind::Error, "> ACCESS DENIED - INVALID INPUT");

        let tail = transcript.since(3);
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].kind, LineKind::Error);
        assert!(transcript.since(10).is_empty());
    }

    #[test]
    fn test_input_echo() {
        let line = TranscriptLine::input("kavya");
        assert_eq!(line.kind, LineKind::Input);
        assert_eq!(line.text, "> kavya");
    }
}
