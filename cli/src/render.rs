//! ANSI rendering for the vault terminal.

use vault_core::prelude::*;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";

pub fn line(line: &TranscriptLine) -> String {
    let color = match line.kind {
        LineKind::System => CYAN,
        LineKind::Input => BOLD,
        LineKind::Success => GREEN,
        LineKind::Error => RED,
    };
    format!("{}{}{}", color, line.text, RESET)
}

pub fn print_lines(lines: &[TranscriptLine]) {
    for entry in lines {
        println!("{}", line(entry));
    }
}

/// Split the lines written by a passed stage into the completion line and
/// whatever announces the next stage.
pub fn split_advance(fresh: &[TranscriptLine]) -> (&[TranscriptLine], &[TranscriptLine]) {
    fresh.split_at(fresh.len().min(1))
}

/// Print every transcript line from `offset` on and return the new offset.
pub fn flush(transcript: &Transcript, offset: usize) -> usize {
    print_lines(transcript.since(offset));
    transcript.len()
}

/// `[✓] [✓] [3] [4] [5]  2/5`, with the active stage highlighted.
pub fn progress(vault: &Vault) -> String {
    let active = vault.phase().stage_index();
    let dots: Vec<String> = vault
        .table()
        .iter()
        .map(|stage| {
            if vault.completed().contains(&stage.index) {
                format!("{}[✓]{}", GREEN, RESET)
            } else if Some(stage.index) == active {
                format!("{}[{}]{}", BOLD, stage.number(), RESET)
            } else {
                format!("[{}]", stage.number())
            }
        })
        .collect();
    format!(
        "{}  {}/{}",
        dots.join(" "),
        vault.completed().len(),
        vault.table().len()
    )
}

pub fn stage_header(stage: &PuzzleStage) -> String {
    format!(
        "\n{}>_ {}{}\n{}\n",
        BOLD, stage.title, RESET, stage.description
    )
}

pub fn banner(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}

pub fn hint(text: &str) -> String {
    format!("{}💡 {}{}", YELLOW, text, RESET)
}

pub fn feedback(text: &str) -> String {
    format!("{}⚠ {}{}", RED, text, RESET)
}

pub fn secret(message: &str) -> String {
    format!("\n{}{}{}\n", MAGENTA, message, RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_colored_by_kind() {
        let error = TranscriptLine::new(LineKind::Error, "> ACCESS DENIED - INVALID INPUT");
        assert!(line(&error).starts_with(RED));
        assert!(line(&error).contains("ACCESS DENIED"));
        assert!(line(&error).ends_with(RESET));
    }

    #[test]
    fn test_split_advance_holds_back_loading_line() {
        let mut vault = Vault::love_vault();
        let before = vault.transcript().len();
        vault.submit_answer("KAVYA");

        let (passed, loading) = split_advance(vault.transcript().since(before));
        assert_eq!(passed.len(), 1);
        assert_eq!(passed[0].kind, LineKind::Success);
        assert!(passed[0].text.contains("DECRYPTION: KAVYA"));
        assert_eq!(
            loading,
            [TranscriptLine::new(LineKind::System, "> LOADING STAGE 2...")]
        );
    }

    #[test]
    fn test_split_advance_on_wrong_answer_is_empty_tail() {
        let mut vault = Vault::love_vault();
        let before = vault.transcript().len();
        vault.submit_answer("nope");

        let (first, rest) = split_advance(vault.transcript().since(before));
        assert_eq!(first[0].kind, LineKind::Error);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_progress_marks_completed_stages() {
        let mut vault = Vault::love_vault();
        vault.submit_answer("KAVYA");
        let rendered = progress(&vault);
        assert!(rendered.contains("[✓]"));
        assert!(rendered.ends_with("1/5"));
    }
}
