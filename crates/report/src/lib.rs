//! Wrong-answers report writer.
//!
//! Persists the session's missed questions to a dated plain-text file in the
//! user's documents folder. Failures never cross this boundary: the caller
//! only ever sees "a path" or "no report".

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use tui_quiz_core::game_state::WrongAnswer;

/// Writes `WrongAnswers<YYYYMMDD><HHMMSS>.txt` reports.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    /// Target directory override; `None` means the user's documents folder.
    base_dir: Option<PathBuf>,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write reports into a specific directory instead of the documents
    /// folder. Used by tests.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Persist the report. Returns the written path, or `None` when there is
    /// nothing to write or persisting failed.
    pub fn write(&self, entries: &[WrongAnswer]) -> Option<PathBuf> {
        if entries.is_empty() {
            return None;
        }
        match self.try_write(entries) {
            Ok(path) => Some(path),
            Err(err) => {
                log::warn!("could not save wrong-answers report: {err:#}");
                None
            }
        }
    }

    fn try_write(&self, entries: &[WrongAnswer]) -> Result<PathBuf> {
        let dir = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => dirs::document_dir().context("no documents directory for this user")?,
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("could not create {}", dir.display()))?;

        let stamp = Local::now().format("%Y%m%d%H%M%S");
        let path = dir.join(format!("WrongAnswers{stamp}.txt"));
        fs::write(&path, render_report(entries))
            .with_context(|| format!("could not write {}", path.display()))?;
        Ok(path)
    }
}

/// Render the report body: labelled lines per entry, a dashed rule between
/// entries, and a trailing total.
pub fn render_report(entries: &[WrongAnswer]) -> String {
    let mut out = String::new();
    out.push_str("Wrong Answers Report\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("Question {}:\n", i + 1));
        out.push_str(&format!("Q: {}\n", entry.question));
        out.push_str(&format!("Correct Answer: {}\n", entry.correct_answer));
        out.push_str(&format!("Your Answer: {}\n", entry.user_answer));
        if !entry.extra_info.is_empty() {
            out.push_str(&format!("Extra Info: {}\n", entry.extra_info));
        }
        out.push('\n');
        out.push_str(&"-".repeat(30));
        out.push_str("\n\n");
    }

    out.push_str(&format!("Total Wrong Answers: {}\n", entries.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(question: &str, correct: &str, given: &str, info: &str) -> WrongAnswer {
        WrongAnswer {
            question: question.to_string(),
            correct_answer: correct.to_string(),
            user_answer: given.to_string(),
            extra_info: info.to_string(),
        }
    }

    #[test]
    fn empty_list_produces_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::with_base_dir(dir.path());

        assert!(writer.write(&[]).is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_a_dated_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::with_base_dir(dir.path());

        let path = writer
            .write(&[entry("3+3?", "6", "five", "basic sums")])
            .unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("WrongAnswers"));
        assert!(name.ends_with(".txt"));
        // WrongAnswers + 8-digit date + 6-digit time + .txt
        assert_eq!(name.len(), "WrongAnswers".len() + 14 + ".txt".len());

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("Wrong Answers Report\n"));
        assert!(body.contains("Q: 3+3?\n"));
        assert!(body.contains("Correct Answer: 6\n"));
        assert!(body.contains("Your Answer: five\n"));
        assert!(body.contains("Extra Info: basic sums\n"));
        assert!(body.ends_with("Total Wrong Answers: 1\n"));
    }

    #[test]
    fn omits_the_info_line_when_empty() {
        let body = render_report(&[entry("q", "a", "b", "")]);
        assert!(!body.contains("Extra Info:"));
    }

    #[test]
    fn numbers_entries_and_counts_them() {
        let body = render_report(&[entry("q1", "a", "x", ""), entry("q2", "b", "y", "")]);

        assert!(body.contains("Question 1:\n"));
        assert!(body.contains("Question 2:\n"));
        assert!(body.contains("Total Wrong Answers: 2\n"));
    }

    #[test]
    fn creates_the_target_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("does/not/exist/yet");
        let writer = ReportWriter::with_base_dir(&nested);

        let path = writer.write(&[entry("q", "a", "b", "")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_failure_degrades_to_none() {
        // A file where a directory is expected makes create_dir_all fail.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();
        let writer = ReportWriter::with_base_dir(&blocker);

        assert!(writer.write(&[entry("q", "a", "b", "")]).is_none());
    }
}
