//! Question bank loading from CSV files.
//!
//! Each row is `prompt,answer[,extra info]`. Rows starting with `#` are
//! comments, and malformed rows are skipped rather than failing the load.
//! An empty bank is the one hard error: the engine must never start without
//! questions.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use tui_quiz_core::question::{Question, QuestionBank};

#[derive(Debug, Deserialize)]
struct RawQuestion {
    prompt: String,
    answer: String,
    info: Option<String>,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        Question::new(raw.prompt, raw.answer, raw.info.unwrap_or_default())
    }
}

/// Load the question bank from a CSV file on disk.
pub fn load_questions(path: &Path) -> Result<QuestionBank> {
    let file = File::open(path)
        .with_context(|| format!("could not open question file {}", path.display()))?;
    read_questions(file).with_context(|| format!("loading questions from {}", path.display()))
}

/// Read a question bank from any CSV source.
pub fn read_questions<R: Read>(source: R) -> Result<QuestionBank> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut questions = Vec::new();
    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                log::debug!("skipping unreadable row: {err}");
                continue;
            }
        };
        if record.is_empty() || record.get(0).is_some_and(|field| field.starts_with('#')) {
            continue;
        }
        if record.len() < 2 || record.len() > 3 {
            log::debug!("skipping row with {} fields", record.len());
            continue;
        }
        match record.deserialize::<RawQuestion>(None) {
            Ok(raw) => questions.push(raw.into()),
            Err(err) => log::debug!("skipping malformed row: {err}"),
        }
    }

    if questions.is_empty() {
        bail!("no questions available");
    }
    Ok(QuestionBank::new(questions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(data: &str) -> Result<QuestionBank> {
        read_questions(Cursor::new(data.as_bytes()))
    }

    #[test]
    fn loads_three_field_rows() {
        let bank = load("2+2?,4,basic sums\n3+3?,6,\n").unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[0].prompt, "2+2?");
        assert_eq!(bank.questions()[0].answer, "4");
        assert_eq!(bank.questions()[0].info, "basic sums");
        assert_eq!(bank.questions()[1].info, "");
    }

    #[test]
    fn two_field_rows_default_info_to_empty() {
        let bank = load("capital of France?,Paris\n").unwrap();

        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].info, "");
    }

    #[test]
    fn skips_comment_rows() {
        let bank = load("# section: arithmetic\n2+2?,4\n#2*2?,4\n").unwrap();

        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].prompt, "2+2?");
    }

    #[test]
    fn skips_rows_with_wrong_field_count() {
        let bank = load("just-a-prompt\n2+2?,4\na,b,c,d\n").unwrap();

        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].prompt, "2+2?");
    }

    #[test]
    fn preserves_file_order() {
        let bank = load("a,1\nb,2\nc,3\n").unwrap();

        let prompts: Vec<&str> = bank.questions().iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_source_is_an_error() {
        let err = load("").unwrap_err();
        assert!(err.to_string().contains("no questions available"));

        let err = load("# only comments\n").unwrap_err();
        assert!(err.to_string().contains("no questions available"));
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.csv");
        std::fs::write(&path, "2+2?,4\n").unwrap();

        let bank = load_questions(&path).unwrap();
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_questions(Path::new("does-not-exist.csv")).is_err());
    }
}
