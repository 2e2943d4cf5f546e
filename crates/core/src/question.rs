//! Question data - immutable prompt/answer/info triples and the loaded bank.

/// A single quiz question.
///
/// Equality is structural; it is used both to avoid immediate repetition and
/// to remove answered entries from the clear-mode pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    /// Optional extra information shown in learning mode. May be empty.
    pub info: String,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            info: info.into(),
        }
    }
}

/// The ordered sequence of questions loaded once per process lifetime.
///
/// The engine never mutates the bank; clear mode works on a copy of it.
/// Loaders are expected to reject an empty source before constructing one.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
