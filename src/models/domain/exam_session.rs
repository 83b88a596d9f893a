use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

/// The transient in-memory set of generated questions and in-progress
/// answers for one user's current attempt. Lives inside the session
/// context; never persisted until finalized into a result record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExamSession {
    pub topic: String,
    pub questions: Vec<Question>,
    /// One entry per question: the selected option string, or `None` while
    /// unanswered. Same order as `questions`.
    pub selections: Vec<Option<String>>,
}

impl ExamSession {
    pub fn new(topic: &str, questions: Vec<Question>) -> Self {
        let selections = vec![None; questions.len()];
        ExamSession {
            topic: topic.to_string(),
            questions,
            selections,
        }
    }

    /// Replaces all selections at once. Returns false when the answer list
    /// does not line up with the question list.
    pub fn record_answers(&mut self, answers: Vec<Option<String>>) -> bool {
        if answers.len() != self.questions.len() {
            return false;
        }
        self.selections = answers;
        true
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
