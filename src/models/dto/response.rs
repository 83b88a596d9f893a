use serde::Serialize;

use crate::models::domain::ExamSession;

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_token: String,
    pub email: String,
}

/// One question as shown to the candidate. The correct letter never leaves
/// the server while the exam is in progress.
#[derive(Debug, Clone, Serialize)]
pub struct ExamQuestionDto {
    pub number: usize,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExamResponse {
    pub topic: String,
    pub questions: Vec<ExamQuestionDto>,
}

impl From<&ExamSession> for ExamResponse {
    fn from(session: &ExamSession) -> Self {
        ExamResponse {
            topic: session.topic.clone(),
            questions: session
                .questions
                .iter()
                .enumerate()
                .map(|(i, q)| ExamQuestionDto {
                    number: i + 1,
                    question: q.text.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

/// Per-question grading feedback: whether the selection was right, and the
/// correct letter so a wrong answer can be explained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionVerdict {
    pub number: usize,
    pub correct: bool,
    pub correct_letter: String,
}

/// Score is the raw percentage; rounding is left to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct GradeResponse {
    pub score: f64,
    pub correct_count: usize,
    pub total_questions: usize,
    pub verdicts: Vec<QuestionVerdict>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressEntry {
    pub topic: String,
    pub score: f64,
    pub completed_on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub entries: Vec<ProgressEntry>,
    pub chart: Vec<ProgressPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
