use crate::models::domain::{ExamSession, Question, User};

pub mod fixtures {
    use super::*;

    /// Creates a standard test user
    pub fn test_user() -> User {
        User::new("user-1", "test@example.com")
    }

    /// Creates `count` well-formed questions whose correct answer is always A
    pub fn sample_questions(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| {
                Question::new(
                    &format!("Question {}?", i + 1),
                    vec![
                        "A) first".to_string(),
                        "B) second".to_string(),
                        "C) third".to_string(),
                        "D) fourth".to_string(),
                    ],
                    "A",
                )
            })
            .collect()
    }

    /// Creates an exam session with `count` questions and no answers yet
    pub fn sample_session(topic: &str, count: usize) -> ExamSession {
        ExamSession::new(topic, sample_questions(count))
    }
}
