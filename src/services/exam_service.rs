use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{ExamSession, Question},
    services::gemini_client::GenerativeClient,
};

/// Question counts the exam form offers.
pub const ALLOWED_QUESTION_COUNTS: [u8; 4] = [5, 10, 15, 20];

pub struct ExamService {
    client: Arc<dyn GenerativeClient>,
}

impl ExamService {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Builds the prompt, calls the generative service and decodes the reply
    /// into a fresh exam session. Fails as a whole; no partial result.
    pub async fn generate_exam(&self, topic: &str, count: u8) -> AppResult<ExamSession> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::ValidationError(
                "Topic must not be empty".to_string(),
            ));
        }
        if !ALLOWED_QUESTION_COUNTS.contains(&count) {
            return Err(AppError::ValidationError(format!(
                "Question count must be one of {:?}",
                ALLOWED_QUESTION_COUNTS
            )));
        }

        let prompt = prompts::question_set_prompt(topic, count);
        let reply = self.client.generate(&prompt).await?;

        let cleaned = strip_code_fences(&reply);
        let questions: Vec<Question> = serde_json::from_str(&cleaned).map_err(|e| {
            log::warn!("Generated questions could not be decoded: {}", e);
            AppError::Generation("Generated questions could not be read".to_string())
        })?;

        validate_question_set(&questions, count)?;

        log::info!("Generated {} questions on '{}'", questions.len(), topic);
        Ok(ExamSession::new(topic, questions))
    }
}

/// Generative services often wrap structured output in markdown fences;
/// drop them before decoding.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

fn validate_question_set(questions: &[Question], expected: u8) -> AppResult<()> {
    if questions.len() != expected as usize {
        return Err(AppError::Generation(format!(
            "Expected {} questions, got {}",
            expected,
            questions.len()
        )));
    }

    for (i, question) in questions.iter().enumerate() {
        let number = i + 1;
        if question.text.trim().is_empty() {
            return Err(AppError::Generation(format!(
                "Question {} has no text",
                number
            )));
        }
        if question.options.len() < 2 {
            return Err(AppError::Generation(format!(
                "Question {} has too few options",
                number
            )));
        }

        let mut letters = question.answer.chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(letter), None) if letter.is_ascii_uppercase() => letter,
            _ => {
                return Err(AppError::Generation(format!(
                    "Question {} has an invalid answer letter '{}'",
                    number, question.answer
                )))
            }
        };

        if !question
            .options
            .iter()
            .any(|option| option.starts_with(letter))
        {
            return Err(AppError::Generation(format!(
                "Question {} answer '{}' matches none of its options",
                number, letter
            )));
        }
    }

    Ok(())
}
