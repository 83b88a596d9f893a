use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateExamRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    pub question_count: u8,
}

/// Full answer sheet for the exam in progress: one entry per question,
/// holding the selected option string or null while unanswered.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: Vec<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_rejects_malformed_email() {
        let request = SignUpRequest {
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn sign_up_accepts_valid_input() {
        let request = SignUpRequest {
            email: "maria@example.com".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn generate_exam_rejects_blank_topic() {
        let request = GenerateExamRequest {
            topic: String::new(),
            question_count: 5,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn submit_answers_deserializes_nulls_as_unanswered() {
        let json = r#"{"answers": ["A) yes", null, "C) maybe"]}"#;
        let request: SubmitAnswersRequest =
            serde_json::from_str(json).expect("request should deserialize");

        assert_eq!(request.answers.len(), 3);
        assert!(request.answers[1].is_none());
    }
}
