use serde::{Deserialize, Serialize};

/// One multiple-choice question as produced by the generative service.
/// Option strings carry their own label prefix ("A) ..."); `answer` is the
/// single uppercase letter of the correct option. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    pub fn new(text: &str, options: Vec<String>, answer: &str) -> Self {
        Question {
            text: text.to_string(),
            options,
            answer: answer.to_string(),
        }
    }

    /// The correct-option letter, if the answer field holds one.
    pub fn correct_letter(&self) -> Option<char> {
        self.answer.chars().next()
    }
}
