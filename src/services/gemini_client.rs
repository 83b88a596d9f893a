use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

#[cfg(test)]
use mockall::automock;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Boundary to the generative-text service: one prompt in, free-form text
/// out. Transport, quota and auth failures all surface as generation errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: GEMINI_BASE_URL.to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose_secret()
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self.http.post(&url).json(&body).send().await.map_err(|e| {
            log::warn!("Generative service unreachable: {}", e);
            AppError::Generation("Generative service unreachable".to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            log::warn!("Generative service rejected request ({}): {}", status, detail);
            return Err(AppError::Generation(format!(
                "Generative service returned status {}",
                status
            )));
        }

        let reply: GenerateContentResponse = response.json().await.map_err(|e| {
            log::warn!("Generative service reply could not be parsed: {}", e);
            AppError::Generation("Generative service reply could not be parsed".to_string())
        })?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::Generation(
                "Generative service returned an empty reply".to_string(),
            ));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_reply_deserializes_to_text() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first "}, {"text": "second"}]}}
            ]
        }"#;

        let reply: GenerateContentResponse =
            serde_json::from_str(json).expect("reply should deserialize");
        let text: String = reply.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.clone())
            .collect();

        assert_eq!(text, "first second");
    }

    #[test]
    fn empty_reply_deserializes_without_candidates() {
        let reply: GenerateContentResponse =
            serde_json::from_str("{}").expect("reply should deserialize");
        assert!(reply.candidates.is_empty());
    }
}
