use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::ResultRecord,
};

#[cfg(test)]
use mockall::automock;

/// Durable storage for finished exams. Append-only: every finalize inserts
/// a new row, and reads are always scoped to one user.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn insert(&self, record: ResultRecord) -> AppResult<ResultRecord>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<ResultRecord>>;
}

/// Talks to the storage backend's REST interface. Rows live in a single
/// results table; `created_at` is assigned server-side on insert.
pub struct SupabaseResultRepository {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    table: String,
}

impl SupabaseResultRepository {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            api_key: config.supabase_key.clone(),
            table: config.results_table.clone(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl ResultRepository for SupabaseResultRepository {
    async fn insert(&self, record: ResultRecord) -> AppResult<ResultRecord> {
        let response = self
            .http
            .post(self.table_url())
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await
            .map_err(|e| {
                log::error!("Result insert request failed: {}", e);
                AppError::Storage("Could not save the exam result".to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Result insert rejected ({}): {}", status, body);
            return Err(AppError::Storage(
                "Could not save the exam result".to_string(),
            ));
        }

        let mut rows: Vec<ResultRecord> = response.json().await.map_err(|e| {
            log::error!("Result insert response could not be parsed: {}", e);
            AppError::Storage("Could not save the exam result".to_string())
        })?;

        rows.pop().ok_or_else(|| {
            AppError::Storage("Storage did not return the inserted result".to_string())
        })
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<ResultRecord>> {
        let user_filter = format!("eq.{}", user_id);
        let response = self
            .http
            .get(self.table_url())
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .query(&[
                ("select", "*"),
                ("user_id", user_filter.as_str()),
                ("order", "created_at.asc"),
            ])
            .send()
            .await
            .map_err(|e| {
                log::error!("Result query request failed: {}", e);
                AppError::Storage("Could not load the exam history".to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Result query rejected ({}): {}", status, body);
            return Err(AppError::Storage(
                "Could not load the exam history".to_string(),
            ));
        }

        let rows: Vec<ResultRecord> = response.json().await.map_err(|e| {
            log::error!("Result query response could not be parsed: {}", e);
            AppError::Storage("Could not load the exam history".to_string())
        })?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_joins_base_and_table() {
        let mut config = Config::test_config();
        config.supabase_url = "http://localhost:54321/".to_string();

        let repository = SupabaseResultRepository::new(&config, reqwest::Client::new());
        assert_eq!(
            repository.table_url(),
            "http://localhost:54321/rest/v1/simulados"
        );
    }
}
