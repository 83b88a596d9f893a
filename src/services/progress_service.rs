use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::dto::response::{ProgressEntry, ProgressPoint, ProgressResponse},
    repositories::ResultRepository,
};

/// Display format for result timestamps, day first.
const DATE_FORMAT: &str = "%d/%m/%Y";

pub struct ProgressService {
    repository: Arc<dyn ResultRepository>,
}

impl ProgressService {
    pub fn new(repository: Arc<dyn ResultRepository>) -> Self {
        Self { repository }
    }

    /// Fetches the user's full history (no pagination; histories are small)
    /// and shapes it into chart points and table rows, oldest first.
    pub async fn history(&self, user_id: &str) -> AppResult<ProgressResponse> {
        let mut records = self.repository.find_by_user(user_id).await?;

        if records.is_empty() {
            return Ok(ProgressResponse {
                entries: vec![],
                chart: vec![],
                message: Some("You have not taken any exams yet.".to_string()),
            });
        }

        records.sort_by_key(|r| r.created_at);

        let entries: Vec<ProgressEntry> = records
            .iter()
            .map(|record| ProgressEntry {
                topic: record.topic.clone(),
                score: record.score,
                completed_on: record
                    .created_at
                    .map(|dt| dt.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
            })
            .collect();

        let chart = entries
            .iter()
            .map(|entry| ProgressPoint {
                date: entry.completed_on.clone(),
                score: entry.score,
            })
            .collect();

        Ok(ProgressResponse {
            entries,
            chart,
            message: None,
        })
    }
}
