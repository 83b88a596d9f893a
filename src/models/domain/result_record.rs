use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

/// A persisted row capturing one completed exam. Append-only from this
/// application's perspective; `id` and `created_at` are assigned by storage
/// and absent on insert.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ResultRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: String,
    pub topic: String,
    pub score: f64,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ResultRecord {
    pub fn new(user_id: &str, topic: &str, score: f64, questions: Vec<Question>) -> Self {
        ResultRecord {
            id: None,
            user_id: user_id.to_string(),
            topic: topic.to_string(),
            score,
            questions,
            created_at: None,
        }
    }
}
