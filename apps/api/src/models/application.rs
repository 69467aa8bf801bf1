use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    /// Score at time of application. Written once on INSERT.
    pub match_score: i16,
    pub status: String,
    pub cover_letter: Option<String>,
    pub created_at: DateTime<Utc>,
}
