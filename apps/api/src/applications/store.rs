//! Application persistence. `ApplicationStore` is the seam; `PgApplicationStore`
//! is the Postgres backend carried in `AppState`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::ApplicationRow;

pub const STATUS_PENDING: &str = "pending";

/// Parameters for recording a new application.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub match_score: u8,
    pub cover_letter: Option<String>,
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Records a new application. Returns `None` if the candidate already
    /// applied to this job. Implementations never update `match_score` after this.
    async fn insert(&self, params: NewApplication) -> Result<Option<ApplicationRow>, AppError>;

    async fn get(&self, application_id: Uuid) -> Result<Option<ApplicationRow>, AppError>;

    /// Newest first.
    async fn list_for_candidate(&self, candidate_id: Uuid)
        -> Result<Vec<ApplicationRow>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn insert(&self, params: NewApplication) -> Result<Option<ApplicationRow>, AppError> {
        Ok(insert_application(&self.pool, &params).await?)
    }

    async fn get(&self, application_id: Uuid) -> Result<Option<ApplicationRow>, AppError> {
        Ok(get_application(&self.pool, application_id).await?)
    }

    async fn list_for_candidate(
        &self,
        candidate_id: Uuid,
    ) -> Result<Vec<ApplicationRow>, AppError> {
        Ok(list_applications_for_candidate(&self.pool, candidate_id).await?)
    }
}

/// Inserts an application with its apply-time match score.
/// Returns `None` if the candidate already applied to this job.
///
/// This is the only statement that writes `match_score`; nothing updates it later.
pub async fn insert_application(
    pool: &PgPool,
    params: &NewApplication,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (id, candidate_id, job_id, match_score, status, cover_letter)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (candidate_id, job_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(params.candidate_id)
    .bind(params.job_id)
    .bind(i16::from(params.match_score))
    .bind(STATUS_PENDING)
    .bind(params.cover_letter.as_deref())
    .fetch_optional(pool)
    .await?;

    if let Some(row) = &row {
        info!(
            "Recorded application {} for candidate {} on job {} (match score {})",
            row.id, params.candidate_id, params.job_id, params.match_score
        );
    }
    Ok(row)
}

pub async fn get_application(
    pool: &PgPool,
    application_id: Uuid,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = $1")
        .bind(application_id)
        .fetch_optional(pool)
        .await
}

/// Returns a candidate's applications, newest first.
pub async fn list_applications_for_candidate(
    pool: &PgPool,
    candidate_id: Uuid,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE candidate_id = $1 ORDER BY created_at DESC, id",
    )
    .bind(candidate_id)
    .fetch_all(pool)
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend for tests
// ────────────────────────────────────────────────────────────────────────────


// ────────────────────────────────────────────────────────────────────────────
// Postgres tests (need DATABASE_URL; run with `--ignored`)
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn new_application(candidate_id: Uuid, job_id: Uuid, match_score: u8) -> NewApplication {
        NewApplication {
            candidate_id,
            job_id,
            match_score,
            cover_letter: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_insert_stores_score_and_rejects_duplicates(pool: PgPool) {
        let candidate_id = Uuid::new_v4();
        let job_id = Uuid::new_v4();

        let row = insert_application(&pool, &new_application(candidate_id, job_id, 87))
            .await
            .unwrap()
            .expect("first application is stored");
        assert_eq!(row.match_score, 87);
        assert_eq!(row.status, STATUS_PENDING);

        let duplicate = insert_application(&pool, &new_application(candidate_id, job_id, 12))
            .await
            .unwrap();
        assert!(duplicate.is_none());

        let stored = get_application(&pool, row.id).await.unwrap().unwrap();
        assert_eq!(stored.match_score, 87);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_list_is_newest_first(pool: PgPool) {
        let candidate_id = Uuid::new_v4();
        let mut inserted = Vec::new();
        for score in [10, 20, 30] {
            let row = insert_application(&pool, &new_application(candidate_id, Uuid::new_v4(), score))
                .await
                .unwrap()
                .unwrap();
            inserted.push(row.id);
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        insert_application(&pool, &new_application(Uuid::new_v4(), Uuid::new_v4(), 50))
            .await
            .unwrap();

        let listed: Vec<_> = list_applications_for_candidate(&pool, candidate_id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        inserted.reverse();
        assert_eq!(listed, inserted);
    }
}
