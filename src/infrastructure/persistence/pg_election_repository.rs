//! PostgreSQL implementation of the election repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Election;
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// PostgreSQL repository for elections.
pub struct PgElectionRepository {
    pool: Arc<PgPool>,
}

impl PgElectionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Election> for PgElectionRepository {
    async fn save(&self, election: Election) -> Result<Election, AppError> {
        let saved = sqlx::query_as::<_, Election>(
            r#"
            INSERT INTO election (election_id, election_year)
            VALUES ($1, $2)
            ON CONFLICT (election_id) DO UPDATE
                SET election_year = EXCLUDED.election_year
            RETURNING election_id AS id, election_year AS year
            "#,
        )
        .bind(election.id)
        .bind(election.year)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Election>, AppError> {
        let row = sqlx::query_as::<_, Election>(
            r#"
            SELECT election_id AS id, election_year AS year
            FROM election
            WHERE election_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Election>, AppError> {
        let rows = sqlx::query_as::<_, Election>(
            r#"
            SELECT election_id AS id, election_year AS year
            FROM election
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM election WHERE election_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
