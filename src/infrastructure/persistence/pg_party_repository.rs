//! PostgreSQL implementation of the party repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Party;
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// PostgreSQL repository for parties.
///
/// The `election_id` column is nullable; the service layer has already
/// resolved the parent reference by the time a party reaches `save`.
pub struct PgPartyRepository {
    pool: Arc<PgPool>,
}

impl PgPartyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Party> for PgPartyRepository {
    async fn save(&self, party: Party) -> Result<Party, AppError> {
        let saved = sqlx::query_as::<_, Party>(
            r#"
            INSERT INTO party (party_id, party_name, election_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (party_id) DO UPDATE
                SET party_name  = EXCLUDED.party_name,
                    election_id = EXCLUDED.election_id
            RETURNING party_id AS id, party_name AS name, election_id
            "#,
        )
        .bind(party.id)
        .bind(&party.name)
        .bind(party.election_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Party>, AppError> {
        let row = sqlx::query_as::<_, Party>(
            r#"
            SELECT party_id AS id, party_name AS name, election_id
            FROM party
            WHERE party_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Party>, AppError> {
        let rows = sqlx::query_as::<_, Party>(
            r#"
            SELECT party_id AS id, party_name AS name, election_id
            FROM party
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM party WHERE party_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
