//! PostgreSQL implementation of the province repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Province;
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// PostgreSQL repository for provinces.
///
/// `save` is an upsert keyed on `province_id`; an existing row is replaced
/// wholesale.
pub struct PgProvinceRepository {
    pool: Arc<PgPool>,
}

impl PgProvinceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Province> for PgProvinceRepository {
    async fn save(&self, province: Province) -> Result<Province, AppError> {
        let saved = sqlx::query_as::<_, Province>(
            r#"
            INSERT INTO province (province_id, province_name, no_of_districts)
            VALUES ($1, $2, $3)
            ON CONFLICT (province_id) DO UPDATE
                SET province_name   = EXCLUDED.province_name,
                    no_of_districts = EXCLUDED.no_of_districts
            RETURNING province_id AS id, province_name AS name, no_of_districts
            "#,
        )
        .bind(province.id)
        .bind(&province.name)
        .bind(province.no_of_districts)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Province>, AppError> {
        let row = sqlx::query_as::<_, Province>(
            r#"
            SELECT province_id AS id, province_name AS name, no_of_districts
            FROM province
            WHERE province_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Province>, AppError> {
        // No ORDER BY: iteration order is persistence-defined.
        let rows = sqlx::query_as::<_, Province>(
            r#"
            SELECT province_id AS id, province_name AS name, no_of_districts
            FROM province
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        // rows_affected is deliberately ignored: deleting a missing id is a no-op.
        sqlx::query("DELETE FROM province WHERE province_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
