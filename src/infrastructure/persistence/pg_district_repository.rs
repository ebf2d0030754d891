//! PostgreSQL implementation of the district repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::District;
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// PostgreSQL repository for districts.
///
/// The `province_id` column is nullable; the service layer has already
/// resolved the parent reference by the time a district reaches `save`.
pub struct PgDistrictRepository {
    pool: Arc<PgPool>,
}

impl PgDistrictRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<District> for PgDistrictRepository {
    async fn save(&self, district: District) -> Result<District, AppError> {
        let saved = sqlx::query_as::<_, District>(
            r#"
            INSERT INTO district (district_id, district_name, province_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (district_id) DO UPDATE
                SET district_name = EXCLUDED.district_name,
                    province_id   = EXCLUDED.province_id
            RETURNING district_id AS id, district_name AS name, province_id
            "#,
        )
        .bind(district.id)
        .bind(&district.name)
        .bind(district.province_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<District>, AppError> {
        let row = sqlx::query_as::<_, District>(
            r#"
            SELECT district_id AS id, district_name AS name, province_id
            FROM district
            WHERE district_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<District>, AppError> {
        let rows = sqlx::query_as::<_, District>(
            r#"
            SELECT district_id AS id, district_name AS name, province_id
            FROM district
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM district WHERE district_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
