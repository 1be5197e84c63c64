//! Inspections repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::inspection::{CreateInspection, Inspection, InspectionQuery},
};

#[derive(Clone)]
pub struct InspectionsRepository {
    pool: Pool<Postgres>,
}

impl InspectionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List inspections with optional filters
    pub async fn list(&self, query: &InspectionQuery) -> AppResult<Vec<Inspection>> {
        let rows = sqlx::query_as::<_, Inspection>(
            r#"
            SELECT * FROM inspections
            WHERE ($1::int IS NULL OR equipment_id = $1)
              AND ($2::text IS NULL OR result = $2)
            ORDER BY inspection_date DESC, id DESC
            "#,
        )
        .bind(query.equipment_id)
        .bind(query.result)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get inspection by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Inspection> {
        sqlx::query_as::<_, Inspection>("SELECT * FROM inspections WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchData, format!("Inspection {} not found", id))
            })
    }

    /// Create inspection
    pub async fn create(&self, data: &CreateInspection) -> AppResult<Inspection> {
        let row = sqlx::query_as::<_, Inspection>(
            r#"
            INSERT INTO inspections (equipment_id, inspection_date, inspector_name,
                                     result, findings, next_inspection_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(data.inspection_date)
        .bind(&data.inspector_name)
        .bind(data.result)
        .bind(&data.findings)
        .bind(data.next_inspection_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace inspection
    pub async fn update(&self, id: i32, data: &CreateInspection) -> AppResult<Inspection> {
        sqlx::query_as::<_, Inspection>(
            r#"
            UPDATE inspections
            SET equipment_id = $2, inspection_date = $3, inspector_name = $4,
                result = $5, findings = $6, next_inspection_date = $7, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.equipment_id)
        .bind(data.inspection_date)
        .bind(&data.inspector_name)
        .bind(data.result)
        .bind(&data.findings)
        .bind(data.next_inspection_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchData, format!("Inspection {} not found", id))
        })
    }

    /// Delete inspection
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM inspections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchData,
                format!("Inspection {} not found", id),
            ));
        }
        Ok(())
    }
}
