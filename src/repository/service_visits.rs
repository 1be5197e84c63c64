//! Service visits repository, including uploaded file metadata

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::service_visit::{CreateServiceVisit, ServiceFile, ServiceVisit, ServiceVisitQuery},
};

#[derive(Clone)]
pub struct ServiceVisitsRepository {
    pool: Pool<Postgres>,
}

impl ServiceVisitsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List service visits with optional filters
    pub async fn list(&self, query: &ServiceVisitQuery) -> AppResult<Vec<ServiceVisit>> {
        let rows = sqlx::query_as::<_, ServiceVisit>(
            r#"
            SELECT * FROM service_visits
            WHERE ($1::int IS NULL OR equipment_id = $1)
            ORDER BY visit_date DESC, id DESC
            "#,
        )
        .bind(query.equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get service visit by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<ServiceVisit> {
        sqlx::query_as::<_, ServiceVisit>("SELECT * FROM service_visits WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchData, format!("Service visit {} not found", id))
            })
    }

    /// Create service visit
    pub async fn create(&self, data: &CreateServiceVisit) -> AppResult<ServiceVisit> {
        let row = sqlx::query_as::<_, ServiceVisit>(
            r#"
            INSERT INTO service_visits (equipment_id, visit_date, technician_name,
                                        work_done, parts_used, hours_spent, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(data.visit_date)
        .bind(&data.technician_name)
        .bind(&data.work_done)
        .bind(&data.parts_used)
        .bind(data.hours_spent)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace service visit
    pub async fn update(&self, id: i32, data: &CreateServiceVisit) -> AppResult<ServiceVisit> {
        sqlx::query_as::<_, ServiceVisit>(
            r#"
            UPDATE service_visits
            SET equipment_id = $2, visit_date = $3, technician_name = $4,
                work_done = $5, parts_used = $6, hours_spent = $7, notes = $8,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.equipment_id)
        .bind(data.visit_date)
        .bind(&data.technician_name)
        .bind(&data.work_done)
        .bind(&data.parts_used)
        .bind(data.hours_spent)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchData, format!("Service visit {} not found", id))
        })
    }

    /// Delete service visit
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM service_visits WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchData,
                format!("Service visit {} not found", id),
            ));
        }
        Ok(())
    }

    /// Files attached to one service visit
    pub async fn list_files(&self, service_visit_id: i32) -> AppResult<Vec<ServiceFile>> {
        let rows = sqlx::query_as::<_, ServiceFile>(
            "SELECT * FROM service_files WHERE service_visit_id = $1 ORDER BY id",
        )
        .bind(service_visit_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get one uploaded file's metadata
    pub async fn get_file(&self, id: i32) -> AppResult<ServiceFile> {
        sqlx::query_as::<_, ServiceFile>("SELECT * FROM service_files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchData, format!("Service file {} not found", id))
            })
    }

    /// Record an uploaded file
    pub async fn create_file(
        &self,
        service_visit_id: i32,
        file_name: &str,
        content_type: &str,
        size_bytes: i64,
        stored_name: &str,
    ) -> AppResult<ServiceFile> {
        let row = sqlx::query_as::<_, ServiceFile>(
            r#"
            INSERT INTO service_files (service_visit_id, file_name, content_type, size_bytes, stored_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(service_visit_id)
        .bind(file_name)
        .bind(content_type)
        .bind(size_bytes)
        .bind(stored_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete an uploaded file's metadata
    pub async fn delete_file(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM service_files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchData,
                format!("Service file {} not found", id),
            ));
        }
        Ok(())
    }
}
