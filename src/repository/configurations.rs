//! Equipment configurations repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::configuration::{CreateConfiguration, EquipmentConfiguration},
};

#[derive(Clone)]
pub struct ConfigurationsRepository {
    pool: Pool<Postgres>,
}

impl ConfigurationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List configurations, optionally for one equipment unit
    pub async fn list(&self, equipment_id: Option<i32>) -> AppResult<Vec<EquipmentConfiguration>> {
        let rows = sqlx::query_as::<_, EquipmentConfiguration>(
            r#"
            SELECT * FROM equipment_configurations
            WHERE ($1::int IS NULL OR equipment_id = $1)
            ORDER BY equipment_id, name
            "#,
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get configuration by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<EquipmentConfiguration> {
        sqlx::query_as::<_, EquipmentConfiguration>(
            "SELECT * FROM equipment_configurations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchData, format!("Configuration {} not found", id))
        })
    }

    /// Create configuration
    pub async fn create(&self, data: &CreateConfiguration) -> AppResult<EquipmentConfiguration> {
        let row = sqlx::query_as::<_, EquipmentConfiguration>(
            r#"
            INSERT INTO equipment_configurations (equipment_id, name, description, parameters, valid_from)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(sqlx::types::Json(&data.parameters))
        .bind(data.valid_from)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace configuration
    pub async fn update(
        &self,
        id: i32,
        data: &CreateConfiguration,
    ) -> AppResult<EquipmentConfiguration> {
        sqlx::query_as::<_, EquipmentConfiguration>(
            r#"
            UPDATE equipment_configurations
            SET equipment_id = $2, name = $3, description = $4, parameters = $5,
                valid_from = $6, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.equipment_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(sqlx::types::Json(&data.parameters))
        .bind(data.valid_from)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchData, format!("Configuration {} not found", id))
        })
    }

    /// Delete configuration
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment_configurations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchData,
                format!("Configuration {} not found", id),
            ));
        }
        Ok(())
    }
}
