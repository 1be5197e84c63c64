//! Equipment repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::equipment::{CreateEquipment, Equipment, EquipmentQuery},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment with optional filters
    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<Vec<Equipment>> {
        let search = query
            .search
            .as_ref()
            .map(|s| format!("%{}%", s.trim()));

        let rows = sqlx::query_as::<_, Equipment>(
            r#"
            SELECT * FROM equipment
            WHERE ($1::int IS NULL OR customer_id = $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::text IS NULL OR status = $3)
              AND ($4::text IS NULL OR name ILIKE $4
                   OR manufacturer ILIKE $4 OR serial_number ILIKE $4)
            ORDER BY name
            "#,
        )
        .bind(query.customer_id)
        .bind(query.category)
        .bind(query.status)
        .bind(search)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    ErrorCode::NoSuchEquipment,
                    format!("Equipment {} not found", id),
                )
            })
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (customer_id, name, category, manufacturer, model,
                                   serial_number, year_of_manufacture, capacity_kg,
                                   status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(data.customer_id)
        .bind(&data.name)
        .bind(data.category)
        .bind(&data.manufacturer)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(data.year_of_manufacture)
        .bind(data.capacity_kg)
        .bind(data.status)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace equipment
    pub async fn update(&self, id: i32, data: &CreateEquipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment
            SET customer_id = $2, name = $3, category = $4, manufacturer = $5,
                model = $6, serial_number = $7, year_of_manufacture = $8,
                capacity_kg = $9, status = $10, notes = $11, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.customer_id)
        .bind(&data.name)
        .bind(data.category)
        .bind(&data.manufacturer)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(data.year_of_manufacture)
        .bind(data.capacity_kg)
        .bind(data.status)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchEquipment, format!("Equipment {} not found", id))
        })
    }

    /// Delete equipment
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchEquipment,
                format!("Equipment {} not found", id),
            ));
        }
        Ok(())
    }

    /// Count equipment units (for stats)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count active equipment units (for stats)
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE status = 'active'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
