//! Locations repository and equipment assignment history

use chrono::NaiveDate;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::location::{CreateLocation, EquipmentLocation, Location},
};

#[derive(Clone)]
pub struct LocationsRepository {
    pool: Pool<Postgres>,
}

impl LocationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all locations
    pub async fn list(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get location by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Location> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchData, format!("Location {} not found", id))
            })
    }

    /// Create location
    pub async fn create(&self, data: &CreateLocation) -> AppResult<Location> {
        let row = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (name, customer_id, street, city, postal_code, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.customer_id)
        .bind(&data.street)
        .bind(&data.city)
        .bind(&data.postal_code)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace location
    pub async fn update(&self, id: i32, data: &CreateLocation) -> AppResult<Location> {
        sqlx::query_as::<_, Location>(
            r#"
            UPDATE locations
            SET name = $2, customer_id = $3, street = $4, city = $5,
                postal_code = $6, notes = $7, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.customer_id)
        .bind(&data.street)
        .bind(&data.city)
        .bind(&data.postal_code)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchData, format!("Location {} not found", id))
        })
    }

    /// Delete location
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchData,
                format!("Location {} not found", id),
            ));
        }
        Ok(())
    }

    /// Assignment history for one equipment unit, newest first
    pub async fn assignment_history(&self, equipment_id: i32) -> AppResult<Vec<EquipmentLocation>> {
        let rows = sqlx::query(
            r#"
            SELECT el.id, el.equipment_id, el.location_id, el.assigned_from,
                   el.assigned_to, l.name AS location_name
            FROM equipment_locations el
            JOIN locations l ON l.id = el.location_id
            WHERE el.equipment_id = $1
            ORDER BY el.assigned_from DESC, el.id DESC
            "#,
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| EquipmentLocation {
                id: row.get("id"),
                equipment_id: row.get("equipment_id"),
                location_id: row.get("location_id"),
                assigned_from: row.get("assigned_from"),
                assigned_to: row.get("assigned_to"),
                location_name: row.get("location_name"),
            })
            .collect())
    }

    /// Assign equipment to a location: the open assignment (if any) is closed
    /// the day the new one starts, then the new row is opened. Runs in one
    /// transaction.
    pub async fn assign(
        &self,
        equipment_id: i32,
        location_id: i32,
        assigned_from: NaiveDate,
    ) -> AppResult<EquipmentLocation> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE equipment_locations
            SET assigned_to = $2
            WHERE equipment_id = $1 AND assigned_to IS NULL
            "#,
        )
        .bind(equipment_id)
        .bind(assigned_from)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, EquipmentLocation>(
            r#"
            INSERT INTO equipment_locations (equipment_id, location_id, assigned_from)
            VALUES ($1, $2, $3)
            RETURNING id, equipment_id, location_id, assigned_from, assigned_to
            "#,
        )
        .bind(equipment_id)
        .bind(location_id)
        .bind(assigned_from)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }
}
