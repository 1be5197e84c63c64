//! Operators repository and equipment assignments

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::operator::{CreateOperator, Operator},
};

#[derive(Clone)]
pub struct OperatorsRepository {
    pool: Pool<Postgres>,
}

impl OperatorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all operators
    pub async fn list(&self) -> AppResult<Vec<Operator>> {
        let rows = sqlx::query_as::<_, Operator>("SELECT * FROM operators ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get operator by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Operator> {
        sqlx::query_as::<_, Operator>("SELECT * FROM operators WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchData, format!("Operator {} not found", id))
            })
    }

    /// Create operator
    pub async fn create(&self, data: &CreateOperator) -> AppResult<Operator> {
        let row = sqlx::query_as::<_, Operator>(
            r#"
            INSERT INTO operators (name, certificate_number, certificate_valid_until, phone, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.certificate_number)
        .bind(data.certificate_valid_until)
        .bind(&data.phone)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace operator
    pub async fn update(&self, id: i32, data: &CreateOperator) -> AppResult<Operator> {
        sqlx::query_as::<_, Operator>(
            r#"
            UPDATE operators
            SET name = $2, certificate_number = $3, certificate_valid_until = $4,
                phone = $5, notes = $6, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.certificate_number)
        .bind(data.certificate_valid_until)
        .bind(&data.phone)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchData, format!("Operator {} not found", id))
        })
    }

    /// Delete operator
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM operators WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchData,
                format!("Operator {} not found", id),
            ));
        }
        Ok(())
    }

    /// Operators assigned to one equipment unit
    pub async fn list_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<Operator>> {
        let rows = sqlx::query_as::<_, Operator>(
            r#"
            SELECT o.* FROM operators o
            JOIN equipment_operators eo ON eo.operator_id = o.id
            WHERE eo.equipment_id = $1
            ORDER BY o.name
            "#,
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Assign an operator to an equipment unit (idempotent)
    pub async fn assign(&self, equipment_id: i32, operator_id: i32) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO equipment_operators (equipment_id, operator_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(equipment_id)
        .bind(operator_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Remove an operator assignment
    pub async fn unassign(&self, equipment_id: i32, operator_id: i32) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM equipment_operators WHERE equipment_id = $1 AND operator_id = $2",
        )
        .bind(equipment_id)
        .bind(operator_id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::NoSuchData, format!(
                "Operator {} is not assigned to equipment {}",
                operator_id, equipment_id
            )));
        }
        Ok(())
    }
}
