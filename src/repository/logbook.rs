//! Logbook repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::logbook::{CreateLogbookEntry, LogbookEntry, LogbookQuery},
};

#[derive(Clone)]
pub struct LogbookRepository {
    pool: Pool<Postgres>,
}

impl LogbookRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List logbook entries with optional filters, newest first
    pub async fn list(&self, query: &LogbookQuery) -> AppResult<Vec<LogbookEntry>> {
        let rows = sqlx::query_as::<_, LogbookEntry>(
            r#"
            SELECT * FROM logbook_entries
            WHERE ($1::int IS NULL OR equipment_id = $1)
              AND ($2::text IS NULL OR entry_type = $2)
            ORDER BY entry_date DESC, id DESC
            "#,
        )
        .bind(query.equipment_id)
        .bind(query.entry_type)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get logbook entry by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<LogbookEntry> {
        sqlx::query_as::<_, LogbookEntry>("SELECT * FROM logbook_entries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchData, format!("Logbook entry {} not found", id))
            })
    }

    /// Create logbook entry
    pub async fn create(&self, data: &CreateLogbookEntry) -> AppResult<LogbookEntry> {
        let row = sqlx::query_as::<_, LogbookEntry>(
            r#"
            INSERT INTO logbook_entries (equipment_id, entry_date, author, entry_type, text)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(data.entry_date)
        .bind(&data.author)
        .bind(data.entry_type)
        .bind(&data.text)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete logbook entry
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM logbook_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchData,
                format!("Logbook entry {} not found", id),
            ));
        }
        Ok(())
    }
}
