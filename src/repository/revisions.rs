//! Revisions repository for database operations
//!
//! A revision and its derived defect rows are always written in one
//! transaction; the defect table never diverges from the checklists.

use indexmap::IndexMap;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use crate::{
    checklist::Checklists,
    error::{AppError, AppResult, ErrorCode},
    models::{
        defect::{Defect, DefectItem},
        revision::{CreateRevision, Revision, RevisionQuery},
    },
};

#[derive(Clone)]
pub struct RevisionsRepository {
    pool: Pool<Postgres>,
}

impl RevisionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List revisions with optional filters (defects not loaded)
    pub async fn list(&self, query: &RevisionQuery) -> AppResult<Vec<Revision>> {
        let rows = sqlx::query_as::<_, Revision>(
            r#"
            SELECT * FROM revisions
            WHERE ($1::int IS NULL OR equipment_id = $1)
              AND ($2::text IS NULL OR evaluation = $2)
              AND ($3::date IS NULL OR revision_date >= $3)
              AND ($4::date IS NULL OR revision_date <= $4)
            ORDER BY revision_date DESC, id DESC
            "#,
        )
        .bind(query.equipment_id)
        .bind(query.evaluation)
        .bind(query.from)
        .bind(query.to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get revision by ID with its defects
    pub async fn get_by_id(&self, id: i32) -> AppResult<Revision> {
        let mut revision = sqlx::query_as::<_, Revision>("SELECT * FROM revisions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchRevision, format!("Revision {} not found", id))
            })?;
        revision.defects = self.defects_for(id).await?;
        Ok(revision)
    }

    /// Defect rows of one revision, in derivation order
    pub async fn defects_for(&self, revision_id: i32) -> AppResult<Vec<Defect>> {
        let rows = sqlx::query_as::<_, Defect>(
            "SELECT * FROM defects WHERE revision_id = $1 ORDER BY id",
        )
        .bind(revision_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List defect rows, optionally restricted to one revision
    pub async fn list_defects(&self, revision_id: Option<i32>) -> AppResult<Vec<Defect>> {
        let rows = sqlx::query_as::<_, Defect>(
            r#"
            SELECT * FROM defects
            WHERE ($1::int IS NULL OR revision_id = $1)
            ORDER BY revision_id DESC, id
            "#,
        )
        .bind(revision_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a revision together with its derived defects
    pub async fn create(
        &self,
        data: &CreateRevision,
        location: Option<&str>,
        checklists: &Checklists,
        loads: &IndexMap<String, String>,
        defects: &[DefectItem],
    ) -> AppResult<Revision> {
        let mut tx = self.pool.begin().await?;

        let mut revision = sqlx::query_as::<_, Revision>(
            r#"
            INSERT INTO revisions (
                equipment_id, configuration_id, location_id, location,
                revision_number, technician_name, certification_number, procedure_type,
                revision_date, test_start_date, test_end_date, report_date,
                handover_date, next_revision_date, next_inspection_date,
                documentation_check, equipment_check, functional_test, load_test,
                load_test_loads, measuring_instruments, technical_assessment, dangers,
                previous_controls_ok, technical_trend, evaluation, conclusion
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(data.configuration_id)
        .bind(data.location_id)
        .bind(location)
        .bind(&data.revision_number)
        .bind(&data.technician_name)
        .bind(&data.certification_number)
        .bind(data.procedure_type)
        .bind(data.revision_date)
        .bind(data.test_start_date)
        .bind(data.test_end_date)
        .bind(data.report_date)
        .bind(data.handover_date)
        .bind(data.next_revision_date)
        .bind(data.next_inspection_date)
        .bind(Json(&checklists.documentation_check))
        .bind(Json(&checklists.equipment_check))
        .bind(Json(&checklists.functional_test))
        .bind(Json(&checklists.load_test))
        .bind(Json(loads))
        .bind(Json(&data.measuring_instruments))
        .bind(Json(&data.technical_assessment))
        .bind(Json(&data.dangers))
        .bind(data.previous_controls_ok)
        .bind(&data.technical_trend)
        .bind(data.evaluation)
        .bind(&data.conclusion)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        revision.defects = insert_defects(&mut tx, revision.id, defects).await?;

        tx.commit().await?;
        Ok(revision)
    }

    /// Replace a revision; its defect rows are rewritten from the derived set
    pub async fn update(
        &self,
        id: i32,
        data: &CreateRevision,
        location: Option<&str>,
        checklists: &Checklists,
        loads: &IndexMap<String, String>,
        defects: &[DefectItem],
    ) -> AppResult<Revision> {
        let mut tx = self.pool.begin().await?;

        let mut revision = sqlx::query_as::<_, Revision>(
            r#"
            UPDATE revisions SET
                equipment_id = $2, configuration_id = $3, location_id = $4,
                location = $5, revision_number = $6, technician_name = $7,
                certification_number = $8, procedure_type = $9, revision_date = $10,
                test_start_date = $11, test_end_date = $12, report_date = $13,
                handover_date = $14, next_revision_date = $15, next_inspection_date = $16,
                documentation_check = $17, equipment_check = $18, functional_test = $19,
                load_test = $20, load_test_loads = $21, measuring_instruments = $22,
                technical_assessment = $23, dangers = $24, previous_controls_ok = $25,
                technical_trend = $26, evaluation = $27, conclusion = $28,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.equipment_id)
        .bind(data.configuration_id)
        .bind(data.location_id)
        .bind(location)
        .bind(&data.revision_number)
        .bind(&data.technician_name)
        .bind(&data.certification_number)
        .bind(data.procedure_type)
        .bind(data.revision_date)
        .bind(data.test_start_date)
        .bind(data.test_end_date)
        .bind(data.report_date)
        .bind(data.handover_date)
        .bind(data.next_revision_date)
        .bind(data.next_inspection_date)
        .bind(Json(&checklists.documentation_check))
        .bind(Json(&checklists.equipment_check))
        .bind(Json(&checklists.functional_test))
        .bind(Json(&checklists.load_test))
        .bind(Json(loads))
        .bind(Json(&data.measuring_instruments))
        .bind(Json(&data.technical_assessment))
        .bind(Json(&data.dangers))
        .bind(data.previous_controls_ok)
        .bind(&data.technical_trend)
        .bind(data.evaluation)
        .bind(&data.conclusion)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_unique_violation)?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchRevision, format!("Revision {} not found", id))
        })?;

        sqlx::query("DELETE FROM defects WHERE revision_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        revision.defects = insert_defects(&mut tx, id, defects).await?;

        tx.commit().await?;
        Ok(revision)
    }

    /// Delete revision (defect rows cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM revisions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchRevision,
                format!("Revision {} not found", id),
            ));
        }
        Ok(())
    }

    /// Count revisions (for stats)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM revisions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count equipment units whose next revision falls within `days` from
    /// today (for stats). Only the latest revision per equipment counts;
    /// a superseded revision no longer says anything about the unit.
    pub async fn count_due_within_days(&self, days: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM (
                SELECT DISTINCT ON (equipment_id) next_revision_date
                FROM revisions
                ORDER BY equipment_id, revision_date DESC, id DESC
            ) latest
            WHERE next_revision_date IS NOT NULL
              AND next_revision_date <= CURRENT_DATE + $1
            "#,
        )
        .bind(days)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

async fn insert_defects(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    revision_id: i32,
    defects: &[DefectItem],
) -> AppResult<Vec<Defect>> {
    let mut rows = Vec::with_capacity(defects.len());
    for defect in defects {
        let row = sqlx::query_as::<_, Defect>(
            r#"
            INSERT INTO defects (revision_id, section, item_key, item_name, description, severity)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(revision_id)
        .bind(&defect.section)
        .bind(&defect.item_key)
        .bind(&defect.item_name)
        .bind(&defect.description)
        .bind(defect.severity)
        .fetch_one(&mut **tx)
        .await?;
        rows.push(row);
    }
    Ok(rows)
}

fn map_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        if db.constraint() == Some("revisions_revision_number_key") {
            return AppError::Conflict("Revision number already exists".to_string());
        }
    }
    AppError::Database(e)
}
