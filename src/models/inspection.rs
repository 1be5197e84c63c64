//! Inspection model
//!
//! Inspections are the lighter periodic checks between full revisions; they
//! carry no checklist and no derived defects.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::Evaluation;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Inspection {
    pub id: i32,
    pub equipment_id: i32,
    pub inspection_date: NaiveDate,
    pub inspector_name: String,
    pub result: Evaluation,
    pub findings: Option<String>,
    pub next_inspection_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create / replace inspection request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInspection {
    pub equipment_id: i32,
    pub inspection_date: NaiveDate,
    #[validate(length(min = 1, message = "inspector_name must not be empty"))]
    pub inspector_name: String,
    pub result: Evaluation,
    pub findings: Option<String>,
    pub next_inspection_date: Option<NaiveDate>,
}

/// Inspection list filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct InspectionQuery {
    pub equipment_id: Option<i32>,
    pub result: Option<Evaluation>,
}
