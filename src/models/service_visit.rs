//! Service visit model and uploaded files

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// One service / maintenance visit on an equipment unit
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServiceVisit {
    pub id: i32,
    pub equipment_id: i32,
    pub visit_date: NaiveDate,
    pub technician_name: String,
    pub work_done: Option<String>,
    pub parts_used: Option<String>,
    pub hours_spent: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create / replace service visit request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceVisit {
    pub equipment_id: i32,
    pub visit_date: NaiveDate,
    #[validate(length(min = 1, message = "technician_name must not be empty"))]
    pub technician_name: String,
    pub work_done: Option<String>,
    pub parts_used: Option<String>,
    #[validate(range(min = 0.0))]
    pub hours_spent: Option<f64>,
    pub notes: Option<String>,
}

/// Service visit list filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ServiceVisitQuery {
    pub equipment_id: Option<i32>,
}

/// Metadata of a file attached to a service visit.
/// The payload itself lives on disk under a generated storage name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServiceFile {
    pub id: i32,
    pub service_visit_id: i32,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    /// Opaque name of the stored blob inside the upload directory
    #[serde(skip_serializing, default)]
    pub stored_name: String,
    pub created_at: Option<DateTime<Utc>>,
}
