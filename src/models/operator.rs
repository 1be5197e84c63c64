//! Operator model and equipment assignment

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Certified equipment operator (jeřábník / vazač)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Operator {
    pub id: i32,
    pub name: String,
    pub certificate_number: Option<String>,
    pub certificate_valid_until: Option<NaiveDate>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create / replace operator request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOperator {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub certificate_number: Option<String>,
    pub certificate_valid_until: Option<NaiveDate>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}
