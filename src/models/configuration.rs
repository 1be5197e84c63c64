//! Equipment configuration model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A named configuration of an equipment unit (jib length, counterweight,
/// reeving, ...). Revisions may reference the configuration they were
/// performed in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentConfiguration {
    pub id: i32,
    pub equipment_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Free-form configuration parameters
    #[schema(value_type = Object)]
    pub parameters: sqlx::types::Json<serde_json::Value>,
    pub valid_from: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create / replace configuration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateConfiguration {
    pub equipment_id: i32,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub parameters: serde_json::Value,
    pub valid_from: Option<NaiveDate>,
}
