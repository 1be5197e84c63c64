//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{EquipmentCategory, EquipmentStatus};

/// One lifting equipment unit (crane, hoist, platform)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub customer_id: i32,
    pub name: String,
    pub category: EquipmentCategory,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub year_of_manufacture: Option<i16>,
    /// Rated capacity in kilograms
    pub capacity_kg: Option<i32>,
    pub status: EquipmentStatus,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create / replace equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    pub customer_id: i32,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub category: EquipmentCategory,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year_of_manufacture: Option<i16>,
    #[validate(range(min = 1))]
    pub capacity_kg: Option<i32>,
    #[serde(default)]
    pub status: EquipmentStatus,
    pub notes: Option<String>,
}

/// Equipment list filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct EquipmentQuery {
    pub customer_id: Option<i32>,
    pub category: Option<EquipmentCategory>,
    pub status: Option<EquipmentStatus>,
    /// Substring match on name, manufacturer or serial number
    pub search: Option<String>,
}
