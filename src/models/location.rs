//! Location (project site) model and equipment assignment history

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A project site / location where equipment is deployed
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub customer_id: Option<i32>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Location {
    /// Single-line address used when a revision snapshots its location text
    pub fn display_text(&self) -> String {
        let mut parts = vec![self.name.clone()];
        if let Some(ref street) = self.street {
            parts.push(street.clone());
        }
        match (&self.postal_code, &self.city) {
            (Some(zip), Some(city)) => parts.push(format!("{} {}", zip, city)),
            (None, Some(city)) => parts.push(city.clone()),
            _ => {}
        }
        parts.join(", ")
    }
}

/// Create / replace location request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocation {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub customer_id: Option<i32>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
}

/// One row of the equipment↔location assignment history.
/// `assigned_to = NULL` marks the current assignment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentLocation {
    pub id: i32,
    pub equipment_id: i32,
    pub location_id: i32,
    pub assigned_from: NaiveDate,
    pub assigned_to: Option<NaiveDate>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

/// Assign equipment to a location
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignLocation {
    pub location_id: i32,
    /// Defaults to today when omitted
    pub assigned_from: Option<NaiveDate>,
}
