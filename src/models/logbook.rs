//! Equipment logbook (deník zdvihacího zařízení) entries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::LogbookEntryType;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LogbookEntry {
    pub id: i32,
    pub equipment_id: i32,
    pub entry_date: NaiveDate,
    pub author: String,
    pub entry_type: LogbookEntryType,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Create logbook entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLogbookEntry {
    pub equipment_id: i32,
    pub entry_date: NaiveDate,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[serde(default)]
    pub entry_type: LogbookEntryType,
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}

/// Logbook list filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct LogbookQuery {
    pub equipment_id: Option<i32>,
    pub entry_type: Option<LogbookEntryType>,
}
