//! Defect (závada) model
//!
//! Defects have no independent lifecycle: they exist exactly for the
//! checklist entries of their revision that carry a failing response
//! (see `crate::checklist::derive_defects`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::Severity;

/// Persisted defect row, keyed by revision
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Defect {
    pub id: i32,
    pub revision_id: i32,
    pub section: String,
    pub item_key: String,
    pub item_name: String,
    pub description: String,
    pub severity: Severity,
    pub created_at: Option<DateTime<Utc>>,
}

impl Defect {
    pub fn item(&self) -> DefectItem {
        DefectItem {
            section: self.section.clone(),
            item_key: self.item_key.clone(),
            item_name: self.item_name.clone(),
            description: self.description.clone(),
            severity: self.severity,
        }
    }
}

/// Defect payload as embedded in revision submissions (no identity).
/// Only `description` and `severity` are honored by the server; section,
/// key and name are re-derived from the checklists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DefectItem {
    pub section: String,
    pub item_key: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
}
