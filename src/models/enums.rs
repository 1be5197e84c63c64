//! Shared domain enums
//!
//! All enums are stored as their string representation in Postgres (TEXT
//! columns) and serialized with the exact values the original data set uses,
//! Czech diacritics included.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a defect / risk level of a recorded danger
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Medium
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{}", label)
    }
}

impl Severity {
    /// Czech label used in the printed report
    pub fn label_cs(&self) -> &'static str {
        match self {
            Severity::Low => "Nízká",
            Severity::Medium => "Střední",
            Severity::High => "Vysoká",
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Overall evaluation of a revision or inspection
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
pub enum Evaluation {
    #[serde(rename = "VYHOVUJE")]
    #[sqlx(rename = "VYHOVUJE")]
    Vyhovuje,
    #[serde(rename = "NEVYHOVUJE")]
    #[sqlx(rename = "NEVYHOVUJE")]
    Nevyhovuje,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Evaluation::Vyhovuje => "VYHOVUJE",
            Evaluation::Nevyhovuje => "NEVYHOVUJE",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ProcedureType
// ---------------------------------------------------------------------------

/// Why the inspection took place (routine, exceptional, post-repair)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
pub enum ProcedureType {
    #[serde(rename = "ZKOUŠKA")]
    #[sqlx(rename = "ZKOUŠKA")]
    Zkouska,
    #[serde(rename = "MIMOŘÁDNÁ_ZKOUŠKA")]
    #[sqlx(rename = "MIMOŘÁDNÁ_ZKOUŠKA")]
    MimoradnaZkouska,
    #[serde(rename = "ZKOUŠKA_PO_OPRAVĚ")]
    #[sqlx(rename = "ZKOUŠKA_PO_OPRAVĚ")]
    ZkouskaPoOprave,
}

impl ProcedureType {
    /// Czech label used in the printed report
    pub fn label_cs(&self) -> &'static str {
        match self {
            ProcedureType::Zkouska => "Zkouška",
            ProcedureType::MimoradnaZkouska => "Mimořádná zkouška",
            ProcedureType::ZkouskaPoOprave => "Zkouška po opravě",
        }
    }
}

// ---------------------------------------------------------------------------
// EquipmentCategory
// ---------------------------------------------------------------------------

/// Lifting equipment category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum EquipmentCategory {
    Crane,
    Hoist,
    Platform,
    Other,
}

impl Default for EquipmentCategory {
    fn default() -> Self {
        EquipmentCategory::Other
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Active,
    OutOfService,
    Decommissioned,
}

impl Default for EquipmentStatus {
    fn default() -> Self {
        EquipmentStatus::Active
    }
}

// ---------------------------------------------------------------------------
// LogbookEntryType
// ---------------------------------------------------------------------------

/// Classification of a logbook entry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LogbookEntryType {
    Operation,
    Maintenance,
    Incident,
    Note,
}

impl Default for LogbookEntryType {
    fn default() -> Self {
        LogbookEntryType::Note
    }
}
