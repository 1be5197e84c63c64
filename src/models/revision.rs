//! Revision (revize) record model
//!
//! One revision is one formal inspection event for one equipment unit per
//! NV 193/2022 Sb. The checklist mappings use a closed vocabulary defined in
//! `crate::checklist`; the defect list is derived from them on every save.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::defect::{Defect, DefectItem};
use super::enums::{Evaluation, ProcedureType, Severity};
use crate::checklist::Checklists;

/// `RE` followed by six digits, e.g. `RE000123`
pub static REVISION_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^RE[0-9]{6}$").expect("invalid revision number pattern"));

/// One measuring instrument used during the revision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeasuringInstrument {
    pub name: String,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub purpose: String,
}

/// Fixed six-field technical assessment of the unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechnicalAssessment {
    #[serde(default)]
    pub structure: String,
    #[serde(default)]
    pub safety: String,
    #[serde(default)]
    pub mechanisms: String,
    #[serde(default)]
    pub electrical: String,
    #[serde(default)]
    pub protection: String,
    #[serde(default)]
    pub documentation: String,
}

/// A recorded residual danger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Danger {
    pub description: String,
    #[serde(default)]
    pub risk_level: Severity,
}

/// Load-test checklist value as submitted by clients.
///
/// Historic payloads used either a plain response string or an object
/// carrying the applied load next to the result (under `result` or `pass`).
/// Both shapes are accepted on input and canonicalized to a response string
/// plus a separate per-key load map; only the canonical form is stored and
/// served.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LoadTestValue {
    Response(String),
    Detailed {
        #[serde(default)]
        load: Option<String>,
        #[serde(default)]
        result: Option<String>,
        #[serde(default)]
        pass: Option<String>,
    },
}

impl LoadTestValue {
    pub fn response(&self) -> String {
        match self {
            LoadTestValue::Response(s) => s.clone(),
            LoadTestValue::Detailed { result, pass, .. } => {
                result.clone().or_else(|| pass.clone()).unwrap_or_default()
            }
        }
    }

    pub fn load(&self) -> Option<String> {
        match self {
            LoadTestValue::Response(_) => None,
            LoadTestValue::Detailed { load, .. } => load.clone(),
        }
    }
}

/// Full revision record (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Revision {
    pub id: i32,
    pub equipment_id: i32,
    pub configuration_id: Option<i32>,
    /// Authoritative location reference when the revision site is a known
    /// project; `location` holds the rendered snapshot either way
    pub location_id: Option<i32>,
    pub location: Option<String>,
    pub revision_number: String,
    pub technician_name: String,
    pub certification_number: Option<String>,
    pub procedure_type: ProcedureType,
    pub revision_date: NaiveDate,
    pub test_start_date: Option<NaiveDate>,
    pub test_end_date: Option<NaiveDate>,
    pub report_date: Option<NaiveDate>,
    pub handover_date: Option<NaiveDate>,
    pub next_revision_date: Option<NaiveDate>,
    pub next_inspection_date: Option<NaiveDate>,
    #[schema(value_type = Object)]
    pub documentation_check: Json<IndexMap<String, String>>,
    #[schema(value_type = Object)]
    pub equipment_check: Json<IndexMap<String, String>>,
    #[schema(value_type = Object)]
    pub functional_test: Json<IndexMap<String, String>>,
    #[schema(value_type = Object)]
    pub load_test: Json<IndexMap<String, String>>,
    /// Applied load per load-test item key, when recorded
    #[schema(value_type = Object)]
    pub load_test_loads: Json<IndexMap<String, String>>,
    #[schema(value_type = Vec<MeasuringInstrument>)]
    pub measuring_instruments: Json<Vec<MeasuringInstrument>>,
    #[schema(value_type = Object)]
    pub technical_assessment: Json<TechnicalAssessment>,
    #[schema(value_type = Vec<Danger>)]
    pub dangers: Json<Vec<Danger>>,
    pub previous_controls_ok: Option<bool>,
    pub technical_trend: Option<String>,
    pub evaluation: Evaluation,
    pub conclusion: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Derived defect rows (loaded separately)
    #[sqlx(skip)]
    #[serde(default)]
    pub defects: Vec<Defect>,
}

impl Revision {
    pub fn checklists(&self) -> Checklists {
        Checklists {
            documentation_check: self.documentation_check.0.clone(),
            equipment_check: self.equipment_check.0.clone(),
            functional_test: self.functional_test.0.clone(),
            load_test: self.load_test.0.clone(),
        }
    }
}

/// Create / replace revision request.
///
/// PUT uses the same payload: a revision save is always a full submission
/// and the defect set is recomputed from the checklists either way.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRevision {
    pub equipment_id: i32,
    pub configuration_id: Option<i32>,
    pub location_id: Option<i32>,
    pub location: Option<String>,
    pub revision_number: String,
    #[validate(length(min = 1, message = "technician_name must not be empty"))]
    pub technician_name: String,
    pub certification_number: Option<String>,
    pub procedure_type: ProcedureType,
    pub revision_date: NaiveDate,
    pub test_start_date: Option<NaiveDate>,
    pub test_end_date: Option<NaiveDate>,
    pub report_date: Option<NaiveDate>,
    pub handover_date: Option<NaiveDate>,
    pub next_revision_date: Option<NaiveDate>,
    pub next_inspection_date: Option<NaiveDate>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub documentation_check: IndexMap<String, String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub equipment_check: IndexMap<String, String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub functional_test: IndexMap<String, String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub load_test: IndexMap<String, LoadTestValue>,
    #[serde(default)]
    pub measuring_instruments: Vec<MeasuringInstrument>,
    #[serde(default)]
    pub technical_assessment: TechnicalAssessment,
    #[serde(default)]
    pub dangers: Vec<Danger>,
    /// Client-supplied defects; only description/severity of entries whose
    /// `(section, item_key)` is actually failing are kept
    #[serde(default)]
    pub defects: Vec<DefectItem>,
    pub previous_controls_ok: Option<bool>,
    pub technical_trend: Option<String>,
    pub evaluation: Evaluation,
    pub conclusion: Option<String>,
}

impl CreateRevision {
    /// Canonical checklist mappings (load-test values reduced to response
    /// strings)
    pub fn checklists(&self) -> Checklists {
        Checklists {
            documentation_check: self.documentation_check.clone(),
            equipment_check: self.equipment_check.clone(),
            functional_test: self.functional_test.clone(),
            load_test: self
                .load_test
                .iter()
                .map(|(k, v)| (k.clone(), v.response()))
                .collect(),
        }
    }

    /// Applied loads extracted from legacy object-shaped load-test values
    pub fn load_test_loads(&self) -> IndexMap<String, String> {
        self.load_test
            .iter()
            .filter_map(|(k, v)| v.load().map(|l| (k.clone(), l)))
            .collect()
    }
}

/// Revision list filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct RevisionQuery {
    pub equipment_id: Option<i32>,
    pub evaluation: Option<Evaluation>,
    /// Only revisions dated on or after this day
    pub from: Option<NaiveDate>,
    /// Only revisions dated on or before this day
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_number_pattern() {
        assert!(REVISION_NUMBER_RE.is_match("RE000123"));
        assert!(REVISION_NUMBER_RE.is_match("RE999999"));
        assert!(!REVISION_NUMBER_RE.is_match("RE00123"));
        assert!(!REVISION_NUMBER_RE.is_match("RE0001234"));
        assert!(!REVISION_NUMBER_RE.is_match("RX000123"));
        assert!(!REVISION_NUMBER_RE.is_match("re000123"));
        assert!(!REVISION_NUMBER_RE.is_match(" RE000123"));
    }

    #[test]
    fn test_load_test_value_plain_string() {
        let v: LoadTestValue = serde_json::from_str("\"Nevyhovuje\"").unwrap();
        assert_eq!(v.response(), "Nevyhovuje");
        assert_eq!(v.load(), None);
    }

    #[test]
    fn test_load_test_value_object_with_result() {
        let v: LoadTestValue =
            serde_json::from_str(r#"{"load": "3200 kg", "result": "Vyhovuje"}"#).unwrap();
        assert_eq!(v.response(), "Vyhovuje");
        assert_eq!(v.load(), Some("3200 kg".to_string()));
    }

    #[test]
    fn test_load_test_value_object_with_pass() {
        let v: LoadTestValue =
            serde_json::from_str(r#"{"load": "550 kg", "pass": "Nevyhovuje"}"#).unwrap();
        assert_eq!(v.response(), "Nevyhovuje");
        assert_eq!(v.load(), Some("550 kg".to_string()));
    }
}
