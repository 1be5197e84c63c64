//! Revision report presentation model
//!
//! Flattens a revision with its equipment, customer and configuration into
//! the shape the HTML template consumes: per checklist section an ordered
//! list of `{label, value, value_class}` rows, plus header and summary data.

use chrono::NaiveDate;
use serde::Serialize;

use crate::checklist::{self, ChecklistSection};
use crate::models::{
    configuration::EquipmentConfiguration, customer::Customer, equipment::Equipment,
    revision::Revision,
};

/// One checklist row of the printed report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
    /// CSS class: "success", "error" or ""
    pub value_class: &'static str,
    /// Applied load (load-test rows only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub title: &'static str,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportInstrument {
    pub name: String,
    pub range: String,
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDanger {
    pub description: String,
    pub risk_level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDefect {
    pub section: &'static str,
    pub item_name: String,
    pub description: String,
    pub severity: &'static str,
}

/// Labeled free-text row (technical assessment)
#[derive(Debug, Clone, Serialize)]
pub struct ReportAssessmentRow {
    pub label: &'static str,
    pub text: String,
}

/// Complete template context for one revision report
#[derive(Debug, Clone, Serialize)]
pub struct ReportModel {
    pub revision_number: String,
    pub procedure_type: &'static str,
    pub evaluation: String,
    pub evaluation_class: &'static str,
    pub conclusion: String,
    pub technician_name: String,
    pub certification_number: String,
    pub location: String,
    /// "Ano" / "Ne", empty when not recorded
    pub previous_controls_ok: String,
    pub technical_trend: String,
    pub revision_date: String,
    pub test_start_date: String,
    pub test_end_date: String,
    pub report_date: String,
    pub handover_date: String,
    pub next_revision_date: String,
    pub next_inspection_date: String,
    pub equipment_name: String,
    pub equipment_category: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub year_of_manufacture: String,
    pub capacity_kg: String,
    pub configuration_name: String,
    pub customer_name: String,
    pub customer_ico: String,
    pub customer_address: String,
    pub sections: Vec<ReportSection>,
    pub instruments: Vec<ReportInstrument>,
    pub assessment: Vec<ReportAssessmentRow>,
    pub dangers: Vec<ReportDanger>,
    pub defects: Vec<ReportDefect>,
}

/// Derive the CSS class of a response value.
///
/// The negative forms are checked first: "nevyhovuje" contains "vyhovuje"
/// and "nepředložen" contains "předložen", so the order is load-bearing.
pub fn value_class(value: &str) -> &'static str {
    let v = value.to_lowercase();
    if v.contains("nevyhovuje") || v.contains("nepředložen") {
        "error"
    } else if v.contains("vyhovuje") || v.contains("předložen") {
        "success"
    } else {
        ""
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%-d. %-m. %Y").to_string())
        .unwrap_or_default()
}

fn section_rows(revision: &Revision, section: ChecklistSection) -> Vec<ReportRow> {
    let checklists = revision.checklists();
    checklists
        .section(section)
        .iter()
        .map(|(key, value)| ReportRow {
            label: checklist::item_label(section, key),
            value: value.clone(),
            value_class: value_class(value),
            load: if section == ChecklistSection::LoadTest {
                revision.load_test_loads.0.get(key).cloned()
            } else {
                None
            },
        })
        .collect()
}

/// Build the template context for one revision
pub fn build_report(
    revision: &Revision,
    equipment: &Equipment,
    customer: &Customer,
    configuration: Option<&EquipmentConfiguration>,
) -> ReportModel {
    let sections = ChecklistSection::ALL
        .iter()
        .map(|&section| ReportSection {
            title: section.title(),
            rows: section_rows(revision, section),
        })
        .collect();

    let assessment = vec![
        ("Ocelová konstrukce", &revision.technical_assessment.0.structure),
        ("Bezpečnostní zařízení", &revision.technical_assessment.0.safety),
        ("Mechanismy", &revision.technical_assessment.0.mechanisms),
        ("Elektrická zařízení", &revision.technical_assessment.0.electrical),
        ("Ochranná opatření", &revision.technical_assessment.0.protection),
        ("Dokumentace", &revision.technical_assessment.0.documentation),
    ]
    .into_iter()
    .map(|(label, text)| ReportAssessmentRow {
        label,
        text: text.clone(),
    })
    .collect();

    let customer_address = [&customer.street, &customer.postal_code, &customer.city]
        .into_iter()
        .filter_map(|p| p.clone())
        .collect::<Vec<_>>()
        .join(", ");

    ReportModel {
        revision_number: revision.revision_number.clone(),
        procedure_type: revision.procedure_type.label_cs(),
        evaluation: revision.evaluation.to_string(),
        evaluation_class: value_class(&revision.evaluation.to_string()),
        conclusion: revision.conclusion.clone().unwrap_or_default(),
        technician_name: revision.technician_name.clone(),
        certification_number: revision.certification_number.clone().unwrap_or_default(),
        location: revision.location.clone().unwrap_or_default(),
        previous_controls_ok: match revision.previous_controls_ok {
            Some(true) => "Ano".to_string(),
            Some(false) => "Ne".to_string(),
            None => String::new(),
        },
        technical_trend: revision.technical_trend.clone().unwrap_or_default(),
        revision_date: format_date(Some(revision.revision_date)),
        test_start_date: format_date(revision.test_start_date),
        test_end_date: format_date(revision.test_end_date),
        report_date: format_date(revision.report_date),
        handover_date: format_date(revision.handover_date),
        next_revision_date: format_date(revision.next_revision_date),
        next_inspection_date: format_date(revision.next_inspection_date),
        equipment_name: equipment.name.clone(),
        equipment_category: format!("{:?}", equipment.category).to_lowercase(),
        manufacturer: equipment.manufacturer.clone().unwrap_or_default(),
        model: equipment.model.clone().unwrap_or_default(),
        serial_number: equipment.serial_number.clone().unwrap_or_default(),
        year_of_manufacture: equipment
            .year_of_manufacture
            .map(|y| y.to_string())
            .unwrap_or_default(),
        capacity_kg: equipment
            .capacity_kg
            .map(|c| format!("{} kg", c))
            .unwrap_or_default(),
        configuration_name: configuration.map(|c| c.name.clone()).unwrap_or_default(),
        customer_name: customer.company_name.clone(),
        customer_ico: customer.ico.clone().unwrap_or_default(),
        customer_address,
        sections,
        instruments: revision
            .measuring_instruments
            .0
            .iter()
            .map(|i| ReportInstrument {
                name: i.name.clone(),
                range: i.range.clone(),
                purpose: i.purpose.clone(),
            })
            .collect(),
        assessment,
        dangers: revision
            .dangers
            .0
            .iter()
            .map(|d| ReportDanger {
                description: d.description.clone(),
                risk_level: d.risk_level.label_cs(),
            })
            .collect(),
        defects: revision
            .defects
            .iter()
            .map(|d| ReportDefect {
                section: ChecklistSection::from_str(&d.section)
                    .map(|s| s.title())
                    .unwrap_or(""),
                item_name: d.item_name.clone(),
                description: d.description.clone(),
                severity: d.severity.label_cs(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_class_success() {
        assert_eq!(value_class("Vyhovuje"), "success");
        assert_eq!(value_class("Předložen"), "success");
        assert_eq!(value_class("vyhovuje"), "success");
    }

    #[test]
    fn test_value_class_error() {
        assert_eq!(value_class("Nevyhovuje"), "error");
        assert_eq!(value_class("Nepředložen"), "error");
    }

    #[test]
    fn test_value_class_neutral() {
        assert_eq!(value_class("Není součástí"), "");
        assert_eq!(value_class(""), "");
    }

    #[test]
    fn test_negative_substring_wins_over_positive() {
        // "nevyhovuje" contains "vyhovuje"; the negative check runs first
        assert_eq!(value_class("Nevyhovuje, ale dříve Vyhovuje"), "error");
        assert_eq!(value_class("Nepředložen (dříve předložen)"), "error");
    }

    fn sample_revision() -> Revision {
        Revision {
            id: 1,
            equipment_id: 1,
            configuration_id: None,
            location_id: None,
            location: None,
            revision_number: "RE000001".to_string(),
            technician_name: "Jan Novák".to_string(),
            certification_number: None,
            procedure_type: crate::models::ProcedureType::Zkouska,
            revision_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            test_start_date: None,
            test_end_date: None,
            report_date: None,
            handover_date: None,
            next_revision_date: None,
            next_inspection_date: None,
            documentation_check: sqlx::types::Json(Default::default()),
            equipment_check: sqlx::types::Json(Default::default()),
            functional_test: sqlx::types::Json(Default::default()),
            load_test: sqlx::types::Json(Default::default()),
            load_test_loads: sqlx::types::Json(Default::default()),
            measuring_instruments: sqlx::types::Json(Vec::new()),
            technical_assessment: sqlx::types::Json(Default::default()),
            dangers: sqlx::types::Json(Vec::new()),
            previous_controls_ok: None,
            technical_trend: None,
            evaluation: crate::models::Evaluation::Vyhovuje,
            conclusion: None,
            created_at: None,
            updated_at: None,
            defects: Vec::new(),
        }
    }

    fn sample_equipment() -> Equipment {
        Equipment {
            id: 1,
            customer_id: 1,
            name: "Mostový jeřáb".to_string(),
            category: crate::models::enums::EquipmentCategory::Crane,
            manufacturer: None,
            model: None,
            serial_number: None,
            year_of_manufacture: None,
            capacity_kg: Some(5000),
            status: crate::models::enums::EquipmentStatus::Active,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample_customer() -> Customer {
        Customer {
            id: 1,
            company_name: "Stavby a.s.".to_string(),
            ico: None,
            dic: None,
            street: None,
            city: None,
            postal_code: None,
            contact_person: None,
            email: None,
            phone: None,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_previous_controls_rendered_as_text() {
        let mut revision = sample_revision();
        let equipment = sample_equipment();
        let customer = sample_customer();

        let report = build_report(&revision, &equipment, &customer, None);
        assert_eq!(report.previous_controls_ok, "");

        revision.previous_controls_ok = Some(true);
        let report = build_report(&revision, &equipment, &customer, None);
        assert_eq!(report.previous_controls_ok, "Ano");

        revision.previous_controls_ok = Some(false);
        let report = build_report(&revision, &equipment, &customer, None);
        assert_eq!(report.previous_controls_ok, "Ne");
    }
}
