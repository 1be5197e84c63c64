//! Revision checklist vocabulary and defect derivation
//!
//! A revision record carries four checklist sections, each a closed mapping
//! from a fixed item key to an enumerated Czech response. Defects are not an
//! independent entity: the set of defects on a revision is a pure function of
//! the checklist responses, recomputed wholesale on every save.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::defect::DefectItem;
use crate::models::enums::Severity;

/// One of the four fixed inspection categories of a revision record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistSection {
    DocumentationCheck,
    EquipmentCheck,
    FunctionalTest,
    LoadTest,
}

impl ChecklistSection {
    pub const ALL: [ChecklistSection; 4] = [
        ChecklistSection::DocumentationCheck,
        ChecklistSection::EquipmentCheck,
        ChecklistSection::FunctionalTest,
        ChecklistSection::LoadTest,
    ];

    /// Stable identifier used in defect rows and JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistSection::DocumentationCheck => "documentation_check",
            ChecklistSection::EquipmentCheck => "equipment_check",
            ChecklistSection::FunctionalTest => "functional_test",
            ChecklistSection::LoadTest => "load_test",
        }
    }

    /// Czech section heading used in the printed report
    pub fn title(&self) -> &'static str {
        match self {
            ChecklistSection::DocumentationCheck => "Kontrola dokumentace",
            ChecklistSection::EquipmentCheck => "Kontrola zařízení",
            ChecklistSection::FunctionalTest => "Funkční zkouška",
            ChecklistSection::LoadTest => "Zkouška se zatížením",
        }
    }

    /// Ordered `(item key, Czech label)` vocabulary for this section
    pub fn items(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ChecklistSection::DocumentationCheck => DOCUMENTATION_ITEMS,
            ChecklistSection::EquipmentCheck => EQUIPMENT_ITEMS,
            ChecklistSection::FunctionalTest => FUNCTIONAL_ITEMS,
            ChecklistSection::LoadTest => LOAD_TEST_ITEMS,
        }
    }

    /// Allowed response values for this section
    pub fn responses(&self) -> &'static [&'static str] {
        match self {
            ChecklistSection::DocumentationCheck => {
                &["Předložen", "Nepředložen", "Není součástí"]
            }
            _ => &["Vyhovuje", "Nevyhovuje", "Není součástí"],
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        ChecklistSection::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for ChecklistSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const DOCUMENTATION_ITEMS: &[(&str, &str)] = &[
    ("pruvodka_jerabu", "Průvodní dokumentace jeřábu"),
    ("navod_k_obsluze", "Návod k obsluze a údržbě"),
    ("denik_zdvihaciho_zarizeni", "Deník zdvihacího zařízení"),
    ("predchozi_revize", "Zpráva o předchozí revizi"),
    ("elektro_revize", "Revize elektrického zařízení"),
    ("prohlaseni_o_shode", "ES/EU prohlášení o shodě"),
    ("system_bezpecne_prace", "Systém bezpečné práce"),
];

const EQUIPMENT_ITEMS: &[(&str, &str)] = &[
    ("ocelova_konstrukce", "Ocelová konstrukce"),
    ("pojezdova_draha", "Pojezdová dráha"),
    ("lanovy_system", "Lanový systém"),
    ("hakova_sestava", "Háková sestava"),
    ("brzdy", "Brzdy zdvihu a pojezdu"),
    ("elektroinstalace", "Elektroinstalace a ovládání"),
    ("znaceni_nosnosti", "Značení nosnosti a výrobní štítek"),
];

const FUNCTIONAL_ITEMS: &[(&str, &str)] = &[
    ("zdvih_spousteni", "Zdvih a spouštění"),
    ("pojezd_kocky", "Pojezd kočky"),
    ("pojezd_jerabu", "Pojezd jeřábu"),
    ("koncove_vypinace", "Koncové vypínače"),
    ("nouzove_zastaveni", "Nouzové zastavení"),
    ("prislusenstvi", "Vázací a uchopovací prostředky"),
];

const LOAD_TEST_ITEMS: &[(&str, &str)] = &[
    ("staticka_zkouska", "Statická zkouška (1,25x nosnost)"),
    ("dynamicka_zkouska", "Dynamická zkouška (1,1x nosnost)"),
    ("zkouska_stability", "Zkouška stability"),
];

/// The four checklist mappings of a revision, in section order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Checklists {
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
    pub load_test: IndexMap<String, String>,
}

impl Checklists {
    pub fn section(&self, section: ChecklistSection) -> &IndexMap<String, String> {
        match section {
            ChecklistSection::DocumentationCheck => &self.documentation_check,
            ChecklistSection::EquipmentCheck => &self.equipment_check,
            ChecklistSection::FunctionalTest => &self.functional_test,
            ChecklistSection::LoadTest => &self.load_test,
        }
    }

    pub fn section_mut(&mut self, section: ChecklistSection) -> &mut IndexMap<String, String> {
        match section {
            ChecklistSection::DocumentationCheck => &mut self.documentation_check,
            ChecklistSection::EquipmentCheck => &mut self.equipment_check,
            ChecklistSection::FunctionalTest => &mut self.functional_test,
            ChecklistSection::LoadTest => &mut self.load_test,
        }
    }

    /// Record a response for one checklist item
    pub fn set_response(&mut self, section: ChecklistSection, key: &str, value: &str) {
        self.section_mut(section)
            .insert(key.to_string(), value.to_string());
    }
}

/// Is `value` a failing response ("Nevyhovuje" for test sections,
/// "Nepředložen" for documentation)?
pub fn is_failing(value: &str) -> bool {
    matches!(value.trim(), "Nevyhovuje" | "Nepředložen")
}

/// Fixed Czech label for a known item key, humanized fallback otherwise
/// (`foo_bar_baz` → "Foo Bar Baz").
pub fn item_label(section: ChecklistSection, key: &str) -> String {
    section
        .items()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| humanize_key(key))
}

/// Underscores to spaces, each word capitalized
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the defect list from checklist responses.
///
/// The result contains exactly one defect per checklist entry whose response
/// is failing, in section-then-entry order. Description and severity are
/// carried over from a matching `(section, item_key)` entry of `existing`;
/// a newly failing item gets `severity = Medium` and an empty description.
pub fn derive_defects(checklists: &Checklists, existing: &[DefectItem]) -> Vec<DefectItem> {
    let mut defects = Vec::new();

    for section in ChecklistSection::ALL {
        for (key, value) in checklists.section(section) {
            if !is_failing(value) {
                continue;
            }
            let carried = existing
                .iter()
                .find(|d| d.section == section.as_str() && d.item_key == *key);
            defects.push(DefectItem {
                section: section.as_str().to_string(),
                item_key: key.clone(),
                item_name: item_label(section, key),
                description: carried.map(|d| d.description.clone()).unwrap_or_default(),
                severity: carried.map(|d| d.severity).unwrap_or(Severity::Medium),
            });
        }
    }

    defects
}

/// Validate that every checklist entry uses a known key and an allowed
/// response for its section. Returns the first violation as a message.
pub fn validate(checklists: &Checklists) -> Result<(), String> {
    for section in ChecklistSection::ALL {
        for (key, value) in checklists.section(section) {
            if !section.items().iter().any(|(k, _)| *k == key) {
                return Err(format!(
                    "unknown item '{}' in section {}",
                    key,
                    section.as_str()
                ));
            }
            if !section.responses().contains(&value.trim()) {
                return Err(format!(
                    "invalid response '{}' for item '{}' in section {}",
                    value,
                    key,
                    section.as_str()
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_load_test() -> Checklists {
        let mut c = Checklists::default();
        c.set_response(ChecklistSection::LoadTest, "dynamicka_zkouska", "Nevyhovuje");
        c
    }

    #[test]
    fn test_failing_item_yields_single_defect() {
        let defects = derive_defects(&failing_load_test(), &[]);
        assert_eq!(defects.len(), 1);
        let d = &defects[0];
        assert_eq!(d.section, "load_test");
        assert_eq!(d.item_key, "dynamicka_zkouska");
        assert_eq!(d.item_name, "Dynamická zkouška (1,1x nosnost)");
        assert_eq!(d.description, "");
        assert_eq!(d.severity, Severity::Medium);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let checklists = failing_load_test();
        let first = derive_defects(&checklists, &[]);
        let second = derive_defects(&checklists, &first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_back_removes_defect() {
        let mut checklists = failing_load_test();
        let defects = derive_defects(&checklists, &[]);
        assert_eq!(defects.len(), 1);

        checklists.set_response(ChecklistSection::LoadTest, "dynamicka_zkouska", "Vyhovuje");
        let defects = derive_defects(&checklists, &defects);
        assert!(defects.is_empty());
    }

    #[test]
    fn test_pairs_match_failing_entries_exactly() {
        let mut c = Checklists::default();
        c.set_response(ChecklistSection::DocumentationCheck, "pruvodka_jerabu", "Nepředložen");
        c.set_response(ChecklistSection::DocumentationCheck, "navod_k_obsluze", "Předložen");
        c.set_response(ChecklistSection::EquipmentCheck, "brzdy", "Nevyhovuje");
        c.set_response(ChecklistSection::FunctionalTest, "pojezd_kocky", "Není součástí");

        let defects = derive_defects(&c, &[]);
        let pairs: Vec<(&str, &str)> = defects
            .iter()
            .map(|d| (d.section.as_str(), d.item_key.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("documentation_check", "pruvodka_jerabu"),
                ("equipment_check", "brzdy"),
            ]
        );
    }

    #[test]
    fn test_description_and_severity_carried_over() {
        let checklists = failing_load_test();
        let mut defects = derive_defects(&checklists, &[]);
        defects[0].description = "Prokluz brzdy při dynamické zkoušce".to_string();
        defects[0].severity = Severity::High;

        let rederived = derive_defects(&checklists, &defects);
        assert_eq!(rederived[0].description, "Prokluz brzdy při dynamické zkoušce");
        assert_eq!(rederived[0].severity, Severity::High);
    }

    #[test]
    fn test_known_label() {
        assert_eq!(
            item_label(ChecklistSection::DocumentationCheck, "pruvodka_jerabu"),
            "Průvodní dokumentace jeřábu"
        );
    }

    #[test]
    fn test_unknown_label_is_humanized() {
        assert_eq!(
            item_label(ChecklistSection::EquipmentCheck, "foo_bar_baz"),
            "Foo Bar Baz"
        );
        assert_eq!(humanize_key("foo_bar_baz"), "Foo Bar Baz");
    }

    #[test]
    fn test_validate_rejects_unknown_key() {
        let mut c = Checklists::default();
        c.set_response(ChecklistSection::LoadTest, "neexistuje", "Vyhovuje");
        assert!(validate(&c).is_err());
    }

    #[test]
    fn test_validate_rejects_response_from_other_vocabulary() {
        let mut c = Checklists::default();
        // "Předložen" belongs to the documentation vocabulary only
        c.set_response(ChecklistSection::LoadTest, "staticka_zkouska", "Předložen");
        assert!(validate(&c).is_err());

        let mut c = Checklists::default();
        c.set_response(ChecklistSection::DocumentationCheck, "elektro_revize", "Nepředložen");
        assert!(validate(&c).is_ok());
    }
}
