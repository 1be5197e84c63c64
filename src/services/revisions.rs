//! Revision service
//!
//! This is where a revision submission is turned into what actually gets
//! stored: the payload is validated against the closed checklist vocabulary,
//! the location snapshot is resolved, and the defect set is derived from the
//! checklist responses. Clients never control which defects exist, only the
//! description and severity of defects that the checklists justify.

use validator::Validate;

use crate::{
    checklist,
    error::{AppError, AppResult},
    models::{
        defect::Defect,
        revision::{CreateRevision, Revision, RevisionQuery, REVISION_NUMBER_RE},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct RevisionsService {
    repository: Repository,
}

impl RevisionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List revisions with optional filters
    pub async fn list(&self, query: &RevisionQuery) -> AppResult<Vec<Revision>> {
        self.repository.revisions.list(query).await
    }

    /// Get a revision by ID, defects included
    pub async fn get(&self, id: i32) -> AppResult<Revision> {
        self.repository.revisions.get_by_id(id).await
    }

    /// Defect rows of one revision
    pub async fn defects(&self, id: i32) -> AppResult<Vec<Defect>> {
        self.repository.revisions.get_by_id(id).await.map(|r| r.defects)
    }

    /// Defect rows across revisions, optionally filtered
    pub async fn list_defects(&self, revision_id: Option<i32>) -> AppResult<Vec<Defect>> {
        self.repository.revisions.list_defects(revision_id).await
    }

    /// Create a revision; the defect set is derived server-side
    pub async fn create(&self, data: CreateRevision) -> AppResult<Revision> {
        let prepared = self.prepare(&data).await?;
        self.repository
            .revisions
            .create(
                &data,
                prepared.location.as_deref(),
                &prepared.checklists,
                &prepared.loads,
                &prepared.defects,
            )
            .await
    }

    /// Replace a revision; the defect set is re-derived from the new
    /// checklists, carrying over details from the stored defects for items
    /// the submission left unannotated
    pub async fn update(&self, id: i32, data: CreateRevision) -> AppResult<Revision> {
        let stored = self.repository.revisions.get_by_id(id).await?;

        let mut prepared = self.prepare(&data).await?;
        let stored_items: Vec<_> = stored.defects.iter().map(Defect::item).collect();
        for defect in &mut prepared.defects {
            let previous = stored_items
                .iter()
                .find(|d| d.section == defect.section && d.item_key == defect.item_key);
            let Some(previous) = previous else { continue };

            let submitted = data
                .defects
                .iter()
                .any(|d| d.section == defect.section && d.item_key == defect.item_key);
            if !submitted {
                // The submission did not mention this item at all; keep the
                // stored annotation
                defect.description = previous.description.clone();
                defect.severity = previous.severity;
            } else if defect.description.is_empty() {
                // Submitted entries win, but an empty description falls back
                // to the stored text without touching the submitted severity
                defect.description = previous.description.clone();
            }
        }

        self.repository
            .revisions
            .update(
                id,
                &data,
                prepared.location.as_deref(),
                &prepared.checklists,
                &prepared.loads,
                &prepared.defects,
            )
            .await
    }

    /// Delete a revision
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.revisions.delete(id).await
    }

    /// Validate a submission and compute everything derived from it
    async fn prepare(&self, data: &CreateRevision) -> AppResult<PreparedRevision> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !REVISION_NUMBER_RE.is_match(&data.revision_number) {
            return Err(AppError::Validation(format!(
                "revision_number '{}' does not match RE followed by six digits",
                data.revision_number
            )));
        }

        self.repository.equipment.get_by_id(data.equipment_id).await?;
        if let Some(configuration_id) = data.configuration_id {
            let configuration = self
                .repository
                .configurations
                .get_by_id(configuration_id)
                .await?;
            if configuration.equipment_id != data.equipment_id {
                return Err(AppError::BadRequest(format!(
                    "Configuration {} belongs to a different equipment unit",
                    configuration_id
                )));
            }
        }

        // A referenced location wins over free text; its rendered address is
        // snapshotted so the report stays stable if the location is edited
        let location = match data.location_id {
            Some(location_id) => {
                let location = self.repository.locations.get_by_id(location_id).await?;
                Some(location.display_text())
            }
            None => data.location.clone(),
        };

        let checklists = data.checklists();
        checklist::validate(&checklists).map_err(AppError::Checklist)?;

        let defects = checklist::derive_defects(&checklists, &data.defects);

        Ok(PreparedRevision {
            location,
            checklists,
            loads: data.load_test_loads(),
            defects,
        })
    }
}

struct PreparedRevision {
    location: Option<String>,
    checklists: checklist::Checklists,
    loads: indexmap::IndexMap<String, String>,
    defects: Vec<crate::models::defect::DefectItem>,
}
