//! Equipment logbook service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::logbook::{CreateLogbookEntry, LogbookEntry, LogbookQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct LogbookService {
    repository: Repository,
}

impl LogbookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List logbook entries with optional filters
    pub async fn list(&self, query: &LogbookQuery) -> AppResult<Vec<LogbookEntry>> {
        self.repository.logbook.list(query).await
    }

    /// Logbook of one equipment unit
    pub async fn list_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<LogbookEntry>> {
        self.repository.equipment.get_by_id(equipment_id).await?;
        let query = LogbookQuery {
            equipment_id: Some(equipment_id),
            entry_type: None,
        };
        self.repository.logbook.list(&query).await
    }

    /// Create a new logbook entry
    pub async fn create(&self, data: CreateLogbookEntry) -> AppResult<LogbookEntry> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.logbook.create(&data).await
    }

    /// Delete a logbook entry
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.logbook.delete(id).await
    }
}
