//! Inspection service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::inspection::{CreateInspection, Inspection, InspectionQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct InspectionsService {
    repository: Repository,
}

impl InspectionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List inspections with optional filters
    pub async fn list(&self, query: &InspectionQuery) -> AppResult<Vec<Inspection>> {
        self.repository.inspections.list(query).await
    }

    /// Get an inspection by ID
    pub async fn get(&self, id: i32) -> AppResult<Inspection> {
        self.repository.inspections.get_by_id(id).await
    }

    /// Create a new inspection
    pub async fn create(&self, data: CreateInspection) -> AppResult<Inspection> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.inspections.create(&data).await
    }

    /// Replace an inspection
    pub async fn update(&self, id: i32, data: CreateInspection) -> AppResult<Inspection> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.inspections.update(id, &data).await
    }

    /// Delete an inspection
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.inspections.delete(id).await
    }
}
