//! Equipment configuration service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::configuration::{CreateConfiguration, EquipmentConfiguration},
    repository::Repository,
};

#[derive(Clone)]
pub struct ConfigurationsService {
    repository: Repository,
}

impl ConfigurationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List configurations, optionally for one equipment unit
    pub async fn list(&self, equipment_id: Option<i32>) -> AppResult<Vec<EquipmentConfiguration>> {
        self.repository.configurations.list(equipment_id).await
    }

    /// Get a configuration by ID
    pub async fn get(&self, id: i32) -> AppResult<EquipmentConfiguration> {
        self.repository.configurations.get_by_id(id).await
    }

    /// Create a new configuration
    pub async fn create(&self, data: CreateConfiguration) -> AppResult<EquipmentConfiguration> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.configurations.create(&data).await
    }

    /// Replace a configuration
    pub async fn update(
        &self,
        id: i32,
        data: CreateConfiguration,
    ) -> AppResult<EquipmentConfiguration> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.configurations.update(id, &data).await
    }

    /// Delete a configuration
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.configurations.delete(id).await
    }
}
