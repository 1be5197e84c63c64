//! Location service and equipment assignment

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::location::{AssignLocation, CreateLocation, EquipmentLocation, Location},
    repository::Repository,
};

#[derive(Clone)]
pub struct LocationsService {
    repository: Repository,
}

impl LocationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all locations
    pub async fn list(&self) -> AppResult<Vec<Location>> {
        self.repository.locations.list().await
    }

    /// Get a location by ID
    pub async fn get(&self, id: i32) -> AppResult<Location> {
        self.repository.locations.get_by_id(id).await
    }

    /// Create a new location
    pub async fn create(&self, data: CreateLocation) -> AppResult<Location> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if let Some(customer_id) = data.customer_id {
            self.repository.customers.get_by_id(customer_id).await?;
        }
        self.repository.locations.create(&data).await
    }

    /// Replace a location
    pub async fn update(&self, id: i32, data: CreateLocation) -> AppResult<Location> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if let Some(customer_id) = data.customer_id {
            self.repository.customers.get_by_id(customer_id).await?;
        }
        self.repository.locations.update(id, &data).await
    }

    /// Delete a location
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.locations.delete(id).await
    }

    /// Assignment history for one equipment unit
    pub async fn assignment_history(&self, equipment_id: i32) -> AppResult<Vec<EquipmentLocation>> {
        self.repository.equipment.get_by_id(equipment_id).await?;
        self.repository.locations.assignment_history(equipment_id).await
    }

    /// Move equipment to a location; any open assignment is closed first
    pub async fn assign(
        &self,
        equipment_id: i32,
        data: AssignLocation,
    ) -> AppResult<EquipmentLocation> {
        self.repository.equipment.get_by_id(equipment_id).await?;
        self.repository.locations.get_by_id(data.location_id).await?;

        let assigned_from = data
            .assigned_from
            .unwrap_or_else(|| Utc::now().date_naive());
        self.repository
            .locations
            .assign(equipment_id, data.location_id, assigned_from)
            .await
    }
}
