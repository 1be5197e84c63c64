//! Equipment management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, EquipmentQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List equipment with optional filters
    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list(query).await
    }

    /// Get an equipment unit by ID
    pub async fn get(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Create a new equipment unit
    pub async fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        // Owning customer must exist
        self.repository.customers.get_by_id(data.customer_id).await?;
        self.repository.equipment.create(&data).await
    }

    /// Replace an equipment unit
    pub async fn update(&self, id: i32, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.customers.get_by_id(data.customer_id).await?;
        self.repository.equipment.update(id, &data).await
    }

    /// Delete an equipment unit
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }
}
