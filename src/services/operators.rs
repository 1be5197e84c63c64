//! Operator service and equipment assignments

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::operator::{CreateOperator, Operator},
    repository::Repository,
};

#[derive(Clone)]
pub struct OperatorsService {
    repository: Repository,
}

impl OperatorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all operators
    pub async fn list(&self) -> AppResult<Vec<Operator>> {
        self.repository.operators.list().await
    }

    /// Get an operator by ID
    pub async fn get(&self, id: i32) -> AppResult<Operator> {
        self.repository.operators.get_by_id(id).await
    }

    /// Create a new operator
    pub async fn create(&self, data: CreateOperator) -> AppResult<Operator> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.operators.create(&data).await
    }

    /// Replace an operator
    pub async fn update(&self, id: i32, data: CreateOperator) -> AppResult<Operator> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.operators.update(id, &data).await
    }

    /// Delete an operator
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.operators.delete(id).await
    }

    /// Operators assigned to one equipment unit
    pub async fn list_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<Operator>> {
        self.repository.equipment.get_by_id(equipment_id).await?;
        self.repository.operators.list_for_equipment(equipment_id).await
    }

    /// Assign an operator to an equipment unit (idempotent)
    pub async fn assign(&self, equipment_id: i32, operator_id: i32) -> AppResult<()> {
        self.repository.equipment.get_by_id(equipment_id).await?;
        self.repository.operators.get_by_id(operator_id).await?;
        self.repository.operators.assign(equipment_id, operator_id).await
    }

    /// Remove an operator assignment
    pub async fn unassign(&self, equipment_id: i32, operator_id: i32) -> AppResult<()> {
        self.repository.operators.unassign(equipment_id, operator_id).await
    }
}
