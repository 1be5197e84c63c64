//! Customer management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::customer::{CreateCustomer, Customer},
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
}

impl CustomersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all customers
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        self.repository.customers.list().await
    }

    /// Get a customer by ID
    pub async fn get(&self, id: i32) -> AppResult<Customer> {
        self.repository.customers.get_by_id(id).await
    }

    /// Create a new customer
    pub async fn create(&self, data: CreateCustomer) -> AppResult<Customer> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.customers.create(&data).await
    }

    /// Replace a customer
    pub async fn update(&self, id: i32, data: CreateCustomer) -> AppResult<Customer> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.customers.update(id, &data).await
    }

    /// Delete a customer
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.customers.delete(id).await
    }
}
