//! Customers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::customer::{CreateCustomer, Customer},
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all customers
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY company_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get customer by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(ErrorCode::NoSuchCustomer, format!("Customer {} not found", id))
            })
    }

    /// Create customer
    pub async fn create(&self, data: &CreateCustomer) -> AppResult<Customer> {
        let row = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (company_name, ico, dic, street, city, postal_code,
                                   contact_person, email, phone, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&data.company_name)
        .bind(&data.ico)
        .bind(&data.dic)
        .bind(&data.street)
        .bind(&data.city)
        .bind(&data.postal_code)
        .bind(&data.contact_person)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace customer
    pub async fn update(&self, id: i32, data: &CreateCustomer) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET company_name = $2, ico = $3, dic = $4, street = $5, city = $6,
                postal_code = $7, contact_person = $8, email = $9, phone = $10,
                notes = $11, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.company_name)
        .bind(&data.ico)
        .bind(&data.dic)
        .bind(&data.street)
        .bind(&data.city)
        .bind(&data.postal_code)
        .bind(&data.contact_person)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(ErrorCode::NoSuchCustomer, format!("Customer {} not found", id))
        })
    }

    /// Delete customer
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                ErrorCode::NoSuchCustomer,
                format!("Customer {} not found", id),
            ));
        }
        Ok(())
    }

    /// Count customers (for stats)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
