//! Customer management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::customer::{CreateCustomer, Customer},
    AppState,
};

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.list().await?;
    Ok(Json(customers))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.get(id).await?;
    Ok(Json(customer))
}

/// Create a new customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(data): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = state.services.customers.create(data).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Replace a customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = CreateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateCustomer>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.update(id, data).await?;
    Ok(Json(customer))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
