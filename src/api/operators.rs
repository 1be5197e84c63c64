//! Operator endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::operator::{CreateOperator, Operator},
    AppState,
};

/// List all operators
#[utoipa::path(
    get,
    path = "/operators",
    tag = "operators",
    responses(
        (status = 200, description = "All operators", body = Vec<Operator>)
    )
)]
pub async fn list_operators(State(state): State<AppState>) -> AppResult<Json<Vec<Operator>>> {
    let operators = state.services.operators.list().await?;
    Ok(Json(operators))
}

/// Get an operator by ID
#[utoipa::path(
    get,
    path = "/operators/{id}",
    tag = "operators",
    params(
        ("id" = i32, Path, description = "Operator ID")
    ),
    responses(
        (status = 200, description = "Operator found", body = Operator),
        (status = 404, description = "Operator not found")
    )
)]
pub async fn get_operator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Operator>> {
    let operator = state.services.operators.get(id).await?;
    Ok(Json(operator))
}

/// Create a new operator
#[utoipa::path(
    post,
    path = "/operators",
    tag = "operators",
    request_body = CreateOperator,
    responses(
        (status = 201, description = "Operator created", body = Operator),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_operator(
    State(state): State<AppState>,
    Json(data): Json<CreateOperator>,
) -> AppResult<(StatusCode, Json<Operator>)> {
    let operator = state.services.operators.create(data).await?;
    Ok((StatusCode::CREATED, Json(operator)))
}

/// Replace an operator
#[utoipa::path(
    put,
    path = "/operators/{id}",
    tag = "operators",
    params(
        ("id" = i32, Path, description = "Operator ID")
    ),
    request_body = CreateOperator,
    responses(
        (status = 200, description = "Operator updated", body = Operator),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Operator not found")
    )
)]
pub async fn update_operator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateOperator>,
) -> AppResult<Json<Operator>> {
    let operator = state.services.operators.update(id, data).await?;
    Ok(Json(operator))
}

/// Delete an operator
#[utoipa::path(
    delete,
    path = "/operators/{id}",
    tag = "operators",
    params(
        ("id" = i32, Path, description = "Operator ID")
    ),
    responses(
        (status = 204, description = "Operator deleted"),
        (status = 404, description = "Operator not found")
    )
)]
pub async fn delete_operator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.operators.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
