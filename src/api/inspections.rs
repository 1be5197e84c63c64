//! Inspection endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::inspection::{CreateInspection, Inspection, InspectionQuery},
    AppState,
};

/// List inspections with optional filters
#[utoipa::path(
    get,
    path = "/inspections",
    tag = "inspections",
    params(InspectionQuery),
    responses(
        (status = 200, description = "Matching inspections", body = Vec<Inspection>)
    )
)]
pub async fn list_inspections(
    State(state): State<AppState>,
    Query(query): Query<InspectionQuery>,
) -> AppResult<Json<Vec<Inspection>>> {
    let inspections = state.services.inspections.list(&query).await?;
    Ok(Json(inspections))
}

/// Get an inspection by ID
#[utoipa::path(
    get,
    path = "/inspections/{id}",
    tag = "inspections",
    params(
        ("id" = i32, Path, description = "Inspection ID")
    ),
    responses(
        (status = 200, description = "Inspection found", body = Inspection),
        (status = 404, description = "Inspection not found")
    )
)]
pub async fn get_inspection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Inspection>> {
    let inspection = state.services.inspections.get(id).await?;
    Ok(Json(inspection))
}

/// Create a new inspection
#[utoipa::path(
    post,
    path = "/inspections",
    tag = "inspections",
    request_body = CreateInspection,
    responses(
        (status = 201, description = "Inspection created", body = Inspection),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn create_inspection(
    State(state): State<AppState>,
    Json(data): Json<CreateInspection>,
) -> AppResult<(StatusCode, Json<Inspection>)> {
    let inspection = state.services.inspections.create(data).await?;
    Ok((StatusCode::CREATED, Json(inspection)))
}

/// Replace an inspection
#[utoipa::path(
    put,
    path = "/inspections/{id}",
    tag = "inspections",
    params(
        ("id" = i32, Path, description = "Inspection ID")
    ),
    request_body = CreateInspection,
    responses(
        (status = 200, description = "Inspection updated", body = Inspection),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Inspection or equipment not found")
    )
)]
pub async fn update_inspection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateInspection>,
) -> AppResult<Json<Inspection>> {
    let inspection = state.services.inspections.update(id, data).await?;
    Ok(Json(inspection))
}

/// Delete an inspection
#[utoipa::path(
    delete,
    path = "/inspections/{id}",
    tag = "inspections",
    params(
        ("id" = i32, Path, description = "Inspection ID")
    ),
    responses(
        (status = 204, description = "Inspection deleted"),
        (status = 404, description = "Inspection not found")
    )
)]
pub async fn delete_inspection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.inspections.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
