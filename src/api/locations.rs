//! Location (project site) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::location::{CreateLocation, Location},
    AppState,
};

/// List all locations
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    responses(
        (status = 200, description = "All locations", body = Vec<Location>)
    )
)]
pub async fn list_locations(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let locations = state.services.locations.list().await?;
    Ok(Json(locations))
}

/// Get a location by ID
#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = "locations",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location found", body = Location),
        (status = 404, description = "Location not found")
    )
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Location>> {
    let location = state.services.locations.get(id).await?;
    Ok(Json(location))
}

/// Create a new location
#[utoipa::path(
    post,
    path = "/locations",
    tag = "locations",
    request_body = CreateLocation,
    responses(
        (status = 201, description = "Location created", body = Location),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_location(
    State(state): State<AppState>,
    Json(data): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    let location = state.services.locations.create(data).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// Replace a location
#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = "locations",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    request_body = CreateLocation,
    responses(
        (status = 200, description = "Location updated", body = Location),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateLocation>,
) -> AppResult<Json<Location>> {
    let location = state.services.locations.update(id, data).await?;
    Ok(Json(location))
}

/// Delete a location
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = "locations",
    params(
        ("id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.locations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
