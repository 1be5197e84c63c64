//! Equipment configuration endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::configuration::{CreateConfiguration, EquipmentConfiguration},
    AppState,
};

/// Configuration list filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ConfigurationQuery {
    pub equipment_id: Option<i32>,
}

/// List configurations, optionally for one equipment unit
#[utoipa::path(
    get,
    path = "/equipment-configs",
    tag = "configurations",
    params(ConfigurationQuery),
    responses(
        (status = 200, description = "Matching configurations", body = Vec<EquipmentConfiguration>)
    )
)]
pub async fn list_configurations(
    State(state): State<AppState>,
    Query(query): Query<ConfigurationQuery>,
) -> AppResult<Json<Vec<EquipmentConfiguration>>> {
    let configurations = state.services.configurations.list(query.equipment_id).await?;
    Ok(Json(configurations))
}

/// Get a configuration by ID
#[utoipa::path(
    get,
    path = "/equipment-configs/{id}",
    tag = "configurations",
    params(
        ("id" = i32, Path, description = "Configuration ID")
    ),
    responses(
        (status = 200, description = "Configuration found", body = EquipmentConfiguration),
        (status = 404, description = "Configuration not found")
    )
)]
pub async fn get_configuration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EquipmentConfiguration>> {
    let configuration = state.services.configurations.get(id).await?;
    Ok(Json(configuration))
}

/// Create a new configuration
#[utoipa::path(
    post,
    path = "/equipment-configs",
    tag = "configurations",
    request_body = CreateConfiguration,
    responses(
        (status = 201, description = "Configuration created", body = EquipmentConfiguration),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn create_configuration(
    State(state): State<AppState>,
    Json(data): Json<CreateConfiguration>,
) -> AppResult<(StatusCode, Json<EquipmentConfiguration>)> {
    let configuration = state.services.configurations.create(data).await?;
    Ok((StatusCode::CREATED, Json(configuration)))
}

/// Replace a configuration
#[utoipa::path(
    put,
    path = "/equipment-configs/{id}",
    tag = "configurations",
    params(
        ("id" = i32, Path, description = "Configuration ID")
    ),
    request_body = CreateConfiguration,
    responses(
        (status = 200, description = "Configuration updated", body = EquipmentConfiguration),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Configuration or equipment not found")
    )
)]
pub async fn update_configuration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateConfiguration>,
) -> AppResult<Json<EquipmentConfiguration>> {
    let configuration = state.services.configurations.update(id, data).await?;
    Ok(Json(configuration))
}

/// Delete a configuration
#[utoipa::path(
    delete,
    path = "/equipment-configs/{id}",
    tag = "configurations",
    params(
        ("id" = i32, Path, description = "Configuration ID")
    ),
    responses(
        (status = 204, description = "Configuration deleted"),
        (status = 404, description = "Configuration not found")
    )
)]
pub async fn delete_configuration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.configurations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
