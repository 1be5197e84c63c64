//! Equipment logbook endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::logbook::{CreateLogbookEntry, LogbookEntry, LogbookQuery},
    AppState,
};

/// List logbook entries with optional filters
#[utoipa::path(
    get,
    path = "/logbook/entries",
    tag = "logbook",
    params(LogbookQuery),
    responses(
        (status = 200, description = "Matching entries, newest first", body = Vec<LogbookEntry>)
    )
)]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<LogbookQuery>,
) -> AppResult<Json<Vec<LogbookEntry>>> {
    let entries = state.services.logbook.list(&query).await?;
    Ok(Json(entries))
}

/// Logbook of one equipment unit
#[utoipa::path(
    get,
    path = "/logbook/equipment/{id}",
    tag = "logbook",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Logbook entries, newest first", body = Vec<LogbookEntry>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn equipment_entries(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<LogbookEntry>>> {
    let entries = state.services.logbook.list_for_equipment(id).await?;
    Ok(Json(entries))
}

/// Create a new logbook entry
#[utoipa::path(
    post,
    path = "/logbook/entries",
    tag = "logbook",
    request_body = CreateLogbookEntry,
    responses(
        (status = 201, description = "Entry created", body = LogbookEntry),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Json(data): Json<CreateLogbookEntry>,
) -> AppResult<(StatusCode, Json<LogbookEntry>)> {
    let entry = state.services.logbook.create(data).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Delete a logbook entry
#[utoipa::path(
    delete,
    path = "/logbook/entries/{id}",
    tag = "logbook",
    params(
        ("id" = i32, Path, description = "Logbook entry ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.logbook.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
