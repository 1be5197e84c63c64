//! Service visit endpoints and file attachments

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::service_visit::{CreateServiceVisit, ServiceFile, ServiceVisit, ServiceVisitQuery},
    AppState,
};

/// List service visits with optional filters
#[utoipa::path(
    get,
    path = "/service-visits",
    tag = "service",
    params(ServiceVisitQuery),
    responses(
        (status = 200, description = "Matching service visits", body = Vec<ServiceVisit>)
    )
)]
pub async fn list_service_visits(
    State(state): State<AppState>,
    Query(query): Query<ServiceVisitQuery>,
) -> AppResult<Json<Vec<ServiceVisit>>> {
    let visits = state.services.service_visits.list(&query).await?;
    Ok(Json(visits))
}

/// Get a service visit by ID
#[utoipa::path(
    get,
    path = "/service-visits/{id}",
    tag = "service",
    params(
        ("id" = i32, Path, description = "Service visit ID")
    ),
    responses(
        (status = 200, description = "Service visit found", body = ServiceVisit),
        (status = 404, description = "Service visit not found")
    )
)]
pub async fn get_service_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ServiceVisit>> {
    let visit = state.services.service_visits.get(id).await?;
    Ok(Json(visit))
}

/// Create a new service visit
#[utoipa::path(
    post,
    path = "/service-visits",
    tag = "service",
    request_body = CreateServiceVisit,
    responses(
        (status = 201, description = "Service visit created", body = ServiceVisit),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn create_service_visit(
    State(state): State<AppState>,
    Json(data): Json<CreateServiceVisit>,
) -> AppResult<(StatusCode, Json<ServiceVisit>)> {
    let visit = state.services.service_visits.create(data).await?;
    Ok((StatusCode::CREATED, Json(visit)))
}

/// Replace a service visit
#[utoipa::path(
    put,
    path = "/service-visits/{id}",
    tag = "service",
    params(
        ("id" = i32, Path, description = "Service visit ID")
    ),
    request_body = CreateServiceVisit,
    responses(
        (status = 200, description = "Service visit updated", body = ServiceVisit),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Service visit or equipment not found")
    )
)]
pub async fn update_service_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateServiceVisit>,
) -> AppResult<Json<ServiceVisit>> {
    let visit = state.services.service_visits.update(id, data).await?;
    Ok(Json(visit))
}

/// Delete a service visit and its attached files
#[utoipa::path(
    delete,
    path = "/service-visits/{id}",
    tag = "service",
    params(
        ("id" = i32, Path, description = "Service visit ID")
    ),
    responses(
        (status = 204, description = "Service visit deleted"),
        (status = 404, description = "Service visit not found")
    )
)]
pub async fn delete_service_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.service_visits.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Files attached to a service visit
#[utoipa::path(
    get,
    path = "/service/{id}/files",
    tag = "service",
    params(
        ("id" = i32, Path, description = "Service visit ID")
    ),
    responses(
        (status = 200, description = "Attached files", body = Vec<ServiceFile>),
        (status = 404, description = "Service visit not found")
    )
)]
pub async fn list_service_files(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<ServiceFile>>> {
    let files = state.services.service_visits.list_files(id).await?;
    Ok(Json(files))
}

/// Attach a file to a service visit (multipart upload, field `file`)
#[utoipa::path(
    post,
    path = "/service/{id}/files",
    tag = "service",
    params(
        ("id" = i32, Path, description = "Service visit ID")
    ),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = ServiceFile),
        (status = 400, description = "No file part in request"),
        (status = 404, description = "Service visit not found")
    )
)]
pub async fn upload_service_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ServiceFile>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .unwrap_or("attachment")
            .to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("reading upload: {}", e)))?;

        let file = state
            .services
            .service_visits
            .store_file(id, &file_name, &content_type, &bytes)
            .await?;
        return Ok((StatusCode::CREATED, Json(file)));
    }

    Err(AppError::BadRequest(
        "multipart field 'file' is required".to_string(),
    ))
}

/// Download an attached file
#[utoipa::path(
    get,
    path = "/service-files/{id}/download",
    tag = "service",
    params(
        ("id" = i32, Path, description = "Service file ID")
    ),
    responses(
        (status = 200, description = "File payload"),
        (status = 404, description = "File not found")
    )
)]
pub async fn download_service_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let (file, bytes) = state.services.service_visits.load_file(id).await?;

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.clone()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        bytes,
    ))
}

/// Delete an attached file
#[utoipa::path(
    delete,
    path = "/service-files/{id}",
    tag = "service",
    params(
        ("id" = i32, Path, description = "Service file ID")
    ),
    responses(
        (status = 204, description = "File deleted"),
        (status = 404, description = "File not found")
    )
)]
pub async fn delete_service_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.service_visits.delete_file(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
