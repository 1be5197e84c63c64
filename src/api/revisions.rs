//! Revision (revize) endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        defect::Defect,
        revision::{CreateRevision, Revision, RevisionQuery},
    },
    AppState,
};

/// List revisions with optional filters
#[utoipa::path(
    get,
    path = "/revisions",
    tag = "revisions",
    params(RevisionQuery),
    responses(
        (status = 200, description = "Matching revisions (without defects)", body = Vec<Revision>)
    )
)]
pub async fn list_revisions(
    State(state): State<AppState>,
    Query(query): Query<RevisionQuery>,
) -> AppResult<Json<Vec<Revision>>> {
    let revisions = state.services.revisions.list(&query).await?;
    Ok(Json(revisions))
}

/// Get a revision by ID, defects included
#[utoipa::path(
    get,
    path = "/revisions/{id}",
    tag = "revisions",
    params(
        ("id" = i32, Path, description = "Revision ID")
    ),
    responses(
        (status = 200, description = "Revision found", body = Revision),
        (status = 404, description = "Revision not found")
    )
)]
pub async fn get_revision(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Revision>> {
    let revision = state.services.revisions.get(id).await?;
    Ok(Json(revision))
}

/// Create a new revision.
///
/// The stored defect set is derived from the checklist responses; client
/// defects only contribute description and severity for failing items.
#[utoipa::path(
    post,
    path = "/revisions",
    tag = "revisions",
    request_body = CreateRevision,
    responses(
        (status = 201, description = "Revision created", body = Revision),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Equipment, configuration or location not found"),
        (status = 409, description = "Revision number already exists"),
        (status = 422, description = "Checklist rule violation")
    )
)]
pub async fn create_revision(
    State(state): State<AppState>,
    Json(data): Json<CreateRevision>,
) -> AppResult<(StatusCode, Json<Revision>)> {
    let revision = state.services.revisions.create(data).await?;
    Ok((StatusCode::CREATED, Json(revision)))
}

/// Replace a revision; the defect set is re-derived
#[utoipa::path(
    put,
    path = "/revisions/{id}",
    tag = "revisions",
    params(
        ("id" = i32, Path, description = "Revision ID")
    ),
    request_body = CreateRevision,
    responses(
        (status = 200, description = "Revision updated", body = Revision),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Revision not found"),
        (status = 409, description = "Revision number already exists"),
        (status = 422, description = "Checklist rule violation")
    )
)]
pub async fn update_revision(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateRevision>,
) -> AppResult<Json<Revision>> {
    let revision = state.services.revisions.update(id, data).await?;
    Ok(Json(revision))
}

/// Delete a revision (its defect rows cascade)
#[utoipa::path(
    delete,
    path = "/revisions/{id}",
    tag = "revisions",
    params(
        ("id" = i32, Path, description = "Revision ID")
    ),
    responses(
        (status = 204, description = "Revision deleted"),
        (status = 404, description = "Revision not found")
    )
)]
pub async fn delete_revision(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.revisions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Defects of one revision
#[utoipa::path(
    get,
    path = "/revisions/{id}/defects",
    tag = "revisions",
    params(
        ("id" = i32, Path, description = "Revision ID")
    ),
    responses(
        (status = 200, description = "Derived defects", body = Vec<Defect>),
        (status = 404, description = "Revision not found")
    )
)]
pub async fn list_revision_defects(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Defect>>> {
    let defects = state.services.revisions.defects(id).await?;
    Ok(Json(defects))
}

/// Defect list filters
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct DefectQuery {
    pub revision_id: Option<i32>,
}

/// List defects across revisions
#[utoipa::path(
    get,
    path = "/defects",
    tag = "revisions",
    params(DefectQuery),
    responses(
        (status = 200, description = "Matching defects", body = Vec<Defect>)
    )
)]
pub async fn list_defects(
    State(state): State<AppState>,
    Query(query): Query<DefectQuery>,
) -> AppResult<Json<Vec<Defect>>> {
    let defects = state.services.revisions.list_defects(query.revision_id).await?;
    Ok(Json(defects))
}

/// Download the PDF report of a revision
#[utoipa::path(
    get,
    path = "/revisions/{id}/pdf",
    tag = "revisions",
    params(
        ("id" = i32, Path, description = "Revision ID")
    ),
    responses(
        (status = 200, description = "PDF report", content_type = "application/pdf"),
        (status = 404, description = "Revision not found"),
        (status = 503, description = "No Chromium browser available for rendering")
    )
)]
pub async fn revision_pdf(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let (file_name, pdf) = state.services.reports.revision_pdf(id).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        pdf,
    ))
}
