//! Equipment management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::configuration::EquipmentConfiguration,
    models::equipment::{CreateEquipment, Equipment, EquipmentQuery},
    models::inspection::{Inspection, InspectionQuery},
    models::location::{AssignLocation, EquipmentLocation},
    models::operator::Operator,
    models::revision::{Revision, RevisionQuery},
    models::service_visit::{ServiceVisit, ServiceVisitQuery},
    AppState,
};

/// List equipment with optional filters
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list(&query).await?;
    Ok(Json(equipment))
}

/// Get an equipment unit by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Equipment found", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get(id).await?;
    Ok(Json(equipment))
}

/// Create a new equipment unit
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Replace an equipment unit
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    request_body = CreateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Equipment or customer not found")
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(id, data).await?;
    Ok(Json(equipment))
}

/// Delete an equipment unit
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Location assignment history of an equipment unit
#[utoipa::path(
    get,
    path = "/equipment/{id}/locations",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Assignment history, newest first", body = Vec<EquipmentLocation>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn location_history(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<EquipmentLocation>>> {
    let history = state.services.locations.assignment_history(id).await?;
    Ok(Json(history))
}

/// Move an equipment unit to a location
#[utoipa::path(
    post,
    path = "/equipment/{id}/locations",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    request_body = AssignLocation,
    responses(
        (status = 201, description = "Assignment recorded", body = EquipmentLocation),
        (status = 404, description = "Equipment or location not found")
    )
)]
pub async fn assign_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<AssignLocation>,
) -> AppResult<(StatusCode, Json<EquipmentLocation>)> {
    let assignment = state.services.locations.assign(id, data).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Operators assigned to an equipment unit
#[utoipa::path(
    get,
    path = "/equipment/{id}/operators",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Assigned operators", body = Vec<Operator>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_equipment_operators(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Operator>>> {
    let operators = state.services.operators.list_for_equipment(id).await?;
    Ok(Json(operators))
}

/// Assign an operator to an equipment unit
#[utoipa::path(
    post,
    path = "/equipment/{id}/operators/{operator_id}",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID"),
        ("operator_id" = i32, Path, description = "Operator ID")
    ),
    responses(
        (status = 204, description = "Operator assigned"),
        (status = 404, description = "Equipment or operator not found")
    )
)]
pub async fn assign_operator(
    State(state): State<AppState>,
    Path((id, operator_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.services.operators.assign(id, operator_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove an operator assignment
#[utoipa::path(
    delete,
    path = "/equipment/{id}/operators/{operator_id}",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID"),
        ("operator_id" = i32, Path, description = "Operator ID")
    ),
    responses(
        (status = 204, description = "Assignment removed"),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn unassign_operator(
    State(state): State<AppState>,
    Path((id, operator_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.services.operators.unassign(id, operator_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Revisions of an equipment unit
#[utoipa::path(
    get,
    path = "/equipment/{id}/revisions",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Revisions, newest first", body = Vec<Revision>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_equipment_revisions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Revision>>> {
    state.services.equipment.get(id).await?;
    let query = RevisionQuery {
        equipment_id: Some(id),
        evaluation: None,
        from: None,
        to: None,
    };
    let revisions = state.services.revisions.list(&query).await?;
    Ok(Json(revisions))
}

/// Inspections of an equipment unit
#[utoipa::path(
    get,
    path = "/equipment/{id}/inspections",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Inspections, newest first", body = Vec<Inspection>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_equipment_inspections(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Inspection>>> {
    state.services.equipment.get(id).await?;
    let query = InspectionQuery {
        equipment_id: Some(id),
        result: None,
    };
    let inspections = state.services.inspections.list(&query).await?;
    Ok(Json(inspections))
}

/// Service visits of an equipment unit
#[utoipa::path(
    get,
    path = "/equipment/{id}/service-visits",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Service visits, newest first", body = Vec<ServiceVisit>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_equipment_service_visits(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<ServiceVisit>>> {
    state.services.equipment.get(id).await?;
    let query = ServiceVisitQuery {
        equipment_id: Some(id),
    };
    let visits = state.services.service_visits.list(&query).await?;
    Ok(Json(visits))
}

/// Configurations of an equipment unit
#[utoipa::path(
    get,
    path = "/equipment/{id}/configurations",
    tag = "equipment",
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Configurations", body = Vec<EquipmentConfiguration>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn list_equipment_configurations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<EquipmentConfiguration>>> {
    state.services.equipment.get(id).await?;
    let configurations = state.services.configurations.list(Some(id)).await?;
    Ok(Json(configurations))
}
