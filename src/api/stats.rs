//! Statistics endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

/// Dashboard counters
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Total customers
    pub customers: i64,
    /// Total equipment units
    pub equipment: i64,
    /// Equipment units currently in service
    pub equipment_active: i64,
    /// Total revisions on record
    pub revisions: i64,
    /// Equipment units whose next revision is due within 30 days
    pub revisions_due_soon: i64,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard counters", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.overview().await?;
    Ok(Json(stats))
}
