//! Statistics service

use crate::{api::stats::StatsResponse, error::AppResult, repository::Repository};

/// Window used for the "revisions due soon" counter
const DUE_SOON_DAYS: i32 = 30;

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Database connectivity probe for the readiness endpoint
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.repository.pool)
            .await?;
        Ok(())
    }

    /// Dashboard counters
    pub async fn overview(&self) -> AppResult<StatsResponse> {
        Ok(StatsResponse {
            customers: self.repository.customers.count().await?,
            equipment: self.repository.equipment.count().await?,
            equipment_active: self.repository.equipment.count_active().await?,
            revisions: self.repository.revisions.count().await?,
            revisions_due_soon: self
                .repository
                .revisions
                .count_due_within_days(DUE_SOON_DAYS)
                .await?,
        })
    }
}
