//! Service visit service, including uploaded file storage
//!
//! File payloads live on disk under the configured upload directory, each
//! stored under a generated opaque name; only metadata goes to the database.
//! The original file name is kept for the download Content-Disposition.

use std::path::PathBuf;

use uuid::Uuid;
use validator::Validate;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
    models::service_visit::{CreateServiceVisit, ServiceFile, ServiceVisit, ServiceVisitQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct ServiceVisitsService {
    repository: Repository,
    storage: StorageConfig,
}

impl ServiceVisitsService {
    pub fn new(repository: Repository, storage: StorageConfig) -> Self {
        Self { repository, storage }
    }

    /// List service visits with optional filters
    pub async fn list(&self, query: &ServiceVisitQuery) -> AppResult<Vec<ServiceVisit>> {
        self.repository.service_visits.list(query).await
    }

    /// Get a service visit by ID
    pub async fn get(&self, id: i32) -> AppResult<ServiceVisit> {
        self.repository.service_visits.get_by_id(id).await
    }

    /// Create a new service visit
    pub async fn create(&self, data: CreateServiceVisit) -> AppResult<ServiceVisit> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.service_visits.create(&data).await
    }

    /// Replace a service visit
    pub async fn update(&self, id: i32, data: CreateServiceVisit) -> AppResult<ServiceVisit> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        self.repository.service_visits.update(id, &data).await
    }

    /// Delete a service visit and its stored files
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let files = self.repository.service_visits.list_files(id).await?;
        self.repository.service_visits.delete(id).await?;
        for file in files {
            self.remove_blob(&file).await;
        }
        Ok(())
    }

    /// Files attached to one service visit
    pub async fn list_files(&self, service_visit_id: i32) -> AppResult<Vec<ServiceFile>> {
        self.repository.service_visits.get_by_id(service_visit_id).await?;
        self.repository.service_visits.list_files(service_visit_id).await
    }

    /// Store an uploaded file and record its metadata
    pub async fn store_file(
        &self,
        service_visit_id: i32,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> AppResult<ServiceFile> {
        self.repository.service_visits.get_by_id(service_visit_id).await?;

        if file_name.trim().is_empty() {
            return Err(AppError::Validation("file name must not be empty".to_string()));
        }

        let stored_name = format!("{}.bin", Uuid::new_v4());
        let dir = PathBuf::from(&self.storage.upload_dir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::FileStorage(format!("creating upload dir: {}", e)))?;
        tokio::fs::write(dir.join(&stored_name), bytes)
            .await
            .map_err(|e| AppError::FileStorage(format!("writing upload: {}", e)))?;

        self.repository
            .service_visits
            .create_file(
                service_visit_id,
                file_name,
                content_type,
                bytes.len() as i64,
                &stored_name,
            )
            .await
    }

    /// Load an uploaded file's metadata and payload
    pub async fn load_file(&self, id: i32) -> AppResult<(ServiceFile, Vec<u8>)> {
        let file = self.repository.service_visits.get_file(id).await?;
        let path = PathBuf::from(&self.storage.upload_dir).join(&file.stored_name);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| AppError::FileStorage(format!("reading {}: {}", path.display(), e)))?;
        Ok((file, bytes))
    }

    /// Delete an uploaded file (metadata first, then the blob)
    pub async fn delete_file(&self, id: i32) -> AppResult<()> {
        let file = self.repository.service_visits.get_file(id).await?;
        self.repository.service_visits.delete_file(id).await?;
        self.remove_blob(&file).await;
        Ok(())
    }

    /// Best-effort blob removal; a missing blob is only logged
    async fn remove_blob(&self, file: &ServiceFile) {
        let path = PathBuf::from(&self.storage.upload_dir).join(&file.stored_name);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Could not remove stored file {}: {}", path.display(), e);
        }
    }
}
