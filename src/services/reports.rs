//! Revision report generation service

use crate::{
    config::PdfConfig,
    error::AppResult,
    pdf::{build_report, PdfRenderer, RenderError},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
    renderer: std::sync::Arc<PdfRenderer>,
}

impl ReportsService {
    pub fn new(repository: Repository, config: &PdfConfig) -> Result<Self, RenderError> {
        Ok(Self {
            repository,
            renderer: std::sync::Arc::new(PdfRenderer::new(config)?),
        })
    }

    /// Render the PDF report of one revision.
    ///
    /// Returns the suggested file name and the PDF bytes.
    pub async fn revision_pdf(&self, revision_id: i32) -> AppResult<(String, Vec<u8>)> {
        let revision = self.repository.revisions.get_by_id(revision_id).await?;
        let equipment = self
            .repository
            .equipment
            .get_by_id(revision.equipment_id)
            .await?;
        let customer = self
            .repository
            .customers
            .get_by_id(equipment.customer_id)
            .await?;
        let configuration = match revision.configuration_id {
            Some(id) => Some(self.repository.configurations.get_by_id(id).await?),
            None => None,
        };

        let report = build_report(&revision, &equipment, &customer, configuration.as_ref());
        let pdf = self.renderer.render(&report).await?;

        let file_name = format!("revizni_zprava_{}.pdf", revision.revision_number);
        Ok((file_name, pdf))
    }
}
